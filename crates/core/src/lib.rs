//! Domain core for the paygate merchant facade.
//!
//! Everything in here is transport-agnostic: the request-binding pipeline
//! (injection, pagination, presence-aware partial updates, structural
//! validation) and the stable error catalog. The HTTP layer lives in
//! `paygate-api`.

pub mod catalog;
pub mod context;
pub mod error;
pub mod inject;
pub mod merchant;
pub mod merge;
pub mod onboarding;
pub mod pagination;
pub mod patch;
pub mod profile;
pub mod project;
pub mod validation;
