pub mod merchants;
pub mod orders;
pub mod profile;
pub mod projects;
