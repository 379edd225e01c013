use std::sync::Arc;

use paygate_core::catalog::ErrorCatalog;

use crate::billing::BillingService;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (auth, pagination defaults).
    pub config: Arc<ServerConfig>,
    /// Validation error registry, read-only after startup.
    pub catalog: Arc<ErrorCatalog>,
    /// Billing backend the facade forwards to.
    pub billing: Arc<dyn BillingService>,
}
