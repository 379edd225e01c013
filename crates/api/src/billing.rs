//! Client for the billing backend.
//!
//! The backend exposes one `POST /billing/{Method}` endpoint per operation
//! and answers every call with a `{status, message, item}` envelope. A
//! status other than 200 is a business rejection and carries the backend's
//! own `{code, message, details}`.

use std::time::Duration;

use async_trait::async_trait;
use paygate_core::catalog::{self, ErrorMessage};
use paygate_core::merchant::{ChangeMerchantDataRequest, ListNotificationsRequest, ListOrdersRequest, Merchant};
use paygate_core::merge::{CanonicalSource, FetchError};
use paygate_core::onboarding::OnboardingRequest;
use paygate_core::profile::UserProfileRequest;
use paygate_core::project::{ListProjectsRequest, Project};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Status the backend uses for success inside the envelope.
const STATUS_OK: u16 = 200;

/// Errors from the billing backend.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BillingError {
    /// The call never produced a usable envelope (network, timeout, bad JSON).
    #[error("Billing request failed: {0}")]
    Transport(String),

    /// The backend answered with a business error.
    #[error("Billing rejected request ({status}): {}", error.message)]
    Rejected { status: u16, error: ErrorMessage },
}

impl From<BillingError> for FetchError {
    fn from(err: BillingError) -> Self {
        match err {
            BillingError::Transport(msg) => FetchError::Transport(msg),
            BillingError::Rejected { status, error } => FetchError::Rejected { status, error },
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing<T> {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub items: Vec<T>,
}

/// Operations the facade forwards to the billing backend.
#[async_trait]
pub trait BillingService: Send + Sync {
    async fn get_project(&self, project_id: &str) -> Result<Project, BillingError>;

    async fn list_projects(&self, req: &ListProjectsRequest) -> Result<Listing<Project>, BillingError>;

    /// Create or fully replace a project.
    async fn change_project(&self, project: &Project) -> Result<Project, BillingError>;

    async fn get_merchant(&self, merchant_id: &str) -> Result<Merchant, BillingError>;

    async fn change_merchant_data(&self, req: &ChangeMerchantDataRequest) -> Result<Merchant, BillingError>;

    /// Save an onboarding step.
    async fn change_merchant(&self, req: &OnboardingRequest) -> Result<Merchant, BillingError>;

    async fn list_notifications(
        &self,
        req: &ListNotificationsRequest,
    ) -> Result<Listing<serde_json::Value>, BillingError>;

    async fn find_orders(&self, req: &ListOrdersRequest) -> Result<Listing<serde_json::Value>, BillingError>;

    async fn update_user_profile(&self, req: &UserProfileRequest) -> Result<serde_json::Value, BillingError>;
}

// ---------------------------------------------------------------------------
// HTTP implementation
// ---------------------------------------------------------------------------

/// Response envelope shared by every billing method.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    status: u16,
    message: Option<ErrorMessage>,
    item: Option<T>,
}

#[derive(Serialize)]
struct ById<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct ByMerchantId<'a> {
    merchant_id: &'a str,
}

/// [`BillingService`] over HTTP using [`reqwest`].
pub struct HttpBillingClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBillingClient {
    /// Create a client for the backend at `base_url`, e.g. `http://billing:8080`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BillingError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BillingError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    // ---- private helpers ----

    async fn call<Req, T>(&self, method: &'static str, body: &Req) -> Result<T, BillingError>
    where
        Req: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        tracing::debug!(method, "Calling billing backend");

        let response = self
            .client
            .post(format!("{}/billing/{method}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(method, error = %e, "Billing request failed");
                BillingError::Transport(e.to_string())
            })?;

        let http_status = response.status();
        if !http_status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::error!(method, status = http_status.as_u16(), %body, "Billing returned non-2xx");
            return Err(BillingError::Transport(format!(
                "{method} answered HTTP {http_status}"
            )));
        }

        let envelope = response.json::<Envelope<T>>().await.map_err(|e| {
            tracing::error!(method, error = %e, "Billing envelope could not be decoded");
            BillingError::Transport(e.to_string())
        })?;

        Self::unwrap_envelope(method, envelope)
    }

    fn unwrap_envelope<T>(method: &'static str, envelope: Envelope<T>) -> Result<T, BillingError> {
        if envelope.status != STATUS_OK {
            let error = envelope.message.unwrap_or_else(|| catalog::UNKNOWN.to_message());
            tracing::info!(method, status = envelope.status, code = %error.code, "Billing rejected request");
            return Err(BillingError::Rejected {
                status: envelope.status,
                error,
            });
        }
        envelope
            .item
            .ok_or_else(|| BillingError::Transport(format!("{method} answered without an item")))
    }
}

#[async_trait]
impl BillingService for HttpBillingClient {
    async fn get_project(&self, project_id: &str) -> Result<Project, BillingError> {
        self.call("GetProject", &ById { id: project_id }).await
    }

    async fn list_projects(&self, req: &ListProjectsRequest) -> Result<Listing<Project>, BillingError> {
        self.call("ListProjects", req).await
    }

    async fn change_project(&self, project: &Project) -> Result<Project, BillingError> {
        self.call("ChangeProject", project).await
    }

    async fn get_merchant(&self, merchant_id: &str) -> Result<Merchant, BillingError> {
        self.call("GetMerchantBy", &ByMerchantId { merchant_id }).await
    }

    async fn change_merchant_data(&self, req: &ChangeMerchantDataRequest) -> Result<Merchant, BillingError> {
        self.call("ChangeMerchantData", req).await
    }

    async fn change_merchant(&self, req: &OnboardingRequest) -> Result<Merchant, BillingError> {
        self.call("ChangeMerchant", req).await
    }

    async fn list_notifications(
        &self,
        req: &ListNotificationsRequest,
    ) -> Result<Listing<serde_json::Value>, BillingError> {
        self.call("ListNotifications", req).await
    }

    async fn find_orders(&self, req: &ListOrdersRequest) -> Result<Listing<serde_json::Value>, BillingError> {
        self.call("FindAllOrders", req).await
    }

    async fn update_user_profile(&self, req: &UserProfileRequest) -> Result<serde_json::Value, BillingError> {
        self.call("CreateOrUpdateUserProfile", req).await
    }
}

// ---------------------------------------------------------------------------
// Canonical sources for partial updates
// ---------------------------------------------------------------------------

/// Projects as the canonical source for project patches.
pub struct ProjectRecords<'a>(pub &'a dyn BillingService);

#[async_trait]
impl<'a> CanonicalSource<Project> for ProjectRecords<'a> {
    async fn fetch_canonical(&self, id: &str) -> Result<Project, FetchError> {
        Ok(self.0.get_project(id).await?)
    }
}

/// Merchant agreement data as the canonical source for merchant-data patches.
pub struct MerchantDataRecords<'a>(pub &'a dyn BillingService);

#[async_trait]
impl<'a> CanonicalSource<ChangeMerchantDataRequest> for MerchantDataRecords<'a> {
    async fn fetch_canonical(&self, id: &str) -> Result<ChangeMerchantDataRequest, FetchError> {
        let merchant = self.0.get_merchant(id).await?;
        Ok(ChangeMerchantDataRequest::from(&merchant))
    }
}
