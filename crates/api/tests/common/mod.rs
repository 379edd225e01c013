#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use paygate_api::auth::jwt::{generate_access_token, JwtConfig};
use paygate_api::billing::{BillingError, BillingService, Listing};
use paygate_api::config::ServerConfig;
use paygate_api::router::build_app_router;
use paygate_api::state::AppState;
use paygate_core::catalog::{ErrorCatalog, ErrorMessage};
use paygate_core::context::AuthIdentity;
use paygate_core::merchant::{ChangeMerchantDataRequest, ListNotificationsRequest, ListOrdersRequest, Merchant};
use paygate_core::onboarding::OnboardingRequest;
use paygate_core::pagination::PaginationConfig;
use paygate_core::profile::UserProfileRequest;
use paygate_core::project::{ListProjectsRequest, Project};

pub const MERCHANT_ID: &str = "5be2c3022b0b5a0001c0bd1a";
pub const OTHER_MERCHANT_ID: &str = "5be2c3022b0b5a0001c0bd2b";
pub const PROJECT_ID: &str = "5be2d0b4b0b30d0007383ce6";
pub const USER_ID: &str = "5be2c3022b0b5a0001c0bd99";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        pagination: PaginationConfig::default(),
        billing_url: "http://billing.invalid".to_string(),
        billing_timeout_secs: 1,
        log_json: false,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router over the given fake backend.
pub fn build_test_app(billing: Arc<FakeBilling>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        catalog: Arc::new(ErrorCatalog::standard()),
        billing,
    };
    build_app_router(state, &config)
}

/// A signed access token for a user of `merchant_id`.
pub fn token(merchant_id: &str) -> String {
    let identity = AuthIdentity {
        id: USER_ID.to_string(),
        name: "Jo Doe".to_string(),
        email: "jo@acme.example".to_string(),
        role: "owner".to_string(),
        merchant_id: merchant_id.to_string(),
    };
    generate_access_token(&identity, &test_config().jwt).unwrap()
}

pub fn project(id: &str, merchant_id: &str) -> Project {
    Project {
        id: id.to_string(),
        merchant_id: merchant_id.to_string(),
        name: [("en".to_string(), "Space Race".to_string())].into(),
        callback_currency: "USD".to_string(),
        callback_protocol: "default".to_string(),
        limits_currency: "USD".to_string(),
        min_payment_amount: 1.0,
        max_payment_amount: 500.0,
        url_check_account: "https://acme.example/check".to_string(),
        status: 1,
        ..Project::default()
    }
}

// ---------------------------------------------------------------------------
// Fake billing backend
// ---------------------------------------------------------------------------

/// In-memory billing backend that records every write.
#[derive(Default)]
pub struct FakeBilling {
    pub projects: Mutex<HashMap<String, Project>>,
    pub merchants: Mutex<HashMap<String, Merchant>>,
    pub changed_projects: Mutex<Vec<Project>>,
    pub listed_projects: Mutex<Vec<ListProjectsRequest>>,
    pub changed_merchant_data: Mutex<Vec<ChangeMerchantDataRequest>>,
    pub onboarding: Mutex<Vec<OnboardingRequest>>,
    pub notification_queries: Mutex<Vec<ListNotificationsRequest>>,
    pub order_queries: Mutex<Vec<ListOrdersRequest>>,
    pub profiles: Mutex<Vec<UserProfileRequest>>,
    /// When set, every lookup fails with this error.
    pub fail_lookups: Mutex<Option<BillingError>>,
}

impl FakeBilling {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_project(self: Arc<Self>, project: Project) -> Arc<Self> {
        self.projects.lock().unwrap().insert(project.id.clone(), project);
        self
    }

    pub fn with_merchant(self: Arc<Self>, merchant: Merchant) -> Arc<Self> {
        self.merchants.lock().unwrap().insert(merchant.id.clone(), merchant);
        self
    }

    pub fn failing_lookups(self: Arc<Self>, err: BillingError) -> Arc<Self> {
        *self.fail_lookups.lock().unwrap() = Some(err);
        self
    }

    fn lookup_failure(&self) -> Option<BillingError> {
        self.fail_lookups.lock().unwrap().clone()
    }

    fn not_found(what: &str) -> BillingError {
        BillingError::Rejected {
            status: 404,
            error: ErrorMessage {
                code: "pm000011".to_string(),
                message: format!("{what} not found"),
                details: String::new(),
            },
        }
    }
}

#[async_trait]
impl BillingService for FakeBilling {
    async fn get_project(&self, project_id: &str) -> Result<Project, BillingError> {
        if let Some(err) = self.lookup_failure() {
            return Err(err);
        }
        self.projects
            .lock()
            .unwrap()
            .get(project_id)
            .cloned()
            .ok_or_else(|| Self::not_found("project"))
    }

    async fn list_projects(&self, req: &ListProjectsRequest) -> Result<Listing<Project>, BillingError> {
        self.listed_projects.lock().unwrap().push(req.clone());
        let items: Vec<Project> = self
            .projects
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.merchant_id == req.merchant_id)
            .cloned()
            .collect();
        Ok(Listing {
            count: items.len() as i64,
            items,
        })
    }

    async fn change_project(&self, project: &Project) -> Result<Project, BillingError> {
        let mut saved = project.clone();
        if saved.id.is_empty() {
            saved.id = "5be2d0b4b0b30d0007383cff".to_string();
        }
        self.changed_projects.lock().unwrap().push(project.clone());
        self.projects.lock().unwrap().insert(saved.id.clone(), saved.clone());
        Ok(saved)
    }

    async fn get_merchant(&self, merchant_id: &str) -> Result<Merchant, BillingError> {
        if let Some(err) = self.lookup_failure() {
            return Err(err);
        }
        self.merchants
            .lock()
            .unwrap()
            .get(merchant_id)
            .cloned()
            .ok_or_else(|| Self::not_found("merchant"))
    }

    async fn change_merchant_data(&self, req: &ChangeMerchantDataRequest) -> Result<Merchant, BillingError> {
        self.changed_merchant_data.lock().unwrap().push(req.clone());
        let mut merchants = self.merchants.lock().unwrap();
        let merchant = merchants.entry(req.merchant_id.clone()).or_default();
        merchant.id = req.merchant_id.clone();
        merchant.agreement_type = req.agreement_type;
        merchant.has_merchant_signature = req.has_merchant_signature;
        merchant.has_psp_signature = req.has_psp_signature;
        merchant.agreement_sent_via_mail = req.agreement_sent_via_mail;
        merchant.mail_tracking_link = req.mail_tracking_link.clone();
        Ok(merchant.clone())
    }

    async fn change_merchant(&self, req: &OnboardingRequest) -> Result<Merchant, BillingError> {
        self.onboarding.lock().unwrap().push(req.clone());
        Ok(Merchant {
            id: req.merchant_id.clone(),
            ..Merchant::default()
        })
    }

    async fn list_notifications(
        &self,
        req: &ListNotificationsRequest,
    ) -> Result<Listing<serde_json::Value>, BillingError> {
        self.notification_queries.lock().unwrap().push(req.clone());
        Ok(Listing::default())
    }

    async fn find_orders(&self, req: &ListOrdersRequest) -> Result<Listing<serde_json::Value>, BillingError> {
        self.order_queries.lock().unwrap().push(req.clone());
        Ok(Listing::default())
    }

    async fn update_user_profile(&self, req: &UserProfileRequest) -> Result<serde_json::Value, BillingError> {
        self.profiles.lock().unwrap().push(req.clone());
        Ok(serde_json::json!({ "user_id": req.user_id }))
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request with an optional bearer token and JSON body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, token: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, token: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, token: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
