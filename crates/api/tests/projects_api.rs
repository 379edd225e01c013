//! HTTP-level integration tests for the merchant project endpoints.
//!
//! Requests go through the full router against an in-memory billing
//! backend, so binding, injection, merging and error rendering are all
//! exercised together.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    body_json, build_test_app, get, get_auth, patch_json, post_json, project, send, token, FakeBilling,
    MERCHANT_ID, OTHER_MERCHANT_ID, PROJECT_ID,
};
use paygate_api::billing::BillingError;
use paygate_core::catalog::ErrorMessage;
use serde_json::json;

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_projects_is_scoped_to_caller_and_clamps_limit() {
    let billing = FakeBilling::new()
        .with_project(project(PROJECT_ID, MERCHANT_ID))
        .with_project(project("5be2d0b4b0b30d0007383ce7", OTHER_MERCHANT_ID));
    let app = build_test_app(billing.clone());

    let response = get_auth(
        app,
        "/admin/api/v1/projects?limit=5000&offset=20&sort%5B%5D=-created_at",
        &token(MERCHANT_ID),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 1);
    assert_eq!(json["data"]["items"][0]["id"], PROJECT_ID);

    let queries = billing.listed_projects.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].merchant_id, MERCHANT_ID);
    assert_eq!(queries[0].limit, 1000);
    assert_eq!(queries[0].offset, 20);
    assert_eq!(queries[0].sort, vec!["-created_at".to_string()]);
}

#[tokio::test]
async fn list_projects_applies_default_page() {
    let billing = FakeBilling::new();
    let app = build_test_app(billing.clone());

    let response = get_auth(app, "/admin/api/v1/projects", &token(MERCHANT_ID)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let queries = billing.listed_projects.lock().unwrap();
    assert_eq!(queries[0].limit, 100);
    assert_eq!(queries[0].offset, 0);
    assert_eq!(queries[0].sort, vec!["_id".to_string()]);
}

#[tokio::test]
async fn list_projects_rejects_non_numeric_limit() {
    let billing = FakeBilling::new();
    let app = build_test_app(billing.clone());

    let response = get_auth(app, "/admin/api/v1/projects?limit=many", &token(MERCHANT_ID)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "ma000023");
    assert!(billing.listed_projects.lock().unwrap().is_empty());
}

#[tokio::test]
async fn list_projects_rejects_negative_offset() {
    let app = build_test_app(FakeBilling::new());

    let response = get_auth(app, "/admin/api/v1/projects?offset=-1", &token(MERCHANT_ID)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["details"].as_str().unwrap().contains("'offset'"));
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_authorization_header_returns_401() {
    let app = build_test_app(FakeBilling::new());

    let response = get(app, "/admin/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "ma000034");
    assert_eq!(json["details"], "");
}

#[tokio::test]
async fn garbage_token_returns_401() {
    let app = build_test_app(FakeBilling::new());

    let response = get_auth(app, "/admin/api/v1/projects", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "ma000036");
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_own_project_returns_it() {
    let billing = FakeBilling::new().with_project(project(PROJECT_ID, MERCHANT_ID));
    let app = build_test_app(billing);

    let uri = format!("/admin/api/v1/projects/{PROJECT_ID}");
    let response = get_auth(app, &uri, &token(MERCHANT_ID)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], PROJECT_ID);
    assert_eq!(json["data"]["name"]["en"], "Space Race");
}

#[tokio::test]
async fn get_foreign_project_is_rejected() {
    let billing = FakeBilling::new().with_project(project(PROJECT_ID, OTHER_MERCHANT_ID));
    let app = build_test_app(billing);

    let uri = format!("/admin/api/v1/projects/{PROJECT_ID}");
    let response = get_auth(app, &uri, &token(MERCHANT_ID)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "ma000006");
}

#[tokio::test]
async fn get_with_bad_project_id_matches_patch_behaviour() {
    let billing = FakeBilling::new().with_project(project(PROJECT_ID, MERCHANT_ID));

    let response = get_auth(
        build_test_app(billing.clone()),
        "/admin/api/v1/projects/not-an-id",
        &token(MERCHANT_ID),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let from_get = body_json(response).await;

    let response = patch_json(
        build_test_app(billing),
        "/admin/api/v1/projects/not-an-id",
        &token(MERCHANT_ID),
        json!({"image": "x.png"}),
    )
    .await;
    let from_patch = body_json(response).await;

    assert_eq!(from_get["code"], "ma000031");
    assert_eq!(from_get["details"], "");
    assert_eq!(from_get, from_patch);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_project_overwrites_spoofed_merchant_and_id() {
    let billing = FakeBilling::new();
    let app = build_test_app(billing.clone());

    let body = json!({
        "id": PROJECT_ID,
        "merchant_id": OTHER_MERCHANT_ID,
        "name": {"en": "Moon Base"},
        "callback_currency": "USD",
        "min_payment_amount": 1,
        "max_payment_amount": 100
    });
    let response = post_json(app, "/admin/api/v1/projects", &token(MERCHANT_ID), body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let changed = billing.changed_projects.lock().unwrap();
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].merchant_id, MERCHANT_ID);
    assert!(changed[0].id.is_empty());
    assert_eq!(changed[0].name["en"], "Moon Base");
}

#[tokio::test]
async fn create_project_without_english_name_fails_validation() {
    let billing = FakeBilling::new();
    let app = build_test_app(billing.clone());

    let body = json!({"name": {"fr": "Base Lunaire"}});
    let response = post_json(app, "/admin/api/v1/projects", &token(MERCHANT_ID), body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["details"].as_str().unwrap().contains("'localized_name'"));
    assert!(billing.changed_projects.lock().unwrap().is_empty());
}

#[tokio::test]
async fn create_project_with_malformed_json_is_a_decode_error() {
    let app = build_test_app(FakeBilling::new());

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/admin/api/v1/projects")
        .header("authorization", format!("Bearer {}", token(MERCHANT_ID)))
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"name\": "))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "ma000023");
}

// ---------------------------------------------------------------------------
// Partial update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn patch_merges_present_fields_only() {
    let billing = FakeBilling::new().with_project(project(PROJECT_ID, MERCHANT_ID));
    let app = build_test_app(billing.clone());

    let uri = format!("/admin/api/v1/projects/{PROJECT_ID}");
    let response = patch_json(app, &uri, &token(MERCHANT_ID), json!({"min_payment_amount": 50})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let changed = billing.changed_projects.lock().unwrap();
    assert_eq!(changed.len(), 1);
    let saved = &changed[0];
    assert_eq!(saved.id, PROJECT_ID);
    assert_eq!(saved.min_payment_amount, 50.0);
    assert_eq!(saved.max_payment_amount, 500.0);
    assert_eq!(saved.callback_currency, "USD");
    assert_eq!(saved.name["en"], "Space Race");
    assert_eq!(saved.status, 1);
}

#[tokio::test]
async fn patch_null_clears_a_field() {
    let billing = FakeBilling::new().with_project(project(PROJECT_ID, MERCHANT_ID));
    let app = build_test_app(billing.clone());

    let uri = format!("/admin/api/v1/projects/{PROJECT_ID}");
    let response = patch_json(app, &uri, &token(MERCHANT_ID), json!({"url_check_account": null})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let changed = billing.changed_projects.lock().unwrap();
    assert_eq!(changed[0].url_check_account, "");
    assert_eq!(changed[0].callback_currency, "USD");
}

#[tokio::test]
async fn patch_type_mismatch_writes_nothing() {
    let billing = FakeBilling::new().with_project(project(PROJECT_ID, MERCHANT_ID));
    let app = build_test_app(billing.clone());

    let uri = format!("/admin/api/v1/projects/{PROJECT_ID}");
    let body = json!({"callback_currency": "EUR", "min_payment_amount": "fifty"});
    let response = patch_json(app, &uri, &token(MERCHANT_ID), body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "ma000054");
    assert_eq!(json["details"], "");
    assert!(billing.changed_projects.lock().unwrap().is_empty());
}

#[tokio::test]
async fn patch_with_bad_project_id_is_rejected_before_fetch() {
    let billing = FakeBilling::new().failing_lookups(BillingError::Transport("unreachable".into()));
    let app = build_test_app(billing.clone());

    let response = patch_json(
        app,
        "/admin/api/v1/projects/not-an-id",
        &token(MERCHANT_ID),
        json!({"image": "x.png"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "ma000031");
}

#[tokio::test]
async fn patch_relays_canonical_fetch_rejection() {
    let billing = FakeBilling::new().failing_lookups(BillingError::Rejected {
        status: 404,
        error: ErrorMessage {
            code: "pm000011".into(),
            message: "project not found".into(),
            details: String::new(),
        },
    });
    let app = build_test_app(billing.clone());

    let uri = format!("/admin/api/v1/projects/{PROJECT_ID}");
    let response = patch_json(app, &uri, &token(MERCHANT_ID), json!({"image": "x.png"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "pm000011");
    assert_eq!(json["message"], "project not found");
    assert!(billing.changed_projects.lock().unwrap().is_empty());
}

#[tokio::test]
async fn patch_transport_failure_is_unknown_error() {
    let billing = FakeBilling::new().failing_lookups(BillingError::Transport("connection refused".into()));
    let app = build_test_app(billing);

    let uri = format!("/admin/api/v1/projects/{PROJECT_ID}");
    let response = patch_json(app, &uri, &token(MERCHANT_ID), json!({"image": "x.png"})).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "ma000001");
    assert!(!json["message"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn patch_foreign_project_is_rejected() {
    let billing = FakeBilling::new().with_project(project(PROJECT_ID, OTHER_MERCHANT_ID));
    let app = build_test_app(billing.clone());

    let uri = format!("/admin/api/v1/projects/{PROJECT_ID}");
    let response = patch_json(app, &uri, &token(MERCHANT_ID), json!({"image": "x.png"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "ma000006");
    assert!(billing.changed_projects.lock().unwrap().is_empty());
}

#[tokio::test]
async fn patch_with_empty_body_rewrites_canonical_record() {
    let billing = FakeBilling::new().with_project(project(PROJECT_ID, MERCHANT_ID));
    let app = build_test_app(billing.clone());

    let uri = format!("/admin/api/v1/projects/{PROJECT_ID}");
    let response = send(app, Method::PATCH, &uri, Some(&token(MERCHANT_ID)), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let changed = billing.changed_projects.lock().unwrap();
    assert_eq!(changed[0], project(PROJECT_ID, MERCHANT_ID));
}

#[tokio::test]
async fn patch_with_array_body_is_a_decode_error() {
    let billing = FakeBilling::new().with_project(project(PROJECT_ID, MERCHANT_ID));
    let app = build_test_app(billing.clone());

    let uri = format!("/admin/api/v1/projects/{PROJECT_ID}");
    let body = json!([{"en": "Hijacked"}, "evil.png", "EUR"]);
    let response = patch_json(app, &uri, &token(MERCHANT_ID), body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "ma000023");
    assert!(billing.changed_projects.lock().unwrap().is_empty());
}

#[tokio::test]
async fn create_with_array_body_is_a_decode_error() {
    let billing = FakeBilling::new();
    let app = build_test_app(billing.clone());

    let body = json!(["", OTHER_MERCHANT_ID, {"en": "Moon Base"}]);
    let response = post_json(app, "/admin/api/v1/projects", &token(MERCHANT_ID), body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "ma000023");
    assert!(billing.changed_projects.lock().unwrap().is_empty());
}
