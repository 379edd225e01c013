//! Merchant projects: the record, its listing request and its patch table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::catalog as c;
use crate::error::CoreError;
use crate::inject::{Bindable, PageFields, PathField};
use crate::merge::Patchable;
use crate::patch::{narrow_i32, Patch};
use crate::validation::{validate_object_id, FieldOrder};

/// Route parameter naming the project being addressed.
pub const PROJECT_ID_PARAM: &str = "project_id";

/// Per-locale images shown on the checkout page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageCollection {
    #[serde(default)]
    pub use_one_for_all: bool,
    #[serde(default)]
    pub images: BTreeMap<String, String>,
}

/// A merchant project as stored by the billing backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Project {
    pub id: String,
    #[validate(custom(function = "validate_object_id"))]
    pub merchant_id: String,
    #[validate(custom(function = "validate_localized_name"))]
    pub name: BTreeMap<String, String>,
    pub image: String,
    pub callback_currency: String,
    pub callback_protocol: String,
    pub create_order_allowed_urls: Vec<String>,
    pub allow_dynamic_notify_urls: bool,
    pub allow_dynamic_redirect_urls: bool,
    pub limits_currency: String,
    #[validate(range(min = 0.0))]
    pub min_payment_amount: f64,
    #[validate(range(min = 0.0))]
    pub max_payment_amount: f64,
    pub notify_emails: Vec<String>,
    pub is_products_checkout: bool,
    pub secret_key: String,
    pub signature_required: bool,
    pub send_notify_email: bool,
    pub url_check_account: String,
    pub url_process_payment: String,
    pub url_redirect_fail: String,
    pub url_redirect_success: String,
    pub status: i32,
    pub cover: Option<ImageCollection>,
    pub url_chargeback_payment: String,
    pub url_cancel_payment: String,
    pub url_fraud_payment: String,
    pub url_refund_payment: String,
}

/// Project create bodies carry the owner implicitly: the merchant id is
/// always taken from the caller.
impl Bindable for Project {
    fn merchant_id_mut(&mut self) -> Option<&mut String> {
        Some(&mut self.merchant_id)
    }
}

impl FieldOrder for Project {
    fn field_order(_path: &str) -> &'static [&'static str] {
        &["merchant_id", "name", "min_payment_amount", "max_payment_amount"]
    }
}

/// A project name must at least carry the English locale.
pub fn validate_localized_name(name: &BTreeMap<String, String>) -> Result<(), ValidationError> {
    match name.get("en") {
        Some(value) if !value.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::new("localized_name")),
    }
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// `GET /projects` query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ListProjectsRequest {
    #[serde(skip_deserializing)]
    #[validate(custom(function = "validate_object_id"))]
    pub merchant_id: String,
    pub quick_search: Option<String>,
    pub status: Option<i32>,
    #[serde(skip_deserializing)]
    #[validate(range(min = 1))]
    pub limit: i32,
    #[serde(skip_deserializing)]
    #[validate(range(min = 0))]
    pub offset: i32,
    #[serde(skip_deserializing)]
    pub sort: Vec<String>,
}

impl FieldOrder for ListProjectsRequest {
    fn field_order(_path: &str) -> &'static [&'static str] {
        &["merchant_id", "limit", "offset"]
    }
}

impl Bindable for ListProjectsRequest {
    fn merchant_id_mut(&mut self) -> Option<&mut String> {
        Some(&mut self.merchant_id)
    }

    fn page_fields(&mut self) -> Option<PageFields<'_>> {
        Some(PageFields {
            limit: &mut self.limit,
            offset: &mut self.offset,
            sort: &mut self.sort,
        })
    }
}

/// `GET /projects/{project_id}` has nothing but its route identity, which
/// the handler resolves before binding, as a patch does.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GetProjectRequest {
    #[serde(skip_deserializing)]
    pub project_id: String,
    #[serde(skip_deserializing)]
    #[validate(custom(function = "validate_object_id"))]
    pub merchant_id: String,
}

impl FieldOrder for GetProjectRequest {
    fn field_order(_path: &str) -> &'static [&'static str] {
        &["merchant_id"]
    }
}

impl Bindable for GetProjectRequest {
    fn path_fields(&mut self) -> Vec<PathField<'_>> {
        vec![PathField::new(PROJECT_ID_PARAM, &mut self.project_id)]
    }

    fn merchant_id_mut(&mut self) -> Option<&mut String> {
        Some(&mut self.merchant_id)
    }
}

// ---------------------------------------------------------------------------
// Patch
// ---------------------------------------------------------------------------

/// `PATCH /projects/{project_id}` body.
///
/// `cover` is a trusted blob: it is taken as a whole from the typed decode
/// and never cleared by `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectPatch {
    #[serde(skip)]
    pub project_id: String,
    pub name: Patch<BTreeMap<String, String>>,
    pub image: Patch<String>,
    pub callback_currency: Patch<String>,
    pub callback_protocol: Patch<String>,
    pub create_order_allowed_urls: Patch<Vec<String>>,
    pub allow_dynamic_notify_urls: Patch<bool>,
    pub allow_dynamic_redirect_urls: Patch<bool>,
    pub limits_currency: Patch<String>,
    pub min_payment_amount: Patch<f64>,
    pub max_payment_amount: Patch<f64>,
    pub notify_emails: Patch<Vec<String>>,
    pub is_products_checkout: Patch<bool>,
    pub secret_key: Patch<String>,
    pub signature_required: Patch<bool>,
    pub send_notify_email: Patch<bool>,
    pub url_check_account: Patch<String>,
    pub url_process_payment: Patch<String>,
    pub url_redirect_fail: Patch<String>,
    pub url_redirect_success: Patch<String>,
    pub status: Patch<f64>,
    pub url_chargeback_payment: Patch<String>,
    pub url_cancel_payment: Patch<String>,
    pub url_fraud_payment: Patch<String>,
    pub url_refund_payment: Patch<String>,
    pub cover: Option<ImageCollection>,
}

impl Bindable for ProjectPatch {
    fn path_fields(&mut self) -> Vec<PathField<'_>> {
        vec![PathField::new(PROJECT_ID_PARAM, &mut self.project_id)]
    }
}

impl Patchable for ProjectPatch {
    type Record = Project;

    fn apply(self, p: &mut Project) -> Result<(), CoreError> {
        merge_localized(self.name, &mut p.name)?;
        self.image.merge_into(&mut p.image, "image", c::IMAGE_INCORRECT_TYPE)?;
        self.callback_currency
            .merge_into(&mut p.callback_currency, "callback_currency", c::CALLBACK_CURRENCY_INCORRECT_TYPE)?;
        self.callback_protocol
            .merge_into(&mut p.callback_protocol, "callback_protocol", c::CALLBACK_PROTOCOL_INCORRECT_TYPE)?;
        self.create_order_allowed_urls.merge_into(
            &mut p.create_order_allowed_urls,
            "create_order_allowed_urls",
            c::CREATE_ORDER_ALLOWED_URLS_INCORRECT_TYPE,
        )?;
        self.allow_dynamic_notify_urls.merge_into(
            &mut p.allow_dynamic_notify_urls,
            "allow_dynamic_notify_urls",
            c::ALLOW_DYNAMIC_NOTIFY_URLS_INCORRECT_TYPE,
        )?;
        self.allow_dynamic_redirect_urls.merge_into(
            &mut p.allow_dynamic_redirect_urls,
            "allow_dynamic_redirect_urls",
            c::ALLOW_DYNAMIC_REDIRECT_URLS_INCORRECT_TYPE,
        )?;
        self.limits_currency
            .merge_into(&mut p.limits_currency, "limits_currency", c::LIMITS_CURRENCY_INCORRECT_TYPE)?;
        self.min_payment_amount.merge_into(
            &mut p.min_payment_amount,
            "min_payment_amount",
            c::MIN_PAYMENT_AMOUNT_INCORRECT_TYPE,
        )?;
        self.max_payment_amount.merge_into(
            &mut p.max_payment_amount,
            "max_payment_amount",
            c::MAX_PAYMENT_AMOUNT_INCORRECT_TYPE,
        )?;
        self.notify_emails
            .merge_into(&mut p.notify_emails, "notify_emails", c::NOTIFY_EMAILS_INCORRECT_TYPE)?;
        self.is_products_checkout.merge_into(
            &mut p.is_products_checkout,
            "is_products_checkout",
            c::IS_PRODUCTS_CHECKOUT_INCORRECT_TYPE,
        )?;
        self.secret_key
            .merge_into(&mut p.secret_key, "secret_key", c::SECRET_KEY_INCORRECT_TYPE)?;
        self.signature_required.merge_into(
            &mut p.signature_required,
            "signature_required",
            c::SIGNATURE_REQUIRED_INCORRECT_TYPE,
        )?;
        self.send_notify_email
            .merge_into(&mut p.send_notify_email, "send_notify_email", c::SEND_NOTIFY_EMAIL_INCORRECT_TYPE)?;
        self.url_check_account
            .merge_into(&mut p.url_check_account, "url_check_account", c::URL_CHECK_ACCOUNT_INCORRECT_TYPE)?;
        self.url_process_payment.merge_into(
            &mut p.url_process_payment,
            "url_process_payment",
            c::URL_PROCESS_PAYMENT_INCORRECT_TYPE,
        )?;
        self.url_redirect_fail
            .merge_into(&mut p.url_redirect_fail, "url_redirect_fail", c::URL_REDIRECT_FAIL_INCORRECT_TYPE)?;
        self.url_redirect_success.merge_into(
            &mut p.url_redirect_success,
            "url_redirect_success",
            c::URL_REDIRECT_SUCCESS_INCORRECT_TYPE,
        )?;
        self.status
            .merge_with(&mut p.status, "status", c::STATUS_INCORRECT_TYPE, narrow_i32)?;
        self.url_chargeback_payment.merge_into(
            &mut p.url_chargeback_payment,
            "url_chargeback_payment",
            c::URL_CHARGEBACK_PAYMENT_INCORRECT_TYPE,
        )?;
        self.url_cancel_payment.merge_into(
            &mut p.url_cancel_payment,
            "url_cancel_payment",
            c::URL_CANCEL_PAYMENT_INCORRECT_TYPE,
        )?;
        self.url_fraud_payment
            .merge_into(&mut p.url_fraud_payment, "url_fraud_payment", c::URL_FRAUD_PAYMENT_INCORRECT_TYPE)?;
        self.url_refund_payment.merge_into(
            &mut p.url_refund_payment,
            "url_refund_payment",
            c::URL_REFUND_PAYMENT_INCORRECT_TYPE,
        )?;

        if let Some(cover) = self.cover {
            p.cover = Some(cover);
        }
        if !self.project_id.is_empty() {
            p.id = self.project_id;
        }
        Ok(())
    }
}

/// Localized names overlay per locale; an empty object carries no locale
/// and is treated as the wrong shape.
fn merge_localized(
    patch: Patch<BTreeMap<String, String>>,
    slot: &mut BTreeMap<String, String>,
) -> Result<(), CoreError> {
    match patch {
        Patch::Value(locales) if locales.is_empty() => Err(CoreError::FieldTypeMismatch {
            field: "name",
            entry: c::NAME_INCORRECT_TYPE,
        }),
        Patch::Value(locales) => {
            slot.extend(locales);
            Ok(())
        }
        other => other.merge_into(slot, "name", c::NAME_INCORRECT_TYPE),
    }
}
