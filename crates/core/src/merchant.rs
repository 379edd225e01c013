//! Merchant agreement data and merchant-scoped listings.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog as c;
use crate::error::CoreError;
use crate::inject::{Bindable, PageFields};
use crate::merge::Patchable;
use crate::patch::{narrow_i32, Patch};
use crate::validation::{validate_object_id, FieldOrder};

/// Route parameter naming the merchant addressed by system routes.
pub const MERCHANT_PATH_ID_PARAM: &str = "id";

/// The subset of the backend merchant record the facade reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Merchant {
    pub id: String,
    pub status: i32,
    pub agreement_type: i32,
    pub has_merchant_signature: bool,
    pub has_psp_signature: bool,
    pub agreement_sent_via_mail: bool,
    pub mail_tracking_link: String,
    pub is_signed: bool,
}

/// Full-replacement write of a merchant's agreement data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ChangeMerchantDataRequest {
    #[validate(custom(function = "validate_object_id"))]
    pub merchant_id: String,
    #[validate(range(min = 0, max = 2))]
    pub agreement_type: i32,
    pub has_merchant_signature: bool,
    pub has_psp_signature: bool,
    pub agreement_sent_via_mail: bool,
    #[validate(length(max = 2048))]
    pub mail_tracking_link: String,
}

impl FieldOrder for ChangeMerchantDataRequest {
    fn field_order(_path: &str) -> &'static [&'static str] {
        &["merchant_id", "agreement_type", "mail_tracking_link"]
    }
}

impl From<&Merchant> for ChangeMerchantDataRequest {
    fn from(merchant: &Merchant) -> Self {
        Self {
            merchant_id: merchant.id.clone(),
            agreement_type: merchant.agreement_type,
            has_merchant_signature: merchant.has_merchant_signature,
            has_psp_signature: merchant.has_psp_signature,
            agreement_sent_via_mail: merchant.agreement_sent_via_mail,
            mail_tracking_link: merchant.mail_tracking_link.clone(),
        }
    }
}

/// `PATCH /merchants/{id}/data` body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MerchantDataPatch {
    pub agreement_type: Patch<f64>,
    pub has_merchant_signature: Patch<bool>,
    pub has_psp_signature: Patch<bool>,
    pub agreement_sent_via_mail: Patch<bool>,
    pub mail_tracking_link: Patch<String>,
}

impl Bindable for MerchantDataPatch {}

impl Patchable for MerchantDataPatch {
    type Record = ChangeMerchantDataRequest;

    fn apply(self, r: &mut ChangeMerchantDataRequest) -> Result<(), CoreError> {
        self.agreement_type.merge_with(
            &mut r.agreement_type,
            "agreement_type",
            c::AGREEMENT_TYPE_INCORRECT_TYPE,
            narrow_i32,
        )?;
        self.has_merchant_signature.merge_into(
            &mut r.has_merchant_signature,
            "has_merchant_signature",
            c::HAS_MERCHANT_SIGNATURE_INCORRECT_TYPE,
        )?;
        self.has_psp_signature.merge_into(
            &mut r.has_psp_signature,
            "has_psp_signature",
            c::HAS_PSP_SIGNATURE_INCORRECT_TYPE,
        )?;
        self.agreement_sent_via_mail.merge_into(
            &mut r.agreement_sent_via_mail,
            "agreement_sent_via_mail",
            c::AGREEMENT_SENT_VIA_MAIL_INCORRECT_TYPE,
        )?;
        self.mail_tracking_link.merge_into(
            &mut r.mail_tracking_link,
            "mail_tracking_link",
            c::MAIL_TRACKING_LINK_INCORRECT_TYPE,
        )
    }
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

/// `GET /notifications/{merchant_id}` query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ListNotificationsRequest {
    #[serde(skip_deserializing)]
    #[validate(custom(function = "validate_object_id"))]
    pub merchant_id: String,
    pub user_id: Option<String>,
    pub is_system: Option<bool>,
    #[serde(skip_deserializing)]
    #[validate(range(min = 1))]
    pub limit: i32,
    #[serde(skip_deserializing)]
    #[validate(range(min = 0))]
    pub offset: i32,
    #[serde(skip_deserializing)]
    pub sort: Vec<String>,
}

impl FieldOrder for ListNotificationsRequest {
    fn field_order(_path: &str) -> &'static [&'static str] {
        &["merchant_id", "limit", "offset"]
    }
}

impl Bindable for ListNotificationsRequest {
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

/// `GET /orders` query. `merchant` is the set of merchants whose orders
/// the caller may see.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ListOrdersRequest {
    #[serde(skip_deserializing)]
    #[validate(length(min = 1))]
    pub merchant: Vec<String>,
    pub project: Option<String>,
    pub quick_search: Option<String>,
    pub status: Option<String>,
    #[serde(skip_deserializing)]
    #[validate(range(min = 1))]
    pub limit: i32,
    #[serde(skip_deserializing)]
    #[validate(range(min = 0))]
    pub offset: i32,
    #[serde(skip_deserializing)]
    pub sort: Vec<String>,
}

impl FieldOrder for ListOrdersRequest {
    fn field_order(_path: &str) -> &'static [&'static str] {
        &["merchant", "limit", "offset"]
    }
}

impl Bindable for ListOrdersRequest {
    fn merchant_scope_mut(&mut self) -> Option<&mut Vec<String>> {
        Some(&mut self.merchant)
    }

    fn page_fields(&mut self) -> Option<PageFields<'_>> {
        Some(PageFields {
            limit: &mut self.limit,
            offset: &mut self.offset,
            sort: &mut self.sort,
        })
    }
}
