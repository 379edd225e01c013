//! Merchant onboarding submission.
//!
//! Sections are optional so the dashboard can save one step at a time, but
//! a contacts section must carry both contacts.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::inject::Bindable;
use crate::validation::{validate_phone, validate_position, validate_swift, validate_zip_usa, FieldOrder};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OnboardingRequest {
    #[serde(skip_deserializing)]
    pub merchant_id: String,
    #[validate(nested)]
    pub company: Option<CompanyInfo>,
    #[validate(nested)]
    pub contacts: Option<Contacts>,
    #[validate(nested)]
    pub banking: Option<Banking>,
}

impl Bindable for OnboardingRequest {
    fn merchant_id_mut(&mut self) -> Option<&mut String> {
        Some(&mut self.merchant_id)
    }
}

impl FieldOrder for OnboardingRequest {
    fn field_order(path: &str) -> &'static [&'static str] {
        match path {
            "" => &["company", "contacts", "banking"],
            "company" => &[
                "name",
                "alternative_name",
                "website",
                "country",
                "state",
                "zip",
                "city",
                "address",
            ],
            "contacts" => &["authorized", "technical"],
            "contacts.authorized" => &["name", "email", "phone", "position"],
            "contacts.technical" => &["name", "email", "phone"],
            "banking" => &[
                "currency",
                "name",
                "address",
                "account_number",
                "swift",
                "correspondent_account",
            ],
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CompanyInfo {
    #[validate(length(min = 3, max = 60))]
    pub name: String,
    #[validate(length(min = 1, max = 60))]
    pub alternative_name: String,
    #[validate(url)]
    pub website: String,
    #[validate(length(equal = 2))]
    pub country: String,
    #[validate(length(max = 60))]
    pub state: String,
    #[validate(custom(function = "validate_zip_usa"))]
    pub zip: String,
    #[validate(length(min = 1, max = 60))]
    pub city: String,
    #[validate(length(min = 1, max = 255))]
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Contacts {
    #[validate(required, nested)]
    pub authorized: Option<AuthorizedContact>,
    #[validate(required, nested)]
    pub technical: Option<TechnicalContact>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AuthorizedContact {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[validate(custom(function = "validate_position"))]
    pub position: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TechnicalContact {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Banking {
    #[validate(length(equal = 3))]
    pub currency: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    #[validate(length(min = 1, max = 34))]
    pub account_number: String,
    #[validate(custom(function = "validate_swift"))]
    pub swift: String,
    #[validate(length(max = 34))]
    pub correspondent_account: String,
}
