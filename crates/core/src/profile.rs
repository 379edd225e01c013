//! User profile questionnaire filled in during sign-up.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::inject::Bindable;
use crate::validation::{validate_position, validate_review_page, FieldOrder};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UserProfileRequest {
    #[serde(skip_deserializing)]
    pub user_id: String,
    #[validate(length(min = 1, max = 255))]
    pub first_name: String,
    #[validate(length(min = 1, max = 255))]
    pub last_name: String,
    #[validate(custom(function = "validate_position"))]
    pub position: String,
    #[validate(length(min = 1, max = 255))]
    pub company_name: String,
    #[validate(url)]
    pub website: String,
    #[validate(range(min = 1, max = 1_000_000))]
    pub number_of_employees: i32,
    #[validate(range(min = 0))]
    pub annual_income: i64,
    #[validate(length(min = 1, max = 255))]
    pub kind_of_activity: String,
    #[validate(length(max = 500))]
    pub review: Option<String>,
    #[validate(custom(function = "validate_review_page"))]
    pub page_id: Option<String>,
}

impl FieldOrder for UserProfileRequest {
    fn field_order(_path: &str) -> &'static [&'static str] {
        &[
            "first_name",
            "last_name",
            "position",
            "company_name",
            "website",
            "number_of_employees",
            "annual_income",
            "kind_of_activity",
            "review",
            "page_id",
        ]
    }
}

impl Bindable for UserProfileRequest {}
