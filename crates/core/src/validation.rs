//! Structural validation and translation into the error catalog.
//!
//! Request shapes declare their rules with `validator` derives and restate
//! their field order through [`FieldOrder`]. On failure the first violation
//! in declaration order (nested structs depth first, list items by index)
//! is translated through the [`ErrorCatalog`]:
//!
//! 1. bare field name table,
//! 2. full namespace table (`Type.field.sub_field`),
//! 3. tag table,
//! 4. the catalog fallback.
//!
//! The resulting `details` always carry the raw field and tag.

use std::sync::LazyLock;

use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::catalog::{ErrorCatalog, ErrorMessage};
use crate::error::CoreError;

static OBJECT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{24}$").expect("valid regex"));
static ZIP_USA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(?:-[0-9]{4})?$").expect("valid regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("valid regex"));
static SWIFT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{6}[A-Z0-9]{2}(?:[A-Z0-9]{3})?$").expect("valid regex"));

/// Positions a merchant contact may hold.
pub const POSITIONS: &[&str] = &[
    "CEO",
    "CTO",
    "CMO",
    "CFO",
    "Project Manager",
    "Generalist",
    "Other",
];

/// Pages a review may be left on.
pub const REVIEW_PAGES: &[&str] = &["primary_onboarding", "merchant_onboarding"];

// ---------------------------------------------------------------------------
// Violations
// ---------------------------------------------------------------------------

/// The single violation reported for a failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Bare field name.
    pub field: String,
    /// Rule tag, e.g. `required`, `email`, `zip_usa`.
    pub tag: String,
    /// `Type.field.sub_field` path from the root request type.
    pub namespace: String,
}

impl FieldViolation {
    pub fn details(&self) -> String {
        format!(
            "field validation for '{}' failed on the '{}' tag",
            self.field, self.tag
        )
    }
}

/// Declaration order of a request shape's validated fields.
///
/// `validator` collects failures into a hash map, so the order in which the
/// fields were declared is restated here and drives which violation is
/// reported. `path` is the dotted field path below the root type, empty for
/// the root itself.
pub trait FieldOrder {
    fn field_order(path: &str) -> &'static [&'static str];
}

/// Lookup from a path below the root to the declared fields there.
pub type FieldOrderFn = fn(&str) -> &'static [&'static str];

/// Pick the first violation: fields in declaration order, nested shapes
/// depth first, list items by index. Keys missing from the declared order
/// come last, lexicographically.
pub fn first_violation(root: &str, errors: &ValidationErrors, order: FieldOrderFn) -> Option<FieldViolation> {
    walk(root, "", errors, order)
}

fn walk(namespace: &str, path: &str, errors: &ValidationErrors, order: FieldOrderFn) -> Option<FieldViolation> {
    let declared = order(path);
    let rank = |key: &str| declared.iter().position(|f| *f == key).unwrap_or(declared.len());

    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|a, b| rank(&a.0).cmp(&rank(&b.0)).then_with(|| a.0.cmp(b.0)));

    for (key, kind) in entries {
        let field = key.to_string();
        let field_namespace = format!("{namespace}.{field}");
        let field_path = if path.is_empty() {
            field.clone()
        } else {
            format!("{path}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                if let Some(first) = list.first() {
                    return Some(FieldViolation {
                        field,
                        tag: first.code.to_string(),
                        namespace: field_namespace,
                    });
                }
            }
            ValidationErrorsKind::Struct(inner) => {
                if let Some(violation) = walk(&field_namespace, &field_path, inner, order) {
                    return Some(violation);
                }
            }
            ValidationErrorsKind::List(items) => {
                let mut items: Vec<_> = items.iter().collect();
                items.sort_by_key(|(index, _)| **index);
                for (index, inner) in items {
                    let item_namespace = format!("{field_namespace}[{index}]");
                    if let Some(violation) = walk(&item_namespace, &field_path, inner, order) {
                        return Some(violation);
                    }
                }
            }
        }
    }
    None
}

/// Translate a violation into its catalog message.
pub fn translate(catalog: &ErrorCatalog, violation: &FieldViolation) -> ErrorMessage {
    let entry = catalog
        .by_field(&violation.field)
        .or_else(|| catalog.by_namespace(&violation.namespace))
        .or_else(|| catalog.by_tag(&violation.tag))
        .unwrap_or_else(|| catalog.fallback());
    entry.with_details(violation.details())
}

/// Run structural validation on `request` and translate the first failure.
pub fn validate_request<T: Validate + FieldOrder>(request: &T, catalog: &ErrorCatalog) -> Result<(), CoreError> {
    let Err(errors) = request.validate() else {
        return Ok(());
    };

    let root = short_type_name::<T>();
    let violation = first_violation(root, &errors, T::field_order).unwrap_or_else(|| FieldViolation {
        field: String::new(),
        tag: String::new(),
        namespace: root.to_owned(),
    });

    tracing::debug!(
        field = %violation.field,
        tag = %violation.tag,
        namespace = %violation.namespace,
        "Structural validation failed",
    );

    Err(CoreError::Validation(translate(catalog, &violation)))
}

/// Unqualified type name, without module path or generics.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

// ---------------------------------------------------------------------------
// Custom rules
// ---------------------------------------------------------------------------

pub fn is_object_id(value: &str) -> bool {
    OBJECT_ID_RE.is_match(value)
}

pub fn validate_object_id(value: &str) -> Result<(), ValidationError> {
    if is_object_id(value) {
        Ok(())
    } else {
        Err(ValidationError::new("hexadecimal"))
    }
}

pub fn validate_zip_usa(value: &str) -> Result<(), ValidationError> {
    if ZIP_USA_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("zip_usa"))
    }
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("phone"))
    }
}

pub fn validate_swift(value: &str) -> Result<(), ValidationError> {
    if SWIFT_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("swift"))
    }
}

pub fn validate_position(value: &str) -> Result<(), ValidationError> {
    if POSITIONS.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("position"))
    }
}

pub fn validate_review_page(value: &str) -> Result<(), ValidationError> {
    if REVIEW_PAGES.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("oneof"))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;
    use crate::catalog;

    #[derive(Debug, Validate)]
    struct Inner {
        #[validate(length(min = 1))]
        name: String,
        #[validate(email)]
        email: String,
    }

    #[derive(Debug, Validate)]
    struct Outer {
        #[validate(nested)]
        inner: Inner,
        #[validate(length(min = 1))]
        title: String,
    }

    impl FieldOrder for Outer {
        fn field_order(path: &str) -> &'static [&'static str] {
            match path {
                "" => &["inner", "title"],
                "inner" => &["name", "email"],
                _ => &[],
            }
        }
    }

    #[derive(Debug, Validate)]
    struct Address {
        #[validate(custom(function = "validate_zip_usa"))]
        postal: String,
    }

    impl FieldOrder for Address {
        fn field_order(_path: &str) -> &'static [&'static str] {
            &["postal"]
        }
    }

    fn no_order(_path: &str) -> &'static [&'static str] {
        &[]
    }

    fn violation(field: &str, tag: &str, namespace: &str) -> FieldViolation {
        FieldViolation {
            field: field.into(),
            tag: tag.into(),
            namespace: namespace.into(),
        }
    }

    #[test]
    fn field_table_wins() {
        let catalog = ErrorCatalog::standard();
        let message = translate(&catalog, &violation("annual_income", "range", "UserProfileRequest.annual_income"));
        assert_eq!(message.code, "ma000075");
        assert_eq!(message.message, "incorrect annual income value");
        assert_eq!(
            message.details,
            "field validation for 'annual_income' failed on the 'range' tag"
        );
    }

    #[test]
    fn namespace_table_is_second() {
        let catalog = ErrorCatalog::standard();
        let message = translate(
            &catalog,
            &violation("swift", "swift", "OnboardingRequest.banking.swift"),
        );
        assert_eq!(message.code, catalog::INCORRECT_BANK_SWIFT.code());
    }

    #[test]
    fn zip_usa_tag_is_third() {
        let catalog = ErrorCatalog::standard();
        let message = translate(&catalog, &violation("postal", "zip_usa", "Address.postal"));
        assert_eq!(message.code, "ma000073");
        assert_eq!(message.message, "incorrect zip code");
        assert_eq!(
            message.details,
            "field validation for 'postal' failed on the 'zip_usa' tag"
        );
    }

    #[test]
    fn unmatched_falls_back_with_details() {
        let catalog = ErrorCatalog::standard();
        let message = translate(&catalog, &violation("foo", "required", "Bar.foo"));
        assert_eq!(message.code, "ma000002");
        assert_eq!(message.message, "validation failed");
        assert_eq!(
            message.details,
            "field validation for 'foo' failed on the 'required' tag"
        );
    }

    #[test]
    fn first_violation_follows_declaration_order() {
        let outer = Outer {
            inner: Inner {
                email: "nope".into(),
                name: String::new(),
            },
            title: String::new(),
        };
        let errors = outer.validate().unwrap_err();
        let first = first_violation("Outer", &errors, Outer::field_order).unwrap();
        assert_eq!(first, violation("name", "length", "Outer.inner.name"));
    }

    #[test]
    fn undeclared_keys_fall_back_to_name_order() {
        let outer = Outer {
            inner: Inner {
                email: "nope".into(),
                name: String::new(),
            },
            title: String::new(),
        };
        let errors = outer.validate().unwrap_err();
        let first = first_violation("Outer", &errors, no_order).unwrap();
        assert_eq!(first, violation("email", "email", "Outer.inner.email"));
    }

    #[test]
    fn validate_request_uses_the_type_name_as_root() {
        let catalog = ErrorCatalog::builder()
            .namespace("Address.postal", catalog::INCORRECT_ADDRESS)
            .build();
        let result = validate_request(
            &Address {
                postal: "ABCDE".into(),
            },
            &catalog,
        );
        assert_matches!(
            result,
            Err(CoreError::Validation(message)) if message.code == catalog::INCORRECT_ADDRESS.code()
        );
    }

    #[test]
    fn validate_request_passes_valid_input() {
        let catalog = ErrorCatalog::standard();
        let address = Address {
            postal: "94105-1234".into(),
        };
        assert!(validate_request(&address, &catalog).is_ok());
    }

    #[test]
    fn custom_rules() {
        assert!(validate_zip_usa("94105").is_ok());
        assert!(validate_zip_usa("9410").is_err());
        assert!(validate_object_id("5be2e16701d96d00012d26c3").is_ok());
        assert!(validate_object_id("5be2e16701d96d00012d26cZ").is_err());
        assert!(validate_phone("+14155550100").is_ok());
        assert!(validate_phone("call me").is_err());
        assert!(validate_swift("DEUTDEFF500").is_ok());
        assert!(validate_swift("deut").is_err());
        assert!(validate_position("CTO").is_ok());
        assert!(validate_position("Janitor").is_err());
        assert!(validate_review_page("merchant_onboarding").is_ok());
    }

    #[test]
    fn short_type_name_strips_paths() {
        assert_eq!(short_type_name::<Address>(), "Address");
        assert_eq!(short_type_name::<Vec<String>>(), "Vec");
    }
}
