//! Presence-aware patch values.
//!
//! A single decode of a PATCH body yields, for every patchable key, one of
//! four states. Absence and explicit null are distinct, and a value of the
//! wrong dynamic shape is captured instead of failing the whole decode, so
//! the merge can report it with the key's own catalog entry.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::catalog::ErrorEntry;
use crate::error::CoreError;

/// One patchable key as seen in the request body.
///
/// Fields of this type must be marked `#[serde(default)]` (or sit in a
/// `#[serde(default)]` struct) so a missing key becomes [`Patch::Absent`].
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    /// Key not present: the canonical value is kept.
    Absent,
    /// Key present with `null`: the field is cleared to its zero value.
    Null,
    /// Key present with a value of the expected shape.
    Value(T),
    /// Key present with a value of some other shape.
    Mismatch,
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        if raw.is_null() {
            return Ok(Patch::Null);
        }
        Ok(T::deserialize(raw).map_or(Patch::Mismatch, Patch::Value))
    }
}

impl<T> Patch<T> {
    pub fn is_present(&self) -> bool {
        !matches!(self, Patch::Absent)
    }

    /// Write the patch into `slot`.
    pub fn merge_into(self, slot: &mut T, key: &'static str, entry: ErrorEntry) -> Result<(), CoreError>
    where
        T: Default,
    {
        self.merge_with(slot, key, entry, |value| value)
    }

    /// Write the patch into a slot of another type, converting values first.
    /// Used to narrow JSON numbers onto integer fields.
    pub fn merge_with<U, F>(
        self,
        slot: &mut U,
        key: &'static str,
        entry: ErrorEntry,
        convert: F,
    ) -> Result<(), CoreError>
    where
        U: Default,
        F: FnOnce(T) -> U,
    {
        match self {
            Patch::Absent => {}
            Patch::Null => *slot = U::default(),
            Patch::Value(value) => *slot = convert(value),
            Patch::Mismatch => {
                tracing::debug!(field = key, code = entry.code(), "Patch value has incorrect type");
                return Err(CoreError::FieldTypeMismatch { field: key, entry });
            }
        }
        Ok(())
    }
}

/// Narrow a JSON number onto a 32-bit field, truncating toward zero and
/// saturating at the bounds.
pub fn narrow_i32(value: f64) -> i32 {
    value as i32
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde::Deserialize;

    use super::*;
    use crate::catalog;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Body {
        image: Patch<String>,
        amount: Patch<f64>,
        urls: Patch<Vec<String>>,
    }

    fn decode(json: &str) -> Body {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn missing_key_is_absent() {
        let body = decode("{}");
        assert_eq!(body.image, Patch::Absent);
        assert!(!body.image.is_present());
    }

    #[test]
    fn null_is_distinct_from_absent() {
        let body = decode(r#"{"image": null}"#);
        assert_eq!(body.image, Patch::Null);
        assert!(body.image.is_present());
    }

    #[test]
    fn zero_values_are_present() {
        let body = decode(r#"{"image": "", "amount": 0}"#);
        assert_eq!(body.image, Patch::Value(String::new()));
        assert_eq!(body.amount, Patch::Value(0.0));
    }

    #[test]
    fn wrong_shape_is_captured_not_fatal() {
        let body = decode(r#"{"amount": "not-a-number", "image": "ok"}"#);
        assert_eq!(body.amount, Patch::Mismatch);
        assert_eq!(body.image, Patch::Value("ok".into()));
    }

    #[test]
    fn mixed_list_is_a_mismatch() {
        let body = decode(r#"{"urls": ["https://a.example", 1]}"#);
        assert_eq!(body.urls, Patch::Mismatch);
    }

    #[test]
    fn merge_null_clears_to_zero() {
        let mut slot = "old".to_owned();
        Patch::<String>::Null
            .merge_into(&mut slot, "image", catalog::IMAGE_INCORRECT_TYPE)
            .unwrap();
        assert_eq!(slot, "");
    }

    #[test]
    fn merge_absent_keeps_value() {
        let mut slot = "old".to_owned();
        Patch::<String>::Absent
            .merge_into(&mut slot, "image", catalog::IMAGE_INCORRECT_TYPE)
            .unwrap();
        assert_eq!(slot, "old");
    }

    #[test]
    fn merge_mismatch_reports_entry() {
        let mut slot = 1.0;
        let result = Patch::<f64>::Mismatch.merge_into(
            &mut slot,
            "min_payment_amount",
            catalog::MIN_PAYMENT_AMOUNT_INCORRECT_TYPE,
        );
        assert_matches!(
            result,
            Err(CoreError::FieldTypeMismatch { field: "min_payment_amount", entry })
                if entry == catalog::MIN_PAYMENT_AMOUNT_INCORRECT_TYPE
        );
        assert_eq!(slot, 1.0);
    }

    #[test]
    fn numbers_narrow_onto_integers() {
        let mut status = 0;
        Patch::Value(3.9)
            .merge_with(&mut status, "status", catalog::STATUS_INCORRECT_TYPE, narrow_i32)
            .unwrap();
        assert_eq!(status, 3);
        assert_eq!(narrow_i32(1e12), i32::MAX);
    }
}
