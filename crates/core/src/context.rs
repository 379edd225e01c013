//! Per-request context the binding pipeline reads from.

use serde::{Deserialize, Serialize};

use crate::catalog::ErrorEntry;
use crate::error::CoreError;
use crate::pagination::Cursor;
use crate::validation::is_object_id;

/// The authenticated caller, established by the auth layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub merchant_id: String,
}

/// Route parameters captured by the router, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(Vec<(String, String)>);

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of `name`, or an empty string when the route has no such param.
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Resolve a route identity that must be a 24-hex object id.
    pub fn object_id(&self, name: &str, entry: ErrorEntry) -> Result<&str, CoreError> {
        match self.get(name) {
            Some(id) if is_object_id(id) => Ok(id),
            _ => Err(CoreError::IdentityMissing(entry)),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = PathParams::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Everything the binding pipeline knows about the current request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub identity: AuthIdentity,
    pub path: PathParams,
    pub raw_body: Vec<u8>,
    pub cursor: Cursor,
}
