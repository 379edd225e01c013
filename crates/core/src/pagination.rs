//! Pagination cursor and limit clamping.
//!
//! Two entry points share the same clamping rule:
//! - [`PaginationConfig::cursor`] builds the per-request [`Cursor`] and is
//!   lenient: unparsable values fall back to defaults.
//! - [`PaginationConfig::resolve_limit`] / [`PaginationConfig::resolve_offset`]
//!   feed a destination request's page fields and are strict: an explicit
//!   value that does not parse is a decode failure.

use serde::Serialize;

use crate::error::CoreError;
use crate::inject::Bindable;

/// Sort applied when a listing request does not name one.
pub const DEFAULT_SORT: &str = "_id";

/// Query parameter names.
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_OFFSET: &str = "offset";
pub const PARAM_SORT: &str = "sort[]";

/// Process-wide pagination defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    limit_default: i32,
    offset_default: i32,
    limit_max: i32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            limit_default: 100,
            offset_default: 0,
            limit_max: 1000,
        }
    }
}

impl PaginationConfig {
    /// Rejects configurations where the default limit could escape the
    /// `(0, limit_max]` window.
    pub fn new(limit_default: i32, offset_default: i32, limit_max: i32) -> Result<Self, CoreError> {
        if limit_max <= 0 {
            return Err(CoreError::Internal(format!(
                "limit_max must be positive, got {limit_max}"
            )));
        }
        if limit_default <= 0 || limit_default > limit_max {
            return Err(CoreError::Internal(format!(
                "limit_default must be in 1..={limit_max}, got {limit_default}"
            )));
        }
        Ok(Self {
            limit_default,
            offset_default,
            limit_max,
        })
    }

    pub fn limit_default(&self) -> i32 {
        self.limit_default
    }

    pub fn offset_default(&self) -> i32 {
        self.offset_default
    }

    pub fn limit_max(&self) -> i32 {
        self.limit_max
    }

    /// Non-positive limits fall back to the default; oversized ones are capped.
    pub fn clamp_limit(&self, limit: i64) -> i32 {
        if limit <= 0 {
            self.limit_default
        } else if limit > i64::from(self.limit_max) {
            self.limit_max
        } else {
            // In range of i32 because limit_max is.
            limit as i32
        }
    }

    /// Strict limit resolution for a destination request.
    pub fn resolve_limit(&self, raw: Option<&str>) -> Result<i32, CoreError> {
        match raw {
            None => Ok(self.limit_default),
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map(|limit| self.clamp_limit(limit))
                .map_err(|e| CoreError::Decode(format!("limit '{raw}': {e}"))),
        }
    }

    /// Strict offset resolution. The offset is passed through unclamped;
    /// rejecting negative offsets is left to structural validation.
    pub fn resolve_offset(&self, raw: Option<&str>) -> Result<i32, CoreError> {
        match raw {
            None => Ok(self.offset_default),
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .map_err(|e| CoreError::Decode(format!("offset '{raw}': {e}"))),
        }
    }

    /// Lenient cursor construction from raw query values.
    pub fn cursor(&self, limit: Option<&str>, offset: Option<&str>, sort: Vec<String>) -> Cursor {
        let limit = limit
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map_or(self.limit_default, |limit| self.clamp_limit(limit));
        let offset = offset
            .and_then(|raw| raw.trim().parse::<i32>().ok())
            .unwrap_or(self.offset_default);
        let sort = if sort.is_empty() {
            vec![DEFAULT_SORT.to_owned()]
        } else {
            sort
        };

        Cursor {
            limit,
            offset,
            sort,
        }
    }

    pub fn default_cursor(&self) -> Cursor {
        self.cursor(None, None, Vec::new())
    }

    /// Fill a destination request's page fields from raw query values.
    /// Shapes without page fields are left alone.
    pub fn paginate<T: Bindable + ?Sized>(
        &self,
        dest: &mut T,
        limit: Option<&str>,
        offset: Option<&str>,
        cursor: &Cursor,
    ) -> Result<(), CoreError> {
        let Some(page) = dest.page_fields() else {
            return Ok(());
        };
        *page.limit = self.resolve_limit(limit)?;
        *page.offset = self.resolve_offset(offset)?;
        *page.sort = cursor.sort.clone();
        Ok(())
    }
}

/// Pagination state attached to a request context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cursor {
    pub limit: i32,
    pub offset: i32,
    pub sort: Vec<String>,
}

impl Default for Cursor {
    fn default() -> Self {
        PaginationConfig::default().default_cursor()
    }
}
