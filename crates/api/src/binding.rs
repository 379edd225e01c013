//! Request binding for handlers.
//!
//! [`RequestScope`] is the extractor every bound handler takes last. It
//! authenticates the caller, captures route params, query, content type and
//! body, and attaches the pagination cursor. Handlers then ask it for a
//! typed request:
//!
//! - [`RequestScope::bind`]: decode, inject trusted fields, paginate, validate.
//! - [`RequestScope::bind_patch`]: decode a presence-aware patch, inject,
//!   resolve the route identity, fetch the canonical record, merge, validate.
//!
//! Which identity source the injector trusts is fixed per route group by an
//! `Extension<Injector>` layer.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{FromRequest, FromRequestParts, Query, RawPathParams, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Uri};
use axum::Form;
use paygate_core::catalog::{ErrorCatalog, ErrorEntry};
use paygate_core::context::{AuthIdentity, PathParams, RequestContext};
use paygate_core::error::CoreError;
use paygate_core::inject::{Bindable, Injector};
use paygate_core::merge::{bind_partial_update, decode_object, decode_patch, CanonicalSource, Patchable};
use paygate_core::pagination::{Cursor, PaginationConfig, PARAM_LIMIT, PARAM_OFFSET, PARAM_SORT};
use paygate_core::validation::{validate_request, FieldOrder};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Largest request body the binder will buffer.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

const MIME_JSON: &str = "application/json";
const MIME_FORM: &str = "application/x-www-form-urlencoded";

/// Everything needed to bind one request.
#[derive(Debug)]
pub struct RequestScope {
    ctx: RequestContext,
    injector: Injector,
    method: Method,
    uri: Uri,
    query: Vec<(String, String)>,
    content_type: Option<String>,
    catalog: Arc<ErrorCatalog>,
    pagination: PaginationConfig,
}

impl FromRequest<AppState> for RequestScope {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let AuthUser { identity } = AuthUser::from_request_parts(&mut parts, state).await?;

        let injector = parts.extensions.get::<Injector>().copied().ok_or_else(|| {
            CoreError::Internal(format!("no injector configured for {}", parts.uri.path()))
        })?;

        // Routes without params reject; they simply have none.
        let path: PathParams = match RawPathParams::from_request_parts(&mut parts, state).await {
            Ok(params) => params.iter().collect(),
            Err(_) => PathParams::new(),
        };

        let query = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .map_err(|e| CoreError::Decode(e.body_text()))?;

        let pagination = state.config.pagination;
        let cursor = if parts.method == Method::GET {
            pagination.cursor(
                first_value(&query, PARAM_LIMIT),
                first_value(&query, PARAM_OFFSET),
                all_values(&query, PARAM_SORT),
            )
        } else {
            pagination.default_cursor()
        };

        let content_type = parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let raw_body = axum::body::to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| CoreError::Decode(e.to_string()))?;

        Ok(RequestScope {
            ctx: RequestContext {
                identity,
                path,
                raw_body: raw_body.to_vec(),
                cursor,
            },
            injector,
            method: parts.method,
            uri: parts.uri,
            query,
            content_type,
            catalog: Arc::clone(&state.catalog),
            pagination,
        })
    }
}

impl RequestScope {
    pub fn identity(&self) -> &AuthIdentity {
        &self.ctx.identity
    }

    pub fn path(&self) -> &PathParams {
        &self.ctx.path
    }

    pub fn cursor(&self) -> &Cursor {
        &self.ctx.cursor
    }

    pub fn injector(&self) -> Injector {
        self.injector
    }

    /// Decode the request into `T` without any trusted-field handling.
    ///
    /// GET and DELETE read the query string, as does any request with an
    /// empty body. Otherwise the body is decoded by its content type, with
    /// JSON assumed when none is given.
    pub async fn decode<T: DeserializeOwned>(&self) -> Result<T, CoreError> {
        let body_is_empty = self.ctx.raw_body.iter().all(u8::is_ascii_whitespace);
        if self.method == Method::GET || self.method == Method::DELETE || body_is_empty {
            return Query::<T>::try_from_uri(&self.uri)
                .map(|Query(value)| value)
                .map_err(|e| CoreError::Decode(e.body_text()));
        }

        match self.media_type() {
            None | Some(MIME_JSON) => decode_object(&self.ctx.raw_body),
            Some(MIME_FORM) => {
                let request = axum::http::Request::builder()
                    .method(Method::POST)
                    .header(CONTENT_TYPE, MIME_FORM)
                    .body(Body::from(self.ctx.raw_body.clone()))
                    .map_err(|e| CoreError::Internal(e.to_string()))?;
                Form::<T>::from_request(request, &())
                    .await
                    .map(|Form(value)| value)
                    .map_err(|e| CoreError::Decode(e.body_text()))
            }
            Some(other) => Err(CoreError::Decode(format!("unsupported content type '{other}'"))),
        }
    }

    /// Bind a full request shape.
    pub async fn bind<T>(&self) -> AppResult<T>
    where
        T: DeserializeOwned + Bindable + Validate + FieldOrder,
    {
        let mut dest: T = self.decode().await?;
        self.injector.inject(&mut dest, &self.ctx);
        self.pagination.paginate(
            &mut dest,
            first_value(&self.query, PARAM_LIMIT),
            first_value(&self.query, PARAM_OFFSET),
            &self.ctx.cursor,
        )?;
        validate_request(&dest, &self.catalog)?;
        Ok(dest)
    }

    /// Bind a partial update against the canonical record named by the
    /// `id_param` route parameter.
    pub async fn bind_patch<P, S>(
        &self,
        source: &S,
        id_param: &str,
        identity_entry: ErrorEntry,
    ) -> AppResult<P::Record>
    where
        P: Patchable + Bindable,
        P::Record: Validate + FieldOrder,
        S: CanonicalSource<P::Record> + ?Sized,
    {
        let mut patch: P = decode_patch(&self.ctx.raw_body)?;
        self.injector.inject(&mut patch, &self.ctx);

        let id = self.ctx.path.object_id(id_param, identity_entry)?;
        let record = bind_partial_update(source, id, patch).await?;

        validate_request(&record, &self.catalog)?;
        Ok(record)
    }

    /// Content type without parameters.
    fn media_type(&self) -> Option<&str> {
        self.content_type
            .as_deref()
            .map(|ct| ct.split(';').next().unwrap_or(ct).trim())
    }
}

fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn all_values(pairs: &[(String, String)], key: &str) -> Vec<String> {
    pairs
        .iter()
        .filter(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.clone())
        .collect()
}
