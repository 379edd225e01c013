//! Trusted-field injection.
//!
//! Request shapes opt in to injection by implementing [`Bindable`], which
//! exposes the slots the injector may overwrite. Values always come from the
//! route or the authenticated identity, never from the client payload, so a
//! client-supplied `merchant_id` cannot survive binding.

use crate::context::RequestContext;

/// Route parameter the system group reads the merchant identity from.
pub const MERCHANT_ID_PARAM: &str = "merchant_id";

/// A destination slot bound to a named route parameter.
pub struct PathField<'a> {
    param: &'static str,
    slot: &'a mut String,
}

impl<'a> PathField<'a> {
    pub fn new(param: &'static str, slot: &'a mut String) -> Self {
        Self { param, slot }
    }
}

/// Mutable view over a request's page fields.
pub struct PageFields<'a> {
    pub limit: &'a mut i32,
    pub offset: &'a mut i32,
    pub sort: &'a mut Vec<String>,
}

/// Capability for request shapes that carry trusted fields.
///
/// All hooks default to "no such field", so shapes without trusted fields
/// implement this with an empty `impl`.
pub trait Bindable {
    /// Fields populated from route parameters of the same name.
    fn path_fields(&mut self) -> Vec<PathField<'_>> {
        Vec::new()
    }

    /// The owning merchant identity.
    fn merchant_id_mut(&mut self) -> Option<&mut String> {
        None
    }

    /// The "any of these merchants" filter of listing requests.
    fn merchant_scope_mut(&mut self) -> Option<&mut Vec<String>> {
        None
    }

    /// Page fields populated from the query string.
    fn page_fields(&mut self) -> Option<PageFields<'_>> {
        None
    }
}

/// Which source the merchant identity is trusted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Injector {
    /// Internal callers: the merchant comes from the `merchant_id` route param.
    System,
    /// Merchant dashboard: the merchant comes from the authenticated identity.
    Merchant,
}

impl Injector {
    /// Overwrite every trusted field of `dest` from `ctx`.
    ///
    /// Path-bound fields are written first, so the merchant identity wins
    /// when a shape binds `merchant_id` both ways. In the system variant an
    /// empty route merchant leaves the merchant scope untouched.
    pub fn inject<T: Bindable + ?Sized>(self, dest: &mut T, ctx: &RequestContext) {
        for field in dest.path_fields() {
            *field.slot = ctx.path.value(field.param).to_owned();
        }

        let merchant_id = match self {
            Injector::System => ctx.path.value(MERCHANT_ID_PARAM),
            Injector::Merchant => ctx.identity.merchant_id.as_str(),
        };

        if let Some(slot) = dest.merchant_id_mut() {
            *slot = merchant_id.to_owned();
        }

        if let Some(scope) = dest.merchant_scope_mut() {
            match self {
                Injector::System if merchant_id.is_empty() => {}
                _ => *scope = vec![merchant_id.to_owned()],
            }
        }

        tracing::trace!(injector = ?self, merchant_id, "Injected trusted fields");
    }
}
