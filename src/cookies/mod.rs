//! Cookie reader/writer over an ambient `document.cookie` style store.
//!
//! [`DocCookies`] exposes the classic six operations (`set_item`,
//! `get_item`, `remove_item`, `has_item`, `keys`, `clear`). Rejected names
//! and missing cookies are reported through `Ok(false)` / `Ok(None)`;
//! `Err` is reserved for failures of the store itself.

pub mod attributes;
pub mod parse;


pub use attributes::{
    is_reserved_name, setter_string, Expiry, SameSite, SameSiteInput, WriteAttributes,
    EPOCH_EXPIRES, FAR_FUTURE_EXPIRES,
};

use crate::browser::CompatibilityMode;
use crate::error::Result;
use crate::store::CookieStore;

/// Cookie operations bound to one store and one compatibility mode
#[derive(Debug)]
pub struct DocCookies<S> {
    store: S,
    mode: CompatibilityMode,
}

impl<S: CookieStore> DocCookies<S> {
    pub fn new(store: S, mode: CompatibilityMode) -> Self {
        Self { store, mode }
    }

    /// Detect the compatibility mode from `user_agent` once, up front
    pub fn for_user_agent(store: S, user_agent: &str) -> Self {
        Self::new(store, CompatibilityMode::detect(user_agent))
    }

    pub fn mode(&self) -> CompatibilityMode {
        self.mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Create or overwrite a cookie
    ///
    /// Returns `Ok(false)` without touching the store when `name` is empty
    /// or is an attribute keyword such as `path` or `expires`.
    pub fn set_item(&mut self, name: &str, value: &str, attributes: &WriteAttributes) -> Result<bool> {
        if is_reserved_name(name) {
            log::debug!("Rejected cookie name {:?}", name);
            return Ok(false);
        }
        let setter = setter_string(name, value, attributes, self.mode);
        self.store.write(&setter)?;
        Ok(true)
    }

    /// Decoded value of the cookie, if present and non-empty
    pub fn get_item(&self, name: &str) -> Result<Option<String>> {
        if name.is_empty() {
            return Ok(None);
        }
        Ok(parse::value_of(&self.store.read()?, name))
    }

    pub fn has_item(&self, name: &str) -> Result<bool> {
        if is_reserved_name(name) {
            return Ok(false);
        }
        Ok(parse::find(&self.store.read()?, name).is_some())
    }

    /// Expire the cookie
    ///
    /// Path, domain, secure and same-site must match the ones used when the
    /// cookie was written or the store keeps it. The expiry in `attributes`
    /// is ignored.
    pub fn remove_item(&mut self, name: &str, attributes: &WriteAttributes) -> Result<bool> {
        if !self.has_item(name)? {
            return Ok(false);
        }
        let eviction = attributes.with_expiry(Expiry::Raw(EPOCH_EXPIRES.to_string()));
        let setter = setter_string(name, "", &eviction, self.mode);
        self.store.write(&setter)?;
        Ok(true)
    }

    /// Decoded names of every readable cookie, in store order
    pub fn keys(&self) -> Result<Vec<String>> {
        Ok(parse::names(&self.store.read()?))
    }

    /// Remove every cookie using the same attributes for each
    pub fn clear(&mut self, attributes: &WriteAttributes) -> Result<()> {
        for name in self.keys()? {
            self.remove_item(&name, attributes)?;
        }
        Ok(())
    }
}
