//! The ambient cookie store.
//!
//! A store behaves like a browser's `document.cookie`: reading yields every
//! live cookie as `name=value` pairs joined by `; `, and writing one
//! `name=value[; attr]*` string upserts (or evicts) exactly that cookie.

pub mod file;
pub mod jar;
pub mod memory;

pub use file::FileStore;
pub use jar::{CookieJar, StoredCookie};
pub use memory::MemoryStore;

use crate::error::Result;

/// Read/write capability over a `document.cookie` style string
pub trait CookieStore {
    /// All live cookies as `name=value; name=value`
    fn read(&self) -> Result<String>;

    /// Apply one setter string
    fn write(&mut self, setter: &str) -> Result<()>;
}

impl<T: CookieStore + ?Sized> CookieStore for &mut T {
    fn read(&self) -> Result<String> {
        (**self).read()
    }

    fn write(&mut self, setter: &str) -> Result<()> {
        (**self).write(setter)
    }
}

impl<T: CookieStore + ?Sized> CookieStore for Box<T> {
    fn read(&self) -> Result<String> {
        (**self).read()
    }

    fn write(&mut self, setter: &str) -> Result<()> {
        (**self).write(setter)
    }
}
