//! doc-cookies - a `document.cookie` style cookie reader/writer
//!
//! This crate reads, writes, enumerates and deletes cookies held in an
//! ambient string store, percent-encoding names and values, and decides
//! from a user-agent string whether `SameSite=None` may be emitted.
//!
//! ```no_run
//! use doc_cookies::cookies::{DocCookies, Expiry, WriteAttributes};
//! use doc_cookies::store::MemoryStore;
//!
//! let mut cookies = DocCookies::for_user_agent(MemoryStore::new(), "Mozilla/5.0 Firefox/120.0");
//! let attributes = WriteAttributes::new().path("/").expiry(Expiry::RelativeSeconds(3600));
//! cookies.set_item("theme", "dark", &attributes)?;
//! assert_eq!(cookies.get_item("theme")?.as_deref(), Some("dark"));
//! # Ok::<(), doc_cookies::CookieError>(())
//! ```

pub mod browser;
pub mod cli;
pub mod config;
pub mod cookies;
pub mod error;
pub mod exit_code;
pub mod logging;
pub mod output;
pub mod store;
pub mod utils;

pub use browser::CompatibilityMode;
pub use cookies::DocCookies;
pub use error::{CookieError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
