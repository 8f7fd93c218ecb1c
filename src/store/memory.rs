//! In-process store, the stand-in for a browser's `document.cookie`

use chrono::Utc;

use super::{CookieJar, CookieStore};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    jar: CookieJar,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jar(&self) -> &CookieJar {
        &self.jar
    }
}

impl CookieStore for MemoryStore {
    fn read(&self) -> Result<String> {
        Ok(self.jar.render(Utc::now()))
    }

    fn write(&mut self, setter: &str) -> Result<()> {
        log::debug!("document.cookie = {:?}", setter);
        self.jar.apply(setter, Utc::now())
    }
}
