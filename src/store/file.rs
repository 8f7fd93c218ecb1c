//! JSON file backed store, so cookies outlive a single process

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::NamedTempFile;

use super::{CookieJar, CookieStore};
use crate::error::{CookieError, Result};

/// Store that loads the jar from disk on every read and rewrites it on every write
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current jar; a missing file is an empty jar
    pub fn load(&self) -> Result<CookieJar> {
        if !self.path.exists() {
            return Ok(CookieJar::new());
        }
        if !self.path.is_file() {
            return Err(CookieError::Config(format!(
                "Cookie store is not a file: {:?}",
                self.path
            )));
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(CookieJar::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Replace the file atomically
    fn save(&self, jar: &CookieJar) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut temp = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut temp, jar)?;
        temp.write_all(b"\n")?;
        temp.persist(&self.path).map_err(|e| CookieError::Io(e.error))?;
        Ok(())
    }
}

impl CookieStore for FileStore {
    fn read(&self) -> Result<String> {
        Ok(self.load()?.render(Utc::now()))
    }

    fn write(&mut self, setter: &str) -> Result<()> {
        let now = Utc::now();
        let mut jar = self.load()?;
        jar.apply(setter, now)?;
        jar.purge_expired(now);
        log::debug!("Saving {} cookie(s) to {:?}", jar.cookies().len(), self.path);
        self.save(&jar)
    }
}
