//! Utility functions and helpers

use crate::error::{CookieError, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::path::PathBuf;


/// Characters left literal by `encodeURIComponent`; everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The `toUTCString` layout used by cookie `expires` attributes.
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Percent-encoding of cookie names and values
pub struct EncodingUtils;

impl EncodingUtils {
    /// Encode a cookie name or value so `;`, `=` and whitespace never reach the store raw
    pub fn encode_component(input: &str) -> String {
        utf8_percent_encode(input, COMPONENT).to_string()
    }

    /// Decode a cookie name or value read back from the store
    ///
    /// Malformed escapes are kept as they are and invalid UTF-8 is replaced,
    /// so a foreign cookie can never make a read fail.
    pub fn decode_component(input: &str) -> String {
        percent_decode_str(input).decode_utf8_lossy().into_owned()
    }
}

/// HTTP date formatting for `expires` attributes
pub struct DateUtils;

impl DateUtils {
    /// Format as `Thu, 01 Jan 1970 00:00:00 GMT`
    pub fn to_utc_string(date: &DateTime<Utc>) -> String {
        date.format(HTTP_DATE_FORMAT).to_string()
    }

    /// Parse an `expires` value, accepting the `toUTCString` layout and RFC 2822
    pub fn parse_utc_string(input: &str) -> Option<DateTime<Utc>> {
        let input = input.trim();
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, HTTP_DATE_FORMAT) {
            return Some(naive.and_utc());
        }
        DateTime::parse_from_rfc2822(input)
            .ok()
            .map(|date| date.with_timezone(&Utc))
    }
}

/// File system utilities
pub struct FileUtils;

impl FileUtils {
    /// Expand tilde (~) in file paths
    pub fn expand_path(path: &str) -> Result<PathBuf> {
        let Some(rest) = path.strip_prefix('~') else {
            return Ok(PathBuf::from(path));
        };
        let home_dir = dirs::home_dir()
            .ok_or_else(|| CookieError::Config("Cannot determine home directory".to_string()))?;
        let rest = rest.trim_start_matches(['/', '\\']);
        if rest.is_empty() {
            Ok(home_dir)
        } else {
            Ok(home_dir.join(rest))
        }
    }
}
