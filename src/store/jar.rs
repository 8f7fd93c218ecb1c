//! Browser-like cookie bookkeeping behind the store implementations.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CookieError, Result};
use crate::utils::DateUtils;

/// A cookie as the store remembers it; name and value stay percent-encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub secure: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_site: Option<String>,
    /// `None` for session cookies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl StoredCookie {
    fn same_identity(&self, other: &StoredCookie) -> bool {
        self.name == other.name && self.domain == other.domain && self.path == other.path
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// Ordered cookie list with `document.cookie` write semantics
///
/// Cookies are identified by name, domain and path. Re-setting one keeps its
/// position; setting it with a past `expires` or a non-positive `max-age`
/// evicts it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieJar {
    #[serde(default)]
    cookies: Vec<StoredCookie>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cookies(&self) -> &[StoredCookie] {
        &self.cookies
    }

    /// Apply one setter string at time `now`
    pub fn apply(&mut self, setter: &str, now: DateTime<Utc>) -> Result<()> {
        let cookie = parse_setter(setter, now)?;
        let existing = self.cookies.iter().position(|c| c.same_identity(&cookie));

        if cookie.is_expired(now) {
            if let Some(index) = existing {
                log::debug!("Evicting cookie {}", cookie.name);
                self.cookies.remove(index);
            }
            return Ok(());
        }

        match existing {
            Some(index) => self.cookies[index] = cookie,
            None => {
                log::debug!("Storing new cookie {}", cookie.name);
                self.cookies.push(cookie);
            }
        }
        Ok(())
    }

    /// Live cookies as `name=value; name=value`
    pub fn render(&self, now: DateTime<Utc>) -> String {
        self.cookies
            .iter()
            .filter(|cookie| !cookie.is_expired(now))
            .map(|cookie| format!("{}={}", cookie.name, cookie.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Drop cookies that expired before `now`
    pub fn purge_expired(&mut self, now: DateTime<Utc>) {
        self.cookies.retain(|cookie| !cookie.is_expired(now));
    }
}

fn parse_setter(setter: &str, now: DateTime<Utc>) -> Result<StoredCookie> {
    let mut fragments = setter.split(';');
    let pair = fragments.next().unwrap_or_default();
    let (name, value) = pair.split_once('=').ok_or_else(|| {
        CookieError::InvalidAttribute(format!("Missing '=' in cookie pair: {}", pair))
    })?;
    let name = name.trim();
    if name.is_empty() {
        return Err(CookieError::InvalidAttribute(
            "Cookie name is empty".to_string(),
        ));
    }

    let mut cookie = StoredCookie {
        name: name.to_string(),
        value: value.trim().to_string(),
        domain: None,
        path: None,
        secure: false,
        same_site: None,
        expires_at: None,
    };
    let mut expires = None;
    let mut max_age = None;

    for fragment in fragments {
        let fragment = fragment.trim();
        let (key, value) = match fragment.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (fragment, ""),
        };
        match key.to_ascii_lowercase().as_str() {
            // Unparsable dates are ignored, leaving a session cookie.
            "expires" => expires = DateUtils::parse_utc_string(value),
            "max-age" => {
                if let Some(seconds) = parse_max_age(value) {
                    max_age = Some(max_age_deadline(seconds, now));
                }
            }
            "domain" => {
                let domain = value.trim_start_matches('.').to_ascii_lowercase();
                cookie.domain = (!domain.is_empty()).then_some(domain);
            }
            "path" => cookie.path = (!value.is_empty()).then(|| value.to_string()),
            "secure" => cookie.secure = true,
            "samesite" => cookie.same_site = Some(value.to_ascii_lowercase()),
            _ => {}
        }
    }

    // max-age wins over expires when both are present
    cookie.expires_at = max_age.or(expires);
    Ok(cookie)
}

/// Digits with an optional `-`; values beyond `i64` saturate
fn parse_max_age(value: &str) -> Option<i64> {
    let (negative, digits) = match value.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, value),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match value.parse::<i64>() {
        Ok(seconds) => Some(seconds),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

fn max_age_deadline(seconds: i64, now: DateTime<Utc>) -> DateTime<Utc> {
    if seconds <= 0 {
        return DateTime::<Utc>::MIN_UTC;
    }
    Duration::try_seconds(seconds)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
