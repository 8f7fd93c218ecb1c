//! Write attributes and the setter string they serialize to.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::browser::CompatibilityMode;
use crate::error::CookieError;
use crate::utils::{DateUtils, EncodingUtils};

/// `expires` value that keeps a cookie until the end of year 9999
pub const FAR_FUTURE_EXPIRES: &str = "Fri, 31 Dec 9999 23:59:59 GMT";

/// `expires` value used to evict a cookie
pub const EPOCH_EXPIRES: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Names that would be parsed as attributes rather than as a cookie
const RESERVED_NAMES: [&str; 7] = [
    "expires", "max-age", "path", "domain", "secure", "samesite", "httponly",
];

/// True when `name` is empty or shadows an attribute keyword
pub fn is_reserved_name(name: &str) -> bool {
    name.is_empty()
        || RESERVED_NAMES
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

/// When a cookie stops being sent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Expiry {
    /// Dropped when the browsing session ends
    #[default]
    Session,
    /// `max-age` in seconds; zero behaves like [`Expiry::Session`]
    RelativeSeconds(u64),
    /// Never expires in practice
    Infinite,
    AbsoluteDate(DateTime<Utc>),
    /// Caller-formatted `expires` value, written verbatim
    Raw(String),
}

impl Expiry {
    fn clause(&self) -> Option<String> {
        match self {
            Expiry::Session | Expiry::RelativeSeconds(0) => None,
            Expiry::RelativeSeconds(seconds) => Some(format!("; max-age={}", seconds)),
            Expiry::Infinite => Some(format!("; expires={}", FAR_FUTURE_EXPIRES)),
            Expiry::AbsoluteDate(date) => {
                Some(format!("; expires={}", DateUtils::to_utc_string(date)))
            }
            Expiry::Raw(raw) if raw.is_empty() => None,
            Expiry::Raw(raw) => Some(format!("; expires={}", raw)),
        }
    }
}

/// Canonical same-site policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    None,
    Lax,
    Strict,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let policy = match self {
            SameSite::None => "none",
            SameSite::Lax => "lax",
            SameSite::Strict => "strict",
        };
        write!(f, "{}", policy)
    }
}

impl FromStr for SameSite {
    type Err = CookieError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "no_restriction" => Ok(SameSite::None),
            "lax" => Ok(SameSite::Lax),
            "strict" => Ok(SameSite::Strict),
            _ => Err(CookieError::InvalidAttribute(format!(
                "Unknown same-site policy: {}",
                s
            ))),
        }
    }
}

/// Same-site value as accepted by the legacy loosely-typed API
///
/// Booleans, numbers and free text are all accepted and folded into a
/// [`SameSite`] by [`SameSiteInput::normalize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SameSiteInput {
    #[default]
    Absent,
    Text(String),
    Number(f64),
    Flag(bool),
    /// Already canonical; bypasses the legacy aliasing
    Policy(SameSite),
}

impl SameSiteInput {
    /// Fold the legacy aliases into a canonical policy
    ///
    /// Absent and falsy values, `no_restriction` and negative numbers mean
    /// `None`; `lax`, `true` and anything whose ceiling is 1 mean `Lax`;
    /// everything else, the text `none` included, means `Strict`.
    pub fn normalize(&self) -> SameSite {
        match self {
            SameSiteInput::Policy(policy) => *policy,
            SameSiteInput::Absent | SameSiteInput::Flag(false) => SameSite::None,
            SameSiteInput::Flag(true) => SameSite::Lax,
            SameSiteInput::Number(number) => normalize_number(*number),
            SameSiteInput::Text(text) => normalize_text(text),
        }
    }
}

impl From<SameSite> for SameSiteInput {
    fn from(policy: SameSite) -> Self {
        SameSiteInput::Policy(policy)
    }
}

impl From<bool> for SameSiteInput {
    fn from(flag: bool) -> Self {
        SameSiteInput::Flag(flag)
    }
}

impl From<f64> for SameSiteInput {
    fn from(number: f64) -> Self {
        SameSiteInput::Number(number)
    }
}

impl From<i32> for SameSiteInput {
    fn from(number: i32) -> Self {
        SameSiteInput::Number(f64::from(number))
    }
}

impl From<&str> for SameSiteInput {
    fn from(text: &str) -> Self {
        SameSiteInput::Text(text.to_string())
    }
}

impl From<String> for SameSiteInput {
    fn from(text: String) -> Self {
        SameSiteInput::Text(text)
    }
}

fn normalize_number(number: f64) -> SameSite {
    if number == 0.0 || number.is_nan() || number < 0.0 {
        SameSite::None
    } else if number.ceil() == 1.0 {
        SameSite::Lax
    } else {
        SameSite::Strict
    }
}

fn normalize_text(text: &str) -> SameSite {
    if text.is_empty() {
        return SameSite::None;
    }
    let lower = text.to_lowercase();
    let numeric = coerce_number(text);
    if lower == "no_restriction" || numeric.is_some_and(|n| n < 0.0) {
        return SameSite::None;
    }
    if lower == "lax" || numeric.is_some_and(|n| n.ceil() == 1.0) {
        return SameSite::Lax;
    }
    SameSite::Strict
}

/// Numeric reading of a text value following JavaScript's `Number()`
///
/// Blank text reads as zero. `None` stands for `NaN`: Rust-only spellings
/// such as `inf` or `nan` are rejected, while unsigned `0x`, `0o` and `0b`
/// integers are accepted.
fn coerce_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    match trimmed {
        "" => return Some(0.0),
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(radix_number) = parse_radix_integer(trimmed) {
        return radix_number;
    }

    let decimal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !decimal {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// `Some(_)` when `text` carries a radix prefix; the inner `None` is `NaN`
fn parse_radix_integer(text: &str) -> Option<Option<f64>> {
    let prefix = text.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(None);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|digit| acc * f64::from(radix) + f64::from(digit))
    });
    Some(value)
}

/// Everything a write carries besides the name and value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteAttributes {
    pub expiry: Expiry,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
    pub same_site: SameSiteInput,
}

impl WriteAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expiry(mut self, expiry: Expiry) -> Self {
        self.expiry = expiry;
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn same_site(mut self, same_site: impl Into<SameSiteInput>) -> Self {
        self.same_site = same_site.into();
        self
    }

    /// Same path, domain, secure flag and same-site value, with a new expiry
    pub(crate) fn with_expiry(&self, expiry: Expiry) -> Self {
        Self {
            expiry,
            ..self.clone()
        }
    }
}

/// Build the `name=value; attr...` string assigned to the store
pub fn setter_string(
    name: &str,
    value: &str,
    attributes: &WriteAttributes,
    mode: CompatibilityMode,
) -> String {
    let mut setter = format!(
        "{}={}",
        EncodingUtils::encode_component(name),
        EncodingUtils::encode_component(value)
    );

    if let Some(expires) = attributes.expiry.clause() {
        setter.push_str(&expires);
    }
    if let Some(domain) = attributes.domain.as_deref().filter(|d| !d.is_empty()) {
        setter.push_str("; domain=");
        setter.push_str(domain);
    }
    if let Some(path) = attributes.path.as_deref().filter(|p| !p.is_empty()) {
        setter.push_str("; path=");
        setter.push_str(path);
    }
    if attributes.secure {
        setter.push_str("; secure");
    }

    match attributes.same_site.normalize() {
        SameSite::None if !mode.allows_same_site_none() => {}
        policy => {
            setter.push_str("; samesite=");
            setter.push_str(&policy.to_string());
        }
    }

    setter
}
