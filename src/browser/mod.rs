//! SameSite=None compatibility detection from a user-agent string.
//!
//! Some browsers mishandle cookies carrying `SameSite=None`: WebKit on iOS 12
//! and macOS 10.14 treats it as `Strict`, while UC Browser before 12.13.2 and
//! Chromium 51 through 66 reject such cookies outright. Writes consult a
//! [`CompatibilityMode`] computed once from the user agent to decide whether
//! the attribute may be emitted.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

#[cfg(test)]
mod tests;

static IOS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(iP.+; CPU .*OS (\d+)[_\d]*.*\) AppleWebKit/").expect("iOS regex is valid")
});

static MACOSX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(Macintosh;.*Mac OS X (\d+)_(\d+)[_\d]*.*\) AppleWebKit/")
        .expect("macOS regex is valid")
});

static SAFARI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Version/.* Safari/").expect("Safari regex is valid"));

static MAC_EMBEDDED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Mozilla/[\.\d]+ \(Macintosh;.*Mac OS X [_\d]+\) AppleWebKit/[\.\d]+ \(KHTML, like Gecko\)$",
    )
    .expect("embedded WebKit regex is valid")
});

static CHROMIUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Chrom(e|ium)").expect("Chromium regex is valid"));

static CHROMIUM_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Chrom[^ /]+/(\d+)[\.\d]*(?: |$)").expect("Chromium version regex is valid")
});

static UC_BROWSER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"UCBrowser/").expect("UC Browser regex is valid"));

static UC_BROWSER_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"UCBrowser/(\d+)\.(\d+)\.(\d+)[\.\d]*").expect("UC Browser version regex is valid")
});

/// Whether `SameSite=None` may be written for the detected browser.
///
/// Computed once and handed to every [`DocCookies`](crate::cookies::DocCookies)
/// handle; nothing re-detects it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityMode {
    same_site_none: bool,
}

impl CompatibilityMode {
    /// Detect the mode for a user-agent string
    pub fn detect(user_agent: &str) -> Self {
        let incompatible = is_same_site_none_incompatible(user_agent);
        log::debug!(
            "SameSite=None {} for user agent {:?}",
            if incompatible { "suppressed" } else { "allowed" },
            user_agent
        );
        Self {
            same_site_none: !incompatible,
        }
    }

    /// Mode that always emits `SameSite=None`
    pub fn allow_none() -> Self {
        Self {
            same_site_none: true,
        }
    }

    /// Mode that never emits `SameSite=None`
    pub fn suppress_none() -> Self {
        Self {
            same_site_none: false,
        }
    }

    pub fn allows_same_site_none(&self) -> bool {
        self.same_site_none
    }
}

impl Default for CompatibilityMode {
    fn default() -> Self {
        Self::allow_none()
    }
}

/// True when the browser behind `user_agent` mishandles `SameSite=None`
pub fn is_same_site_none_incompatible(user_agent: &str) -> bool {
    has_webkit_same_site_bug(user_agent) || drops_unrecognized_same_site_cookies(user_agent)
}

/// WebKit builds that treat `SameSite=None` as `SameSite=Strict`
pub fn has_webkit_same_site_bug(user_agent: &str) -> bool {
    // Every iOS version is flagged, not only 12.
    if is_ios_version(None, user_agent) {
        return true;
    }
    if !is_macosx_version(10, 14, user_agent) {
        return false;
    }
    is_safari(user_agent) || is_mac_embedded_browser(user_agent)
}

/// Browsers that drop cookies whose `SameSite` value they do not recognize
pub fn drops_unrecognized_same_site_cookies(user_agent: &str) -> bool {
    if is_uc_browser(user_agent) {
        return !is_uc_browser_version_at_least(12, 13, 2, user_agent);
    }
    is_chromium_based(user_agent)
        && is_chromium_version_at_least(51, user_agent)
        && !is_chromium_version_at_least(67, user_agent)
}

/// iOS device check; `None` accepts any major version
pub fn is_ios_version(major: Option<u32>, user_agent: &str) -> bool {
    let Some(captures) = IOS.captures(user_agent) else {
        return false;
    };
    match major {
        Some(major) => capture_number(&captures, 1) == Some(major),
        None => true,
    }
}

pub fn is_macosx_version(major: u32, minor: u32, user_agent: &str) -> bool {
    MACOSX.captures(user_agent).is_some_and(|captures| {
        capture_number(&captures, 1) == Some(major) && capture_number(&captures, 2) == Some(minor)
    })
}

/// Desktop Safari, excluding Chromium browsers that copy its tokens
pub fn is_safari(user_agent: &str) -> bool {
    SAFARI.is_match(user_agent) && !is_chromium_based(user_agent)
}

/// A macOS app embedding WebKit without naming a browser
pub fn is_mac_embedded_browser(user_agent: &str) -> bool {
    MAC_EMBEDDED.is_match(user_agent)
}

pub fn is_chromium_based(user_agent: &str) -> bool {
    CHROMIUM.is_match(user_agent)
}

/// An unreadable version never counts as "at least"
pub fn is_chromium_version_at_least(major: u32, user_agent: &str) -> bool {
    CHROMIUM_VERSION
        .captures(user_agent)
        .and_then(|captures| capture_number(&captures, 1))
        .is_some_and(|version| version >= major)
}

pub fn is_uc_browser(user_agent: &str) -> bool {
    UC_BROWSER.is_match(user_agent)
}

/// Compares major, then minor, then build; an unreadable version is treated as too old
pub fn is_uc_browser_version_at_least(major: u32, minor: u32, build: u32, user_agent: &str) -> bool {
    let Some(captures) = UC_BROWSER_VERSION.captures(user_agent) else {
        return false;
    };
    let (Some(major_version), Some(minor_version), Some(build_version)) = (
        capture_number(&captures, 1),
        capture_number(&captures, 2),
        capture_number(&captures, 3),
    ) else {
        return false;
    };

    if major_version != major {
        return major_version > major;
    }
    if minor_version != minor {
        return minor_version > minor;
    }
    build_version >= build
}

fn capture_number(captures: &Captures<'_>, index: usize) -> Option<u32> {
    captures.get(index)?.as_str().parse().ok()
}
