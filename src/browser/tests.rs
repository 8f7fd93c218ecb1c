use super::{
    drops_unrecognized_same_site_cookies, has_webkit_same_site_bug, is_chromium_version_at_least,
    is_ios_version, is_macosx_version, is_same_site_none_incompatible,
    is_uc_browser_version_at_least, CompatibilityMode,
};

const CHROME_60: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/60.0.3112.113 Safari/537.36";
const CHROME_80_MAC_10_14: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/80.0.3987.149 Safari/537.36";
const SAFARI_MAC_10_14: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_6) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.1.2 Safari/605.1.15";
const SAFARI_MAC_10_15: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0.3 Safari/605.1.15";
const EMBEDDED_MAC_10_14: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_6) AppleWebKit/605.1.15 (KHTML, like Gecko)";
const IOS_12: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 12_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.1.2 Mobile/15E148 Safari/604.1";
const IOS_15: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 15_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.2 Mobile/15E148 Safari/604.1";
const UC_12_14: &str = "Mozilla/5.0 (Linux; U; Android 8.1.0; en-US; Nexus 6P Build/OPM7.181205.001) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Chrome/57.0.2987.108 UCBrowser/12.14.0.1221 Mobile Safari/537.36";
const UC_12_10: &str = "Mozilla/5.0 (Linux; U; Android 8.1.0; en-US; Nexus 6P Build/OPM7.181205.001) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Chrome/57.0.2987.108 UCBrowser/12.10.0.1163 Mobile Safari/537.36";
const FIREFOX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0";

#[test]
fn chromium_in_buggy_range_is_incompatible() {
    assert!(is_same_site_none_incompatible(CHROME_60));
    assert!(is_same_site_none_incompatible("Chrome/60.0"));
    assert!(is_same_site_none_incompatible("Chrome/51.0"));
}

#[test]
fn chromium_outside_buggy_range_is_compatible() {
    assert!(!is_same_site_none_incompatible("Chrome/70.0"));
    assert!(!is_same_site_none_incompatible("Chrome/67.0.1"));
    assert!(!is_same_site_none_incompatible("Chrome/50.0"));
}

#[test]
fn chromium_version_without_number_is_not_in_range() {
    assert!(!is_chromium_version_at_least(51, "Chromium build"));
    assert!(!drops_unrecognized_same_site_cookies("Chromium build"));
}

#[test]
fn uc_browser_versions_compare_component_wise() {
    assert!(!is_same_site_none_incompatible("UCBrowser/12.14.0"));
    assert!(is_same_site_none_incompatible("UCBrowser/12.10.0"));
    assert!(is_uc_browser_version_at_least(12, 13, 2, "UCBrowser/12.13.2"));
    assert!(!is_uc_browser_version_at_least(12, 13, 2, "UCBrowser/12.13.1"));
    assert!(is_uc_browser_version_at_least(12, 13, 2, "UCBrowser/13.0.0"));
    assert!(!is_uc_browser_version_at_least(12, 13, 2, "UCBrowser/11.99.99"));
}

#[test]
fn uc_browser_check_takes_precedence_over_chromium() {
    assert!(!is_same_site_none_incompatible(UC_12_14));
    assert!(is_same_site_none_incompatible(UC_12_10));
}

#[test]
fn uc_browser_without_version_is_incompatible() {
    assert!(is_same_site_none_incompatible("UCBrowser/beta"));
}

#[test]
fn every_ios_version_has_webkit_bug() {
    assert!(has_webkit_same_site_bug(IOS_12));
    assert!(has_webkit_same_site_bug(IOS_15));
}

#[test]
fn ios_version_filter_compares_major() {
    assert!(is_ios_version(Some(12), IOS_12));
    assert!(!is_ios_version(Some(12), IOS_15));
    assert!(!is_ios_version(None, FIREFOX));
}

#[test]
fn macos_mojave_safari_and_embedded_webkit_are_incompatible() {
    assert!(is_macosx_version(10, 14, SAFARI_MAC_10_14));
    assert!(is_same_site_none_incompatible(SAFARI_MAC_10_14));
    assert!(is_same_site_none_incompatible(EMBEDDED_MAC_10_14));
}

#[test]
fn other_mac_browsers_are_compatible() {
    assert!(!is_same_site_none_incompatible(SAFARI_MAC_10_15));
    assert!(!is_same_site_none_incompatible(CHROME_80_MAC_10_14));
}

#[test]
fn unrelated_browser_is_compatible() {
    assert!(!is_same_site_none_incompatible(FIREFOX));
    assert!(!is_same_site_none_incompatible(""));
}

#[test]
fn detect_inverts_incompatibility() {
    assert!(!CompatibilityMode::detect(CHROME_60).allows_same_site_none());
    assert!(CompatibilityMode::detect(FIREFOX).allows_same_site_none());
    assert_eq!(CompatibilityMode::default(), CompatibilityMode::allow_none());
}
