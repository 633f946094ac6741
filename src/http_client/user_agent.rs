//! Browser fingerprint profiles for impersonated requests.
//!
//! The tab host and some search frontends reject clients that don't look
//! like a current desktop browser, so every request goes out with a full
//! browser header set rather than a library default.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// A header-level browser fingerprint.
pub struct BrowserProfile {
    pub name: &'static str,
    pub user_agent: &'static str,
    /// Extra default headers (lowercase names, static values).
    pub headers: &'static [(&'static str, &'static str)],
}

/// Chrome on Windows, the primary impersonation target.
pub const CHROME_DESKTOP: BrowserProfile = BrowserProfile {
    name: "chrome",
    user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/136.0.0.0 Safari/537.36",
    headers: &[
        (
            "accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7",
        ),
        ("accept-language", "en-US,en;q=0.9"),
        (
            "sec-ch-ua",
            "\"Chromium\";v=\"136\", \"Google Chrome\";v=\"136\", \"Not.A/Brand\";v=\"99\"",
        ),
        ("sec-ch-ua-mobile", "?0"),
        ("sec-ch-ua-platform", "\"Windows\""),
        ("sec-fetch-dest", "document"),
        ("sec-fetch-mode", "navigate"),
        ("sec-fetch-site", "none"),
        ("sec-fetch-user", "?1"),
        ("upgrade-insecure-requests", "1"),
    ],
};

/// Firefox on Windows, used by the fallback client so a blocked fingerprint
/// doesn't take both attempts down.
pub const FIREFOX_DESKTOP: BrowserProfile = BrowserProfile {
    name: "firefox",
    user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:138.0) Gecko/20100101 Firefox/138.0",
    headers: &[
        (
            "accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        ),
        ("accept-language", "en-US,en;q=0.5"),
        ("sec-fetch-dest", "document"),
        ("sec-fetch-mode", "navigate"),
        ("sec-fetch-site", "none"),
        ("upgrade-insecure-requests", "1"),
    ],
};

impl BrowserProfile {
    /// Build the default header map for this profile.
    pub fn header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        for &(name, value) in self.headers {
            map.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
        map
    }
}
