//! Network constants for the chino.io API.

/// Production API base URL.
pub const PROD_API_URL: &str = "https://api.chino.io";

/// Test (sandbox) API base URL.
pub const TEST_API_URL: &str = "https://api.test.chino.io";

/// Well-known endpoint labels, consulted only when no explicit URL is given.
pub const OFFICIAL_URLS: &[(&str, &str)] = &[("prod", PROD_API_URL), ("test", TEST_API_URL)];

/// API versions accepted at construction time.
pub const SUPPORTED_API_VERSIONS: &[&str] = &["v1"];

pub const DEFAULT_LABEL: &str = "test";
pub const DEFAULT_API_VERSION: &str = "v1";
pub const DEFAULT_HTTPS_PORT: u16 = 443;
pub const DEFAULT_HTTP_PORT: u16 = 80;

/// Resolve a well-known label to its base URL.
pub fn official_url(label: &str) -> Option<&'static str> {
    OFFICIAL_URLS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, url)| *url)
}

pub(crate) fn supported_labels() -> String {
    OFFICIAL_URLS
        .iter()
        .map(|(l, _)| *l)
        .collect::<Vec<_>>()
        .join(", ")
}
