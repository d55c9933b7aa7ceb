//! Endpoint normalization: resolves a label or explicit URL into a validated
//! base [`Endpoint`].
//!
//! Resolution order:
//!
//! 1. An explicit `url` always wins.
//! 2. Otherwise `label` is looked up in [`crate::network::OFFICIAL_URLS`].
//! 3. With `force_https`, a leading `http` scheme token is rewritten to
//!    `https`. Only the scheme is touched; hosts such as `httpapi.example.io`
//!    are left alone.
//! 4. The port (explicit, or 443/80 depending on `force_https`) is appended
//!    only when the URL contains exactly one colon. Any other count means a
//!    port is already present (or the URL is malformed) and it is left as is.
//! 5. The assembled string must parse as an `http(s)://host[:port]` URL.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::network::{
    self, DEFAULT_API_VERSION, DEFAULT_HTTPS_PORT, DEFAULT_HTTP_PORT, DEFAULT_LABEL,
    SUPPORTED_API_VERSIONS,
};

/// Construction arguments for a transport client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Well-known label, used only when `url` is not set.
    pub label: String,
    /// Explicit base URL, format `<scheme>://<host>[:<port>]`.
    pub url: Option<String>,
    /// Port appended when the URL does not carry one.
    pub port: Option<u16>,
    /// Rewrite `http` to `https` and default the port to 443.
    pub force_https: bool,
    pub api_version: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            url: None,
            port: None,
            force_https: true,
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn force_https(mut self, force: bool) -> Self {
        self.force_https = force;
        self
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Validate and canonicalize into an [`Endpoint`].
    pub fn normalize(&self) -> Result<Endpoint, ConfigError> {
        normalize(self)
    }
}

/// Validated, canonical base URL plus the API version segment joined onto
/// every resource call. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    scheme: String,
    host: String,
    port: u16,
    api_version: String,
    base_url: String,
}

impl Endpoint {
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// The assembled base URL, without the API version segment.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `resource` onto `<base_url>/<api_version>` with single separators.
    pub fn resource_url(&self, resource: &str) -> String {
        let resource = resource.trim_start_matches('/');
        if resource.is_empty() {
            format!("{}/{}", self.base_url, self.api_version)
        } else {
            format!("{}/{}/{}", self.base_url, self.api_version, resource)
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.base_url, self.api_version)
    }
}

/// Resolve, rewrite and validate `config` into an [`Endpoint`].
pub fn normalize(config: &EndpointConfig) -> Result<Endpoint, ConfigError> {
    let url = match &config.url {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => network::official_url(&config.label)
            .map(str::to_string)
            .ok_or_else(|| ConfigError::BadLabel {
                label: config.label.clone(),
                supported: network::supported_labels(),
            })?,
    };
    let mut url = url.trim_end_matches('/').to_string();

    if config.force_https {
        url = force_secure_scheme(&url);
    }

    let default_port = if config.force_https {
        DEFAULT_HTTPS_PORT
    } else {
        DEFAULT_HTTP_PORT
    };
    let port = config.port.unwrap_or(default_port);

    if url.matches(':').count() == 1 {
        url = format!("{}:{}", url, port);
    }

    let parsed = validate_url(&url)?;

    if !SUPPORTED_API_VERSIONS.contains(&config.api_version.as_str()) {
        return Err(ConfigError::UnsupportedApiVersion {
            version: config.api_version.clone(),
            supported: SUPPORTED_API_VERSIONS.join(", "),
        });
    }

    let host = parsed
        .host_str()
        .ok_or_else(|| ConfigError::BadUrl(url.clone()))?
        .to_string();
    let port = parsed
        .port_or_known_default()
        .ok_or_else(|| ConfigError::BadUrl(url.clone()))?;

    tracing::debug!(base_url = %url, api_version = %config.api_version, "Endpoint normalized");

    Ok(Endpoint {
        scheme: parsed.scheme().to_string(),
        host,
        port,
        api_version: config.api_version.clone(),
        base_url: url,
    })
}

/// Rewrite a leading `http` scheme token to `https`. Nothing past `://` is
/// inspected.
fn force_secure_scheme(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("http") => {
            format!("https://{}", rest)
        }
        _ => url.to_string(),
    }
}

fn validate_url(url: &str) -> Result<Url, ConfigError> {
    let parsed = Url::parse(url).map_err(|e| ConfigError::BadUrl(format!("{} ({})", url, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::BadUrl(url.to_string()));
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(ConfigError::BadUrl(url.to_string())),
    }

    // A base endpoint is `scheme://host[:port]` and nothing else.
    if parsed.path() != "/" || parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ConfigError::BadUrl(url.to_string()));
    }
    let authority = url.split_once("://").map_or(url, |(_, rest)| rest);
    if matches!(authority.rsplit_once(':'), Some((_, port)) if port.is_empty()) {
        return Err(ConfigError::BadUrl(url.to_string()));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_resolves_test_label() {
        let endpoint = EndpointConfig::default().normalize().unwrap();
        assert_eq!(endpoint.base_url(), "https://api.test.chino.io:443");
        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(endpoint.host(), "api.test.chino.io");
        assert_eq!(endpoint.port(), 443);
        assert_eq!(endpoint.api_version(), "v1");
    }

    #[test]
    fn test_prod_label() {
        let endpoint = EndpointConfig::new().label("prod").normalize().unwrap();
        assert_eq!(endpoint.base_url(), "https://api.chino.io:443");
    }

    #[test]
    fn test_unknown_label_without_url_fails() {
        for label in ["staging", "", "PROD", "dev"] {
            let err = EndpointConfig::new().label(label).normalize().unwrap_err();
            assert!(
                matches!(err, ConfigError::BadLabel { .. }),
                "label {:?} gave {:?}",
                label,
                err
            );
        }
    }

    #[test]
    fn test_explicit_url_wins_over_label() {
        let endpoint = EndpointConfig::new()
            .label("nonexistent")
            .url("https://chino.example.io")
            .normalize()
            .unwrap();
        assert_eq!(endpoint.base_url(), "https://chino.example.io:443");
    }

    #[test]
    fn test_force_https_rewrites_scheme() {
        let endpoint = EndpointConfig::new()
            .url("http://api.test.example.io")
            .normalize()
            .unwrap();
        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(endpoint.base_url(), "https://api.test.example.io:443");
    }

    #[test]
    fn test_force_https_leaves_http_substring_in_host() {
        let endpoint = EndpointConfig::new()
            .url("https://httpapi.example.io")
            .normalize()
            .unwrap();
        assert_eq!(endpoint.host(), "httpapi.example.io");
        assert_eq!(endpoint.base_url(), "https://httpapi.example.io:443");

        let endpoint = EndpointConfig::new()
            .url("http://httpapi.example.io")
            .normalize()
            .unwrap();
        assert_eq!(endpoint.host(), "httpapi.example.io");
        assert_eq!(endpoint.base_url(), "https://httpapi.example.io:443");
    }

    #[test]
    fn test_no_force_https_keeps_http_and_defaults_to_80() {
        let endpoint = EndpointConfig::new()
            .url("http://localhost")
            .force_https(false)
            .normalize()
            .unwrap();
        assert_eq!(endpoint.scheme(), "http");
        assert_eq!(endpoint.base_url(), "http://localhost:80");
        assert_eq!(endpoint.port(), 80);
    }

    #[test]
    fn test_explicit_port_appended_on_single_colon() {
        let endpoint = EndpointConfig::new()
            .url("https://api.example.io")
            .port(8443)
            .normalize()
            .unwrap();
        assert_eq!(endpoint.base_url(), "https://api.example.io:8443");
        assert_eq!(endpoint.port(), 8443);
    }

    #[test]
    fn test_url_with_port_left_untouched() {
        let endpoint = EndpointConfig::new()
            .url("https://api.example.io:9000")
            .port(8443)
            .normalize()
            .unwrap();
        assert_eq!(endpoint.base_url(), "https://api.example.io:9000");
        assert_eq!(endpoint.port(), 9000);
    }

    #[test]
    fn test_trailing_slash_trimmed_before_port() {
        let endpoint = EndpointConfig::new()
            .url("https://api.example.io/")
            .normalize()
            .unwrap();
        assert_eq!(endpoint.base_url(), "https://api.example.io:443");
    }

    #[test]
    fn test_unsupported_api_version() {
        for version in ["v2", "V1", "", "v1.1"] {
            let err = EndpointConfig::new()
                .api_version(version)
                .normalize()
                .unwrap_err();
            assert!(matches!(err, ConfigError::UnsupportedApiVersion { .. }));
        }
    }

    #[test]
    fn test_unsupported_api_version_with_valid_explicit_url() {
        let err = EndpointConfig::new()
            .url("https://api.example.io")
            .api_version("v9")
            .normalize()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnsupportedApiVersion {
                version: "v9".to_string(),
                supported: "v1".to_string(),
            }
        );
    }

    #[test]
    fn test_bad_urls_rejected() {
        for url in [
            "api.example.io",
            "ftp://files.example.io",
            "https://bad host.io",
            "https://api.example.io:notaport",
        ] {
            let err = EndpointConfig::new().url(url).normalize().unwrap_err();
            assert!(
                matches!(err, ConfigError::BadUrl(_)),
                "url {:?} gave {:?}",
                url,
                err
            );
        }
    }

    #[test]
    fn test_empty_port_rejected() {
        let err = EndpointConfig::new()
            .url("https://api.example.io:")
            .port(8443)
            .normalize()
            .unwrap_err();
        assert!(matches!(err, ConfigError::BadUrl(ref u) if u == "https://api.example.io:"));
    }

    #[test]
    fn test_path_query_or_fragment_rejected() {
        for url in [
            "https://api.example.io/base",
            "https://api.example.io:8443/base",
            "https://api.example.io?x=1",
            "https://api.example.io#top",
        ] {
            let err = EndpointConfig::new()
                .url(url)
                .port(8443)
                .normalize()
                .unwrap_err();
            assert!(
                matches!(err, ConfigError::BadUrl(_)),
                "url {:?} gave {:?}",
                url,
                err
            );
        }
    }

    #[test]
    fn test_default_port_kept_in_base_url() {
        let endpoint = EndpointConfig::new()
            .url("https://api.example.io:443")
            .normalize()
            .unwrap();
        assert_eq!(endpoint.base_url(), "https://api.example.io:443");
        assert_eq!(endpoint.port(), 443);
    }

    #[test]
    fn test_resource_url_single_separator() {
        let endpoint = EndpointConfig::default().normalize().unwrap();
        assert_eq!(
            endpoint.resource_url("repositories"),
            "https://api.test.chino.io:443/v1/repositories"
        );
        assert_eq!(
            endpoint.resource_url("/repositories/abc"),
            "https://api.test.chino.io:443/v1/repositories/abc"
        );
        assert_eq!(endpoint.resource_url(""), "https://api.test.chino.io:443/v1");
        assert_eq!(endpoint.to_string(), "https://api.test.chino.io:443/v1");
    }

    #[test]
    fn test_config_deserialize_with_defaults() {
        let json = r#"{"label": "prod", "port": 8443}"#;
        let config: EndpointConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.label, "prod");
        assert_eq!(config.port, Some(8443));
        assert!(config.force_https);
        assert_eq!(config.api_version, "v1");
        assert!(config.url.is_none());

        let endpoint = config.normalize().unwrap();
        assert_eq!(endpoint.base_url(), "https://api.chino.io:8443");
    }
}
