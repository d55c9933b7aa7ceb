//! Connection setup: normalize the endpoint, probe it, negotiate auth.
//!
//! ```rust,ignore
//! use chiyes::prelude::*;
//!
//! let client = ChinoClient::builder()
//!     .label("prod")
//!     .auth_param("chino_customer_id", "my-id")
//!     .auth_param("chino_customer_key", "my-key")
//!     .connect()?;
//!
//! let repositories = client.get("repositories", None)?;
//! ```

use std::sync::Arc;

use crate::auth::{AuthParams, AuthRegistry, Env, Negotiator, OsEnv};
use crate::endpoint::EndpointConfig;
use crate::error::SdkError;
use crate::http::{ChinoClient, Transport};

impl ChinoClient {
    pub fn builder() -> ConnectionBuilder {
        ConnectionBuilder::default()
    }
}

/// Collects everything `connect` needs.
///
/// Defaults: the `test` endpoint, the reqwest transport, the process-wide
/// [`AuthRegistry`] and the process environment.
pub struct ConnectionBuilder {
    config: EndpointConfig,
    params: AuthParams,
    transport: Option<Arc<dyn Transport>>,
    registry: AuthRegistry,
    env: Arc<dyn Env>,
}

impl Default for ConnectionBuilder {
    fn default() -> Self {
        Self {
            config: EndpointConfig::default(),
            params: AuthParams::new(),
            transport: None,
            registry: AuthRegistry::default_registry().clone(),
            env: Arc::new(OsEnv),
        }
    }
}

impl ConnectionBuilder {
    /// Replace the whole endpoint configuration.
    pub fn config(mut self, config: EndpointConfig) -> Self {
        self.config = config;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config = self.config.label(label);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.url(url);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config = self.config.port(port);
        self
    }

    pub fn force_https(mut self, force: bool) -> Self {
        self.config = self.config.force_https(force);
        self
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config = self.config.api_version(version);
        self
    }

    /// Add an explicit auth parameter. Explicit values beat the environment.
    pub fn auth_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name, value);
        self
    }

    pub fn auth_params(mut self, params: AuthParams) -> Self {
        self.params = params;
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn registry(mut self, registry: AuthRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn env(mut self, env: impl Env + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Build the unauthenticated client without probing or negotiating.
    pub fn build(self) -> Result<ChinoClient, SdkError> {
        new_client(&self.config, self.transport)
    }

    /// Build the client, check connectivity, and install a credential.
    ///
    /// A failed connectivity check only logs a warning: the remote may reject
    /// unauthenticated probes and still accept authenticated calls.
    pub fn connect(self) -> Result<ChinoClient, SdkError> {
        tracing::info!("Setting up connection to remote chino server ...");

        let client = new_client(&self.config, self.transport)?;

        if !client.check_connection() {
            tracing::warn!(
                base_url = client.base_url(),
                "Error while checking connection with remote chino server"
            );
        }

        let negotiated =
            Negotiator::new(&self.registry, self.env.as_ref()).negotiate(&client, &self.params)?;
        tracing::info!(strategy = %negotiated.strategy, "Connected");

        Ok(client)
    }
}

fn new_client(
    config: &EndpointConfig,
    transport: Option<Arc<dyn Transport>>,
) -> Result<ChinoClient, SdkError> {
    let endpoint = config.normalize()?;
    let transport = match transport {
        Some(t) => t,
        None => default_transport()?,
    };
    Ok(ChinoClient::new(endpoint, transport))
}

#[cfg(feature = "http")]
fn default_transport() -> Result<Arc<dyn Transport>, SdkError> {
    Ok(Arc::new(crate::http::ReqwestTransport::new()?))
}

#[cfg(not(feature = "http"))]
fn default_transport() -> Result<Arc<dyn Transport>, SdkError> {
    Err(crate::error::HttpError::Transport(
        "no transport configured; enable the `http` feature or pass one".to_string(),
    )
    .into())
}

/// Connect with the reqwest transport, the default registry and the process
/// environment.
#[cfg(feature = "http")]
pub fn connect(config: EndpointConfig, params: AuthParams) -> Result<ChinoClient, SdkError> {
    ChinoClient::builder()
        .config(config)
        .auth_params(params)
        .connect()
}
