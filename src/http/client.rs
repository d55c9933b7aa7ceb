//! Transport client: `ChinoClient`.
//!
//! Joins resource paths onto the normalized [`Endpoint`], dispatches through
//! a [`Transport`] and carries the single active [`Credential`]. Responses
//! come back as-is, whatever their status; nothing here retries.

use std::sync::Arc;

use async_lock::RwLock;

use crate::auth::Credential;
use crate::endpoint::{Endpoint, EndpointConfig};
use crate::error::{HttpError, SdkError};
use crate::http::method::HttpMethod;
use crate::http::transport::{RequestOptions, Response, Transport};

/// Query parameters or form fields.
pub type Pairs = Vec<(String, String)>;

/// Low-level HTTP client for the chino.io REST API.
pub struct ChinoClient {
    endpoint: Endpoint,
    transport: Arc<dyn Transport>,
    /// Active credential. NEVER logged. Accessed only through the
    /// `*_blocking` methods; every call in this crate is synchronous.
    credential: Arc<RwLock<Option<Credential>>>,
}

impl ChinoClient {
    pub fn new(endpoint: Endpoint, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint,
            transport,
            credential: Arc::new(RwLock::new(None)),
        }
    }

    /// Normalize `config` and wrap `transport`.
    pub fn from_config(
        config: &EndpointConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, SdkError> {
        Ok(Self::new(config.normalize()?, transport))
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn base_url(&self) -> &str {
        self.endpoint.base_url()
    }

    /// Full URL for `resource`: base URL, API version, resource.
    pub fn build_url(&self, resource: &str) -> String {
        let url = self.endpoint.resource_url(resource);
        tracing::debug!("Built url: {}", url);
        url
    }

    // ── Credential slot ──────────────────────────────────────────────────

    /// The currently installed credential.
    pub fn auth(&self) -> Option<Credential> {
        self.credential.read_blocking().clone()
    }

    /// Install `credential`, replacing any previous one.
    pub fn set_auth(&self, credential: Credential) {
        *self.credential.write_blocking() = Some(credential);
    }

    // ── Dispatch ─────────────────────────────────────────────────────────

    /// Perform a call against `resource` with a verb given by name.
    ///
    /// The name is matched case-insensitively; unknown verbs fail with
    /// [`HttpError::BadMethod`].
    pub fn call(
        &self,
        method: &str,
        resource: &str,
        options: RequestOptions,
    ) -> Result<Response, HttpError> {
        let method = HttpMethod::parse(method)?;
        self.request(method, resource, options)
    }

    pub fn request(
        &self,
        method: HttpMethod,
        resource: &str,
        options: RequestOptions,
    ) -> Result<Response, HttpError> {
        let url = self.build_url(resource);
        self.dispatch(method, &url, &options)
    }

    pub fn get(&self, resource: &str, params: Option<Pairs>) -> Result<Response, HttpError> {
        let options = RequestOptions {
            params: params.unwrap_or_default(),
            ..RequestOptions::default()
        };
        self.request(HttpMethod::Get, resource, options)
    }

    pub fn post(
        &self,
        resource: &str,
        data: Option<serde_json::Value>,
        params: Option<Pairs>,
        form: Option<Pairs>,
    ) -> Result<Response, HttpError> {
        let options = RequestOptions {
            params: params.unwrap_or_default(),
            data,
            form,
        };
        self.request(HttpMethod::Post, resource, options)
    }

    pub fn put(
        &self,
        resource: &str,
        data: Option<serde_json::Value>,
    ) -> Result<Response, HttpError> {
        let options = RequestOptions {
            data,
            ..RequestOptions::default()
        };
        self.request(HttpMethod::Put, resource, options)
    }

    pub fn patch(
        &self,
        resource: &str,
        data: Option<serde_json::Value>,
    ) -> Result<Response, HttpError> {
        let options = RequestOptions {
            data,
            ..RequestOptions::default()
        };
        self.request(HttpMethod::Patch, resource, options)
    }

    pub fn delete(&self, resource: &str, params: Option<Pairs>) -> Result<Response, HttpError> {
        let options = RequestOptions {
            params: params.unwrap_or_default(),
            ..RequestOptions::default()
        };
        self.request(HttpMethod::Delete, resource, options)
    }

    /// GET the bare base URL and report whether it answered exactly 200.
    ///
    /// Advisory only: every failure, transport errors included, is `false`.
    pub fn check_connection(&self) -> bool {
        match self.dispatch(HttpMethod::Get, self.base_url(), &RequestOptions::default()) {
            Ok(resp) => {
                tracing::debug!(status = resp.status, "Connection check response");
                resp.status == 200
            }
            Err(e) => {
                tracing::debug!(error = %e, "Connection check failed");
                false
            }
        }
    }

    fn dispatch(
        &self,
        method: HttpMethod,
        url: &str,
        options: &RequestOptions,
    ) -> Result<Response, HttpError> {
        if !self.transport.supports(method) {
            return Err(HttpError::BadMethod(method.to_string()));
        }

        let credential = self.auth();
        self.transport
            .invoke(method, url, options, credential.as_ref())
    }
}

impl Clone for ChinoClient {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            transport: self.transport.clone(),
            credential: self.credential.clone(),
        }
    }
}

impl std::fmt::Debug for ChinoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChinoClient")
            .field("endpoint", &self.endpoint)
            .field("authenticated", &self.auth().is_some())
            .finish()
    }
}
