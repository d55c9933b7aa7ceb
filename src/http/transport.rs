//! The transport capability: the boundary where network I/O happens.
//!
//! The transport client never talks to the network itself. It hands a verb,
//! a fully built URL, the pass-through [`RequestOptions`] and the active
//! [`Credential`] to a [`Transport`], which returns a status code and body.

use serde::de::DeserializeOwned;

use crate::auth::Credential;
use crate::error::HttpError;
use crate::http::method::HttpMethod;

/// Performs HTTP requests on behalf of the transport client.
///
/// Implementations inherit whatever blocking and timeout behavior the
/// underlying client has; callers impose none of their own.
pub trait Transport: Send + Sync {
    fn invoke(
        &self,
        method: HttpMethod,
        url: &str,
        options: &RequestOptions,
        credential: Option<&Credential>,
    ) -> Result<Response, HttpError>;

    /// Whether this transport can dispatch `method`.
    fn supports(&self, _method: HttpMethod) -> bool {
        true
    }
}

/// Options passed through to the transport unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// URL query parameters.
    pub params: Vec<(String, String)>,
    /// JSON request payload.
    pub data: Option<serde_json::Value>,
    /// Form-encoded payload. Takes precedence over `data` if both are set.
    pub form: Option<Vec<(String, String)>>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn form<K, V>(mut self, form: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.form = Some(
            form.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }
}

/// Raw response handed back by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Turn a non-2xx response into the matching [`HttpError`].
    ///
    /// The client never calls this on its own; non-2xx responses are handed
    /// back untouched and classification is left to the caller.
    pub fn error_for_status(self) -> Result<Self, HttpError> {
        if self.is_success() {
            return Ok(self);
        }

        match self.status {
            401 => Err(HttpError::Unauthorized),
            403 => Err(HttpError::Forbidden(self.body)),
            404 => Err(HttpError::NotFound(self.body)),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest(self.body)),
            status => Err(HttpError::ServerError {
                status,
                body: self.body,
            }),
        }
    }
}
