//! Default transport backed by `reqwest::blocking`.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

use crate::auth::Credential;
use crate::error::HttpError;
use crate::http::method::HttpMethod;
use crate::http::transport::{RequestOptions, Response, Transport};

/// Builder for configuring a [`ReqwestTransport`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransportBuilder {
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
}

impl ReqwestTransportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a request timeout. Unset means reqwest's own default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<ReqwestTransport, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in self.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                HttpError::Transport(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(&value).map_err(|e| {
                HttpError::Transport(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(ReqwestTransport {
            client: builder.build()?,
        })
    }
}

/// Blocking HTTP transport over a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, HttpError> {
        Self::builder().build()
    }

    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::new()
    }

    /// Wrap an already configured client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn invoke(
        &self,
        method: HttpMethod,
        url: &str,
        options: &RequestOptions,
        credential: Option<&Credential>,
    ) -> Result<Response, HttpError> {
        let mut req = self.client.request(method.into(), url);

        match credential {
            Some(Credential::Basic { username, password }) => {
                req = req.basic_auth(username, Some(password));
            }
            Some(Credential::Bearer(token)) => {
                req = req.bearer_auth(token);
            }
            None => {}
        }

        if !options.params.is_empty() {
            req = req.query(&options.params);
        }
        if let Some(form) = &options.form {
            req = req.form(form);
        } else if let Some(data) = &options.data {
            req = req.json(data);
        }

        let resp = req.send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;

        Ok(Response::new(status, body))
    }
}
