//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::auth::Credential;
use crate::endpoint::EndpointConfig;
use crate::error::HttpError;
use crate::http::{ChinoClient, HttpMethod, RequestOptions, Response, Transport};

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub options: RequestOptions,
    pub credential: Option<Credential>,
}

/// Replays queued results in order, then answers `200 {}`.
#[derive(Default)]
pub(crate) struct MockTransport {
    queue: Mutex<VecDeque<Result<Response, String>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    only: Option<Vec<HttpMethod>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the verbs this transport claims to support.
    pub fn only(mut self, methods: &[HttpMethod]) -> Self {
        self.only = Some(methods.to_vec());
        self
    }

    pub fn push_response(&self, status: u16, body: &str) {
        self.queue
            .lock()
            .unwrap()
            .push_back(Ok(Response::new(status, body)));
    }

    pub fn push_error(&self, message: &str) {
        self.queue
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn invoke(
        &self,
        method: HttpMethod,
        url: &str,
        options: &RequestOptions,
        credential: Option<&Credential>,
    ) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url: url.to_string(),
            options: options.clone(),
            credential: credential.cloned(),
        });

        match self.queue.lock().unwrap().pop_front() {
            Some(Ok(resp)) => Ok(resp),
            Some(Err(message)) => Err(HttpError::Transport(message)),
            None => Ok(Response::new(200, "{}")),
        }
    }

    fn supports(&self, method: HttpMethod) -> bool {
        self.only.as_ref().map_or(true, |m| m.contains(&method))
    }
}

/// A client on the default `test` endpoint backed by `transport`.
pub(crate) fn mock_client(transport: Arc<MockTransport>) -> ChinoClient {
    let endpoint = EndpointConfig::default()
        .normalize()
        .expect("default endpoint config is valid");
    ChinoClient::new(endpoint, transport)
}
