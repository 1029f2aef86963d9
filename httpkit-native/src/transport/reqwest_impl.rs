use std::time::Duration;

use httpkit_core::{Error, Exchange, HeaderMap, Method, Request, Result, SimpleResponse, Transport};

use super::DEFAULT_TIMEOUT_SECS;

/// Transport backed by reqwest's blocking client.
///
/// The blocking client drives an internal runtime thread; prefer
/// [`UreqTransport`](crate::UreqTransport) when a plain blocking engine is
/// enough. Clones share the client and its connection pool.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Create a reqwest transport with default settings.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Create a reqwest transport with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .expect("failed to build reqwest client"),
        }
    }

    /// Wrap an already configured blocking client.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: Request) -> Exchange {
        let built = match self.build(&request) {
            Ok(built) => built,
            Err(error) => {
                return Exchange {
                    sent: request,
                    outcome: Err(error),
                }
            }
        };
        let sent = sent_request(&built, &request);
        let outcome = self.round_trip(built);
        Exchange { sent, outcome }
    }
}

impl ReqwestTransport {
    fn build(&self, request: &Request) -> Result<reqwest::blocking::Request> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        let mut builder = self.client.request(method, request.url.as_str());
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        builder
            .build()
            .map_err(|e| Error::InvalidRequest(e.to_string()))
    }

    fn round_trip(&self, built: reqwest::blocking::Request) -> Result<SimpleResponse> {
        let response = self
            .client
            .execute(built)
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| Error::ResponseBody(e.to_string()))?;

        Ok(SimpleResponse::new(status, body.to_vec()))
    }
}

/// Reconstruct the wire-level request from what the engine actually built.
/// Header names come back normalized to lowercase. A streaming body is not
/// replayable and comes back as `None`.
fn sent_request(built: &reqwest::blocking::Request, request: &Request) -> Request {
    let mut headers = HeaderMap::new();
    for (name, value) in built.headers() {
        headers.append(name.as_str(), String::from_utf8_lossy(value.as_bytes()));
    }
    Request {
        url: built.url().to_string(),
        method: request.method,
        headers,
        body: built.body().and_then(|b| b.as_bytes()).map(<[u8]>::to_vec),
    }
}
