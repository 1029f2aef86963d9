use std::time::Duration;

use httpkit_core::{Error, Exchange, Method, Request, Result, SimpleResponse, Transport};

use super::DEFAULT_TIMEOUT_SECS;

/// Transport backed by a blocking ureq agent.
///
/// The agent owns the connection pool; clones share it.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Create a ureq transport with default settings.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Create a ureq transport with a custom global timeout.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            agent: ureq::Agent::config_builder()
                .timeout_global(Some(Duration::from_secs(timeout_secs)))
                // 4xx/5xx are data to the facade, not transport failures.
                .http_status_as_error(false)
                .build()
                .new_agent(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: Request) -> Exchange {
        let outcome = self.round_trip(&request);
        // ureq exposes no built-request object to reconstruct from; the
        // descriptor is what the agent sends, short of engine-added defaults
        // (Host, User-Agent, Accept).
        Exchange {
            sent: request,
            outcome,
        }
    }
}

impl UreqTransport {
    fn round_trip(&self, request: &Request) -> Result<SimpleResponse> {
        let mut response = match request.method {
            Method::Get => {
                let mut req = self.agent.get(&request.url);
                for (name, value) in request.headers.iter() {
                    req = req.header(name, value);
                }
                req.call().map_err(|e| Error::Transport(e.to_string()))?
            }
            Method::Post => {
                let mut req = self.agent.post(&request.url);
                for (name, value) in request.headers.iter() {
                    req = req.header(name, value);
                }
                let body = request.body.as_deref().unwrap_or_default();
                req.send(body).map_err(|e| Error::Transport(e.to_string()))?
            }
        };

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| Error::ResponseBody(e.to_string()))?;

        Ok(SimpleResponse::new(status, body))
    }
}
