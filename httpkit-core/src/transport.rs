use crate::error::Result;
use crate::request::Request;
use crate::response::SimpleResponse;

/// One executed round trip: the request as actually sent, and either the
/// translated response or the transport failure.
#[derive(Debug)]
pub struct Exchange {
    /// The outbound request reconstructed from whatever the engine built.
    /// `body: None` means the body was not replayable; that is not an error.
    pub sent: Request,
    pub outcome: Result<SimpleResponse>,
}

/// Blocking seam to an HTTP engine.
///
/// Implement this to bring your own engine; httpkit-native bundles ureq and
/// reqwest implementations. `execute` performs the whole round trip on the
/// calling thread: build the engine request from `request`, send it, drain
/// the body. HTTP error statuses must come back as responses, not errors.
/// All request validation happens here too, so the facade's entry points
/// never fail before dispatch and the one-callback contract holds for every
/// failure mode.
pub trait Transport: Send + Sync {
    fn execute(&self, request: Request) -> Exchange;
}
