use crate::error::Error;
use crate::request::Request;
use crate::response::SimpleResponse;

/// Completion interface for asynchronous calls.
///
/// Exactly one of the two methods is invoked per dispatched call, on a
/// dispatch worker thread, never on the caller's thread. Implementations must
/// be thread-safe with respect to any state they touch; completions of
/// concurrent calls arrive in no particular order.
pub trait ResponseCallback: Send {
    /// The round trip produced a response. Any status code lands here,
    /// including 4xx/5xx. `sent` is the request as actually built for the
    /// wire, so consumers see what went out rather than what was asked for.
    fn on_response(&self, sent: &Request, response: SimpleResponse);

    /// The round trip failed in transport. `sent.body` may be `None` when
    /// the outbound body could not be reconstructed.
    fn on_exception(&self, sent: &Request, error: Error);
}

/// Callback that discards both outcomes. Substituted when a caller passes no
/// callback to an asynchronous entry point.
pub struct NoopCallback;

impl ResponseCallback for NoopCallback {
    fn on_response(&self, _sent: &Request, _response: SimpleResponse) {}

    fn on_exception(&self, sent: &Request, error: Error) {
        log::debug!(
            "discarding async failure for {} {}: {}",
            sent.method,
            sent.url,
            error
        );
    }
}
