use std::sync::Arc;

use log::debug;

use crate::callback::{NoopCallback, ResponseCallback};
use crate::dispatch::DispatchPool;
use crate::error::Result;
use crate::headers::HeaderMap;
use crate::request::{Method, Request};
use crate::response::SimpleResponse;
use crate::transport::{Exchange, Transport};

/// Default number of workers backing the asynchronous entry points.
const DISPATCH_WORKERS: usize = 8;

/// Facade translating simplified call shapes into engine round trips.
///
/// One facade wraps one engine handle (with the engine's connection pool)
/// plus the worker pool for asynchronous dispatch. Construct it once, keep it
/// for the life of the process and share it across threads; the facade itself
/// holds no mutable state. Retries, redirects and timeouts are whatever the
/// engine's defaults say; the facade never overrides them per call.
pub struct RequestFacade<T: Transport> {
    transport: Arc<T>,
    dispatcher: DispatchPool,
}

impl<T: Transport + 'static> RequestFacade<T> {
    pub fn new(transport: T) -> Self {
        Self::with_dispatch_workers(transport, DISPATCH_WORKERS)
    }

    /// Same as [`RequestFacade::new`] with a custom dispatch pool size.
    pub fn with_dispatch_workers(transport: T, workers: usize) -> Self {
        Self {
            transport: Arc::new(transport),
            dispatcher: DispatchPool::new(workers),
        }
    }

    /// Issue a GET and block until the response is fully read.
    pub fn get_sync(&self, url: &str, headers: Option<HeaderMap>) -> Result<SimpleResponse> {
        self.run_sync(build_request(url, Method::Get, headers, None))
    }

    /// Issue a GET on a dispatch worker and return immediately.
    ///
    /// Exactly one callback method fires per call, on a worker thread.
    /// Passing `None` discards the outcome.
    pub fn get_async(
        &self,
        url: &str,
        headers: Option<HeaderMap>,
        callback: Option<Box<dyn ResponseCallback>>,
    ) {
        self.run_async(build_request(url, Method::Get, headers, None), callback);
    }

    /// Issue a POST with `body` attached verbatim and block until the
    /// response is fully read.
    ///
    /// No content-type is inferred; append a Content-Type header if the
    /// server needs one.
    pub fn post_sync(
        &self,
        url: &str,
        headers: Option<HeaderMap>,
        body: Vec<u8>,
    ) -> Result<SimpleResponse> {
        self.run_sync(build_request(url, Method::Post, headers, Some(body)))
    }

    /// Asynchronous counterpart of [`RequestFacade::post_sync`], with the
    /// same callback contract as [`RequestFacade::get_async`].
    pub fn post_async(
        &self,
        url: &str,
        headers: Option<HeaderMap>,
        body: Vec<u8>,
        callback: Option<Box<dyn ResponseCallback>>,
    ) {
        self.run_async(
            build_request(url, Method::Post, headers, Some(body)),
            callback,
        );
    }

    fn run_sync(&self, request: Request) -> Result<SimpleResponse> {
        debug!("{} {} (sync)", request.method, request.url);
        self.transport.execute(request).outcome
    }

    fn run_async(&self, request: Request, callback: Option<Box<dyn ResponseCallback>>) {
        debug!("{} {} (async)", request.method, request.url);
        let callback = callback.unwrap_or_else(|| Box::new(NoopCallback));
        let transport = Arc::clone(&self.transport);
        self.dispatcher.execute(move || {
            let Exchange { sent, outcome } = transport.execute(request);
            match outcome {
                Ok(response) => callback.on_response(&sent, response),
                Err(error) => callback.on_exception(&sent, error),
            }
        });
    }
}

/// Build the outbound descriptor. A GET never carries a body, whatever a
/// caller handed to a lower-level path; a POST always does, even zero-length.
fn build_request(
    url: &str,
    method: Method,
    headers: Option<HeaderMap>,
    body: Option<Vec<u8>>,
) -> Request {
    let body = match method {
        Method::Get => None,
        Method::Post => Some(body.unwrap_or_default()),
    };
    Request {
        url: url.to_string(),
        method,
        headers: headers.unwrap_or_default(),
        body,
    }
}
