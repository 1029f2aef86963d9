//! Bundled [`Transport`] implementations for native targets.

#[cfg(not(any(feature = "ureq-client", feature = "reqwest-client")))]
compile_error!("Either feature `ureq-client` or `reqwest-client` must be enabled.");

mod transport;

#[cfg(feature = "ureq-client")]
pub use transport::UreqTransport;

#[cfg(feature = "reqwest-client")]
pub use transport::ReqwestTransport;

// Re-export the core surface so consumers need a single dependency.
pub use httpkit_core::{
    Error, Exchange, HeaderMap, Method, NoopCallback, Request, RequestFacade, ResponseCallback,
    Result, SimpleResponse, Transport,
};
