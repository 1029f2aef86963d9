#[cfg(feature = "ureq-client")]
mod ureq_impl;

#[cfg(feature = "reqwest-client")]
mod reqwest_impl;

#[cfg(feature = "ureq-client")]
pub use ureq_impl::UreqTransport;

#[cfg(feature = "reqwest-client")]
pub use reqwest_impl::ReqwestTransport;

#[cfg(any(feature = "ureq-client", feature = "reqwest-client"))]
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
