//! Engine-agnostic core of httpkit: the request/response data model, the
//! [`Transport`] seam to an HTTP engine, and the [`RequestFacade`] exposing
//! simplified sync/async GET and POST helpers with a callback interface.

mod callback;
mod dispatch;
pub mod error;
mod facade;
mod headers;
mod request;
mod response;
mod transport;

pub use callback::{NoopCallback, ResponseCallback};
pub use error::{Error, Result};
pub use facade::RequestFacade;
pub use headers::HeaderMap;
pub use request::{Method, Request};
pub use response::SimpleResponse;
pub use transport::{Exchange, Transport};
