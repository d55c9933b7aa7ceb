//! HTTP layer: verbs, the transport capability, and `ChinoClient`.

pub mod client;
pub mod method;
pub mod transport;

#[cfg(feature = "http")]
pub mod blocking;

pub use client::{ChinoClient, Pairs};
pub use method::HttpMethod;
pub use transport::{RequestOptions, Response, Transport};

#[cfg(feature = "http")]
pub use blocking::{ReqwestTransport, ReqwestTransportBuilder};
