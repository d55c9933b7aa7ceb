//! # chiyes
//!
//! A Rust client for the chino.io REST API.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Network**: Well-known endpoint labels, supported API versions, default ports
//! 2. **Endpoint**: Label/URL resolution, scheme + port canonicalization, validation
//! 3. **HTTP**: `ChinoClient` over a pluggable blocking `Transport` (reqwest by default)
//! 4. **Auth**: Ordered strategy registry + negotiation against explicit params and env
//! 5. **Connection**: `connect`: normalize, probe, negotiate
//!
//! Every call is synchronous and runs on the caller's thread.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chiyes::prelude::*;
//!
//! // Reads `chino_customer_id` / `chino_customer_key` from the environment
//! // unless given explicitly.
//! let client = ChinoClient::builder()
//!     .label("prod")
//!     .connect()?;
//!
//! let response = client.get("repositories", None)?.error_for_status()?;
//! let body: serde_json::Value = response.json()?;
//! ```

// ── Layer 1: Network ─────────────────────────────────────────────────────────

/// Network URL constants.
pub mod network;

/// Unified SDK error types.
pub mod error;

// ── Layer 2: Endpoint ────────────────────────────────────────────────────────

/// Endpoint normalization and validation.
pub mod endpoint;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Transport capability, verbs, and the transport client.
pub mod http;

// ── Layer 4: Auth ────────────────────────────────────────────────────────────

/// Credentials, strategies, registry, negotiation.
pub mod auth;

// ── Layer 5: Connection ──────────────────────────────────────────────────────

/// `connect`, the primary entry point.
pub mod connection;

#[cfg(test)]
pub(crate) mod test_utils;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Errors
    pub use crate::error::{AuthError, ConfigError, HttpError, SdkError};

    // Network
    pub use crate::network::{PROD_API_URL, TEST_API_URL};

    // Endpoint
    pub use crate::endpoint::{Endpoint, EndpointConfig};

    // HTTP
    pub use crate::http::{ChinoClient, HttpMethod, RequestOptions, Response, Transport};
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;

    // Auth
    pub use crate::auth::{
        AuthParams, AuthRegistry, AuthStrategy, BearerTokenAuth, Credential, CustomerKeyAuth,
        Env, Negotiated, NegotiationOutcome, Negotiator, OsEnv, StaticEnv, StrategyOutcome,
    };

    // Connection
    pub use crate::connection::ConnectionBuilder;
    #[cfg(feature = "http")]
    pub use crate::connection::connect;
}
