//! Authentication: credentials, strategies, registry and negotiation.
//!
//! ## Negotiation
//!
//! Strategies are tried in registration order. For each one, its required
//! parameters are read from the explicit [`AuthParams`] first and from the
//! [`Env`] second; an empty value counts as missing. A strategy whose
//! parameters are incomplete is skipped. The first strategy that produces a
//! [`Credential`] wins and the credential is installed on the client. When
//! every strategy has been skipped the negotiation fails with
//! [`crate::error::AuthError::MissingAuthConf`] and nothing is installed.
//!
//! ## Security Model
//!
//! Secrets never show up in `Debug` output or logs: [`Credential`] and
//! [`AuthParams`] redact values.

pub mod env;
pub mod negotiator;
pub mod params;
pub mod registry;
pub mod strategy;

pub use env::{Env, OsEnv, StaticEnv};
pub use negotiator::{Negotiated, NegotiationOutcome, Negotiator};
pub use params::AuthParams;
pub use registry::AuthRegistry;
pub use strategy::{AuthStrategy, BearerTokenAuth, CustomerKeyAuth, StrategyOutcome};

/// Authentication material installed on a transport client.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// HTTP basic auth, e.g. customer id + customer key.
    Basic { username: String, password: String },
    /// OAuth access token sent as `Authorization: Bearer`.
    Bearer(String),
}

impl Credential {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Basic { .. } => "basic",
            Self::Bearer(_) => "bearer",
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"<redacted>").finish(),
        }
    }
}
