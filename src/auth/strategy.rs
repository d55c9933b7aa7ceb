//! Authentication strategies.

use crate::auth::params::AuthParams;
use crate::auth::Credential;

/// Parameter names read by [`CustomerKeyAuth`].
pub const CUSTOMER_ID: &str = "chino_customer_id";
pub const CUSTOMER_KEY: &str = "chino_customer_key";

/// Parameter name read by [`BearerTokenAuth`].
pub const ACCESS_TOKEN: &str = "chino_access_token";

/// What a single strategy made of the parameters it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyOutcome {
    Applied(Credential),
    /// The parameters don't fit this strategy. Expected; the negotiator
    /// moves on to the next one.
    NotApplicable,
}

/// A named policy turning a set of parameters into a [`Credential`].
///
/// The name is the strategy's identity inside an
/// [`AuthRegistry`](crate::auth::AuthRegistry).
pub trait AuthStrategy: Send + Sync {
    fn name(&self) -> &str;

    /// Parameters that must all resolve before `authenticate` is called.
    fn required_params(&self) -> &[&'static str];

    /// Build a credential from `params`, which holds every required name.
    fn authenticate(&self, params: &AuthParams) -> StrategyOutcome;
}

/// Customer id + customer key, sent as HTTP basic auth.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerKeyAuth;

impl AuthStrategy for CustomerKeyAuth {
    fn name(&self) -> &str {
        "CustomerKeyAuthentication"
    }

    fn required_params(&self) -> &[&'static str] {
        &[CUSTOMER_ID, CUSTOMER_KEY]
    }

    fn authenticate(&self, params: &AuthParams) -> StrategyOutcome {
        match (params.get(CUSTOMER_ID), params.get(CUSTOMER_KEY)) {
            (Some(id), Some(key)) => StrategyOutcome::Applied(Credential::basic(id, key)),
            _ => StrategyOutcome::NotApplicable,
        }
    }
}

/// OAuth access token, sent as a bearer token.
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerTokenAuth;

impl AuthStrategy for BearerTokenAuth {
    fn name(&self) -> &str {
        "BearerTokenAuthentication"
    }

    fn required_params(&self) -> &[&'static str] {
        &[ACCESS_TOKEN]
    }

    fn authenticate(&self, params: &AuthParams) -> StrategyOutcome {
        match params.get(ACCESS_TOKEN) {
            Some(token) => StrategyOutcome::Applied(Credential::bearer(token)),
            None => StrategyOutcome::NotApplicable,
        }
    }
}
