//! Authentication negotiation against a transport client.

use crate::auth::env::Env;
use crate::auth::params::AuthParams;
use crate::auth::registry::AuthRegistry;
use crate::auth::strategy::StrategyOutcome;
use crate::auth::Credential;
use crate::error::AuthError;
use crate::http::ChinoClient;

/// The strategy that won a negotiation and the credential it installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Negotiated {
    pub strategy: String,
    pub credential: Credential,
}

/// Terminal result of walking the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegotiationOutcome {
    Success(Negotiated),
    /// Every registered strategy was skipped.
    Exhausted,
}

/// Tries each strategy of a registry, in order, until one applies.
pub struct Negotiator<'a> {
    registry: &'a AuthRegistry,
    env: &'a dyn Env,
}

impl<'a> Negotiator<'a> {
    pub fn new(registry: &'a AuthRegistry, env: &'a dyn Env) -> Self {
        Self { registry, env }
    }

    /// Walk the registry and install the first credential produced.
    ///
    /// The client's credential slot is written at most once, and only on
    /// success.
    pub fn outcome(&self, client: &ChinoClient, explicit: &AuthParams) -> NegotiationOutcome {
        tracing::info!(strategies = self.registry.len(), "Setting authentication method ...");

        for strategy in self.registry.list() {
            let name = strategy.name();

            let params = match explicit.resolve(strategy.required_params(), self.env) {
                Ok(params) => params,
                Err(missing) => {
                    tracing::debug!(
                        strategy = name,
                        missing = ?missing,
                        "Missing conf values for auth method, skip to next"
                    );
                    continue;
                }
            };

            tracing::info!(strategy = name, "Authenticate");
            match strategy.authenticate(&params) {
                StrategyOutcome::Applied(credential) => {
                    client.set_auth(credential.clone());
                    return NegotiationOutcome::Success(Negotiated {
                        strategy: name.to_string(),
                        credential,
                    });
                }
                StrategyOutcome::NotApplicable => {
                    tracing::debug!(strategy = name, "Auth method not applicable, skip to next");
                }
            }
        }

        NegotiationOutcome::Exhausted
    }

    /// Like [`Negotiator::outcome`], with exhaustion turned into
    /// [`AuthError::MissingAuthConf`].
    pub fn negotiate(
        &self,
        client: &ChinoClient,
        explicit: &AuthParams,
    ) -> Result<Negotiated, AuthError> {
        match self.outcome(client, explicit) {
            NegotiationOutcome::Success(negotiated) => Ok(negotiated),
            NegotiationOutcome::Exhausted => Err(AuthError::MissingAuthConf(
                "none auth method set".to_string(),
            )),
        }
    }
}
