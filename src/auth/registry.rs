//! Ordered registry of authentication strategies.
//!
//! Registration order is negotiation priority: the first strategy whose
//! parameters are satisfied wins. Registries are append-only.

use std::sync::Arc;

use lazy_static::lazy_static;

use crate::auth::strategy::{AuthStrategy, BearerTokenAuth, CustomerKeyAuth};
use crate::error::AuthError;

lazy_static! {
    /// Process-wide default, holding the built-in strategies. Read-only.
    static ref DEFAULT_REGISTRY: AuthRegistry = AuthRegistry::with_builtin();
}

#[derive(Clone, Default)]
pub struct AuthRegistry {
    strategies: Vec<Arc<dyn AuthStrategy>>,
}

impl AuthRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in strategies: customer key first, then
    /// bearer token.
    pub fn with_builtin() -> Self {
        Self {
            strategies: vec![Arc::new(CustomerKeyAuth), Arc::new(BearerTokenAuth)],
        }
    }

    /// The shared default registry.
    pub fn default_registry() -> &'static AuthRegistry {
        &DEFAULT_REGISTRY
    }

    /// Append `strategy`. Fails if a strategy with the same name is present.
    pub fn register(&mut self, strategy: impl AuthStrategy + 'static) -> Result<(), AuthError> {
        if self.contains(strategy.name()) {
            return Err(AuthError::DuplicateStrategy(strategy.name().to_string()));
        }
        self.strategies.push(Arc::new(strategy));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.strategies.iter().any(|s| s.name() == name)
    }

    /// Registered strategies, in priority order.
    pub fn list(&self) -> &[Arc<dyn AuthStrategy>] {
        &self.strategies
    }

    pub fn names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl std::fmt::Debug for AuthRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
