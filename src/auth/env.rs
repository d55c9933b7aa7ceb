//! Environment source for authentication parameters.

use std::collections::HashMap;

/// Read-only key → value lookup. A missing key is a normal `None`, never an
/// error.
pub trait Env: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment, read by exact key.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment, for tests and embedders that don't want the
/// process environment consulted.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    envs: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for StaticEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            envs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}
