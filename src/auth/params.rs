//! Candidate authentication parameters.

use std::collections::BTreeMap;

use crate::auth::env::Env;

/// Named authentication parameters.
///
/// Used both for explicit call-site arguments and for the per-strategy
/// resolved set handed to [`crate::auth::AuthStrategy::authenticate`].
/// Empty values are treated as absent by [`AuthParams::get`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthParams {
    values: BTreeMap<String, String>,
}

impl AuthParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// The value for `name`, if set and non-empty.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Collect `required` names, explicit values first, `env` second.
    ///
    /// Returns the names still missing when any of them cannot be resolved.
    pub(crate) fn resolve(
        &self,
        required: &[&str],
        env: &dyn Env,
    ) -> Result<AuthParams, Vec<String>> {
        let mut resolved = AuthParams::new();
        let mut missing = Vec::new();

        for name in required {
            let value = self
                .get(name)
                .map(str::to_string)
                .or_else(|| env.var(name).filter(|v| !v.is_empty()));
            match value {
                Some(v) => resolved.insert(*name, v),
                None => missing.push(name.to_string()),
            }
        }

        if missing.is_empty() {
            Ok(resolved)
        } else {
            Err(missing)
        }
    }
}

impl<K, V> FromIterator<(K, V)> for AuthParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = AuthParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

// Values are secrets; only the names are printed.
impl std::fmt::Debug for AuthParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.values.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::env::StaticEnv;

    #[test]
    fn test_get_treats_empty_as_absent() {
        let params = AuthParams::new().with("x", "").with("y", "1");
        assert_eq!(params.get("x"), None);
        assert_eq!(params.get("y"), Some("1"));
        assert!(!params.contains("x"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_resolve_explicit_overrides_env() {
        let explicit = AuthParams::new().with("x", "explicit");
        let env = StaticEnv::new().with("x", "from-env");
        let resolved = explicit.resolve(&["x"], &env).unwrap();
        assert_eq!(resolved.get("x"), Some("explicit"));
    }

    #[test]
    fn test_resolve_falls_back_to_env() {
        let explicit = AuthParams::new().with("x", "");
        let env = StaticEnv::new().with("x", "from-env").with("y", "y-env");
        let resolved = explicit.resolve(&["x", "y"], &env).unwrap();
        assert_eq!(resolved.get("x"), Some("from-env"));
        assert_eq!(resolved.get("y"), Some("y-env"));
    }

    #[test]
    fn test_resolve_reports_missing_names() {
        let explicit = AuthParams::new().with("x", "1");
        let env = StaticEnv::new().with("z", "");
        let missing = explicit.resolve(&["x", "y", "z"], &env).unwrap_err();
        assert_eq!(missing, vec!["y".to_string(), "z".to_string()]);
    }

    #[test]
    fn test_resolve_only_keeps_required_names() {
        let explicit = AuthParams::new().with("x", "1").with("unrelated", "2");
        let resolved = explicit.resolve(&["x"], &StaticEnv::new()).unwrap();
        assert_eq!(resolved.names().collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn test_debug_hides_values() {
        let params = AuthParams::new().with("chino_customer_key", "s3cret");
        let printed = format!("{:?}", params);
        assert!(printed.contains("chino_customer_key"));
        assert!(!printed.contains("s3cret"));
    }
}
