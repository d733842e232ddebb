// Environment variable loading

use std::collections::HashMap;
use std::env;

/// Collects environment variables, optionally restricted to a prefix.
///
/// With prefix `VITRINE`, `VITRINE_DEFAULT_LANGUAGE` becomes the key
/// `default_language`.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// Load matching variables from the process environment.
    pub fn load(&self) -> HashMap<String, String> {
        self.collect(env::vars())
    }

    /// Apply the prefix filter and key normalization to any variable source.
    pub fn collect<I>(&self, vars: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        vars.into_iter()
            .filter_map(|(key, value)| match self.prefix {
                Some(ref prefix) => key
                    .strip_prefix(prefix.as_str())
                    .and_then(|rest| rest.strip_prefix('_'))
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (rest.to_lowercase(), value)),
                None => Some((key.to_lowercase(), value)),
            })
            .collect()
    }

    /// Read a single variable, applying the prefix.
    pub fn var(&self, key: &str) -> Option<String> {
        env::var(self.full_key(key)).ok()
    }

    pub fn full_key(&self, key: &str) -> String {
        match self.prefix {
            Some(ref prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }
}
