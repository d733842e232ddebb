// Configuration loading for Vitrine

pub mod env;
pub mod error;
pub mod loader;
pub mod validation;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use validation::{ConfigValidator, Validate};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::Path;

/// Layered configuration values.
///
/// Sources are applied in call order; a later source overwrites keys set
/// by an earlier one. Keys from `.env` files and the environment are
/// lowercased (and stripped of the prefix, when one is set).
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: Map<String, Value>,
    env_prefix: Option<String>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only environment variables starting with `{prefix}_` are loaded.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            values: Map::new(),
            env_prefix: Some(prefix.into()),
        }
    }

    /// Load configuration from the process environment.
    pub fn load_env(&mut self) -> Result<()> {
        let vars = EnvLoader::new(self.env_prefix.clone()).load();
        self.insert_strings(vars);
        Ok(())
    }

    /// Load variables from a `.env` file into the process environment, then
    /// call [`ConfigManager::load_env`]. A missing default `.env` is ignored.
    pub fn load_dotenv(&mut self, path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => {
                dotenvy::from_path(path).map_err(|e| ConfigError::Dotenv(e.to_string()))?;
            }
            None => {
                dotenvy::dotenv().ok();
            }
        }
        self.load_env()
    }

    /// Load a file, choosing the parser from its extension.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let loader = ConfigLoader::auto(path)?;
        let map = loader.load_file(path)?;
        self.insert_source(map, loader_is_env(path));
        Ok(())
    }

    /// Load configuration text of a known format.
    pub fn load_str(&mut self, content: &str, format: FileFormat) -> Result<()> {
        let map = ConfigLoader::new(format).parse(content)?;
        self.insert_source(map, format == FileFormat::Env);
        Ok(())
    }

    pub fn set<T: serde::Serialize>(&mut self, key: &str, value: T) -> Result<()> {
        let value = serde_json::to_value(value).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;

        serde_json::from_value(value.clone()).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    /// Overlay every value of `other` onto this manager.
    pub fn merge(&mut self, other: &ConfigManager) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Deserialize all values into `T` and validate it.
    pub fn load_validated<T: DeserializeOwned + Validate>(&self) -> Result<T> {
        let typed: T = serde_json::from_value(Value::Object(self.values.clone()))
            .map_err(|e| ConfigError::InvalidValue {
                key: std::any::type_name::<T>().to_string(),
                reason: e.to_string(),
            })?;

        typed.validate()?;
        Ok(typed)
    }

    fn insert_source(&mut self, map: Map<String, Value>, env_style: bool) {
        if env_style {
            let strings = map.into_iter().filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                _ => None,
            });
            let filtered = EnvLoader::new(self.env_prefix.clone()).collect(strings);
            self.insert_strings(filtered);
        } else {
            self.values.extend(map);
        }
    }

    fn insert_strings(&mut self, vars: impl IntoIterator<Item = (String, String)>) {
        for (key, value) in vars {
            self.values.insert(key, Value::String(value));
        }
    }
}

fn loader_is_env(path: &Path) -> bool {
    FileFormat::detect(path) == Some(FileFormat::Env)
}
