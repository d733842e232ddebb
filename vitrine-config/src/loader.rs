// Configuration file loaders

use crate::{ConfigError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
    Env,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            "env" => Some(FileFormat::Env),
            _ => None,
        }
    }

    /// Detect the format of a path. `.env` (no stem) counts as [`FileFormat::Env`].
    pub fn detect(path: &Path) -> Option<Self> {
        if path.file_name().is_some_and(|name| name == ".env") {
            return Some(FileFormat::Env);
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Parses one configuration source into a flat JSON object.
pub struct ConfigLoader {
    format: FileFormat,
}

impl ConfigLoader {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    /// Pick the loader from the file name.
    pub fn auto(path: &Path) -> Result<Self> {
        FileFormat::detect(path)
            .map(Self::new)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))
    }

    pub fn load_file(&self, path: &Path) -> Result<Map<String, Value>> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.parse(&content)
    }

    /// Parse configuration text. The top level must be a table/object.
    pub fn parse(&self, content: &str) -> Result<Map<String, Value>> {
        let value = match self.format {
            FileFormat::Json => serde_json::from_str(content).map_err(|e| self.error(e))?,
            FileFormat::Toml => {
                let table: toml::Table = toml::from_str(content).map_err(|e| self.error(e))?;
                serde_json::to_value(table).map_err(|e| self.error(e))?
            }
            FileFormat::Env => Value::Object(parse_env(content)),
        };

        match value {
            Value::Object(map) => Ok(map),
            other => Err(ConfigError::Parse {
                format: self.format,
                reason: format!("expected a table at the top level, found {}", other),
            }),
        }
    }

    fn error(&self, err: impl std::fmt::Display) -> ConfigError {
        ConfigError::Parse {
            format: self.format,
            reason: err.to_string(),
        }
    }
}

fn parse_env(content: &str) -> Map<String, Value> {
    let mut map = Map::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            map.insert(key.trim().to_string(), Value::String(value.to_string()));
        }
    }

    map
}
