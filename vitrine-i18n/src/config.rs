//! I18n configuration.

use crate::locale::DEFAULT_LANGUAGE;
use crate::{Locale, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use vitrine_config::{ConfigError, ConfigManager, ConfigValidator, Validate};

/// Language settings and content locations.
///
/// Read from a JSON/TOML file and/or `VITRINE_*` environment variables:
///
/// ```toml
/// default_language = "en"
/// supported_locales = ["en", "am"]
/// content_dir = "content/locales"
/// ```
///
/// `VITRINE_SUPPORTED_LOCALES` takes a comma-separated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Language used when a translation or document is missing
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Languages the site is published in
    #[serde(default = "default_supported", deserialize_with = "locale_list")]
    pub supported_locales: Vec<String>,
    /// Root of a `<locale>/<category>/<file>.json` tree
    #[serde(default)]
    pub content_dir: Option<PathBuf>,
    /// TOML manifest enumerating locale documents
    #[serde(default)]
    pub manifest: Option<PathBuf>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_supported() -> Vec<String> {
    vec![DEFAULT_LANGUAGE.to_string()]
}

fn locale_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum List {
        Items(Vec<String>),
        Csv(String),
    }

    let items = match List::deserialize(deserializer)? {
        List::Items(items) => items,
        List::Csv(csv) => csv.split(',').map(str::to_string).collect(),
    };

    Ok(items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            supported_locales: default_supported(),
            content_dir: None,
            manifest: None,
        }
    }
}

impl Validate for I18nConfig {
    fn validate(&self) -> vitrine_config::Result<()> {
        ConfigValidator::not_empty(&self.default_language, "default_language")?;
        ConfigValidator::not_empty_list(&self.supported_locales, "supported_locales")?;

        let tag = |tag: &String| {
            Locale::parse(tag)
                .map(|locale| locale.tag())
                .map_err(|e| ConfigError::ValidationError(e.to_string()))
        };
        let default_language = tag(&self.default_language)?;
        let supported = self
            .supported_locales
            .iter()
            .map(tag)
            .collect::<vitrine_config::Result<Vec<_>>>()?;

        ConfigValidator::one_of(&default_language, &supported, "default_language")
    }
}

impl I18nConfig {
    /// Prefix of the environment variables read by [`I18nConfig::from_env`].
    pub const ENV_PREFIX: &'static str = "VITRINE";

    /// Extract, validate and normalize the configuration from loaded values.
    pub fn from_manager(manager: &ConfigManager) -> Result<Self> {
        let config: Self = manager.load_validated()?;
        config.normalized()
    }

    /// Rewrite every language tag in its normalized form (`en-us` becomes
    /// `en-US`), the form content documents are keyed by.
    pub fn normalized(mut self) -> Result<Self> {
        self.default_language = Locale::parse(&self.default_language)?.tag();
        self.supported_locales = self.locales()?.iter().map(Locale::tag).collect();
        Ok(self)
    }

    /// Read `.env` (when present) and `VITRINE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let mut manager = ConfigManager::with_prefix(Self::ENV_PREFIX);
        manager.load_dotenv(None)?;
        Self::from_manager(&manager)
    }

    /// Read a configuration file, then let `VITRINE_*` variables override it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut manager = ConfigManager::with_prefix(Self::ENV_PREFIX);
        manager.load_file(path)?;
        manager.load_env()?;
        Self::from_manager(&manager)
    }

    /// Supported locales as parsed [`Locale`]s.
    pub fn locales(&self) -> Result<Vec<Locale>> {
        self.supported_locales.iter().map(|s| Locale::parse(s)).collect()
    }
}
