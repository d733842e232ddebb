//! Locale Data Store
//!
//! Whole-document lookup for page, section and layout content that is
//! translated ahead of time. Each `(category, file)` pair maps to one JSON
//! document per language; a lookup picks a single document and never merges
//! fields across languages.
//!
//! Lookup policy:
//!
//! - the requested language's document when it exists,
//! - otherwise the default language's document, with a warning,
//! - a key that was never registered is a configuration error.

use crate::locale::normalize_tag;
use crate::{I18nError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Namespace of a locale content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Sections,
    Pages,
    Layouts,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 3] = [Self::Sections, Self::Pages, Self::Layouts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sections => "sections",
            Self::Pages => "pages",
            Self::Layouts => "layouts",
        }
    }

    /// The `"{category}/{file}"` key a document is registered under.
    pub fn key(&self, file: &str) -> String {
        format!("{}/{}", self.as_str(), file)
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentCategory {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| I18nError::UnknownCategory(s.to_string()))
    }
}

/// The outcome of a store lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup<'a> {
    /// The selected document
    pub data: &'a Value,
    /// `"{category}/{file}"`
    pub key: String,
    /// The language the caller asked for
    pub requested_locale: String,
    /// The language of `data`
    pub served_locale: &'a str,
}

impl Lookup<'_> {
    /// Whether the default language was served in place of the requested one.
    pub fn is_fallback(&self) -> bool {
        self.served_locale != self.requested_locale
    }
}

/// Immutable `(category, file, language) -> document` map.
///
/// Built with [`LocaleStoreBuilder`](crate::LocaleStoreBuilder); share it
/// through an `Arc` to read it from several threads.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleStore {
    default_language: String,
    documents: HashMap<String, HashMap<String, Value>>,
}

impl LocaleStore {
    pub(crate) fn from_parts(
        default_language: String,
        documents: HashMap<String, HashMap<String, Value>>,
    ) -> Self {
        Self {
            default_language,
            documents,
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// The document for `(category, file)` in `locale`, or the default
    /// language's document.
    pub fn get(&self, category: ContentCategory, file: &str, locale: &str) -> Result<&Value> {
        self.lookup(category, file, locale).map(|found| found.data)
    }

    /// Like [`LocaleStore::get`], reporting which language was served.
    ///
    /// `locale` is compared by normalized tag, so `pt-br` finds `pt-BR`.
    pub fn lookup(
        &self,
        category: ContentCategory,
        file: &str,
        locale: &str,
    ) -> Result<Lookup<'_>> {
        let key = category.key(file);
        let locale = normalize_tag(locale);
        let variants = self
            .documents
            .get(&key)
            .ok_or_else(|| I18nError::ContentNotFound { key: key.clone() })?;

        if let Some((served, data)) = variants.get_key_value(locale.as_str()) {
            return Ok(Lookup {
                data,
                key,
                requested_locale: locale,
                served_locale: served,
            });
        }

        if locale != self.default_language {
            if let Some((served, data)) = variants.get_key_value(self.default_language.as_str()) {
                vitrine_log::warn!(
                    target: "vitrine::store",
                    "No '{}' content for {}, serving '{}'",
                    locale,
                    key,
                    served
                );
                return Ok(Lookup {
                    data,
                    key,
                    requested_locale: locale,
                    served_locale: served,
                });
            }
        }

        Err(I18nError::MissingDefaultVariant {
            key,
            locale,
            default_language: self.default_language.clone(),
        })
    }

    /// Deserialize the selected document into `T`.
    pub fn get_as<T: DeserializeOwned>(
        &self,
        category: ContentCategory,
        file: &str,
        locale: &str,
    ) -> Result<T> {
        let found = self.lookup(category, file, locale)?;
        T::deserialize(found.data).map_err(|source| I18nError::ContentShape {
            key: found.key,
            source,
        })
    }

    pub fn section(&self, file: &str, locale: &str) -> Result<&Value> {
        self.get(ContentCategory::Sections, file, locale)
    }

    pub fn page(&self, file: &str, locale: &str) -> Result<&Value> {
        self.get(ContentCategory::Pages, file, locale)
    }

    pub fn layout(&self, file: &str, locale: &str) -> Result<&Value> {
        self.get(ContentCategory::Layouts, file, locale)
    }

    pub fn contains(&self, category: ContentCategory, file: &str) -> bool {
        self.documents.contains_key(&category.key(file))
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.documents.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Languages registered for a key, sorted. Empty for unknown keys.
    pub fn locales_for(&self, category: ContentCategory, file: &str) -> Vec<&str> {
        let mut locales: Vec<&str> = self
            .documents
            .get(&category.key(file))
            .map(|variants| variants.keys().map(String::as_str).collect())
            .unwrap_or_default();
        locales.sort_unstable();
        locales
    }

    /// Number of registered documents across all languages.
    pub fn len(&self) -> usize {
        self.documents.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
