//! Locale Store Registration
//!
//! Collects locale content documents into a [`LocaleStore`]. Documents can
//! be registered one by one, loaded from a directory tree laid out as
//! `<root>/<locale>/<category>/<file>.json`, or listed in a TOML manifest:
//!
//! ```toml
//! default_language = "en"
//!
//! [[document]]
//! category = "pages"
//! file = "blog"
//! locale = "am"
//! path = "am/pages/blog.json"
//! ```
//!
//! Manifest paths are relative to the manifest's directory.

use crate::locale::{DEFAULT_LANGUAGE, normalize_tag};
use crate::{ContentCategory, I18nError, Locale, LocaleStore, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use vitrine_log::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct Manifest {
    default_language: Option<String>,
    #[serde(default, rename = "document")]
    documents: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    category: ContentCategory,
    file: String,
    locale: String,
    path: PathBuf,
}

/// Builder for [`LocaleStore`].
#[derive(Debug, Default)]
pub struct LocaleStoreBuilder {
    default_language: Option<String>,
    documents: HashMap<String, HashMap<String, Value>>,
}

impl LocaleStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback language (`"en"` when unset). The tag is normalized
    /// on [`build`](Self::build).
    pub fn default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }

    /// Register one document, builder style.
    pub fn document(
        mut self,
        category: ContentCategory,
        file: &str,
        locale: &str,
        data: Value,
    ) -> Self {
        self.insert(category, file, locale, data);
        self
    }

    /// Register one document. A later document for the same
    /// `(category, file, locale)` replaces the earlier one.
    ///
    /// The locale is stored as its normalized tag (`en-us` becomes `en-US`).
    pub fn insert(&mut self, category: ContentCategory, file: &str, locale: &str, data: Value) {
        let key = category.key(file);
        let locale = normalize_tag(locale);
        let replaced = self
            .documents
            .entry(key.clone())
            .or_default()
            .insert(locale.clone(), data);

        if replaced.is_some() {
            debug!(target: "vitrine::store", "Replaced '{}' content for {}", locale, key);
        }
    }

    /// Load every `<root>/<locale>/<category>/<file>.json` below `root`.
    ///
    /// Files may sit in subdirectories of the category directory; the file
    /// name then keeps the relative path (`sections/home/hero.json` is
    /// registered as file `home/hero`). Hidden entries are skipped.
    pub fn load_dir(mut self, root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let mut loaded = 0usize;

        for locale_dir in visible_entries(root)? {
            if !locale_dir.is_dir() {
                continue;
            }
            let locale = Locale::parse(&file_name(&locale_dir)?)?.tag();

            for category_dir in visible_entries(&locale_dir)? {
                if !category_dir.is_dir() {
                    return Err(I18nError::InvalidContentPath(category_dir));
                }
                let category: ContentCategory = file_name(&category_dir)?.parse()?;

                let mut files = Vec::new();
                collect_json(&category_dir, &mut files)?;
                for path in files {
                    let file = relative_name(&category_dir, &path)?;
                    let data = read_json(&path)?;
                    self.insert(category, &file, &locale, data);
                    loaded += 1;
                }
            }
        }

        info!(
            target: "vitrine::store",
            "Loaded {} locale documents from {}",
            loaded,
            root.display()
        );
        Ok(self)
    }

    /// Load the documents enumerated in a TOML manifest.
    ///
    /// A `default_language` in the manifest applies unless one was already
    /// set on the builder.
    pub fn load_manifest(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: Manifest = toml::from_str(&text)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));

        if self.default_language.is_none() {
            self.default_language = manifest.default_language;
        }

        for entry in &manifest.documents {
            let locale = Locale::parse(&entry.locale)?.tag();
            let data = read_json(&base.join(&entry.path))?;
            self.insert(entry.category, &entry.file, &locale, data);
        }

        info!(
            target: "vitrine::store",
            "Loaded {} locale documents from manifest {}",
            manifest.documents.len(),
            path.display()
        );
        Ok(self)
    }

    /// Finish registration.
    ///
    /// Keys without a default-language document are reported, since
    /// requests for their missing languages will fail.
    pub fn build(self) -> LocaleStore {
        let default_language = self
            .default_language
            .as_deref()
            .map_or_else(|| DEFAULT_LANGUAGE.to_string(), normalize_tag);

        let mut uncovered: Vec<&String> = self
            .documents
            .iter()
            .filter(|(_, variants)| !variants.contains_key(&default_language))
            .map(|(key, _)| key)
            .collect();
        uncovered.sort();
        for key in uncovered {
            warn!(
                target: "vitrine::store",
                "{} has no '{}' document to fall back to",
                key,
                default_language
            );
        }

        LocaleStore::from_parts(default_language, self.documents)
    }
}

fn visible_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source| I18nError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if !hidden {
            entries.push(path);
        }
    }
    entries.sort();
    Ok(entries)
}

fn collect_json(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for path in visible_entries(dir)? {
        if path.is_dir() {
            collect_json(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            out.push(path);
        }
    }
    Ok(())
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| I18nError::InvalidContentPath(path.to_path_buf()))
}

fn relative_name(base: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(base)
        .map_err(|_| I18nError::InvalidContentPath(path.to_path_buf()))?
        .with_extension("");

    let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
    parts
        .map(|parts| parts.join("/"))
        .ok_or_else(|| I18nError::InvalidContentPath(path.to_path_buf()))
}

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|source| I18nError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| I18nError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_insert_replaces_same_variant() {
        let store = LocaleStoreBuilder::new()
            .document(ContentCategory::Pages, "about", "en", json!({ "v": 1 }))
            .document(ContentCategory::Pages, "about", "en", json!({ "v": 2 }))
            .build();

        assert_eq!(store.page("about", "en").unwrap()["v"], 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_default_language_defaults_to_en() {
        assert_eq!(LocaleStoreBuilder::new().build().default_language(), "en");
        assert_eq!(
            LocaleStoreBuilder::new().default_language("am").build().default_language(),
            "am"
        );
    }

    #[test]
    fn test_locale_tags_are_normalized() {
        let store = LocaleStoreBuilder::new()
            .default_language("en-us")
            .document(ContentCategory::Pages, "home", "en_US", json!({ "title": "Home" }))
            .build();

        assert_eq!(store.default_language(), "en-US");
        assert_eq!(store.locales_for(ContentCategory::Pages, "home"), ["en-US"]);

        let found = store.lookup(ContentCategory::Pages, "home", "am").unwrap();
        assert_eq!(found.served_locale, "en-US");
        assert!(found.is_fallback());
    }

    #[test]
    fn test_load_dir_with_lowercase_region_default() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "en-us/pages/home.json", r#"{ "title": "Home" }"#);

        let store = LocaleStoreBuilder::new()
            .default_language("en-us")
            .load_dir(dir.path())
            .unwrap()
            .build();

        assert_eq!(store.page("home", "am").unwrap()["title"], "Home");
        assert_eq!(store.page("home", "en-us").unwrap()["title"], "Home");
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "en/pages/blog.json", r#"{ "title": "Blog" }"#);
        write(dir.path(), "am/pages/home.json", r#"{ "title": "መነሻ" }"#);
        write(dir.path(), "en/sections/home/hero.json", r#"{ "cta": "Join" }"#);
        write(dir.path(), "en/sections/notes.txt", "ignored");
        write(dir.path(), ".git/config", "ignored");

        let store = LocaleStoreBuilder::new().load_dir(dir.path()).unwrap().build();

        assert_eq!(store.keys(), ["pages/blog", "pages/home", "sections/home/hero"]);
        assert_eq!(store.section("home/hero", "am").unwrap()["cta"], "Join");
        assert_eq!(store.page("home", "am").unwrap()["title"], "መነሻ");
    }

    #[test]
    fn test_load_dir_rejects_unknown_category() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "en/widgets/x.json", "{}");

        let err = LocaleStoreBuilder::new().load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, I18nError::UnknownCategory(ref c) if c == "widgets"));
    }

    #[test]
    fn test_load_dir_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "en/pages/broken.json", "{ nope");

        let err = LocaleStoreBuilder::new().load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, I18nError::Json { .. }));
    }

    #[test]
    fn test_load_dir_missing_root() {
        let err = LocaleStoreBuilder::new()
            .load_dir("/definitely/not/a/content/dir")
            .unwrap_err();
        assert!(matches!(err, I18nError::Io { .. }));
    }

    #[test]
    fn test_load_manifest() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "content/en-blog.json", r#"{ "title": "Blog" }"#);
        write(dir.path(), "content/am-blog.json", r#"{ "title": "ብሎግ" }"#);
        write(
            dir.path(),
            "locales.toml",
            r#"
                default_language = "am"

                [[document]]
                category = "pages"
                file = "blog"
                locale = "en"
                path = "content/en-blog.json"

                [[document]]
                category = "pages"
                file = "blog"
                locale = "am"
                path = "content/am-blog.json"
            "#,
        );

        let store = LocaleStoreBuilder::new()
            .load_manifest(dir.path().join("locales.toml"))
            .unwrap()
            .build();

        assert_eq!(store.default_language(), "am");
        assert_eq!(store.page("blog", "fr").unwrap()["title"], "ብሎግ");
    }

    #[test]
    fn test_builder_default_language_beats_manifest() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "locales.toml", "default_language = \"am\"\n");

        let store = LocaleStoreBuilder::new()
            .default_language("en")
            .load_manifest(dir.path().join("locales.toml"))
            .unwrap()
            .build();
        assert_eq!(store.default_language(), "en");
    }

    #[test]
    fn test_manifest_rejects_unknown_category() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "locales.toml",
            r#"
                [[document]]
                category = "widgets"
                file = "x"
                locale = "en"
                path = "x.json"
            "#,
        );

        let err = LocaleStoreBuilder::new()
            .load_manifest(dir.path().join("locales.toml"))
            .unwrap_err();
        assert!(matches!(err, I18nError::Manifest(_)));
    }
}
