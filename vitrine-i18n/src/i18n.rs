//! Main i18n interface.

use crate::{
    ContentCategory, ContentResolver, I18nConfig, Locale, LocaleStore, LocaleStoreBuilder, Lookup,
    Result, Translatable, negotiate_locale, parse_accept_language,
};
use serde_json::Value;
use std::sync::Arc;

/// Entity resolution and locale content lookup behind one handle.
///
/// Cloning is cheap; the store is shared.
///
/// ```
/// use vitrine_i18n::{ContentResolver, I18n, Locale, LocaleStoreBuilder};
///
/// let i18n = I18n::new(
///     ContentResolver::new("en"),
///     LocaleStoreBuilder::new().build(),
///     vec![Locale::en(), Locale::new("am")],
/// );
///
/// assert_eq!(i18n.negotiate("am-ET,en;q=0.8"), "am");
/// assert_eq!(i18n.negotiate("fr"), "en");
/// ```
#[derive(Debug, Clone)]
pub struct I18n {
    resolver: ContentResolver,
    store: Arc<LocaleStore>,
    supported: Vec<Locale>,
    default_locale: Locale,
}

impl I18n {
    pub fn new(
        resolver: ContentResolver,
        store: impl Into<Arc<LocaleStore>>,
        supported: Vec<Locale>,
    ) -> Self {
        let default_locale = Locale::parse(resolver.default_language())
            .unwrap_or_else(|_| Locale::new(resolver.default_language()));
        Self {
            resolver,
            store: store.into(),
            supported,
            default_locale,
        }
    }

    /// Build the resolver and load the store from configuration.
    ///
    /// `content_dir` is loaded before `manifest`, so manifest entries win on
    /// conflicts.
    pub fn from_config(config: &I18nConfig) -> Result<Self> {
        let config = config.clone().normalized()?;
        let mut builder = LocaleStoreBuilder::new()
            .default_language(config.default_language.clone());

        if let Some(ref dir) = config.content_dir {
            builder = builder.load_dir(dir)?;
        }
        if let Some(ref manifest) = config.manifest {
            builder = builder.load_manifest(manifest)?;
        }

        Ok(Self::new(
            ContentResolver::new(config.default_language.clone()),
            builder.build(),
            config.locales()?,
        ))
    }

    pub fn resolver(&self) -> &ContentResolver {
        &self.resolver
    }

    pub fn store(&self) -> &LocaleStore {
        &self.store
    }

    pub fn default_language(&self) -> &str {
        self.resolver.default_language()
    }

    pub fn supported_locales(&self) -> &[Locale] {
        &self.supported
    }

    /// Map a caller's language preference onto a supported language.
    ///
    /// Accepts an `Accept-Language` value or a bare tag. Returns the full
    /// tag of the chosen supported locale (`pt-BR`), the form documents are
    /// keyed by, or the default language.
    pub fn negotiate(&self, preference: &str) -> String {
        let requested = parse_accept_language(preference);
        negotiate_locale(&requested, &self.supported, &self.default_locale).tag()
    }

    pub fn resolve<E: Translatable>(&self, entity: &E, locale: &str) -> E {
        self.resolver.resolve(entity, locale)
    }

    pub fn resolve_all<E: Translatable>(&self, entities: &[E], locale: &str) -> Vec<E> {
        self.resolver.resolve_all(entities, locale)
    }

    pub fn content(
        &self,
        category: ContentCategory,
        file: &str,
        locale: &str,
    ) -> Result<Lookup<'_>> {
        self.store.lookup(category, file, locale)
    }

    pub fn page(&self, file: &str, locale: &str) -> Result<&Value> {
        self.store.page(file, locale)
    }

    pub fn section(&self, file: &str, locale: &str) -> Result<&Value> {
        self.store.section(file, locale)
    }

    pub fn layout(&self, file: &str, locale: &str) -> Result<&Value> {
        self.store.layout(file, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::I18nError;
    use crate::entities::{Stat, StatTranslation};
    use std::fs;

    #[test]
    fn test_from_config_loads_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("en/pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("blog.json"), r#"{ "title": "Blog" }"#).unwrap();

        let config = I18nConfig {
            supported_locales: vec!["en".to_string(), "am".to_string()],
            content_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let i18n = I18n::from_config(&config).unwrap();

        let found = i18n.content(ContentCategory::Pages, "blog", "am").unwrap();
        assert!(found.is_fallback());
        assert_eq!(found.data["title"], "Blog");
        assert!(matches!(
            i18n.page("nonexistent", "en"),
            Err(I18nError::ContentNotFound { .. })
        ));
    }

    #[test]
    fn test_regional_locale_is_served() {
        let dir = tempfile::tempdir().unwrap();
        for (locale, title) in [("en", "Home"), ("pt-BR", "Início")] {
            let pages = dir.path().join(locale).join("pages");
            fs::create_dir_all(&pages).unwrap();
            fs::write(pages.join("home.json"), format!(r#"{{ "title": "{}" }}"#, title)).unwrap();
        }

        let config = I18nConfig {
            supported_locales: vec!["en".to_string(), "pt-BR".to_string()],
            content_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let i18n = I18n::from_config(&config).unwrap();

        let locale = i18n.negotiate("pt-BR,pt;q=0.9");
        assert_eq!(locale, "pt-BR");
        let found = i18n.content(ContentCategory::Pages, "home", &locale).unwrap();
        assert!(!found.is_fallback());
        assert_eq!(found.data["title"], "Início");

        assert_eq!(i18n.negotiate("pt-PT"), "pt-BR");
        assert_eq!(i18n.negotiate("de"), "en");
    }

    #[test]
    fn test_lowercase_region_default_language() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("en-us/pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("home.json"), r#"{ "title": "Home" }"#).unwrap();

        let config = I18nConfig {
            default_language: "en-us".to_string(),
            supported_locales: vec!["en-us".to_string(), "am".to_string()],
            content_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let i18n = I18n::from_config(&config).unwrap();

        assert_eq!(i18n.default_language(), "en-US");
        assert_eq!(i18n.store().default_language(), "en-US");
        assert_eq!(i18n.page("home", "am").unwrap()["title"], "Home");
        assert_eq!(i18n.negotiate("fr"), "en-US");
    }

    #[test]
    fn test_from_config_missing_content_dir() {
        let config = I18nConfig {
            content_dir: Some("/definitely/not/here".into()),
            ..Default::default()
        };
        assert!(I18n::from_config(&config).is_err());
    }

    #[test]
    fn test_negotiate_and_resolve() {
        let i18n = I18n::new(
            ContentResolver::default(),
            LocaleStoreBuilder::new().build(),
            vec![Locale::en(), Locale::new("am")],
        );
        let stat = Stat {
            id: 1,
            name: "Clients".to_string(),
            value: "200+".to_string(),
            translations: vec![StatTranslation {
                locale: "am".to_string(),
                name: Some("ደንበኞች".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let locale = i18n.negotiate("am-ET;q=0.9, en;q=0.5");
        assert_eq!(locale, "am");
        assert_eq!(i18n.resolve(&stat, &locale).name, "ደንበኞች");
        assert_eq!(i18n.resolve_all(&[stat], "en")[0].name, "Clients");
    }

    #[test]
    fn test_negotiate_empty_preference_uses_default() {
        let i18n = I18n::new(
            ContentResolver::new("am"),
            LocaleStoreBuilder::new().default_language("am").build(),
            vec![Locale::en(), Locale::new("am")],
        );
        assert_eq!(i18n.negotiate(""), "am");
        assert_eq!(i18n.default_language(), "am");
    }
}
