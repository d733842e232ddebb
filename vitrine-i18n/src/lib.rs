//! Multi-locale content resolution for Vitrine
//!
//! Two pieces share one fallback philosophy:
//!
//! - **Entity resolution**: flattens a content record (blog post, product,
//!   service, document, testimonial, ...) and its embedded per-locale
//!   translations into a single-language record. See [`ContentResolver`].
//! - **Locale data store**: whole-document lookup of pre-translated page,
//!   section and layout content. See [`LocaleStore`].
//!
//! # Quick Start
//!
//! ```rust
//! use vitrine_i18n::entities::{Blog, BlogTranslation};
//! use vitrine_i18n::ContentResolver;
//!
//! let blog = Blog {
//!     id: 1,
//!     title: "Hello".to_string(),
//!     translations: vec![
//!         BlogTranslation { locale: "am".into(), title: Some("ሰላም".into()), ..Default::default() },
//!         BlogTranslation { locale: "en".into(), title: Some("Hello EN".into()), ..Default::default() },
//!     ],
//!     ..Default::default()
//! };
//!
//! let resolver = ContentResolver::new("en");
//! assert_eq!(resolver.resolve_blog(&blog, "am").title, "ሰላም");
//! assert_eq!(resolver.resolve_blog(&blog, "fr").title, "Hello EN");
//! ```
//!
//! # Locale Content
//!
//! ```rust
//! use serde_json::json;
//! use vitrine_i18n::{ContentCategory, LocaleStoreBuilder};
//!
//! let store = LocaleStoreBuilder::new()
//!     .default_language("en")
//!     .document(ContentCategory::Pages, "blog", "en", json!({ "title": "Blog" }))
//!     .build();
//!
//! let found = store.lookup(ContentCategory::Pages, "blog", "am").unwrap();
//! assert!(found.is_fallback());
//! assert!(store.page("nonexistent", "en").is_err());
//! ```

mod builder;
mod config;
pub mod entities;
mod error;
mod i18n;
mod locale;
mod resolver;
mod store;

pub use builder::LocaleStoreBuilder;
pub use config::I18nConfig;
pub use error::I18nError;
pub use i18n::I18n;
pub use locale::{DEFAULT_LANGUAGE, Locale, negotiate_locale, parse_accept_language};
pub use resolver::{
    ContentResolver, LocalizedField, LocalizedValue, Translatable, TranslationRecord,
};
pub use store::{ContentCategory, LocaleStore, Lookup};

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::entities::*;
    pub use crate::{
        ContentCategory, ContentResolver, I18n, I18nConfig, I18nError, Locale, LocaleStore,
        LocaleStoreBuilder, Result, Translatable,
    };
}
