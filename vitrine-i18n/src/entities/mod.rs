//! Content entities and their translation records.
//!
//! The shapes mirror the JSON served by the content API. Localizable fields
//! are listed in each kind's `translatable!` invocation; everything else is
//! left untouched by resolution.

mod blog;
mod company;
mod document;
mod product;
mod service;

pub use blog::{Blog, BlogCategory, BlogCategoryTranslation, BlogTranslation};
pub use company::{
    AboutContent, AboutContentTranslation, CoreValue, CoreValueTranslation, Stat,
    StatTranslation, Testimonial, TestimonialTranslation,
};
pub use document::{Document, DocumentCategory, DocumentCategoryTranslation, DocumentTranslation};
pub use product::{Product, ProductCategory, ProductCategoryTranslation, ProductTranslation};
pub use service::{Service, ServiceTranslation};

use crate::ContentResolver;
use serde::{Deserialize, Deserializer};

/// One named resolver per entity kind, for call sites that read better
/// than a turbofish.
impl ContentResolver {
    pub fn resolve_blog(&self, blog: &Blog, locale: &str) -> Blog {
        self.resolve(blog, locale)
    }

    pub fn resolve_blog_category(&self, category: &BlogCategory, locale: &str) -> BlogCategory {
        self.resolve(category, locale)
    }

    pub fn resolve_product(&self, product: &Product, locale: &str) -> Product {
        self.resolve(product, locale)
    }

    pub fn resolve_product_category(
        &self,
        category: &ProductCategory,
        locale: &str,
    ) -> ProductCategory {
        self.resolve(category, locale)
    }

    pub fn resolve_document(&self, document: &Document, locale: &str) -> Document {
        self.resolve(document, locale)
    }

    pub fn resolve_document_category(
        &self,
        category: &DocumentCategory,
        locale: &str,
    ) -> DocumentCategory {
        self.resolve(category, locale)
    }

    pub fn resolve_service(&self, service: &Service, locale: &str) -> Service {
        self.resolve(service, locale)
    }

    pub fn resolve_testimonial(&self, testimonial: &Testimonial, locale: &str) -> Testimonial {
        self.resolve(testimonial, locale)
    }

    pub fn resolve_stat(&self, stat: &Stat, locale: &str) -> Stat {
        self.resolve(stat, locale)
    }

    pub fn resolve_core_value(&self, value: &CoreValue, locale: &str) -> CoreValue {
        self.resolve(value, locale)
    }

    pub fn resolve_about_content(&self, about: &AboutContent, locale: &str) -> AboutContent {
        self.resolve(about, locale)
    }
}

/// Accepts a missing, `null` or array `translations` value.
pub(crate) fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
