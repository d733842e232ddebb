//! Blog posts and blog categories.

use super::nullable_list;
use crate::resolver::translatable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: u64,
    #[serde(default)]
    pub business_id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub blog_category_id: Option<u64>,
    #[serde(default)]
    pub category: Option<BlogCategory>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub translations: Vec<BlogTranslation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogTranslation {
    #[serde(default)]
    pub blog_id: u64,
    pub locale: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Grouping for blog posts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogCategory {
    pub id: u64,
    #[serde(default)]
    pub business_id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub blogs_count: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub translations: Vec<BlogCategoryTranslation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogCategoryTranslation {
    #[serde(default)]
    pub blog_category_id: u64,
    pub locale: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

translatable! {
    Blog => BlogTranslation, kind: "blog",
    fields: [title, slug, content, excerpt],
    related: category,
}

translatable! {
    BlogCategory => BlogCategoryTranslation, kind: "blog_category",
    fields: [title, slug, description],
}
