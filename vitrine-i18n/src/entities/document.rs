//! Downloadable documents and their categories.

use super::nullable_list;
use crate::resolver::translatable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A downloadable document (brochure, report, certificate).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    #[serde(default)]
    pub business_id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub document_category_id: Option<u64>,
    #[serde(default)]
    pub category: Option<DocumentCategory>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub translations: Vec<DocumentTranslation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentTranslation {
    #[serde(default)]
    pub document_id: u64,
    pub locale: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentCategory {
    pub id: u64,
    #[serde(default)]
    pub business_id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub documents_count: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub translations: Vec<DocumentCategoryTranslation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentCategoryTranslation {
    #[serde(default)]
    pub document_category_id: u64,
    pub locale: String,
    #[serde(default)]
    pub name: Option<String>,
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
    Document => DocumentTranslation, kind: "document",
    fields: [name, slug, description],
    related: category,
}

translatable! {
    DocumentCategory => DocumentCategoryTranslation, kind: "document_category",
    fields: [name, slug, description],
}
