//! Services offered by the business.

use super::nullable_list;
use crate::resolver::translatable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A service offered by the business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,
    #[serde(default)]
    pub business_id: u64,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub translations: Vec<ServiceTranslation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceTranslation {
    #[serde(default)]
    pub service_id: u64,
    pub locale: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

translatable! {
    Service => ServiceTranslation, kind: "service",
    fields: [title, slug, short_description, description],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContentResolver;

    #[test]
    fn test_service_fields() {
        let service = Service {
            id: 1,
            title: "Consulting".to_string(),
            slug: "consulting".to_string(),
            short_description: Some("Advice".to_string()),
            icon: Some("briefcase".to_string()),
            translations: vec![ServiceTranslation {
                locale: "am".to_string(),
                title: Some("ምክር".to_string()),
                short_description: Some("".to_string()),
                description: Some("ዝርዝር".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let resolved = ContentResolver::default().resolve(&service, "am");
        assert_eq!(resolved.title, "ምክር");
        assert_eq!(resolved.slug, "consulting");
        assert_eq!(resolved.short_description.as_deref(), Some("Advice"));
        assert_eq!(resolved.description.as_deref(), Some("ዝርዝር"));
        assert_eq!(resolved.icon.as_deref(), Some("briefcase"));
    }
}
