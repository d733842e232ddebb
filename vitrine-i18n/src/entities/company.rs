//! Company-profile content: testimonials, headline stats, core values and
//! the about-us block.

use super::nullable_list;
use crate::resolver::translatable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u64,
    #[serde(default)]
    pub business_id: u64,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub translations: Vec<TestimonialTranslation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestimonialTranslation {
    #[serde(default)]
    pub testimonial_id: u64,
    pub locale: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A headline figure such as "10+ years".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub id: u64,
    #[serde(default)]
    pub business_id: u64,
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub translations: Vec<StatTranslation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatTranslation {
    #[serde(default)]
    pub stat_id: u64,
    pub locale: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreValue {
    pub id: u64,
    #[serde(default)]
    pub business_id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub translations: Vec<CoreValueTranslation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreValueTranslation {
    #[serde(default)]
    pub core_value_id: u64,
    pub locale: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The about-us block: company text, mission and vision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub id: u64,
    #[serde(default)]
    pub business_id: u64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub mission: Option<String>,
    #[serde(default)]
    pub vision: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub founded_year: Option<u16>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub translations: Vec<AboutContentTranslation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutContentTranslation {
    #[serde(default)]
    pub about_content_id: u64,
    pub locale: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub mission: Option<String>,
    #[serde(default)]
    pub vision: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

translatable! {
    Testimonial => TestimonialTranslation, kind: "testimonial",
    fields: [name, role, description, company],
}

translatable! {
    Stat => StatTranslation, kind: "stat",
    fields: [name, value],
}

translatable! {
    CoreValue => CoreValueTranslation, kind: "core_value",
    fields: [title, description],
}

translatable! {
    AboutContent => AboutContentTranslation, kind: "about_content",
    fields: [text, mission, vision],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContentResolver;
    use serde_json::json;

    #[test]
    fn test_testimonial_fields() {
        let testimonial: Testimonial = serde_json::from_value(json!({
            "id": 1,
            "name": "Sara",
            "role": "CEO",
            "description": "Great partner.",
            "company": "Acme",
            "rating": 5,
            "translations": [
                { "locale": "am", "name": "ሳራ", "role": "ሥራ አስኪያጅ", "company": "" }
            ]
        }))
        .unwrap();

        let resolved = ContentResolver::default().resolve(&testimonial, "am");
        assert_eq!(resolved.name, "ሳራ");
        assert_eq!(resolved.role.as_deref(), Some("ሥራ አስኪያጅ"));
        assert_eq!(resolved.description, "Great partner.");
        assert_eq!(resolved.company.as_deref(), Some("Acme"));
        assert_eq!(resolved.rating, Some(5));
    }

    #[test]
    fn test_stat_value_is_localized() {
        let stat = Stat {
            id: 1,
            name: "Years of experience".to_string(),
            value: "10+".to_string(),
            translations: vec![StatTranslation {
                locale: "en".to_string(),
                name: Some("Years in business".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let resolved = ContentResolver::default().resolve(&stat, "am");
        assert_eq!(resolved.name, "Years in business");
        assert_eq!(resolved.value, "10+");
    }

    #[test]
    fn test_core_value_fields() {
        let value = CoreValue {
            id: 1,
            title: "Integrity".to_string(),
            description: None,
            translations: vec![CoreValueTranslation {
                locale: "am".to_string(),
                title: Some("ታማኝነት".to_string()),
                description: Some("ቃላችንን እንጠብቃለን".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let resolved = ContentResolver::default().resolve(&value, "am");
        assert_eq!(resolved.title, "ታማኝነት");
        assert_eq!(resolved.description.as_deref(), Some("ቃላችንን እንጠብቃለን"));
    }

    #[test]
    fn test_about_content_fields() {
        let about = AboutContent {
            id: 1,
            text: "We build things.".to_string(),
            mission: Some("Quality".to_string()),
            vision: Some("Everywhere".to_string()),
            founded_year: Some(2010),
            translations: vec![AboutContentTranslation {
                locale: "am".to_string(),
                mission: Some("ጥራት".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let resolved = ContentResolver::default().resolve(&about, "am");
        assert_eq!(resolved.text, "We build things.");
        assert_eq!(resolved.mission.as_deref(), Some("ጥራት"));
        assert_eq!(resolved.vision.as_deref(), Some("Everywhere"));
        assert_eq!(resolved.founded_year, Some(2010));
    }
}
