// Configuration validation

use crate::{ConfigError, Result};

/// Implemented by typed configuration sections.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Reusable validation rules.
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    pub fn not_empty_list<T>(values: &[T], field: &str) -> Result<()> {
        if values.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} must contain at least one entry",
                field
            )));
        }
        Ok(())
    }

    /// Validate that a value is in a list of allowed values
    pub fn one_of<T>(value: &T, allowed: &[T], field: &str) -> Result<()>
    where
        T: PartialEq + std::fmt::Debug,
    {
        if !allowed.contains(value) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be one of {:?}, got {:?}",
                field, allowed, value
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty_validation() {
        assert!(ConfigValidator::not_empty("en", "default_language").is_ok());
        assert!(ConfigValidator::not_empty("  ", "default_language").is_err());
    }

    #[test]
    fn test_not_empty_list_validation() {
        assert!(ConfigValidator::not_empty_list(&["en"], "supported_locales").is_ok());
        assert!(ConfigValidator::not_empty_list::<&str>(&[], "supported_locales").is_err());
    }

    #[test]
    fn test_one_of_validation() {
        let allowed = vec!["en".to_string(), "am".to_string()];
        assert!(ConfigValidator::one_of(&"am".to_string(), &allowed, "field").is_ok());

        let err = ConfigValidator::one_of(&"fr".to_string(), &allowed, "default_language")
            .unwrap_err();
        assert!(err.to_string().contains("default_language"));
    }
}
