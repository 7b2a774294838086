//! `[base]` section configuration.
//!
//! Document metadata written into the page `<head>`.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in folio.toml.
///
/// # Example
/// ```toml
/// [base]
/// title = "Sabrina Button"
/// description = "Robotics portfolio"
/// language = "en"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Browser tab title.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// `<meta name="description">`; omitted when empty.
    #[serde(default = "defaults::base::description")]
    #[educe(Default = defaults::base::description())]
    pub description: String,

    /// BCP 47 language code for `<html lang>`.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            title = "Portfolio"
            description = "Robotics work"
            language = "en-CA"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Portfolio");
        assert_eq!(config.base.description, "Robotics work");
        assert_eq!(config.base.language, "en-CA");
    }

    #[test]
    fn test_base_config_defaults() {
        let config: SiteConfig = toml::from_str("[base]").unwrap();

        assert_eq!(config.base.title, "Sabrina Button");
        assert_eq!(config.base.language, "en");
        assert!(!config.base.description.is_empty());
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            author = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_base_config_empty_description() {
        let config: SiteConfig = toml::from_str(
            r#"
            [base]
            description = ""
        "#,
        )
        .unwrap();
        assert_eq!(config.base.description, "");
    }
}
