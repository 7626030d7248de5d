/// Extension configuration: icon sets, page identifiers, reserved URLs

use serde::{Deserialize, Serialize};

/// Icon file paths for one state, keyed by the pixel size Chrome renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconSet {
    pub small: String,
    pub large: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    /// Icon shown while the admin bar is hidden on the current domain
    pub hidden_icon: IconSet,
    /// Icon shown while the admin bar is visible
    pub shown_icon: IconSet,
    /// URL prefixes the extension is not allowed to script
    pub reserved_prefixes: Vec<String>,
    pub admin_bar_id: String,
    pub admin_bar_height_var: String,
    pub body_class: String,
}

impl ExtensionConfig {
    pub fn is_reserved_url(&self, url: &str) -> bool {
        self.reserved_prefixes
            .iter()
            .any(|prefix| url.starts_with(prefix.as_str()))
    }
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        ExtensionConfig {
            hidden_icon: IconSet {
                small: "img/icon19_1.png".to_string(),
                large: "img/icon38_1.png".to_string(),
            },
            shown_icon: IconSet {
                small: "img/icon19_0.png".to_string(),
                large: "img/icon38_0.png".to_string(),
            },
            reserved_prefixes: vec![
                "chrome://".to_string(),
                "chrome-extension://".to_string(),
            ],
            admin_bar_id: "wpadminbar".to_string(),
            admin_bar_height_var: "--wp-admin--admin-bar--height".to_string(),
            body_class: "admin-bar".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_urls() {
        let config = ExtensionConfig::default();
        assert!(config.is_reserved_url("chrome://extensions"));
        assert!(config.is_reserved_url("chrome-extension://abcdef/popup.html"));
        assert!(!config.is_reserved_url("https://example.com/wp-admin"));
        assert!(!config.is_reserved_url("http://chrome.example.com"));
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let json = r#"{ "reserved_prefixes": ["chrome://", "edge://"] }"#;
        let config: ExtensionConfig = serde_json::from_str(json).unwrap();

        assert!(config.is_reserved_url("edge://settings"));
        assert_eq!(config.admin_bar_id, "wpadminbar");
        assert_eq!(config.hidden_icon.small, "img/icon19_1.png");
    }
}
