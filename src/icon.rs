/// Toolbar icon state

use crate::config::ExtensionConfig;
use std::collections::BTreeMap;

/// Which icon variant the action button shows. Derived from the current
/// tab's preference, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconState {
    Hidden,
    Shown,
}

impl IconState {
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden {
            IconState::Hidden
        } else {
            IconState::Shown
        }
    }

    /// Pixel size -> image path map for `chrome.action.setIcon`. Sizes are
    /// string keys since the map crosses into JS as a plain object.
    pub fn paths(self, config: &ExtensionConfig) -> BTreeMap<String, String> {
        let set = match self {
            IconState::Hidden => &config.hidden_icon,
            IconState::Shown => &config.shown_icon,
        };

        BTreeMap::from([
            ("16".to_string(), set.small.clone()),
            ("32".to_string(), set.large.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hidden() {
        assert_eq!(IconState::from_hidden(true), IconState::Hidden);
        assert_eq!(IconState::from_hidden(false), IconState::Shown);
    }

    #[test]
    fn test_hidden_paths() {
        let paths = IconState::Hidden.paths(&ExtensionConfig::default());
        assert_eq!(paths.get("16").map(String::as_str), Some("img/icon19_1.png"));
        assert_eq!(paths.get("32").map(String::as_str), Some("img/icon38_1.png"));
    }

    #[test]
    fn test_shown_paths() {
        let paths = IconState::Shown.paths(&ExtensionConfig::default());
        assert_eq!(paths.len(), 2);
        assert_eq!(paths["16"], "img/icon19_0.png");
        assert_eq!(paths["32"], "img/icon38_0.png");
    }

    #[test]
    fn test_paths_serialize_with_size_keys() {
        let paths = IconState::Shown.paths(&ExtensionConfig::default());
        let json = serde_json::to_string(&paths).unwrap();
        assert_eq!(json, r#"{"16":"img/icon19_0.png","32":"img/icon38_0.png"}"#);
    }
}
