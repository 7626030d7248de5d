/// Data structures for browser events
use serde::{Deserialize, Serialize};

/// `chrome.windows.WINDOW_ID_NONE`: focus left the browser
pub const WINDOW_ID_NONE: i32 = -1;

/// The subset of `chrome.tabs.Tab` the worker reads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
}

impl TabInfo {
    pub fn new(id: i32, url: &str) -> TabInfo {
        TabInfo {
            id: Some(id),
            url: Some(url.to_string()),
        }
    }
}

/// Payload of `chrome.tabs.onActivated`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveInfo {
    pub tab_id: i32,
    pub window_id: i32,
}

/// Payload of `chrome.tabs.onUpdated`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeInfo {
    #[serde(default)]
    pub status: Option<String>,
}

impl ChangeInfo {
    pub fn is_complete(&self) -> bool {
        self.status.as_deref() == Some("complete")
    }
}

/// Result of looking up a tab's domain in the preference store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainCheck {
    pub found: bool,
    pub domain: Option<String>,
}

impl DomainCheck {
    pub fn not_found() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_info_from_chrome_json() {
        let json = r#"{
            "id": 42,
            "index": 3,
            "windowId": 7,
            "url": "https://example.com/",
            "title": "Example",
            "active": true,
            "pinned": false
        }"#;

        let tab: TabInfo = serde_json::from_str(json).unwrap();

        assert_eq!(tab.id, Some(42));
        assert_eq!(tab.url.as_deref(), Some("https://example.com/"));
    }

    #[test]
    fn test_tab_info_without_url() {
        // Tabs lacking the "tabs" permission or host access carry no url
        let tab: TabInfo = serde_json::from_str(r#"{ "id": 1 }"#).unwrap();
        assert_eq!(tab.url, None);
    }

    #[test]
    fn test_active_info() {
        let info: ActiveInfo = serde_json::from_str(r#"{ "tabId": 5, "windowId": 2 }"#).unwrap();
        assert_eq!(info, ActiveInfo { tab_id: 5, window_id: 2 });
    }

    #[test]
    fn test_change_info_status() {
        let loading: ChangeInfo = serde_json::from_str(r#"{ "status": "loading" }"#).unwrap();
        let complete: ChangeInfo = serde_json::from_str(r#"{ "status": "complete" }"#).unwrap();
        let title_only: ChangeInfo = serde_json::from_str(r#"{ "title": "New" }"#).unwrap();

        assert!(!loading.is_complete());
        assert!(complete.is_complete());
        assert!(!title_only.is_complete());
    }
}
