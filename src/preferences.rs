/// Per-domain preference records for chrome.storage.sync

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A slice of the synced store: hostname -> "admin bar hidden".
///
/// `storage.sync.get(key)` answers with an object holding only the
/// requested keys, so the same type shapes both reads and writes.
/// Values are kept as raw JSON: anything other than `true` reads as shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainPreferences {
    entries: BTreeMap<String, serde_json::Value>,
}

impl DomainPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record written when a domain is toggled to hidden.
    pub fn hidden_entry(domain: &str) -> Self {
        let mut prefs = Self::new();
        prefs.mark_hidden(domain);
        prefs
    }

    pub fn mark_hidden(&mut self, domain: &str) {
        self.entries
            .insert(domain.to_string(), serde_json::Value::Bool(true));
    }

    pub fn is_hidden(&self, domain: &str) -> bool {
        matches!(self.entries.get(domain), Some(serde_json::Value::Bool(true)))
    }
}
