/// Host API surface the worker depends on

use crate::error::Result;
use crate::page::PageScript;
use crate::preferences::DomainPreferences;
use crate::tab_data::TabInfo;
use std::collections::BTreeMap;

/// The browser calls used by the event handlers.
///
/// `chrome::ChromePlatform` forwards to the `chrome.*` APIs; tests use an
/// in-memory double. Everything runs on the single-threaded WASM executor,
/// so the futures need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait Platform {
    async fn get_tab(&self, tab_id: i32) -> Result<TabInfo>;

    /// Active tab of the given window, if any.
    async fn active_tab(&self, window_id: i32) -> Result<Option<TabInfo>>;

    async fn storage_get(&self, key: &str) -> Result<DomainPreferences>;

    async fn storage_set(&self, items: &DomainPreferences) -> Result<()>;

    async fn storage_remove(&self, key: &str) -> Result<()>;

    async fn execute_script(&self, tab_id: i32, script: &PageScript) -> Result<()>;

    /// `paths` maps pixel size to image path.
    async fn set_icon(&self, paths: &BTreeMap<String, String>) -> Result<()>;
}
