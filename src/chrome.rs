/// `Platform` backed by the chrome.* extension APIs

use crate::error::{self, ExtensionError, describe_js_error};
use crate::page::PageScript;
use crate::platform::Platform;
use crate::preferences::DomainPreferences;
use crate::tab_data::TabInfo;
use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/background.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getTab(tab_id: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getActiveTab(window_id: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getSyncStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setSyncStorage(items: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeSyncStorage(key: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn runPageScript(tab_id: i32, args: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn setActionIcon(paths: JsValue) -> Result<(), JsValue>;
}

/// Shape a payload as the plain JSON object chrome.* expects. Keys of the
/// returned object are always strings.
pub fn object_payload<T: Serialize>(value: &T) -> error::Result<serde_json::Value> {
    match serde_json::to_value(value)? {
        object @ serde_json::Value::Object(_) => Ok(object),
        other => Err(ExtensionError::Serialization(format!(
            "expected an object payload, got {}",
            other
        ))),
    }
}

/// chrome.* wants plain objects, not ES `Map`s.
pub fn to_js<T: Serialize>(value: &T) -> error::Result<JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    Ok(object_payload(value)?.serialize(&serializer)?)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ChromePlatform;

impl Platform for ChromePlatform {
    async fn get_tab(&self, tab_id: i32) -> error::Result<TabInfo> {
        let tab_js = getTab(tab_id)
            .await
            .map_err(|e| ExtensionError::Tabs(describe_js_error(&e)))?;
        Ok(serde_wasm_bindgen::from_value(tab_js)?)
    }

    async fn active_tab(&self, window_id: i32) -> error::Result<Option<TabInfo>> {
        let tab_js = getActiveTab(window_id)
            .await
            .map_err(|e| ExtensionError::Tabs(describe_js_error(&e)))?;

        if tab_js.is_null() || tab_js.is_undefined() {
            return Ok(None);
        }
        Ok(Some(serde_wasm_bindgen::from_value(tab_js)?))
    }

    async fn storage_get(&self, key: &str) -> error::Result<DomainPreferences> {
        let items_js = getSyncStorage(key)
            .await
            .map_err(|e| ExtensionError::Storage(describe_js_error(&e)))?;

        if items_js.is_null() || items_js.is_undefined() {
            return Ok(DomainPreferences::new());
        }
        Ok(serde_wasm_bindgen::from_value(items_js)?)
    }

    async fn storage_set(&self, items: &DomainPreferences) -> error::Result<()> {
        setSyncStorage(to_js(items)?)
            .await
            .map_err(|e| ExtensionError::Storage(describe_js_error(&e)))
    }

    async fn storage_remove(&self, key: &str) -> error::Result<()> {
        removeSyncStorage(key)
            .await
            .map_err(|e| ExtensionError::Storage(describe_js_error(&e)))
    }

    async fn execute_script(&self, tab_id: i32, script: &PageScript) -> error::Result<()> {
        runPageScript(tab_id, to_js(script)?)
            .await
            .map_err(|e| ExtensionError::Scripting(describe_js_error(&e)))
    }

    async fn set_icon(&self, paths: &BTreeMap<String, String>) -> error::Result<()> {
        setActionIcon(to_js(paths)?)
            .await
            .map_err(|e| ExtensionError::Icon(describe_js_error(&e)))
    }
}
