/// Listener registration for the service worker

use crate::chrome::ChromePlatform;
use crate::manager::AdminBarManager;
use crate::tab_data::{ActiveInfo, ChangeInfo, TabInfo};
use serde::de::DeserializeOwned;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

// The chrome listeners themselves are added by background.js at module
// evaluation; events arriving before `setHandlers` wait in its relay.
#[wasm_bindgen(module = "/background.js")]
extern "C" {
    fn setHandlers(
        action_clicked: &js_sys::Function,
        tab_activated: &js_sys::Function,
        window_focus_changed: &js_sys::Function,
        tab_updated: &js_sys::Function,
    );
}

fn parse<T: DeserializeOwned>(event: &str, value: JsValue) -> Option<T> {
    match serde_wasm_bindgen::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::error!("Malformed {} payload: {}", event, e);
            None
        }
    }
}

/// Hook the manager up to the four browser events. Each event runs its
/// handler to completion on the local executor.
///
/// The service worker entry must import the wasm-pack output statically so
/// background.js registers its chrome listeners before any await.
pub fn register(manager: Rc<AdminBarManager<ChromePlatform>>) {
    let on_click = {
        let manager = manager.clone();
        Closure::<dyn FnMut(JsValue)>::new(move |tab: JsValue| {
            let Some(tab) = parse::<TabInfo>("action.onClicked", tab) else {
                return;
            };
            log::debug!("Action clicked on tab {:?}", tab.id);
            let manager = manager.clone();
            spawn_local(async move { manager.handle_action_click(tab).await });
        })
    };

    let on_activated = {
        let manager = manager.clone();
        Closure::<dyn FnMut(JsValue)>::new(move |info: JsValue| {
            let Some(info) = parse::<ActiveInfo>("tabs.onActivated", info) else {
                return;
            };
            let manager = manager.clone();
            spawn_local(async move { manager.handle_tab_activated(info).await });
        })
    };

    let on_focus = {
        let manager = manager.clone();
        Closure::<dyn FnMut(i32)>::new(move |window_id: i32| {
            let manager = manager.clone();
            spawn_local(async move { manager.handle_window_focus_change(window_id).await });
        })
    };

    let on_updated = Closure::<dyn FnMut(i32, JsValue, JsValue)>::new(
        move |tab_id: i32, change: JsValue, tab: JsValue| {
            let (Some(change), Some(tab)) = (
                parse::<ChangeInfo>("tabs.onUpdated", change),
                parse::<TabInfo>("tabs.onUpdated", tab),
            ) else {
                return;
            };
            let manager = manager.clone();
            spawn_local(async move { manager.handle_tab_updated(tab_id, change, tab).await });
        },
    );

    // Replays anything queued while the module was loading
    setHandlers(
        on_click.as_ref().unchecked_ref(),
        on_activated.as_ref().unchecked_ref(),
        on_focus.as_ref().unchecked_ref(),
        on_updated.as_ref().unchecked_ref(),
    );

    // Listeners live as long as the worker
    on_click.forget();
    on_activated.forget();
    on_focus.forget();
    on_updated.forget();

    log::debug!("Background handlers installed");
}
