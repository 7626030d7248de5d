/// WP Admin Bar Toggle - Chrome Extension background worker
/// Built with Rust + WASM

pub mod chrome;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod icon;
pub mod manager;
pub mod page;
pub mod platform;
pub mod preferences;
pub mod tab_data;

use std::rc::Rc;
use wasm_bindgen::prelude::*;

// Set up panic hook and logging, then wire the browser events
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let manager = manager::AdminBarManager::new(
        chrome::ChromePlatform,
        config::ExtensionConfig::default(),
    );
    events::register(Rc::new(manager));
}

// Re-export hostname extraction for JavaScript access
#[wasm_bindgen]
pub fn extract_hostname(url: &str) -> Option<String> {
    domain::extract_hostname(url).ok().flatten()
}
