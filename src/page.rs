/// Page mutations injected into a tab

use crate::config::ExtensionConfig;
use crate::icon::IconState;
use serde::{Deserialize, Serialize};

/// The two DOM mutations the extension performs on a WordPress page.
///
/// `Hide`: `#wpadminbar` gets `display: none`, `<html>` gets its top
/// margin/padding and the admin bar height variable forced to `0px
/// !important`, `<body>` loses the `admin-bar` class.
///
/// `Restore`: `#wpadminbar` and `<html>` lose their inline `style`, the
/// height variable is removed, `<body>` regains `admin-bar`.
///
/// Missing elements are skipped by the page function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageAction {
    Hide,
    Restore,
}

impl PageAction {
    /// Icon to show once this action has been applied.
    pub fn resulting_icon(self) -> IconState {
        match self {
            PageAction::Hide => IconState::Hidden,
            PageAction::Restore => IconState::Shown,
        }
    }
}

/// Arguments handed to the injected page function via `executeScript({ args })`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageScript {
    pub action: PageAction,
    pub admin_bar_id: String,
    pub height_var: String,
    pub body_class: String,
}

impl PageScript {
    pub fn new(action: PageAction, config: &ExtensionConfig) -> Self {
        PageScript {
            action,
            admin_bar_id: config.admin_bar_id.clone(),
            height_var: config.admin_bar_height_var.clone(),
            body_class: config.body_class.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resulting_icon() {
        assert_eq!(PageAction::Hide.resulting_icon(), IconState::Hidden);
        assert_eq!(PageAction::Restore.resulting_icon(), IconState::Shown);
    }

    #[test]
    fn test_script_args_shape() {
        let script = PageScript::new(PageAction::Hide, &ExtensionConfig::default());
        let json = serde_json::to_value(&script).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "action": "hide",
                "adminBarId": "wpadminbar",
                "heightVar": "--wp-admin--admin-bar--height",
                "bodyClass": "admin-bar",
            })
        );
    }
}
