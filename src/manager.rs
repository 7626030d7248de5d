/// Admin bar state synchronization: preference store, page and icon
use crate::config::ExtensionConfig;
use crate::domain::{TabDomain, resolve_tab_domain};
use crate::icon::IconState;
use crate::page::{PageAction, PageScript};
use crate::platform::Platform;
use crate::preferences::DomainPreferences;
use crate::tab_data::{ActiveInfo, ChangeInfo, DomainCheck, TabInfo, WINDOW_ID_NONE};

/// Keeps the stored preference, the page and the toolbar icon in step.
///
/// Every failure is logged and swallowed; nothing is retried or rolled back.
pub struct AdminBarManager<P> {
    platform: P,
    config: ExtensionConfig,
}

impl<P: Platform> AdminBarManager<P> {
    pub fn new(platform: P, config: ExtensionConfig) -> Self {
        AdminBarManager { platform, config }
    }

    /// Adds a domain to the synced store
    pub async fn add_domain(&self, domain: &str) {
        match self.platform.storage_set(&DomainPreferences::hidden_entry(domain)).await {
            Ok(()) => log::info!("{} added to storage, admin bar will be hidden.", domain),
            Err(e) => log::error!("Error adding domain to storage: {}", e),
        }
    }

    /// Removes a domain from the synced store
    pub async fn remove_domain(&self, domain: &str) {
        match self.platform.storage_remove(domain).await {
            Ok(()) => log::info!("{} removed from storage, admin bar restored.", domain),
            Err(e) => log::error!("Error removing domain from storage: {}", e),
        }
    }

    /// Looks up the tab's hostname in the store.
    ///
    /// Internal browser pages and unresolvable tabs report not-found with
    /// no domain, which callers treat as "do not touch".
    pub async fn check_domain(&self, tab_id: i32) -> DomainCheck {
        let tab = match self.platform.get_tab(tab_id).await {
            Ok(tab) => tab,
            Err(e) => {
                log::error!("Error checking domain: {}", e);
                return DomainCheck::not_found();
            }
        };

        let domain = match resolve_tab_domain(&self.config, tab.url.as_deref()) {
            Ok(TabDomain::Host(domain)) => domain,
            Ok(TabDomain::Reserved) => {
                log::warn!("Cannot run on chrome:// or chrome-extension:// pages");
                return DomainCheck::not_found();
            }
            Ok(TabDomain::NoHost) => {
                log::debug!("Tab {} has no hostname", tab_id);
                return DomainCheck::not_found();
            }
            Err(e) => {
                log::error!("Error checking domain: {}", e);
                return DomainCheck::not_found();
            }
        };

        match self.platform.storage_get(&domain).await {
            Ok(prefs) => DomainCheck {
                found: prefs.is_hidden(&domain),
                domain: Some(domain),
            },
            Err(e) => {
                log::error!("Error checking domain: {}", e);
                DomainCheck::not_found()
            }
        }
    }

    /// Hides the admin bar in the tab, then shows the hidden icon
    pub async fn remove_bar(&self, tab_id: i32) {
        if let Err(e) = self.apply(tab_id, PageAction::Hide).await {
            log::error!("Error removing admin bar: {}", e);
        }
    }

    /// Restores the admin bar in the tab, then shows the default icon
    pub async fn restore_bar(&self, tab_id: i32) {
        if let Err(e) = self.apply(tab_id, PageAction::Restore).await {
            log::error!("Error restoring admin bar: {}", e);
        }
    }

    async fn apply(&self, tab_id: i32, action: PageAction) -> crate::error::Result<()> {
        let script = PageScript::new(action, &self.config);
        self.platform.execute_script(tab_id, &script).await?;
        self.set_icon(action.resulting_icon()).await;
        Ok(())
    }

    pub async fn set_icon(&self, state: IconState) {
        if let Err(e) = self.platform.set_icon(&state.paths(&self.config)).await {
            log::error!("Error setting icon: {}", e);
        }
    }

    /// Toggle: action button clicked
    pub async fn handle_action_click(&self, tab: TabInfo) {
        let Some(tab_id) = tab.id.filter(|&id| id != 0) else {
            return;
        };

        let DomainCheck { found, domain } = self.check_domain(tab_id).await;
        let Some(domain) = domain else {
            return;
        };

        if found {
            self.remove_domain(&domain).await;
            self.restore_bar(tab_id).await;
        } else {
            self.add_domain(&domain).await;
            self.remove_bar(tab_id).await;
        }
    }

    /// Tab switched within a window
    pub async fn handle_tab_activated(&self, active_info: ActiveInfo) {
        log::debug!("Tab {} activated in window {}", active_info.tab_id, active_info.window_id);
        let check = self.check_domain(active_info.tab_id).await;
        self.set_icon(IconState::from_hidden(check.found)).await;
    }

    /// Another browser window gained focus
    pub async fn handle_window_focus_change(&self, window_id: i32) {
        if window_id == WINDOW_ID_NONE {
            return;
        }

        match self.platform.active_tab(window_id).await {
            Ok(Some(TabInfo { id: Some(tab_id), .. })) if tab_id != 0 => {
                let check = self.check_domain(tab_id).await;
                self.set_icon(IconState::from_hidden(check.found)).await;
            }
            Ok(_) => log::debug!("No active tab in window {}", window_id),
            Err(e) => log::error!("Error handling window focus change: {}", e),
        }
    }

    /// Page load finished: re-apply the stored preference
    pub async fn handle_tab_updated(&self, tab_id: i32, change_info: ChangeInfo, tab: TabInfo) {
        if !change_info.is_complete() || tab.url.as_deref().is_none_or(str::is_empty) {
            return;
        }

        let check = self.check_domain(tab_id).await;
        if check.found {
            self.remove_bar(tab_id).await;
        }

        self.set_icon(IconState::from_hidden(check.found)).await;
    }
}
