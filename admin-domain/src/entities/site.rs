// Site descriptor entities

use serde::{Deserialize, Serialize};

use crate::entities::menu::{MenuEntry, NavLink};

/// Branding and navigation of the dashboard. Menu order is render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub logo_url: Option<String>,
    pub login_footer: Option<String>,
    pub login_description: Option<String>,
    pub locale: String,
    pub locale_switcher_enabled: bool,
    pub theme_switcher_enabled: bool,
    pub menus: Vec<MenuEntry>,
}

impl SiteConfig {
    pub fn links(&self) -> impl Iterator<Item = &NavLink> {
        self.menus.iter().filter_map(MenuEntry::as_link)
    }
}

/// Everything the admin subsystem needs to become configured.
#[derive(Debug, Clone)]
pub struct AdminSettings {
    /// Resource name of the model holding administrator accounts.
    pub user_model: String,
    /// Shared secret used to sign login tokens.
    pub admin_secret: String,
    /// Enforce per-model permissions on the rest surface.
    pub permission: bool,
    pub site: SiteConfig,
}

/// Rendered navigation node. Headers never carry a url.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavItem {
    Header {
        name: String,
    },
    Link {
        name: String,
        url: String,
        icon: Option<String>,
        external: bool,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteView {
    pub name: String,
    pub logo_url: Option<String>,
    pub login_footer: Option<String>,
    pub login_description: Option<String>,
    pub locale: String,
    pub locale_switcher: bool,
    pub theme_switcher: bool,
    pub menus: Vec<NavItem>,
}
