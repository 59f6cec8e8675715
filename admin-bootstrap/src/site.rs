// Settings of the bundled dashboard

use admin_domain::AdminSettings;
use admin_infrastructure::{dashboard_site, AppConfig};

pub const USER_MODEL: &str = "User";

pub fn admin_settings(config: &AppConfig) -> AdminSettings {
    AdminSettings {
        user_model: USER_MODEL.to_string(),
        admin_secret: config.admin_secret.clone(),
        permission: config.permission,
        site: dashboard_site(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_application::AdminApp;
    use admin_infrastructure::builtin_models;

    #[test]
    fn dashboard_site_initializes_against_builtin_models() {
        let config = AppConfig {
            admin_secret: "test".to_string(),
            ..AppConfig::default()
        };
        let mut app = AdminApp::new(builtin_models());
        let site = app.init(admin_settings(&config)).expect("init");

        for resource in ["Product", "Category", "Config", "User", "Role", "Permission"] {
            assert!(site.registry.contains(resource), "{resource} not registered");
        }
        assert!(!site.registry.contains("logout"));
        assert_eq!(site.site.menus.len(), 12);
    }
}
