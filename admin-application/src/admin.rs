use admin_domain::{AdminSettings, ModelSchema, SiteConfig};
use tracing::info;

use crate::{ConfigurationError, ModelRegistry};

/// The configured admin subsystem: site descriptor, model registry and auth settings.
#[derive(Debug, Clone)]
pub struct AdminSite {
    pub site: SiteConfig,
    pub registry: ModelRegistry,
    pub user_model: String,
    pub permission: bool,
    admin_secret: String,
}

impl AdminSite {
    pub fn admin_secret(&self) -> &str {
        &self.admin_secret
    }
}

/// Admin subsystem before and after `init`.
///
/// `init` may run once. A second call fails with
/// [`ConfigurationError::AlreadyInitialized`] and keeps the first configuration.
#[derive(Debug)]
pub struct AdminApp {
    schemas: Vec<ModelSchema>,
    configured: Option<AdminSite>,
}

impl AdminApp {
    pub fn new(schemas: Vec<ModelSchema>) -> Self {
        Self {
            schemas,
            configured: None,
        }
    }

    pub fn init(&mut self, settings: AdminSettings) -> Result<&AdminSite, ConfigurationError> {
        if self.configured.is_some() {
            return Err(ConfigurationError::AlreadyInitialized);
        }
        if settings.admin_secret.trim().is_empty() {
            return Err(ConfigurationError::EmptyAdminSecret);
        }
        let registry = ModelRegistry::build(&settings.site, &self.schemas)?;
        if !registry.contains(&settings.user_model) {
            return Err(ConfigurationError::UnknownUserModel(settings.user_model));
        }

        info!(
            site = %settings.site.name,
            menus = settings.site.menus.len(),
            resources = registry.len(),
            user_model = %settings.user_model,
            permission = settings.permission,
            "admin site configured"
        );
        Ok(&*self.configured.insert(AdminSite {
            site: settings.site,
            registry,
            user_model: settings.user_model,
            permission: settings.permission,
            admin_secret: settings.admin_secret,
        }))
    }

    pub fn is_initialized(&self) -> bool {
        self.configured.is_some()
    }

    pub fn site(&self) -> Option<&AdminSite> {
        self.configured.as_ref()
    }

    pub fn into_site(self) -> Result<AdminSite, ConfigurationError> {
        self.configured.ok_or(ConfigurationError::NotInitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{demo_schemas, demo_settings};

    #[test]
    fn second_init_is_rejected_and_keeps_first_site() {
        let mut app = AdminApp::new(demo_schemas());
        app.init(demo_settings()).expect("first init");

        let mut other = demo_settings();
        other.site.name = "Replacement".to_string();
        let err = app.init(other).expect_err("second init");
        assert_eq!(err, ConfigurationError::AlreadyInitialized);

        let site = app.into_site().expect("configured");
        assert_eq!(site.site.name, "Admin Demo");
    }

    #[test]
    fn into_site_requires_init() {
        let app = AdminApp::new(demo_schemas());
        assert!(!app.is_initialized());
        assert_eq!(app.into_site().expect_err("not initialized"), ConfigurationError::NotInitialized);
    }

    #[test]
    fn init_validates_user_model_and_secret() {
        let mut app = AdminApp::new(demo_schemas());
        let mut settings = demo_settings();
        settings.user_model = "Admin".to_string();
        assert_eq!(
            app.init(settings).expect_err("unknown user model"),
            ConfigurationError::UnknownUserModel("Admin".to_string())
        );

        let mut settings = demo_settings();
        settings.admin_secret = "  ".to_string();
        assert_eq!(
            app.init(settings).expect_err("empty secret"),
            ConfigurationError::EmptyAdminSecret
        );
        assert!(!app.is_initialized());
    }
}
