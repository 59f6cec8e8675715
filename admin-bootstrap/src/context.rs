use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Result};

use admin_application::{AdminApp, AppState, Metrics};
use admin_domain::RecordRepository;
use admin_infrastructure::{
    builtin_models, create_pool, AppConfig, PgAdminUserRepository, PgRecordRepository,
    TeraRenderer,
};

use crate::site::admin_settings;

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let db_config = config.to_db_config();
        let models = builtin_models();

        let mut admin = AdminApp::new(models.clone());
        admin.init(admin_settings(&config))?;
        let admin = admin.into_site()?;

        let pool = create_pool(&db_config).await?;
        let record_repo = Arc::new(PgRecordRepository::new(pool.clone()));
        if db_config.generate_schemas {
            record_repo.ensure_schema(&models).await?;
        }

        let user_schema = admin
            .registry
            .schema(&admin.user_model)
            .ok_or_else(|| anyhow!("user model {} has no schema", admin.user_model))?;
        let user_repo = Arc::new(PgAdminUserRepository::new(pool, user_schema)?);
        let renderer = Arc::new(TeraRenderer::new(Path::new(&runtime_config.template_dir))?);

        let state = AppState {
            config: runtime_config,
            admin: Arc::new(admin),
            record_repo,
            user_repo,
            renderer,
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
