use std::sync::Arc;

use admin_domain::ports::{AdminUserRepository, PageRenderer, RecordRepository};
use admin_domain::RuntimeConfig;

use crate::{AdminSite, Metrics};

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub admin: Arc<AdminSite>,
    pub record_repo: Arc<dyn RecordRepository>,
    pub user_repo: Arc<dyn AdminUserRepository>,
    pub renderer: Arc<dyn PageRenderer>,
    pub metrics: Arc<Metrics>,
}
