// In-memory state for router tests

use std::sync::Arc;

use serde_json::json;

use admin_application::auth::hash_password;
use admin_application::{AdminApp, AppState, Metrics};
use admin_domain::{AdminSettings, AdminUser, RecordRepository, RuntimeConfig, SiteConfig};
use admin_infrastructure::{builtin_models, dashboard_site, InMemoryStore, TeraRenderer};

pub const ROOT_PASSWORD: &str = "123456";

fn test_site() -> SiteConfig {
    SiteConfig {
        name: "Admin Demo".to_string(),
        ..dashboard_site()
    }
}

/// Products 1 and 3 exist; `root` is a superuser.
pub async fn test_state(permission: bool) -> (AppState, Arc<InMemoryStore>) {
    let models = builtin_models();
    let mut app = AdminApp::new(models.clone());
    app.init(AdminSettings {
        user_model: "User".to_string(),
        admin_secret: "test".to_string(),
        permission,
        site: test_site(),
    })
    .expect("init");

    let store = Arc::new(InMemoryStore::new());
    store.ensure_schema(&models).await.expect("schema");
    for id in [1, 3] {
        store
            .insert("Product", json!({"id": id, "name": format!("product {id}")}))
            .await
            .expect("product");
    }
    store
        .add_user(
            "User",
            AdminUser {
                id: 1,
                username: "root".to_string(),
                password_hash: hash_password(ROOT_PASSWORD).expect("hash"),
                is_superuser: true,
                is_active: true,
            },
        )
        .await
        .expect("user");

    let state = AppState {
        config: RuntimeConfig::default(),
        admin: Arc::new(app.into_site().expect("site")),
        record_repo: store.clone(),
        user_repo: store.clone(),
        renderer: Arc::new(
            TeraRenderer::from_raw("home.html", "<h1>{{ site.name }}</h1>").expect("renderer"),
        ),
        metrics: Arc::new(Metrics::default()),
    };
    (state, store)
}
