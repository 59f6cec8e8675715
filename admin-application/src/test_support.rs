// Demo site, schemas and state shared by the unit tests

use std::sync::Arc;

use serde_json::json;

use admin_domain::{
    AdminSettings, AdminUser, ModelSchema, RecordRepository, RuntimeConfig, SiteConfig,
};
use admin_infrastructure::{builtin_models, dashboard_site, InMemoryStore, TeraRenderer};

use crate::auth::hash_password;
use crate::{AdminApp, AdminSite, AppState, Metrics};

pub const ROOT_PASSWORD: &str = "123456";

pub fn demo_schemas() -> Vec<ModelSchema> {
    builtin_models()
}

/// The bundled dashboard site under a distinct name.
pub fn demo_site() -> SiteConfig {
    SiteConfig {
        name: "Admin Demo".to_string(),
        ..dashboard_site()
    }
}

pub fn demo_settings() -> AdminSettings {
    AdminSettings {
        user_model: "User".to_string(),
        admin_secret: "test".to_string(),
        permission: false,
        site: demo_site(),
    }
}

pub fn demo_admin_site() -> AdminSite {
    let mut app = AdminApp::new(demo_schemas());
    app.init(demo_settings()).expect("init");
    app.into_site().expect("site")
}

pub async fn demo_state(permission: bool) -> (AppState, Arc<InMemoryStore>) {
    let mut app = AdminApp::new(demo_schemas());
    app.init(AdminSettings {
        permission,
        ..demo_settings()
    })
    .expect("init");

    let store = Arc::new(InMemoryStore::new());
    store.ensure_schema(&demo_schemas()).await.expect("schema");
    let renderer = TeraRenderer::from_raw("home.html", "<h1>{{ site.name }}</h1>").expect("renderer");

    let state = AppState {
        config: RuntimeConfig::default(),
        admin: Arc::new(app.into_site().expect("site")),
        record_repo: store.clone(),
        user_repo: store.clone(),
        renderer: Arc::new(renderer),
        metrics: Arc::new(Metrics::default()),
    };
    (state, store)
}

/// `root` is a superuser; `staff` may only read products.
pub async fn seed_users(store: &InMemoryStore) -> (AdminUser, AdminUser) {
    let admin = AdminUser {
        id: 1,
        username: "root".to_string(),
        password_hash: hash_password(ROOT_PASSWORD).expect("hash"),
        is_superuser: true,
        is_active: true,
    };
    let staff = AdminUser {
        id: 2,
        username: "staff".to_string(),
        password_hash: hash_password("staff-pass").expect("hash"),
        is_superuser: false,
        is_active: true,
    };
    store.add_user("User", admin.clone()).await.expect("root");
    store.add_user("User", staff.clone()).await.expect("staff");
    store.grant(staff.id, "Product", "read").await;
    (admin, staff)
}

pub async fn seed_products(store: &InMemoryStore, ids: &[i64]) {
    for id in ids {
        store
            .insert(
                "Product",
                json!({
                    "id": id,
                    "name": format!("product {id}"),
                    "view_num": 0,
                    "sort": 0,
                    "is_reviewed": false,
                    "type": 1,
                    "image": "https://example.com/p.png",
                    "body": "body",
                    "created_at": "2024-01-01T00:00:00Z",
                }),
            )
            .await
            .expect("product");
    }
}

pub async fn seed_categories(store: &InMemoryStore) {
    for (id, name) in [(1, "Books"), (2, "Music")] {
        store
            .insert("Category", json!({"id": id, "slug": name.to_lowercase(), "name": name}))
            .await
            .expect("category");
    }
}
