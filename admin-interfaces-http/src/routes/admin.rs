use axum::routing::{get, post};
use axum::Router;

use admin_application::AppState;

use crate::handlers::{auth_handlers, ops_handlers, rest_handlers, site_handlers};

/// The admin surface, mounted under `/admin`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/admin", admin_routes())
        .with_state(state)
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(site_handlers::home))
        .route("/site", get(site_handlers::site))
        .route("/login", post(auth_handlers::login))
        .route(
            "/rest/:resource/bulk/:action",
            post(rest_handlers::bulk_action),
        )
        .route("/rest/:resource/schema", get(rest_handlers::resource_schema))
        .route("/health/live", get(ops_handlers::health_live))
        .route("/health/ready", get(ops_handlers::health_ready))
        .route("/metrics", get(ops_handlers::metrics_prometheus))
}
