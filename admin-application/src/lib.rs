// Admin Application Layer

pub mod admin;
pub mod auth;
pub mod commands;
pub mod error;
pub mod metrics;
pub mod queries;
pub mod registry;
pub mod state;

#[cfg(test)]
mod test_support;

pub use admin::{AdminApp, AdminSite};
pub use error::{AppError, ConfigurationError};
pub use metrics::Metrics;
pub use registry::{ModelRegistry, RegisteredModel};
pub use state::AppState;
