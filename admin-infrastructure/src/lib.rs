pub mod config;
pub mod db;
pub mod models;
pub mod repositories;
pub mod services;
pub mod site;

pub use config::*;
pub use db::*;
pub use models::*;
pub use repositories::*;
pub use services::*;
pub use site::*;
