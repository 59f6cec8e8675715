// Domain entities

pub mod auth;
pub mod bulk;
pub mod menu;
pub mod resource;
pub mod runtime_config;
pub mod schema;
pub mod site;

pub use auth::*;
pub use bulk::*;
pub use menu::*;
pub use resource::*;
pub use runtime_config::*;
pub use schema::*;
pub use site::*;
