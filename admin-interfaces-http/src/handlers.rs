pub mod auth_handlers;
pub mod ops_handlers;
pub mod rest_handlers;
pub mod site_handlers;

pub use auth_handlers::*;
pub use ops_handlers::*;
pub use rest_handlers::*;
pub use site_handlers::*;
