pub mod home_queries;
pub mod resource_queries;
pub mod site_queries;
