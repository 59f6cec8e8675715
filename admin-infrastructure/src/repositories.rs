pub mod memory;
pub mod postgres_records;
pub mod postgres_users;

pub use memory::*;
pub use postgres_records::*;
pub use postgres_users::*;
