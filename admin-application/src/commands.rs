pub mod auth_commands;
pub mod bulk_action_commands;
