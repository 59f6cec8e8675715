// Domain value objects
pub mod bulk_action_kind;
pub mod display_widget;
pub mod identifiers;

pub use bulk_action_kind::*;
pub use display_widget::*;
pub use identifiers::*;
