pub mod bulk_action_bar;
pub mod common;
pub mod confirm_dialog;
pub mod empty_state;
pub mod error;
pub mod filters;
pub mod forms;
pub mod guard;
pub mod layout;
pub mod modal;
pub mod reason_dialog;
pub mod table;
pub mod tabs;
pub mod toast;
