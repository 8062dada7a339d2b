pub mod auth;
pub mod mutation;
pub mod toast;
