mod auth;
mod billing_rates;
pub mod client;
mod leads;
mod leave_requests;
mod settings;
mod staff;
pub mod types;

pub use auth::stored_user;
pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
