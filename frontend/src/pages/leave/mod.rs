pub mod components;
pub mod detail;
pub mod detail_view_model;
pub mod layout;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use detail::LeaveDetailPage;
pub use panel::LeavePage;
