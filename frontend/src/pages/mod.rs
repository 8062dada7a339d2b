pub mod billing_rates;
pub mod dashboard;
pub mod home;
pub mod leads;
pub mod leave;
pub mod login;
pub mod settings;
pub mod staff;

pub use billing_rates::BillingRatesPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use leads::LeadsPage;
pub use leave::{LeaveDetailPage, LeavePage};
pub use login::LoginPage;
pub use settings::SettingsPage;
pub use staff::StaffPage;
