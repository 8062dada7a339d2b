pub mod duplicate_dialog;
pub mod group_drawer;
pub mod group_form;
pub mod group_table;
pub mod rate_form;
pub mod rate_table;
pub mod stats;

pub use duplicate_dialog::DuplicateGroupDialog;
pub use group_drawer::GroupDrawer;
pub use group_form::GroupFormDialog;
pub use group_table::GroupTable;
pub use rate_form::RateFormDialog;
pub use rate_table::RateTable;
pub use stats::RateStatsStrip;
