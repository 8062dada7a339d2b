pub mod actions;
pub mod create_form;
pub mod stats;
pub mod summary;
pub mod table;
pub mod workflow;

pub use actions::LeaveActionBar;
pub use create_form::LeaveCreateDialog;
pub use stats::LeaveStatsStrip;
pub use summary::LeaveSummary;
pub use table::LeaveTable;
pub use workflow::{HandoverPanel, WorkflowSteps};
