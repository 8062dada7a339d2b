pub mod dialogs;
pub mod form;
pub mod table;

pub use dialogs::{DepartureDialog, InviteDialog, ReinstateDialog};
pub use form::StaffFormDialog;
pub use table::StaffTable;
