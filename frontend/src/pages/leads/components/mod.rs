pub mod form;
pub mod table;

pub use form::LeadFormDialog;
pub use table::LeadTable;
