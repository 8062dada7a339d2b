pub mod form;
pub mod format;
pub mod navigation;
pub mod selection;
pub mod storage;
