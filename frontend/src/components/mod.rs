pub mod csv_import;
pub mod dashboard;
pub mod layout;
pub mod title_create;
pub mod toast;
