pub mod config;
pub mod form;
pub mod parent;
pub mod title;
pub mod upload;
