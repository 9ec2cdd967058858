//! Data model shared by the dashboard host and the Yew front-end.

pub mod model;
pub mod requests;
pub mod responses;
