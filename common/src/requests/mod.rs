use serde::{Deserialize, Serialize};

/// Multipart field names and fixed values of `POST /parent/upload`.
pub mod upload {
    pub const FIELD_FILE: &str = "file";
    pub const FIELD_THROW_IN_ERROR: &str = "throwInError";
    pub const FIELD_WITH_CSV: &str = "withCSV";
    pub const FIELD_ACTION: &str = "action";

    /// Keep validating after the first bad row.
    pub const THROW_IN_ERROR: &str = "false";
    /// Ask the backend to echo the error rows as CSV.
    pub const WITH_CSV: &str = "true";
}

/// Request payload for `POST /post/titleCreate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleCreateRequest {
    pub title: String,
    pub label: String,
}
