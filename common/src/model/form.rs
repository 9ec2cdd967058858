use serde::{Deserialize, Serialize};

/// Body of `GET /form/count`, used for the navigation badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormCount {
    pub form_count: u32,
}
