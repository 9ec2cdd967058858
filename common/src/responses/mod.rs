use serde::{Deserialize, Serialize};

use crate::model::title::Post;

/// Success body of `POST /parent/upload`. The message is informational
/// only; a 2xx status alone means the batch was accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadAccepted {
    #[serde(default)]
    pub message: Option<String>,
}

/// Success body of `POST /post/titleCreate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleCreated {
    pub post: Post,
}
