use serde::{Deserialize, Serialize};

/// In-progress values of the message title form, persisted on every edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub label: String,
}

/// A reusable title the user saved for quick selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitlePreset {
    pub value: String,
    pub label: String,
}

/// Post record returned by the backend once a title has been created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    #[serde(default)]
    pub label: Option<String>,
}
