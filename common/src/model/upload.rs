use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::parent::{Parent, ParentColumns};

/// Bulk action applied to every row of an uploaded CSV.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadMode {
    #[default]
    Create,
    Update,
    Delete,
}

impl UploadMode {
    pub const ALL: [UploadMode; 3] = [UploadMode::Create, UploadMode::Update, UploadMode::Delete];

    /// Value sent in the `action` multipart field.
    pub fn as_str(self) -> &'static str {
        match self {
            UploadMode::Create => "create",
            UploadMode::Update => "update",
            UploadMode::Delete => "delete",
        }
    }
}

impl fmt::Display for UploadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UploadMode {
    type Err = String;

    /// An empty value selects the default mode (`create`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "create" => Ok(UploadMode::Create),
            "update" => Ok(UploadMode::Update),
            "delete" => Ok(UploadMode::Delete),
            other => Err(format!("unknown upload mode: {other}")),
        }
    }
}

/// One CSV row the backend refused, with the submitted values and the
/// validation message of every invalid column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    #[serde(default)]
    pub row: ParentColumns,
    #[serde(default)]
    pub errors: ParentColumns,
}

/// Which outcome list of an [`UploadResult`] a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadOutcome {
    Inserted,
    Updated,
    Deleted,
}

impl UploadOutcome {
    pub const ALL: [UploadOutcome; 3] = [
        UploadOutcome::Inserted,
        UploadOutcome::Updated,
        UploadOutcome::Deleted,
    ];
}

/// Structured report returned by `POST /parent/upload` when a batch is not
/// accepted as a whole.
///
/// Every list may be absent on the wire and decodes as empty. A key that is
/// present with the wrong shape is a decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(rename = "csvFile", default)]
    pub csv_file: CsvReport,
    #[serde(default)]
    pub errors: Vec<RowError>,
    #[serde(default)]
    pub inserted: Vec<Parent>,
    #[serde(default)]
    pub updated: Vec<Parent>,
    #[serde(default)]
    pub deleted: Vec<Parent>,
}

impl UploadResult {
    /// JSON keys that identify a body as an upload report.
    pub const KEYS: [&'static str; 5] = ["csvFile", "errors", "inserted", "updated", "deleted"];

    pub fn records(&self, outcome: UploadOutcome) -> &[Parent] {
        match outcome {
            UploadOutcome::Inserted => &self.inserted,
            UploadOutcome::Updated => &self.updated,
            UploadOutcome::Deleted => &self.deleted,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.csv_file.is_empty()
            && self.errors.is_empty()
            && UploadOutcome::ALL.iter().all(|o| self.records(*o).is_empty())
    }
}

/// Raw bytes of the error report the backend echoes back (`withCSV=true`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvReport(pub Vec<u8>);

impl CsvReport {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Shapes the report buffer takes on the wire: a serialized Node buffer
/// (`{"type":"Buffer","data":[..]}`), plain text or a bare byte array.
#[derive(Deserialize)]
#[serde(untagged)]
enum ReportRepr {
    Buffer { data: Vec<u8> },
    Text(String),
    Bytes(Vec<u8>),
}

#[derive(Serialize)]
struct BufferRepr<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    data: &'a [u8],
}

impl<'de> Deserialize<'de> for CsvReport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<ReportRepr>::deserialize(deserializer)? {
            Some(ReportRepr::Buffer { data }) | Some(ReportRepr::Bytes(data)) => CsvReport(data),
            Some(ReportRepr::Text(text)) => CsvReport(text.into_bytes()),
            None => CsvReport::default(),
        })
    }
}

impl Serialize for CsvReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BufferRepr {
            kind: "Buffer",
            data: &self.0,
        }
        .serialize(serializer)
    }
}
