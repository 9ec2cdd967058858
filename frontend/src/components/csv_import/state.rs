//! State of the parents CSV import page and the checks that gate a submit.

use common::model::upload::{UploadMode, UploadResult};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::single_flight::{SingleFlight, Ticket};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileError {
    #[error("Choose a CSV file to upload")]
    Missing,
    #[error("`{0}` is not a .csv file")]
    NotCsv(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error(transparent)]
    Invalid(#[from] FileError),
    #[error("an upload is already in progress")]
    InFlight,
}

/// The backend is the authority on the content; only the name is checked here.
pub fn validate_file_name(name: Option<&str>) -> Result<(), FileError> {
    match name {
        None | Some("") => Err(FileError::Missing),
        Some(name) if name.ends_with(".csv") => Ok(()),
        Some(name) => Err(FileError::NotCsv(name.to_string())),
    }
}

/// Validates the chosen file and, only if it passes, claims the upload
/// slot. A blocked submit never reaches the network.
pub fn begin_submit(
    file_name: Option<&str>,
    flight: &mut SingleFlight,
) -> Result<Ticket, SubmitBlocked> {
    validate_file_name(file_name)?;
    flight.try_begin().ok_or(SubmitBlocked::InFlight)
}

pub struct CsvImportComponent {
    pub file: Option<web_sys::File>,
    pub mode: UploadMode,
    /// Inline message under the file input.
    pub file_error: Option<String>,
    pub flight: SingleFlight,
    /// Last report returned by the backend; replaced on every response.
    pub report: Option<UploadResult>,
    /// Failure that carried no report (network, auth, malformed body).
    pub failure: Option<String>,
    pub file_input_ref: NodeRef,
}

impl CsvImportComponent {
    pub fn new() -> Self {
        Self {
            file: None,
            mode: UploadMode::default(),
            file_error: None,
            flight: SingleFlight::default(),
            report: None,
            failure: None,
            file_input_ref: NodeRef::default(),
        }
    }

    pub fn file_name(&self) -> Option<String> {
        self.file.as_ref().map(|f| f.name())
    }

    /// Clears the selection and the file input element.
    pub fn reset_form(&mut self) {
        self.file = None;
        self.mode = UploadMode::default();
        self.file_error = None;
        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_csv_names_pass() {
        assert_eq!(validate_file_name(None), Err(FileError::Missing));
        assert_eq!(validate_file_name(Some("")), Err(FileError::Missing));
        assert_eq!(
            validate_file_name(Some("parents.xlsx")),
            Err(FileError::NotCsv("parents.xlsx".into()))
        );
        assert_eq!(validate_file_name(Some("parents.csv")), Ok(()));
    }

    #[test]
    fn invalid_file_does_not_claim_the_slot() {
        let mut flight = SingleFlight::default();
        let blocked = begin_submit(Some("parents.txt"), &mut flight);

        assert!(matches!(blocked, Err(SubmitBlocked::Invalid(FileError::NotCsv(_)))));
        assert!(!flight.is_pending());
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let mut flight = SingleFlight::default();
        let ticket = begin_submit(Some("parents.csv"), &mut flight).unwrap();

        assert_eq!(
            begin_submit(Some("parents.csv"), &mut flight),
            Err(SubmitBlocked::InFlight)
        );
        assert!(flight.finish(ticket));
        assert!(begin_submit(Some("parents.csv"), &mut flight).is_ok());
    }
}
