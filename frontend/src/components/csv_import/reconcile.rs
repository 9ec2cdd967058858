//! Maps an upload report onto the tables the import page renders.
//!
//! Kept free of Yew so the table contents can be checked without a browser:
//! the view only turns these rows into markup.

use common::model::parent::{Parent, ParentField};
use common::model::upload::{RowError, UploadOutcome, UploadResult};

/// One cell of the error table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCell<'a> {
    pub field: ParentField,
    /// Submitted value, if the row carried this column.
    pub value: Option<&'a str>,
    /// Validation message; its presence is what shows the error marker.
    pub message: Option<&'a str>,
}

impl ErrorCell<'_> {
    pub fn has_marker(&self) -> bool {
        self.message.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRow<'a> {
    pub cells: [ErrorCell<'a>; 4],
}

impl<'a> ErrorRow<'a> {
    fn from_row_error(error: &'a RowError) -> Self {
        Self {
            cells: ParentField::ALL.map(|field| ErrorCell {
                field,
                value: error.row.get(field),
                message: error.errors.get(field),
            }),
        }
    }
}

/// One row per refused CSV row, in report order. Empty when nothing was
/// refused, in which case no table is rendered at all.
pub fn error_rows(report: &UploadResult) -> Vec<ErrorRow<'_>> {
    report.errors.iter().map(ErrorRow::from_row_error).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeTable<'a> {
    pub outcome: UploadOutcome,
    pub title: &'static str,
    pub description: &'static str,
    pub records: &'a [Parent],
}

/// Tables for inserted, updated and deleted records, in that order,
/// skipping empty ones. Records keep the server's order.
pub fn outcome_tables(report: &UploadResult) -> Vec<OutcomeTable<'_>> {
    UploadOutcome::ALL
        .into_iter()
        .map(|outcome| {
            let (title, description) = match outcome {
                UploadOutcome::Inserted => (
                    "Parents created",
                    "Parents created from the uploaded file",
                ),
                UploadOutcome::Updated => (
                    "Parents updated",
                    "Parents updated from the uploaded file",
                ),
                UploadOutcome::Deleted => (
                    "Parents deleted",
                    "Parents deleted by the uploaded file",
                ),
            };
            OutcomeTable {
                outcome,
                title,
                description,
                records: report.records(outcome),
            }
        })
        .filter(|table| !table.records.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::parent::ParentColumns;

    fn parent(email: &str) -> Parent {
        Parent {
            email: email.into(),
            given_name: "G".into(),
            family_name: "F".into(),
            phone_number: "1".into(),
        }
    }

    fn row_error(email: &str, message: Option<&str>) -> RowError {
        let mut row = ParentColumns::default();
        row.set(ParentField::Email, email);
        let mut errors = ParentColumns::default();
        if let Some(message) = message {
            errors.set(ParentField::Email, message);
        }
        RowError { row, errors }
    }

    #[test]
    fn single_invalid_email_marks_only_that_cell() {
        let report: UploadResult = serde_json::from_str(
            r#"{"errors":[{"row":{"email":"a@x.com"},"errors":{"email":"invalid"}}]}"#,
        )
        .unwrap();

        let rows = error_rows(&report);
        assert_eq!(rows.len(), 1);

        let [email, given, family, phone] = rows[0].cells;
        assert_eq!(email.value, Some("a@x.com"));
        assert_eq!(email.message, Some("invalid"));
        assert!(email.has_marker());
        for cell in [given, family, phone] {
            assert_eq!(cell.value, None);
            assert!(!cell.has_marker());
        }
    }

    #[test]
    fn one_row_of_four_cells_per_error_in_order() {
        let report = UploadResult {
            errors: vec![
                row_error("1@x.com", Some("taken")),
                row_error("2@x.com", None),
                row_error("3@x.com", Some("invalid")),
            ],
            ..Default::default()
        };

        let rows = error_rows(&report);
        let emails: Vec<_> = rows.iter().map(|r| r.cells[0].value).collect();
        assert_eq!(emails, [Some("1@x.com"), Some("2@x.com"), Some("3@x.com")]);

        let fields: Vec<_> = rows[1].cells.iter().map(|c| c.field).collect();
        assert_eq!(fields, ParentField::ALL);

        let markers: Vec<_> = rows.iter().map(|r| r.cells[0].has_marker()).collect();
        assert_eq!(markers, [true, false, true]);
    }

    #[test]
    fn value_shown_even_when_empty_string() {
        let report: UploadResult = serde_json::from_str(
            r#"{"errors":[{"row":{"email":"","phone_number":"12"},"errors":{"email":"required"}}]}"#,
        )
        .unwrap();

        let rows = error_rows(&report);
        assert_eq!(rows[0].cells[0].value, Some(""));
        assert_eq!(rows[0].cells[3].value, Some("12"));
        assert!(!rows[0].cells[3].has_marker());
    }

    #[test]
    fn no_errors_means_no_rows() {
        assert!(error_rows(&UploadResult::default()).is_empty());
    }

    #[test]
    fn outcome_tables_skip_empty_lists_and_keep_order() {
        let report = UploadResult {
            inserted: vec![parent("b@x.com"), parent("a@x.com")],
            deleted: vec![parent("c@x.com")],
            ..Default::default()
        };

        let tables = outcome_tables(&report);
        let outcomes: Vec<_> = tables.iter().map(|t| t.outcome).collect();
        assert_eq!(outcomes, [UploadOutcome::Inserted, UploadOutcome::Deleted]);
        assert_eq!(tables[0].records[0].email, "b@x.com");
        assert_eq!(tables[0].records[1].email, "a@x.com");
    }
}
