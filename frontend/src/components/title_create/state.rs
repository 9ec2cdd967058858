//! State of the message title composer.
//!
//! The draft is hydrated from storage when the page mounts and written back
//! on every edit. Presets are the titles the user submitted before.

use common::model::title::TitleDraft;
use common::requests::TitleCreateRequest;

use crate::drafts::TitleDraftStore;
use crate::single_flight::{SingleFlight, Ticket};
use crate::storage::{StorageError, StoreHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Label,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftErrors {
    pub title: Option<&'static str>,
    pub label: Option<&'static str>,
}

impl DraftErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.label.is_none()
    }
}

pub fn validate_draft(draft: &TitleDraft) -> Result<TitleCreateRequest, DraftErrors> {
    let errors = DraftErrors {
        title: draft.title.trim().is_empty().then_some("Title is required"),
        label: draft.label.trim().is_empty().then_some("Label is required"),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(TitleCreateRequest {
        title: draft.title.trim().to_string(),
        label: draft.label.trim().to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    Invalid,
    InFlight,
}

pub struct TitleCreateComponent {
    pub drafts: TitleDraftStore<StoreHandle>,
    pub draft: TitleDraft,
    pub errors: DraftErrors,
    pub flight: SingleFlight,
    pub picker_open: bool,
}

impl TitleCreateComponent {
    pub fn open(store: StoreHandle) -> Self {
        let drafts = TitleDraftStore::open(store);
        let draft = drafts.load_draft();
        Self {
            drafts,
            draft,
            errors: DraftErrors::default(),
            flight: SingleFlight::default(),
            picker_open: false,
        }
    }

    /// Applies one edit and rewrites the whole draft.
    pub fn edit(&mut self, field: DraftField, value: String) -> Result<(), StorageError> {
        match field {
            DraftField::Title => {
                self.draft.title = value;
                self.errors.title = None;
            }
            DraftField::Label => {
                self.draft.label = value;
                self.errors.label = None;
            }
        }
        self.drafts.save_draft(&self.draft)
    }

    pub fn choose_preset(&mut self, value: String) -> Result<(), StorageError> {
        self.picker_open = false;
        self.edit(DraftField::Title, value)
    }

    /// Validates the draft and claims the submit slot.
    pub fn begin_submit(&mut self) -> Result<(Ticket, TitleCreateRequest), SubmitBlocked> {
        let request = validate_draft(&self.draft).map_err(|errors| {
            self.errors = errors;
            SubmitBlocked::Invalid
        })?;
        let ticket = self.flight.try_begin().ok_or(SubmitBlocked::InFlight)?;
        Ok((ticket, request))
    }

    /// Resets the form after the backend accepted the title.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.draft = TitleDraft::default();
        self.errors = DraftErrors::default();
        self.picker_open = false;
        self.drafts.clear_draft()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::{DRAFT_KEY, PRESETS_KEY};
    use crate::storage::{KeyValueStore, MemoryStore};

    fn seeded(entries: &[(&str, &str)]) -> (MemoryStore, TitleCreateComponent) {
        let memory = MemoryStore::with_entries(entries.iter().copied());
        let page = TitleCreateComponent::open(StoreHandle::new(memory.clone()));
        (memory, page)
    }

    #[test]
    fn mount_hydrates_draft_and_presets() {
        let (_, page) = seeded(&[
            (DRAFT_KEY, r#"{"title":"Exam week","label":"exams"}"#),
            (PRESETS_KEY, r#"[{"value":"IT","label":"IT"}]"#),
        ]);

        assert_eq!(page.draft.title, "Exam week");
        assert_eq!(page.draft.label, "exams");
        assert_eq!(page.drafts.presets().len(), 1);
    }

    #[test]
    fn every_edit_rewrites_the_full_draft() {
        let (memory, mut page) = seeded(&[]);
        page.edit(DraftField::Title, "Trip".into()).unwrap();
        page.edit(DraftField::Label, "events".into()).unwrap();

        assert_eq!(
            memory.get(DRAFT_KEY).as_deref(),
            Some(r#"{"title":"Trip","label":"events"}"#)
        );
    }

    #[test]
    fn choosing_a_preset_fills_the_title() {
        let (_, mut page) = seeded(&[(PRESETS_KEY, r#"[{"value":"IT","label":"IT"}]"#)]);
        page.picker_open = true;
        page.choose_preset("IT".into()).unwrap();

        assert_eq!(page.draft.title, "IT");
        assert!(!page.picker_open);
    }

    #[test]
    fn blank_fields_block_submit() {
        let (_, mut page) = seeded(&[]);
        page.edit(DraftField::Title, "  ".into()).unwrap();

        assert_eq!(page.begin_submit().unwrap_err(), SubmitBlocked::Invalid);
        assert_eq!(page.errors.title, Some("Title is required"));
        assert_eq!(page.errors.label, Some("Label is required"));
        assert!(!page.flight.is_pending());
    }

    #[test]
    fn submit_is_single_flight() {
        let (_, mut page) = seeded(&[(DRAFT_KEY, r#"{"title":" IT ","label":"dept"}"#)]);
        let (ticket, request) = page.begin_submit().unwrap();

        assert_eq!(request, TitleCreateRequest { title: "IT".into(), label: "dept".into() });
        assert_eq!(page.begin_submit().unwrap_err(), SubmitBlocked::InFlight);
        assert!(page.flight.finish(ticket));
    }

    #[test]
    fn reset_clears_the_stored_draft() {
        let (memory, mut page) = seeded(&[(DRAFT_KEY, r#"{"title":"a","label":"b"}"#)]);
        page.reset().unwrap();

        assert_eq!(page.draft, TitleDraft::default());
        assert_eq!(memory.get(DRAFT_KEY), None);
    }
}
