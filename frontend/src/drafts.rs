//! Persistence of the message title form: the in-progress draft and the
//! user's list of reusable title presets.
//!
//! Both slices are rewritten in full on every change. Concurrent tabs race
//! on the same keys and the last write wins.

use common::model::title::{TitleDraft, TitlePreset};

use crate::storage::{KeyValueStore, StorageError};

pub const DRAFT_KEY: &str = "formData";
pub const PRESETS_KEY: &str = "titleData";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetAdded {
    Added,
    Duplicate,
    Blank,
}

pub struct TitleDraftStore<S> {
    store: S,
    presets: Vec<TitlePreset>,
}

impl<S: KeyValueStore> TitleDraftStore<S> {
    /// Opens the store and loads the preset list. A missing or unreadable
    /// list starts empty; repeated values keep their first entry.
    pub fn open(store: S) -> Self {
        let stored: Vec<TitlePreset> = store
            .get(PRESETS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        let mut presets: Vec<TitlePreset> = Vec::with_capacity(stored.len());
        for preset in stored {
            if !presets.iter().any(|p| p.value == preset.value) {
                presets.push(preset);
            }
        }
        Self { store, presets }
    }

    pub fn load_draft(&self) -> TitleDraft {
        self.store
            .get(DRAFT_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save_draft(&self, draft: &TitleDraft) -> Result<(), StorageError> {
        self.write(DRAFT_KEY, draft)
    }

    pub fn clear_draft(&self) -> Result<(), StorageError> {
        self.store.remove(DRAFT_KEY)
    }

    pub fn presets(&self) -> &[TitlePreset] {
        &self.presets
    }

    /// Appends a preset unless its value is blank or already listed.
    pub fn add_preset(&mut self, value: &str, label: &str) -> Result<PresetAdded, StorageError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(PresetAdded::Blank);
        }
        if self.presets.iter().any(|p| p.value == value) {
            return Ok(PresetAdded::Duplicate);
        }

        let label = match label.trim() {
            "" => value,
            label => label,
        };
        let mut next = self.presets.clone();
        next.push(TitlePreset {
            value: value.to_string(),
            label: label.to_string(),
        });
        self.commit(next)?;
        Ok(PresetAdded::Added)
    }

    /// Drops every preset with `value` and rewrites the list. Returns whether
    /// anything was removed.
    pub fn remove_preset(&mut self, value: &str) -> Result<bool, StorageError> {
        let before = self.presets.len();
        let next: Vec<TitlePreset> = self
            .presets
            .iter()
            .filter(|p| p.value != value)
            .cloned()
            .collect();
        let removed = next.len() != before;
        self.commit(next)?;
        Ok(removed)
    }

    /// The in-memory list only changes once storage accepted it.
    fn commit(&mut self, next: Vec<TitlePreset>) -> Result<(), StorageError> {
        self.write(PRESETS_KEY, &next)?;
        self.presets = next;
        Ok(())
    }

    fn write<T: serde::Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.store.set(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    /// Storage that is readable but refuses every write, like a full quota.
    struct FullStore(MemoryStore);

    impl KeyValueStore for FullStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".into(),
            })
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.0.remove(key)
        }
    }

    #[test]
    fn removing_the_only_preset_rewrites_an_empty_list() {
        let memory = MemoryStore::with_entries([(PRESETS_KEY, r#"[{"value":"IT","label":"IT"}]"#)]);
        let mut drafts = TitleDraftStore::open(memory.clone());
        assert_eq!(drafts.presets().len(), 1);

        assert!(drafts.remove_preset("IT").unwrap());
        assert!(drafts.presets().is_empty());
        assert_eq!(memory.get(PRESETS_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn add_preset_persists_the_updated_list() {
        let memory = MemoryStore::default();
        let mut drafts = TitleDraftStore::open(memory.clone());

        assert_eq!(drafts.add_preset("Japanese", "").unwrap(), PresetAdded::Added);
        assert_eq!(
            memory.get(PRESETS_KEY).as_deref(),
            Some(r#"[{"value":"Japanese","label":"Japanese"}]"#)
        );
    }

    #[test]
    fn add_preset_rejects_duplicates_and_blanks() {
        let memory = MemoryStore::default();
        let mut drafts = TitleDraftStore::open(memory);

        assert_eq!(drafts.add_preset("IT", "IT").unwrap(), PresetAdded::Added);
        assert_eq!(drafts.add_preset("IT", "Other").unwrap(), PresetAdded::Duplicate);
        assert_eq!(drafts.add_preset("   ", "x").unwrap(), PresetAdded::Blank);
        assert_eq!(drafts.presets().len(), 1);
    }

    #[test]
    fn draft_survives_reopen_and_clears() {
        let memory = MemoryStore::default();
        let drafts = TitleDraftStore::open(memory.clone());
        let draft = TitleDraft {
            title: "Exam week".into(),
            label: "exams".into(),
        };
        drafts.save_draft(&draft).unwrap();

        let reopened = TitleDraftStore::open(memory.clone());
        assert_eq!(reopened.load_draft(), draft);

        reopened.clear_draft().unwrap();
        assert_eq!(reopened.load_draft(), TitleDraft::default());
    }

    #[test]
    fn unreadable_storage_falls_back_to_empty() {
        let memory = MemoryStore::with_entries([(PRESETS_KEY, "not json"), (DRAFT_KEY, "[1,2]")]);
        let drafts = TitleDraftStore::open(memory);

        assert!(drafts.presets().is_empty());
        assert_eq!(drafts.load_draft(), TitleDraft::default());
    }

    #[test]
    fn open_keeps_the_first_of_repeated_values() {
        let memory = MemoryStore::with_entries([(
            PRESETS_KEY,
            r#"[{"value":"IT","label":"IT"},{"value":"Math","label":"Math"},{"value":"IT","label":"IT dept"}]"#,
        )]);
        let drafts = TitleDraftStore::open(memory);

        let values: Vec<_> = drafts.presets().iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, ["IT", "Math"]);
        assert_eq!(drafts.presets()[0].label, "IT");
    }

    #[test]
    fn failed_writes_leave_the_list_untouched() {
        let memory = MemoryStore::with_entries([(PRESETS_KEY, r#"[{"value":"IT","label":"IT"}]"#)]);
        let mut drafts = TitleDraftStore::open(FullStore(memory.clone()));

        assert!(matches!(
            drafts.add_preset("Math", "Math"),
            Err(StorageError::Write { .. })
        ));
        assert!(matches!(drafts.remove_preset("IT"), Err(StorageError::Write { .. })));

        let values: Vec<_> = drafts.presets().iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, ["IT"]);
        assert_eq!(
            memory.get(PRESETS_KEY).as_deref(),
            Some(r#"[{"value":"IT","label":"IT"}]"#)
        );
    }
}
