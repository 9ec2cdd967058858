//! Cache of data fetched from the backend, keyed by a path of segments
//! (`["FormsCount", "Forms"]`, `["parents", "page", "1"]`).
//!
//! Mutations invalidate by prefix so that every view depending on a record
//! type refetches the next time it mounts.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub type QueryKey = Vec<String>;

pub fn key(segments: &[&str]) -> QueryKey {
    segments.iter().map(|s| s.to_string()).collect()
}

#[derive(Clone, Default)]
pub struct QueryCache {
    entries: Rc<RefCell<HashMap<QueryKey, serde_json::Value>>>,
}

impl PartialEq for QueryCache {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl QueryCache {
    /// Cached value under `key`, if present and still of type `T`.
    pub fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Option<T> {
        let entries = self.entries.borrow();
        let value = entries.get(&key(segments))?;
        serde_json::from_value(value.clone()).ok()
    }

    pub fn put<T: Serialize>(&self, segments: &[&str], value: &T) {
        if let Ok(value) = serde_json::to_value(value) {
            self.entries.borrow_mut().insert(key(segments), value);
        }
    }

    /// Removes every entry whose key starts with `prefix` and returns how
    /// many were dropped.
    pub fn invalidate(&self, prefix: &[&str]) -> usize {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|k, _| {
            k.len() < prefix.len() || k.iter().zip(prefix).any(|(a, b)| a.as_str() != *b)
        });
        before - entries.len()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}
