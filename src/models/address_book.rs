//! In-memory phone book keyed by contact name.

use super::record::Record;
use crate::error::{AssistantError, AssistantResult};
use std::collections::HashMap;

/// Mapping from contact name to [`Record`], iterated in insertion order.
///
/// The key of every entry equals `record.name()`. Adding a record under an
/// existing name replaces the old record and keeps its position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if !self.records.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.records.insert(key, record);
    }

    /// Remove the record stored under `name`, if any.
    pub fn remove_record(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        Some(removed)
    }

    /// Look up a record by name.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::NotFound` if no record has that name.
    pub fn lookup(&self, name: &str) -> AssistantResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| AssistantError::NotFound(name.to_string()))
    }

    /// Mutable variant of [`AddressBook::lookup`].
    pub fn lookup_mut(&mut self, name: &str) -> AssistantResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| AssistantError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// All `(name, record)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.order
            .iter()
            .filter_map(|key| self.records.get(key).map(|record| (key.as_str(), record)))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
