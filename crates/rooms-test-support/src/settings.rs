//! Test settings stores — in-memory `SettingsStore` implementations.

use std::collections::HashMap;

use rooms_core::error::DomainError;
use rooms_core::settings::SettingsStore;

/// A settings store backed by a `HashMap`. Staged writes become visible to
/// `persisted` only after `flush`, mirroring a real store.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    staged: HashMap<String, i64>,
    persisted: HashMap<String, i64>,
    flush_count: usize,
}

impl InMemorySettingsStore {
    /// Create a store whose persisted state already holds `entries`.
    #[must_use]
    pub fn with_entries(entries: &[(&str, i64)]) -> Self {
        let persisted: HashMap<String, i64> = entries
            .iter()
            .map(|(key, value)| ((*key).to_owned(), *value))
            .collect();
        Self {
            staged: persisted.clone(),
            persisted,
            flush_count: 0,
        }
    }

    /// Returns the durable value for `key`, ignoring unflushed writes.
    #[must_use]
    pub fn persisted(&self, key: &str) -> Option<i64> {
        self.persisted.get(key).copied()
    }

    /// Number of successful `flush` calls.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        self.flush_count
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn get(&self, key: &str) -> Result<Option<i64>, DomainError> {
        Ok(self.staged.get(key).copied())
    }

    fn set(&mut self, key: &str, value: i64) -> Result<(), DomainError> {
        self.staged.insert(key.to_owned(), value);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DomainError> {
        self.persisted.clone_from(&self.staged);
        self.flush_count += 1;
        Ok(())
    }
}

/// A settings store that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingSettingsStore;

impl SettingsStore for FailingSettingsStore {
    fn get(&self, _key: &str) -> Result<Option<i64>, DomainError> {
        Err(DomainError::Infrastructure("settings unavailable".into()))
    }

    fn set(&mut self, _key: &str, _value: i64) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("settings unavailable".into()))
    }

    fn flush(&mut self) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("settings unavailable".into()))
    }
}
