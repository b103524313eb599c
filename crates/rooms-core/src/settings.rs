//! Settings store abstraction.
//!
//! The host persists a handful of integers between sessions. The store is
//! read at session start and written back explicitly; nothing is durable
//! until [`SettingsStore::flush`] succeeds.

use crate::error::DomainError;

/// Durable key/value store of integer settings.
pub trait SettingsStore: Send {
    /// Returns the value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the backing store cannot be
    /// read.
    fn get(&self, key: &str) -> Result<Option<i64>, DomainError>;

    /// Stages `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the store rejects the write.
    fn set(&mut self, key: &str, value: i64) -> Result<(), DomainError>;

    /// Makes all staged writes durable.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the backing store cannot be
    /// written.
    fn flush(&mut self) -> Result<(), DomainError>;

    /// Returns the value stored under `key`, or `default` when absent.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`SettingsStore::get`].
    fn get_or(&self, key: &str, default: i64) -> Result<i64, DomainError> {
        Ok(self.get(key)?.unwrap_or(default))
    }
}
