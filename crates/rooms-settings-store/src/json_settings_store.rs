//! JSON-file implementation of the `SettingsStore` trait.
//!
//! The file holds one flat object of integers, e.g. `{"RoomOffset": 4}`.
//! Writes are staged in memory and land on disk only on `flush`, which
//! replaces the file through a sibling temp file so a crash mid-write never
//! leaves a truncated settings file behind.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rooms_core::error::DomainError;
use rooms_core::settings::SettingsStore;
use tracing::debug;

/// Settings store persisted as a JSON object on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
    values: BTreeMap<String, i64>,
}

impl JsonFileSettingsStore {
    /// Opens the store at `path`. A missing or empty file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the file exists but cannot be
    /// read or does not hold a JSON object of integers.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                DomainError::Infrastructure(format!(
                    "settings file {} is malformed: {e}",
                    path.display()
                ))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(DomainError::Infrastructure(format!(
                    "cannot read settings file {}: {e}",
                    path.display()
                )));
            }
        };

        debug!(path = %path.display(), entries = values.len(), "settings loaded");
        Ok(Self { path, values })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn get(&self, key: &str) -> Result<Option<i64>, DomainError> {
        Ok(self.values.get(key).copied())
    }

    fn set(&mut self, key: &str, value: i64) -> Result<(), DomainError> {
        self.values.insert(key.to_owned(), value);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DomainError> {
        let infrastructure = |action: &str, e: std::io::Error| {
            DomainError::Infrastructure(format!(
                "cannot {action} settings file {}: {e}",
                self.path.display()
            ))
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| infrastructure("create directory for", e))?;
        }

        let contents = serde_json::to_string_pretty(&self.values).map_err(|e| {
            DomainError::Infrastructure(format!("settings serialization failed: {e}"))
        })?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, contents).map_err(|e| infrastructure("write", e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| infrastructure("replace", e))?;

        debug!(path = %self.path.display(), entries = self.values.len(), "settings flushed");
        Ok(())
    }
}
