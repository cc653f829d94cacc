//! In-memory vault for tests.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::VaultError;
use crate::reader::VaultReader;

/// A vault backed by in-memory maps.
///
/// Notes and attachments can be inserted and overwritten through `&self`,
/// which lets tests simulate edits between modification events.
#[derive(Debug, Default)]
pub struct MemoryVault {
    notes: DashMap<String, String>,
    attachments: DashMap<String, Vec<u8>>,
}

impl MemoryVault {
    /// Create an empty vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a note.
    pub fn put_note(&self, path: impl Into<String>, content: impl Into<String>) {
        self.notes.insert(path.into(), content.into());
    }

    /// Insert or overwrite an attachment.
    pub fn put_attachment(&self, file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.attachments.insert(file_name.into(), bytes.into());
    }
}

#[async_trait]
impl VaultReader for MemoryVault {
    async fn list_notes(&self) -> Result<Vec<String>, VaultError> {
        let mut paths: Vec<String> = self.notes.iter().map(|e| e.key().clone()).collect();
        paths.sort();
        Ok(paths)
    }

    async fn read_note(&self, path: &str) -> Result<String, VaultError> {
        self.notes
            .get(path)
            .map(|e| e.value().clone())
            .ok_or_else(|| VaultError::NotFound(path.to_owned()))
    }

    async fn read_attachment(&self, file_name: &str) -> Result<Vec<u8>, VaultError> {
        self.attachments
            .get(file_name)
            .map(|e| e.value().clone())
            .ok_or_else(|| VaultError::NotFound(file_name.to_owned()))
    }
}
