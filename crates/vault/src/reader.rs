use async_trait::async_trait;

use crate::error::VaultError;

/// Read access to the host's document store.
///
/// Paths are vault-relative strings with `/` separators. Attachments are
/// located by bare file name, wherever they live under the vault root, which
/// is how embed links name them.
///
/// Implementations must be `Send + Sync`; the trait is object-safe so the
/// monitor and notifier can share one reader behind `Arc<dyn VaultReader>`.
#[async_trait]
pub trait VaultReader: Send + Sync {
    /// List the vault-relative paths of all documents.
    async fn list_notes(&self) -> Result<Vec<String>, VaultError>;

    /// Read the full text content of a document.
    async fn read_note(&self, path: &str) -> Result<String, VaultError>;

    /// Read the binary content of an attachment located by bare file name.
    async fn read_attachment(&self, file_name: &str) -> Result<Vec<u8>, VaultError>;
}
