use std::path::{Path, PathBuf};

use async_trait::async_trait;
use voxrelay_vault::{VaultError, VaultReader};

/// A vault rooted at a directory on disk.
///
/// Notes are `.md` files anywhere under the root; attachments are located by
/// bare file name, wherever they live. Hidden directories (such as the
/// host's own configuration folder) are not traversed.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    /// Create a vault over the given root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The vault's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }

    /// Collect every regular file under the root, skipping hidden
    /// directories.
    async fn walk(&self) -> Result<Vec<PathBuf>, std::io::Error> {
        let mut files = Vec::new();
        let mut dirs = vec![self.root.clone()];

        while let Some(dir) = dirs.pop() {
            let mut entries = tokio::fs::read_dir(&dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                let file_type = entry.file_type().await?;
                if file_type.is_dir() {
                    let hidden = path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with('.'));
                    if !hidden {
                        dirs.push(path);
                    }
                } else if file_type.is_file() {
                    files.push(path);
                }
            }
        }

        Ok(files)
    }
}

#[async_trait]
impl VaultReader for FsVault {
    async fn list_notes(&self) -> Result<Vec<String>, VaultError> {
        let mut notes: Vec<String> = self
            .walk()
            .await?
            .into_iter()
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("md"))
            .map(|p| self.relative(&p))
            .collect();
        notes.sort();
        Ok(notes)
    }

    async fn read_note(&self, path: &str) -> Result<String, VaultError> {
        match tokio::fs::read_to_string(self.root.join(path)).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(VaultError::NotFound(path.to_owned()))
            }
            Err(e) => Err(VaultError::Io(e)),
        }
    }

    async fn read_attachment(&self, file_name: &str) -> Result<Vec<u8>, VaultError> {
        let located = self
            .walk()
            .await?
            .into_iter()
            .find(|p| p.file_name().and_then(|n| n.to_str()) == Some(file_name));

        match located {
            Some(path) => Ok(tokio::fs::read(&path).await?),
            None => Err(VaultError::NotFound(file_name.to_owned())),
        }
    }
}
