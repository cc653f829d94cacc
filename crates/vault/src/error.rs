use thiserror::Error;

/// Errors that can occur while reading from a vault.
#[derive(Debug, Error)]
pub enum VaultError {
    /// The named note or attachment does not exist in the vault.
    #[error("not found: {0}")]
    NotFound(String),

    /// The vault backend failed to perform the read.
    #[error("vault io error: {0}")]
    Io(#[from] std::io::Error),
}

impl VaultError {
    /// Returns `true` when the error means the target simply does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = VaultError::NotFound("2026-01-05.md".into());
        assert_eq!(err.to_string(), "not found: 2026-01-05.md");
        assert!(err.is_not_found());
    }

    #[test]
    fn io_not_found_is_not_found() {
        let err = VaultError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(err.is_not_found());

        let err = VaultError::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(!err.is_not_found());
    }
}
