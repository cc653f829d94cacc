use thiserror::Error;
use voxrelay_vault::VaultError;

/// Failure modes of the webhook notifier.
///
/// These are internal: every public operation converts them into a failed
/// [`DispatchOutcome`](voxrelay_core::DispatchOutcome) at its boundary.
/// Response-body parse failures are deliberately absent — they are non-fatal
/// and handled inline (the JSON paths omit the body, the binary path wraps
/// the raw text).
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Transport-level failure before any status was obtained.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A response arrived with a status outside the success range.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The named audio attachment is absent from the vault.
    #[error("audio file not found: {0}")]
    AttachmentMissing(String),

    /// The vault failed to read an attachment that does exist.
    #[error("vault read failed: {0}")]
    Vault(VaultError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = WebhookError::UnexpectedStatus {
            status: 503,
            body: "unavailable".into(),
        };
        assert_eq!(err.to_string(), "unexpected status 503: unavailable");

        let err = WebhookError::AttachmentMissing("Recording 1.m4a".into());
        assert_eq!(err.to_string(), "audio file not found: Recording 1.m4a");

        let err = WebhookError::Vault(VaultError::NotFound("x".into()));
        assert_eq!(err.to_string(), "vault read failed: not found: x");
    }
}
