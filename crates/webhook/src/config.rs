use std::time::Duration;

/// Header carrying the vault credential on every outbound request.
pub const VAULT_KEY_HEADER: &str = "obsidian_vault";

/// Configuration for the webhook notifier.
///
/// Held behind a lock inside [`WebhookNotifier`](crate::WebhookNotifier) so
/// it can be replaced at runtime; each call takes a snapshot up front, and
/// in-flight calls keep the snapshot they started with.
#[derive(Clone)]
pub struct WebhookConfig {
    /// Target endpoint URL.
    pub endpoint: String,

    /// Opaque credential sent as the [`VAULT_KEY_HEADER`] header.
    pub vault_key: String,

    /// Request timeout (applies to every call path).
    pub timeout: Duration,
}

impl WebhookConfig {
    /// Create a configuration with the default 30-second timeout.
    pub fn new(endpoint: impl Into<String>, vault_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            vault_key: vault_key.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

impl std::fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("endpoint", &self.endpoint)
            .field("vault_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout() {
        let config = WebhookConfig::new("https://example.com/hook", "key");
        assert_eq!(config.endpoint, "https://example.com/hook");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn builder_methods() {
        let config = WebhookConfig::new("https://example.com", "key").with_timeout_secs(5);
        assert_eq!(config.timeout, Duration::from_secs(5));

        let config =
            WebhookConfig::new("https://example.com", "key").with_timeout(Duration::from_millis(250));
        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[test]
    fn debug_redacts_credential() {
        let key = "test-key-placeholder";
        let config = WebhookConfig::new("https://example.com", key);
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(key));
        assert!(debug.contains("https://example.com"));
    }
}
