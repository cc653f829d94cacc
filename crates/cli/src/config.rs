use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

fn default_language() -> String {
    "en".to_owned()
}

/// Settings read from the TOML configuration file.
#[derive(Clone, Deserialize)]
pub struct Settings {
    /// Webhook endpoint URL.
    pub endpoint: String,

    /// Credential sent as the vault header on every request.
    pub vault_key: String,

    /// Root directory of the note vault.
    pub vault_root: PathBuf,

    /// Language tag passed along with audio uploads.
    #[serde(default = "default_language")]
    pub language: String,

    /// Whether to upload the audio bytes after each metadata notification.
    #[serde(default)]
    pub upload_audio: bool,
}

impl Settings {
    /// Apply command-line / environment overrides on top of the file values.
    #[must_use]
    pub fn with_overrides(mut self, endpoint: Option<String>, vault_key: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(vault_key) = vault_key {
            self.vault_key = vault_key;
        }
        self
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("endpoint", &self.endpoint)
            .field("vault_key", &"[REDACTED]")
            .field("vault_root", &self.vault_root)
            .field("language", &self.language)
            .field("upload_audio", &self.upload_audio)
            .finish()
    }
}

/// Load settings from a TOML file.
pub fn load(path: &Path) -> anyhow::Result<Settings> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let settings: Settings = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        endpoint = "https://hooks.example.com/voxrelay"
        vault_key = "secret"
        vault_root = "/vault"
    "#;

    #[test]
    fn minimal_config_applies_defaults() {
        let settings: Settings = toml::from_str(MINIMAL).unwrap();
        assert_eq!(settings.endpoint, "https://hooks.example.com/voxrelay");
        assert_eq!(settings.language, "en");
        assert!(!settings.upload_audio);
    }

    #[test]
    fn full_config_parses() {
        let settings: Settings = toml::from_str(
            r#"
            endpoint = "https://hooks.example.com/voxrelay"
            vault_key = "secret"
            vault_root = "/vault"
            language = "de"
            upload_audio = true
        "#,
        )
        .unwrap();
        assert_eq!(settings.language, "de");
        assert!(settings.upload_audio);
    }

    #[test]
    fn overrides_replace_file_values() {
        let settings: Settings = toml::from_str(MINIMAL).unwrap();
        let settings =
            settings.with_overrides(Some("https://other.example.com".into()), None);
        assert_eq!(settings.endpoint, "https://other.example.com");
        assert_eq!(settings.vault_key, "secret");
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let result: Result<Settings, _> = toml::from_str(r#"endpoint = "x""#);
        assert!(result.is_err());
    }

    #[test]
    fn debug_redacts_credential() {
        let settings: Settings = toml::from_str(MINIMAL).unwrap();
        let debug = format!("{settings:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("voxrelay.toml");
        std::fs::write(&path, MINIMAL).unwrap();
        let settings = load(&path).unwrap();
        assert_eq!(settings.vault_root, PathBuf::from("/vault"));

        assert!(load(&dir.path().join("missing.toml")).is_err());
    }
}
