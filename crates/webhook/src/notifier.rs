use std::path::Path;
use std::sync::{Arc, RwLock};

use reqwest::Client;
use tracing::{debug, instrument, warn};
use voxrelay_core::{DispatchOutcome, mime_type, now_iso8601};
use voxrelay_vault::VaultReader;

use crate::config::{VAULT_KEY_HEADER, WebhookConfig};
use crate::error::WebhookError;
use crate::types::{
    ACTION_AUDIO_UPLOAD, ACTION_TEST_CONNECTION, ACTION_VOICE_NOTE, TestConnectionRequest,
    VoiceNoteRequest,
};

/// Dispatches voice-note notifications to the configured HTTP endpoint.
///
/// The configuration is replaceable at runtime via
/// [`update_config`](Self::update_config); every call clones a snapshot
/// before doing any I/O, so in-flight calls are unaffected by concurrent
/// updates. The vault reader is only needed by the audio upload path.
pub struct WebhookNotifier {
    config: RwLock<WebhookConfig>,
    client: Client,
    vault: Option<Arc<dyn VaultReader>>,
}

impl WebhookNotifier {
    /// Create a notifier with a default `reqwest::Client` using the
    /// configured timeout.
    pub fn new(config: WebhookConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to build HTTP client");
        Self {
            config: RwLock::new(config),
            client,
            vault: None,
        }
    }

    /// Create a notifier with a custom HTTP client.
    ///
    /// Useful for testing or for sharing a connection pool.
    pub fn with_client(config: WebhookConfig, client: Client) -> Self {
        Self {
            config: RwLock::new(config),
            client,
            vault: None,
        }
    }

    /// Attach a vault reader, enabling the audio upload path.
    #[must_use]
    pub fn with_vault(mut self, vault: Arc<dyn VaultReader>) -> Self {
        self.vault = Some(vault);
        self
    }

    /// Replace the endpoint and credential for all subsequent calls.
    ///
    /// In-flight calls keep the configuration snapshot they started with.
    pub fn update_config(&self, endpoint: impl Into<String>, vault_key: impl Into<String>) {
        let mut config = self.config.write().expect("webhook config lock poisoned");
        config.endpoint = endpoint.into();
        config.vault_key = vault_key.into();
        debug!(endpoint = %config.endpoint, "webhook configuration updated");
    }

    fn config_snapshot(&self) -> WebhookConfig {
        self.config
            .read()
            .expect("webhook config lock poisoned")
            .clone()
    }

    /// Probe the endpoint with a small JSON payload.
    ///
    /// Success iff the response status is in `[200, 300)`; the message embeds
    /// the status code, and the parsed body is attached when the endpoint
    /// replied with valid JSON.
    #[instrument(skip(self))]
    pub async fn test_connection(&self) -> DispatchOutcome {
        let config = self.config_snapshot();
        let request = TestConnectionRequest {
            action: ACTION_TEST_CONNECTION,
            timestamp: now_iso8601(),
            message: "voxrelay connection test".to_owned(),
        };

        match self.post_json(&config, &request).await {
            Ok((status, body)) => {
                let message = format!("connection successful (HTTP {status})");
                match body {
                    Some(body) => DispatchOutcome::success_with_body(message, body),
                    None => DispatchOutcome::success(message),
                }
            }
            Err(e) => {
                warn!(error = %e, "connection test failed");
                DispatchOutcome::failure(format!("connection failed: {e}"))
            }
        }
    }

    /// Send the metadata notification for one newly recorded voice note.
    #[instrument(skip(self, content))]
    pub async fn send_voice_note(
        &self,
        file_name: &str,
        file_date: &str,
        content: &str,
    ) -> DispatchOutcome {
        let config = self.config_snapshot();
        let request = VoiceNoteRequest {
            action: ACTION_VOICE_NOTE,
            file_name: file_name.to_owned(),
            file_date: file_date.to_owned(),
            content: content.to_owned(),
            timestamp: now_iso8601(),
        };

        match self.post_json(&config, &request).await {
            Ok((status, body)) => {
                let message = format!("voice note metadata sent (HTTP {status})");
                match body {
                    Some(body) => DispatchOutcome::success_with_body(message, body),
                    None => DispatchOutcome::success(message),
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to send voice note metadata");
                DispatchOutcome::failure(format!("failed to send voice note metadata: {e}"))
            }
        }
    }

    /// Upload the raw bytes of a named audio attachment as a multipart form.
    ///
    /// The attachment is located through the vault reader by bare file name;
    /// if it is absent the call fails without touching the network. The MIME
    /// type is resolved from the file extension with `audio/mpeg` as the
    /// fallback. A response body that is not JSON is wrapped as
    /// `{"text": body}` rather than discarded.
    #[instrument(skip(self))]
    pub async fn send_audio_file(
        &self,
        audio_file_name: &str,
        note_file_name: &str,
        note_date: &str,
        language: &str,
    ) -> DispatchOutcome {
        let config = self.config_snapshot();

        let Some(vault) = &self.vault else {
            return DispatchOutcome::failure("no vault reader configured for audio uploads");
        };

        let bytes = match vault.read_attachment(audio_file_name).await {
            Ok(bytes) => bytes,
            Err(e) if e.is_not_found() => {
                warn!(file = audio_file_name, "audio file not found in vault");
                let err = WebhookError::AttachmentMissing(audio_file_name.to_owned());
                return DispatchOutcome::failure(err.to_string());
            }
            Err(e) => {
                warn!(file = audio_file_name, error = %e, "failed to read audio file");
                return DispatchOutcome::failure(WebhookError::Vault(e).to_string());
            }
        };

        let extension = Path::new(audio_file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let mime = mime_type(extension);

        debug!(
            file = audio_file_name,
            mime,
            size = bytes.len(),
            "uploading audio file"
        );

        let part = reqwest::multipart::Part::bytes(bytes.clone())
            .file_name(audio_file_name.to_owned())
            .mime_str(mime)
            .unwrap_or_else(|_| {
                reqwest::multipart::Part::bytes(bytes).file_name(audio_file_name.to_owned())
            });

        let form = reqwest::multipart::Form::new()
            .part("audio", part)
            .text("action", ACTION_AUDIO_UPLOAD)
            .text("audioFileName", audio_file_name.to_owned())
            .text("noteFileName", note_file_name.to_owned())
            .text("noteDate", note_date.to_owned())
            .text("mimeType", mime)
            .text("language", language.to_owned())
            .text("timestamp", now_iso8601());

        let response = match self
            .client
            .post(&config.endpoint)
            .header(VAULT_KEY_HEADER, config.vault_key.as_str())
            .multipart(form)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "audio upload transport error");
                return DispatchOutcome::failure(format!(
                    "audio upload failed: {}",
                    WebhookError::Http(e)
                ));
            }
        };

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            let err = WebhookError::UnexpectedStatus {
                status: status.as_u16(),
                body: text,
            };
            warn!(error = %err, "audio upload rejected");
            return DispatchOutcome::failure(format!("audio upload failed: {err}"));
        }

        let body = serde_json::from_str::<serde_json::Value>(&text)
            .unwrap_or_else(|_| serde_json::json!({ "text": text }));

        DispatchOutcome::success_with_body(
            format!("audio file uploaded (HTTP {})", status.as_u16()),
            body,
        )
    }

    /// POST a JSON payload with the credential header, returning the status
    /// and the parsed body.
    ///
    /// A body that fails to parse is not an error: the call still counts as
    /// successful and the body is omitted.
    async fn post_json<T: serde::Serialize + Sync>(
        &self,
        config: &WebhookConfig,
        body: &T,
    ) -> Result<(u16, Option<serde_json::Value>), WebhookError> {
        debug!(url = %config.endpoint, "posting webhook request");

        let response = self
            .client
            .post(&config.endpoint)
            .header(VAULT_KEY_HEADER, config.vault_key.as_str())
            .json(body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WebhookError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response.json::<serde_json::Value>().await.ok();
        Ok((status.as_u16(), parsed))
    }
}

impl std::fmt::Debug for WebhookNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookNotifier")
            .field("config", &self.config)
            .field("has_vault", &self.vault.is_some())
            .finish_non_exhaustive()
    }
}
