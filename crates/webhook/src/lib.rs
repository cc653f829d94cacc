//! Webhook notification dispatcher for voxrelay.
//!
//! [`WebhookNotifier`] owns the outbound side of the bridge: a connection
//! probe, the voice-note metadata notification, and the multipart audio
//! upload. Every operation returns a
//! [`DispatchOutcome`](voxrelay_core::DispatchOutcome) — transport errors,
//! bad statuses, and missing attachments are normalized there and never
//! surface as errors to the caller.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use voxrelay_webhook::{WebhookConfig, WebhookNotifier};
//!
//! let config = WebhookConfig::new("https://hooks.example.com/voxrelay", "vault-key");
//! let notifier = WebhookNotifier::new(config);
//! # let _ = notifier;
//! ```

pub mod config;
pub mod error;
pub mod notifier;
pub mod types;

pub use config::{VAULT_KEY_HEADER, WebhookConfig};
pub use error::WebhookError;
pub use notifier::WebhookNotifier;
pub use types::{TestConnectionRequest, VoiceNoteRequest};
