use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use voxrelay_core::{DispatchOutcome, RecordingRef, diff_recordings, is_daily_note, note_name};
use voxrelay_vault::VaultReader;
use voxrelay_webhook::WebhookNotifier;

use crate::snapshot::SnapshotTracker;

/// What one modification event produced.
#[derive(Debug)]
pub enum ModifyOutcome {
    /// The note's name is not a plain calendar date; nothing was done.
    Ineligible,
    /// The edit added no new recording embeds.
    NoNewRecordings,
    /// The note could not be read; the snapshot was left untouched so the
    /// delta is re-examined on the next successful event.
    ReadFailed { message: String },
    /// One dispatch per newly discovered recording, in embed order.
    Dispatched(Vec<DispatchReport>),
}

/// Dispatch results for one newly discovered recording.
#[derive(Debug)]
pub struct DispatchReport {
    /// The recording embed that triggered the dispatch.
    pub recording: RecordingRef,
    /// Outcome of the metadata notification.
    pub metadata: DispatchOutcome,
    /// Outcome of the audio upload, when uploads are enabled.
    pub upload: Option<DispatchOutcome>,
}

/// Watches daily notes for newly embedded audio recordings and notifies the
/// webhook endpoint about each one exactly once per observed delta.
pub struct RecordingMonitor {
    vault: Arc<dyn VaultReader>,
    notifier: Arc<WebhookNotifier>,
    tracker: SnapshotTracker,
    language: String,
    upload_audio: bool,
}

impl RecordingMonitor {
    /// Create a monitor over the given vault and notifier.
    ///
    /// Audio uploads are disabled by default; the language tag defaults to
    /// `"en"`.
    pub fn new(vault: Arc<dyn VaultReader>, notifier: Arc<WebhookNotifier>) -> Self {
        Self {
            vault,
            notifier,
            tracker: SnapshotTracker::new(),
            language: "en".to_owned(),
            upload_audio: false,
        }
    }

    /// Set the language tag passed along with audio uploads.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Enable or disable the audio upload call that follows each metadata
    /// notification.
    #[must_use]
    pub fn with_audio_upload(mut self, upload_audio: bool) -> Self {
        self.upload_audio = upload_audio;
        self
    }

    /// The snapshot tracker backing this monitor.
    pub fn tracker(&self) -> &SnapshotTracker {
        &self.tracker
    }

    /// Seed the snapshot tracker with the current content of every eligible
    /// note.
    ///
    /// Best-effort: notes that cannot be read are skipped with a warning — a
    /// later modification event populates them. Returns the number of notes
    /// seeded.
    #[instrument(skip(self))]
    pub async fn warm_up(&self) -> usize {
        let paths = match self.vault.list_notes().await {
            Ok(paths) => paths,
            Err(e) => {
                warn!(error = %e, "failed to list notes during warm-up");
                return 0;
            }
        };

        let mut seeded = 0;
        for path in paths {
            if !is_daily_note(&path) {
                continue;
            }
            match self.vault.read_note(&path).await {
                Ok(content) => {
                    self.tracker.record(&path, content);
                    seeded += 1;
                }
                Err(e) => {
                    warn!(path = %path, error = %e, "skipping unreadable note during warm-up");
                }
            }
        }

        info!(seeded, "snapshot warm-up complete");
        seeded
    }

    /// Process one modification event for the note at `path`.
    ///
    /// The snapshot swap and the diff happen synchronously once the new
    /// content is in hand — there is no await point between reading the old
    /// snapshot and writing the new one, so a rapid second edit of the same
    /// note cannot produce a stale diff. Outbound calls are issued
    /// afterwards from the already-computed reference set, and the snapshot
    /// stays updated regardless of how they fare.
    #[instrument(skip(self))]
    pub async fn handle_modified(&self, path: &str) -> ModifyOutcome {
        let Some(name) = note_name(path) else {
            return ModifyOutcome::Ineligible;
        };
        let name = name.to_owned();

        let new_content = match self.vault.read_note(path).await {
            Ok(content) => content,
            Err(e) => {
                warn!(path, error = %e, "failed to read modified note");
                return ModifyOutcome::ReadFailed {
                    message: e.to_string(),
                };
            }
        };

        let old_content = self.tracker.record(path, new_content.clone());
        let added = diff_recordings(&old_content, &new_content);

        if added.is_empty() {
            debug!(path, "no new recordings in modification");
            return ModifyOutcome::NoNewRecordings;
        }

        info!(path, count = added.len(), "new recordings detected");

        let mut reports = Vec::with_capacity(added.len());
        for recording in added {
            let metadata = self
                .notifier
                .send_voice_note(&name, &name, recording.raw())
                .await;

            let upload = if self.upload_audio {
                Some(
                    self.notifier
                        .send_audio_file(recording.file_name(), &name, &name, &self.language)
                        .await,
                )
            } else {
                None
            };

            reports.push(DispatchReport {
                recording,
                metadata,
                upload,
            });
        }

        ModifyOutcome::Dispatched(reports)
    }
}

impl std::fmt::Debug for RecordingMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingMonitor")
            .field("tracked", &self.tracker.len())
            .field("language", &self.language)
            .field("upload_audio", &self.upload_audio)
            .finish_non_exhaustive()
    }
}
