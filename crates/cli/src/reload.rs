//! Config hot-reload for the watch daemon.
//!
//! Watches the TOML config file and pushes endpoint/credential changes into
//! the running [`WebhookNotifier`] without a restart. The vault root and
//! upload toggle are fixed for the lifetime of the daemon.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, error, info, warn};
use voxrelay_webhook::WebhookNotifier;

use crate::config;

/// Default debounce interval for filesystem change events.
const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches the config file for changes and updates the notifier.
///
/// Rapid filesystem events (editor save cycles) are debounced; the settings
/// are re-read once the file has settled.
pub struct ConfigWatcher {
    notifier: Arc<WebhookNotifier>,
    config_path: PathBuf,
    debounce: Duration,
}

impl ConfigWatcher {
    /// Create a watcher that reloads into the given notifier.
    pub fn new(notifier: Arc<WebhookNotifier>, config_path: impl Into<PathBuf>) -> Self {
        Self {
            notifier,
            config_path: config_path.into(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// Override the default debounce duration.
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Spawn the watcher as a background tokio task.
    ///
    /// The watcher runs until the handle is aborted or the process exits.
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            if let Err(e) = self.run().await {
                error!(error = %e, "config watcher exited with error");
            }
        })
    }

    async fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (tx, mut rx) = tokio::sync::mpsc::channel::<()>(16);

        // Watch the parent directory since some editors replace the file
        // atomically.
        let watch_dir = self
            .config_path
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf();

        let config_filename = self
            .config_path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();

        let _watcher = {
            let tx = tx.clone();
            let mut watcher = RecommendedWatcher::new(
                move |res: Result<notify::Event, notify::Error>| match res {
                    Ok(event) => {
                        if !is_relevant_event(event.kind) {
                            return;
                        }
                        let is_our_file = event.paths.iter().any(|p| {
                            p.file_name()
                                .is_some_and(|name| name == config_filename.as_os_str())
                        });
                        if is_our_file {
                            // Best-effort send; a full channel means a reload
                            // is already pending.
                            let _ = tx.try_send(());
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "filesystem watcher error");
                    }
                },
                notify::Config::default(),
            )?;
            watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;
            info!(path = %self.config_path.display(), "config watcher started");
            watcher
        };

        loop {
            if rx.recv().await.is_none() {
                debug!("config watcher channel closed, shutting down");
                break;
            }

            // Debounce: drain events that arrive within the window.
            tokio::time::sleep(self.debounce).await;
            while rx.try_recv().is_ok() {}

            self.reload();
        }

        Ok(())
    }

    /// Re-read the config file and push the new endpoint and credential into
    /// the notifier.
    fn reload(&self) {
        match config::load(&self.config_path) {
            Ok(settings) => {
                self.notifier
                    .update_config(settings.endpoint, settings.vault_key);
                info!("webhook settings reloaded");
            }
            Err(e) => {
                error!(error = %e, "failed to reload config, keeping previous settings");
            }
        }
    }
}

/// Returns `true` for filesystem events that might indicate config file
/// changes.
fn is_relevant_event(kind: EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relevant_events_include_atomic_replacement() {
        assert!(is_relevant_event(EventKind::Create(
            notify::event::CreateKind::File
        )));
        assert!(is_relevant_event(EventKind::Modify(
            notify::event::ModifyKind::Data(notify::event::DataChange::Content)
        )));
        assert!(is_relevant_event(EventKind::Remove(
            notify::event::RemoveKind::File
        )));
        assert!(!is_relevant_event(EventKind::Access(
            notify::event::AccessKind::Read
        )));
    }
}
