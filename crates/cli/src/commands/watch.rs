use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};
use voxrelay_monitor::{ModifyOutcome, RecordingMonitor};
use voxrelay_vault_fs::{FsVault, watch_notes};
use voxrelay_webhook::{WebhookConfig, WebhookNotifier};

use crate::config::Settings;
use crate::reload::ConfigWatcher;

/// Run the watch daemon until ctrl-c.
pub async fn run(config_path: &Path, settings: &Settings) -> anyhow::Result<()> {
    let vault = Arc::new(FsVault::new(&settings.vault_root));
    let notifier = Arc::new(
        WebhookNotifier::new(WebhookConfig::new(&settings.endpoint, &settings.vault_key))
            .with_vault(vault.clone()),
    );
    let monitor = RecordingMonitor::new(vault, notifier.clone())
        .with_language(settings.language.as_str())
        .with_audio_upload(settings.upload_audio);

    let seeded = monitor.warm_up().await;
    info!(
        vault = %settings.vault_root.display(),
        seeded,
        "watching vault for new recordings"
    );

    // The notify watcher must outlive the loop.
    let (_watcher, mut events) = watch_notes(&settings.vault_root)?;

    // Saving the config file propagates endpoint/credential changes into the
    // notifier without a restart.
    let _reload = ConfigWatcher::new(notifier, config_path).spawn();

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(path) = event else { break };
                report(&path, monitor.handle_modified(&path).await);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}

/// Log one line per dispatch attempt.
fn report(path: &str, outcome: ModifyOutcome) {
    match outcome {
        ModifyOutcome::Ineligible | ModifyOutcome::NoNewRecordings => {}
        ModifyOutcome::ReadFailed { message } => {
            warn!(path, message = %message, "could not read modified note");
        }
        ModifyOutcome::Dispatched(reports) => {
            for r in reports {
                let recording = r.recording.file_name();
                if r.metadata.success {
                    info!(
                        path,
                        recording,
                        reply = r.metadata.answer().unwrap_or(&r.metadata.message),
                        "voice note relayed"
                    );
                } else {
                    warn!(path, recording, message = %r.metadata.message, "relay failed");
                }
                if let Some(upload) = &r.upload {
                    if upload.success {
                        info!(path, recording, "audio uploaded");
                    } else {
                        warn!(path, recording, message = %upload.message, "audio upload failed");
                    }
                }
            }
        }
    }
}
