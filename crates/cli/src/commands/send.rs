use std::sync::Arc;

use voxrelay_vault_fs::FsVault;
use voxrelay_webhook::{WebhookConfig, WebhookNotifier};

use crate::config::Settings;

/// Arguments for the `send` subcommand.
#[derive(clap::Args, Debug)]
pub struct SendArgs {
    /// Bare file name of the audio attachment to upload.
    #[arg(long)]
    pub file: String,

    /// Note name to attribute the recording to; defaults to today's date.
    #[arg(long)]
    pub note: Option<String>,
}

/// Upload a named audio attachment directly, bypassing change detection.
pub async fn run(settings: &Settings, args: &SendArgs) -> anyhow::Result<()> {
    let vault = Arc::new(FsVault::new(&settings.vault_root));
    let notifier = WebhookNotifier::new(WebhookConfig::new(
        &settings.endpoint,
        &settings.vault_key,
    ))
    .with_vault(vault);

    let note = args
        .note
        .clone()
        .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string());

    let outcome = notifier
        .send_audio_file(&args.file, &note, &note, &settings.language)
        .await;

    if outcome.success {
        println!("{}", outcome.message);
        Ok(())
    } else {
        eprintln!("{}", outcome.message);
        std::process::exit(1);
    }
}
