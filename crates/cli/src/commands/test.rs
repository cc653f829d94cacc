use voxrelay_webhook::{WebhookConfig, WebhookNotifier};

use crate::config::Settings;

/// Probe the configured endpoint and print the reply.
pub async fn run(settings: &Settings) -> anyhow::Result<()> {
    let notifier = WebhookNotifier::new(WebhookConfig::new(
        &settings.endpoint,
        &settings.vault_key,
    ));

    let outcome = notifier.test_connection().await;
    if outcome.success {
        // Prefer the endpoint's own answer over the generic message.
        println!("{}", outcome.answer().unwrap_or(&outcome.message));
        Ok(())
    } else {
        eprintln!("{}", outcome.message);
        std::process::exit(1);
    }
}
