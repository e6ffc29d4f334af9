// Watch command - keep the settings loaded and follow edits

use std::time::Duration;

use anyhow::Result;
use tracing::info;

use immersion_achievements::ConfigStore;

pub async fn watch(store: &ConfigStore, interval: Duration) -> Result<()> {
    info!(
        "Watching {} every {}s, press Ctrl+C to stop",
        store.path().display(),
        interval.as_secs()
    );

    store
        .watch(interval, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to register Ctrl+C handler: {}", e);
            }
            info!("Shutting down...");
        })
        .await;

    Ok(())
}
