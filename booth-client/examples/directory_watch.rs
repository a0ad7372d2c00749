// booth-client/examples/directory_watch.rs
// Watch the public booth directory and log occupancy changes.

use booth_client::{BoothDirectory, ClientConfig};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // API_BASE_URL overrides the default http://localhost:4000
    let config = ClientConfig::from_env();
    tracing::info!("Watching booth directory at {}", config.base_url);

    let directory = BoothDirectory::new(config.build_client()?);
    let poller = directory.activate();

    for _ in 0..6 {
        tokio::time::sleep(Duration::from_secs(10)).await;

        let state = directory.snapshot().await;
        if let Some(error) = &state.error {
            tracing::warn!("Directory error: {}", error);
            continue;
        }

        let occupied = state.booths.iter().filter(|b| b.is_occupied()).count();
        tracing::info!(
            total = state.booths.len(),
            occupied,
            positioned = state.positioned_booths().count(),
            "Booth directory refreshed"
        );
    }

    poller.cancel();
    Ok(())
}
