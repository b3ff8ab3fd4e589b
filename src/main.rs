use chrono::Local;
use tooltips::{info_time, process::process_episodes, Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let start_time = Local::now();
    process_episodes().await?;
    info_time!(start_time, "Full program time:");

    Ok(())
}
