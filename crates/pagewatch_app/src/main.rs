//! The pagewatch daemon: poll configured pages, notify webhooks on change.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use pagewatch_engine::{
    Config, DiscordWebhook, FetchSettings, HttpTextFetcher, NotificationChannel,
};
use watch_logging::LogDestination;

const DEFAULT_CONFIG_PATH: &str = "config/config.json";

fn main() -> anyhow::Result<()> {
    watch_logging::initialize(LogDestination::Terminal);

    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = Config::load(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    // The whole system is sequential: one fetch in flight at a time, one
    // channel after another.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;
    runtime.block_on(poll_loop(config))
}

async fn poll_loop(config: Config) -> anyhow::Result<()> {
    let fetcher =
        HttpTextFetcher::new(FetchSettings::default()).context("building http client")?;

    let mut channels = Vec::with_capacity(config.webhooks.len());
    for channel_config in &config.webhooks {
        let transport = DiscordWebhook::new(channel_config.webhook.clone())
            .context("building webhook transport")?;
        channels.push(NotificationChannel::new(
            Box::new(transport),
            channel_config.urls.clone(),
        ));
    }
    log::info!(
        "watching {} url(s) across {} channel(s), polling every {}s",
        channels.iter().map(NotificationChannel::url_count).sum::<usize>(),
        channels.len(),
        config.sleep,
    );

    let mut cycle: u64 = 0;
    loop {
        cycle += 1;
        log::info!("poll cycle {cycle}");
        for channel in &mut channels {
            channel.check_updates(&fetcher).await;
        }

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                log::info!("interrupt received, exiting");
                return Ok(());
            }
            _ = tokio::time::sleep(config.poll_interval()) => {}
        }
    }
}
