use pagewatch_core::{diff_lines, ChangeTracker, Observation};

use crate::fetch::TextFetcher;
use crate::transport::{send_code_blocks, SendError, Transport};

/// One notification destination with its watched URLs and its own change
/// state.
///
/// Channels are fully independent: two channels watching the same URL keep
/// separate snapshots and notify separately.
pub struct NotificationChannel {
    transport: Box<dyn Transport>,
    urls: Vec<String>,
    tracker: ChangeTracker,
}

impl NotificationChannel {
    pub fn new(transport: Box<dyn Transport>, urls: Vec<String>) -> Self {
        Self {
            transport,
            urls,
            tracker: ChangeTracker::new(),
        }
    }

    /// Poll every watched URL once, in configured order.
    ///
    /// A failed fetch skips the URL for this cycle and leaves its snapshot
    /// untouched; a failed send abandons the rest of that notification.
    /// Neither aborts the cycle.
    pub async fn check_updates(&mut self, fetcher: &dyn TextFetcher) {
        for url in &self.urls {
            let text = match fetcher.fetch_text(url).await {
                Ok(text) => text,
                Err(err) => {
                    log::warn!("fetch failed for {url}: {err}");
                    continue;
                }
            };

            match self.tracker.observe(url, &text) {
                Observation::Seeded => {
                    log::info!("seeded baseline for {url}");
                }
                Observation::Unchanged => {
                    log::debug!("no change for {url}");
                }
                Observation::Changed { previous } => {
                    log::info!("change detected for {url}");
                    let body = diff_lines(&previous, &text).join("\n");
                    if let Err(err) = send_notification(self.transport.as_ref(), url, &body).await
                    {
                        log::warn!("notification delivery failed for {url}: {err}");
                    }
                }
            }
        }
    }

    /// Number of watched URLs.
    pub fn url_count(&self) -> usize {
        self.urls.len()
    }
}

/// Header message first, then the diff body as fenced `diff` blocks.
async fn send_notification(
    transport: &dyn Transport,
    url: &str,
    diff_body: &str,
) -> Result<(), SendError> {
    transport.send(&format!("Change detected: \n{url}")).await?;
    send_code_blocks(transport, diff_body, "diff").await
}
