use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use pagewatch_core::{split_message, MAX_CHUNK_CHARS};

/// Hard limit on a single message body, including any formatting envelope.
pub const MESSAGE_LIMIT: usize = 2000;

const DEFAULT_USERNAME: &str = "Website-update-notifier NOTIFICATION";

const SEND_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum SendError {
    #[error("failed to build webhook client: {0}")]
    Client(String),
    #[error("webhook request failed: {0}")]
    Request(String),
    #[error("webhook rejected message: http status {0}")]
    HttpStatus(u16),
    #[error("message of {len} characters exceeds the {limit} character limit")]
    TooLong { len: usize, limit: usize },
}

/// Boundary for delivering one message body to a notification destination.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, body: &str) -> Result<(), SendError>;
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
    username: &'a str,
}

/// Discord-style webhook destination: JSON POST of `{content, username}`.
pub struct DiscordWebhook {
    client: reqwest::Client,
    url: String,
    username: String,
}

impl DiscordWebhook {
    pub fn new(url: impl Into<String>) -> Result<Self, SendError> {
        let client = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|err| SendError::Client(err.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
            username: DEFAULT_USERNAME.to_string(),
        })
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }
}

#[async_trait::async_trait]
impl Transport for DiscordWebhook {
    async fn send(&self, body: &str) -> Result<(), SendError> {
        let len = body.chars().count();
        if len > MESSAGE_LIMIT {
            return Err(SendError::TooLong {
                len,
                limit: MESSAGE_LIMIT,
            });
        }

        let payload = WebhookPayload {
            content: body,
            username: &self.username,
        };
        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| SendError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SendError::HttpStatus(status.as_u16()));
        }
        Ok(())
    }
}

/// Deliver `body` as a sequence of fenced code blocks.
///
/// Each chunk is wrapped as ```` ```<lang>\n<chunk>``` ```` and sent as an
/// independent message, in chunk order. The chunk size leaves headroom for
/// the fence, so the wrapped message stays under [`MESSAGE_LIMIT`]. An
/// empty body sends nothing.
pub async fn send_code_blocks(
    transport: &dyn Transport,
    body: &str,
    lang: &str,
) -> Result<(), SendError> {
    for chunk in split_message(body, MAX_CHUNK_CHARS) {
        transport.send(&format!("```{lang}\n{chunk}```")).await?;
    }
    Ok(())
}
