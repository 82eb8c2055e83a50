//! Pagewatch engine: page fetching, change orchestration, and webhook delivery.
mod channel;
mod config;
mod decode;
mod extract;
mod fetch;
mod transport;
mod types;

pub use channel::NotificationChannel;
pub use config::{ChannelConfig, Config, ConfigError};
pub use decode::decode_body;
pub use extract::{Extractor, VisibleTextExtractor};
pub use fetch::{FetchSettings, HttpTextFetcher, TextFetcher};
pub use transport::{send_code_blocks, DiscordWebhook, SendError, Transport, MESSAGE_LIMIT};
pub use types::{FailureKind, FetchError};
