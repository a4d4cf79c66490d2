use async_trait::async_trait;
use crate::types::Audio;
use crate::Result;

/// A text classifier returning the backend's native label (e.g. `POSITIVE`).
#[async_trait]
pub trait SentimentModel: Send + Sync {
    fn name(&self) -> &str;

    async fn classify(&self, text: &str) -> Result<String>;
}

#[async_trait]
pub trait SummaryModel: Send + Sync {
    fn name(&self) -> &str;

    /// Summarize `text` into roughly `min_length..=max_length` tokens
    async fn summarize(&self, text: &str, min_length: usize, max_length: usize) -> Result<String>;
}

#[async_trait]
pub trait SpeechModel: Send + Sync {
    fn name(&self) -> &str;

    async fn synthesize(&self, text: &str) -> Result<Audio>;
}
