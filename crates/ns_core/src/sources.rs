use async_trait::async_trait;
use crate::types::ArticleRef;
use crate::Result;

#[async_trait]
pub trait NewsSearch: Send + Sync {
    /// Search for articles mentioning `query`
    async fn search(&self, query: &str) -> Result<Vec<ArticleRef>>;
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `url` and return its extracted body text
    async fn fetch_text(&self, url: &str) -> Result<String>;
}
