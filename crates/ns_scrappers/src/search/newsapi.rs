use async_trait::async_trait;
use ns_core::{ArticleRef, Error, NewsSearch, Result};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_key: String,
    pub base_url: String,
}

impl SearchConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

#[derive(Deserialize)]
struct NewsApiArticle {
    title: Option<String>,
    url: Option<String>,
    description: Option<String>,
}

impl From<NewsApiArticle> for ArticleRef {
    fn from(a: NewsApiArticle) -> Self {
        ArticleRef {
            title: a.title.unwrap_or_default(),
            url: a.url.unwrap_or_default(),
            description: a.description,
        }
    }
}

/// Searches the NewsAPI `everything` endpoint.
pub struct NewsApiSearch {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl fmt::Debug for NewsApiSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiSearch")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl NewsApiSearch {
    pub fn new(config: SearchConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::Config("NewsAPI key is required".to_string()));
        }
        let endpoint = Url::parse(&config.base_url)
            .and_then(|base| base.join("/v2/everything"))
            .map_err(|e| Error::Config(format!("Invalid NewsAPI URL {}: {}", config.base_url, e)))?;
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key,
            endpoint,
        })
    }
}

#[async_trait]
impl NewsSearch for NewsApiSearch {
    async fn search(&self, query: &str) -> Result<Vec<ArticleRef>> {
        let response = self.client
            .get(self.endpoint.clone())
            .query(&[("q", query), ("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!("NewsAPI returned {}", status)));
        }

        let body = response.text().await?;
        let parsed: EverythingResponse = serde_json::from_str(&body)
            .map_err(|e| Error::Extraction(format!("Unexpected NewsAPI response: {}", e)))?;

        tracing::debug!("NewsAPI returned {} articles for {:?}", parsed.articles.len(), query);
        Ok(parsed.articles.into_iter().map(ArticleRef::from).collect())
    }
}
