use async_trait::async_trait;
use ns_core::{Error, PageFetcher, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use std::fmt;

/// Joins the text of every `<p>` element with single spaces, in document order.
pub fn extract_paragraphs(document: &Html) -> Result<String> {
    let selector = Selector::parse("p")
        .map_err(|e| Error::Extraction(format!("Invalid selector: {}", e)))?;

    Ok(document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" "))
}

/// Downloads article pages and pulls out their paragraph text.
///
/// A non-2xx response is an error even when it carries markup: paywall and
/// error pages are never extracted, so the caller falls back to the search
/// description instead.
#[derive(Clone)]
pub struct HttpPageFetcher {
    client: Client,
}

impl fmt::Debug for HttpPageFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpPageFetcher")
            .field("client", &"<reqwest::Client>")
            .finish()
    }
}

impl HttpPageFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;
        let document = Html::parse_document(&html);
        extract_paragraphs(&document)
    }
}
