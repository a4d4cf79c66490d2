use std::fmt;
use std::sync::Arc;
use ns_core::{Article, ArticleRef, NewsSearch, PageFetcher, NO_CONTENT};
use crate::logging::Logger;

/// Turns a company name into articles with best-effort body text.
#[derive(Clone)]
pub struct ArticleFetcher {
    search: Arc<dyn NewsSearch>,
    pages: Arc<dyn PageFetcher>,
}

impl fmt::Debug for ArticleFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArticleFetcher")
            .field("search", &"<dyn NewsSearch>")
            .field("pages", &"<dyn PageFetcher>")
            .finish()
    }
}

impl ArticleFetcher {
    pub fn new(search: Arc<dyn NewsSearch>, pages: Arc<dyn PageFetcher>) -> Self {
        Self { search, pages }
    }

    /// Never fails: a failed search is an empty result and a failed page
    /// falls back to the search description, then to [`NO_CONTENT`].
    pub async fn fetch_news(&self, company_name: &str) -> Vec<Article> {
        let logger = Logger::new().with_prefix(format!("[{}]", company_name));

        logger.info("🔎 Searching for news");
        let refs = match self.search.search(company_name).await {
            Ok(refs) => refs,
            Err(e) => {
                logger.warn(&format!("⚠️ Search failed, returning no articles: {}", e));
                return Vec::new();
            }
        };
        logger.info(&format!("📰 Found {} article references", refs.len()));

        let total = refs.len();
        let mut articles = Vec::with_capacity(total);
        for (i, article_ref) in refs.into_iter().enumerate() {
            let logger = logger.clone().with_prefix(format!("[{}/{}]", i + 1, total));
            articles.push(self.fetch_article(article_ref, &logger).await);
        }
        articles
    }

    async fn fetch_article(&self, article_ref: ArticleRef, logger: &Logger) -> Article {
        logger.debug(&format!("🦗 Fetching {}", article_ref.url));
        let content = match self.pages.fetch_text(&article_ref.url).await {
            Ok(text) => text,
            Err(e) => {
                logger.warn(&format!("⚠️ Could not extract {}: {}", article_ref.url, e));
                article_ref.description.unwrap_or_else(|| NO_CONTENT.to_string())
            }
        };

        Article {
            title: article_ref.title,
            content,
        }
    }
}
