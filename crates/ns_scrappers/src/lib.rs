pub mod logging;
pub mod manager;
pub mod page;
pub mod search;

pub use logging::{init_logging, Logger};
pub use manager::ArticleFetcher;
pub use page::{extract_paragraphs, HttpPageFetcher};
pub use search::{NewsApiSearch, SearchConfig};

pub mod prelude {
    pub use super::{ArticleFetcher, HttpPageFetcher, NewsApiSearch, SearchConfig};
    pub use ns_core::{Article, ArticleRef, Error, Result};
}
