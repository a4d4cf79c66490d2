pub mod newsapi;

pub use newsapi::{NewsApiSearch, SearchConfig};
