pub mod error;
pub mod models;
pub mod sources;
pub mod types;

pub use error::{Error, Result};
pub use models::{SentimentModel, SpeechModel, SummaryModel};
pub use sources::{NewsSearch, PageFetcher};
pub use types::*;

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_chars;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hello", 5), "hello");
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("", 3), "");
        assert_eq!(truncate_chars("खबरों", 2), "खब");
    }
}
