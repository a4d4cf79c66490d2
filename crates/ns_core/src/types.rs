use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder body used when neither the page nor the search result had text.
pub const NO_CONTENT: &str = "No content available";

/// Topic list attached to every analyzed article until topic extraction exists.
pub const PLACEHOLDER_TOPIC: &str = "Business";

/// A search hit before its page has been fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRef {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Maps a classifier's native label onto the three report labels.
    ///
    /// Only the exact upper-case labels emitted by binary sentiment models are
    /// recognised; everything else, including a native `NEUTRAL`, is Neutral.
    pub fn from_label(label: &str) -> Self {
        match label {
            "POSITIVE" => Sentiment::Positive,
            "NEGATIVE" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedArticle {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,
    #[serde(rename = "Topics")]
    pub topics: Vec<String>,
}

impl AnalyzedArticle {
    pub fn new(title: impl Into<String>, summary: impl Into<String>, sentiment: Sentiment) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            sentiment,
            topics: vec![PLACEHOLDER_TOPIC.to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
}

impl SentimentDistribution {
    pub fn record(&mut self, sentiment: Sentiment) {
        *self.slot(sentiment) += 1;
    }

    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    fn slot(&mut self, sentiment: Sentiment) -> &mut usize {
        match sentiment {
            Sentiment::Positive => &mut self.positive,
            Sentiment::Negative => &mut self.negative,
            Sentiment::Neutral => &mut self.neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparativeScore {
    #[serde(rename = "Sentiment Distribution")]
    pub distribution: SentimentDistribution,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Articles")]
    pub articles: Vec<AnalyzedArticle>,
    #[serde(rename = "Comparative Sentiment Score")]
    pub score: ComparativeScore,
    #[serde(rename = "Comparative Analysis")]
    pub comparative_analysis: String,
}

impl Report {
    pub fn distribution(&self) -> &SentimentDistribution {
        &self.score.distribution
    }

    /// The "no articles found" outcome.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Encoded audio as returned by a speech backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audio {
    pub bytes: Vec<u8>,
    pub content_type: String,
}
