pub mod models;
pub mod pipelines;
pub mod report;

pub use models::{create_models, Models};
pub use pipelines::{SentimentClassifier, SpeechSynthesizer, Summarizer};
pub use report::{narration, ReportBuilder};

/// Which model backend to use and how to reach it.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Backend name: `huggingface` or `dummy`
    pub model_name: String,
    pub api_key: Option<String>,
    /// Overrides the backend's default endpoint
    pub model_url: Option<String>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            model_name: models::HUGGINGFACE.to_string(),
            api_key: None,
            model_url: None,
        }
    }
}

pub mod prelude {
    pub use super::InferenceConfig;
    pub use super::models::{create_models, Models};
    pub use super::report::{narration, ReportBuilder};
    pub use ns_core::{Article, Report, Result, Error, Sentiment};
}
