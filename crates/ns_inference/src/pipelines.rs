//! Budgeted front-ends for the model collaborators.
//!
//! Each wrapper truncates its input to what the model accepts and applies the
//! failure policy for that model: the classifier degrades to Neutral, the
//! summarizer degrades to a prefix of the input, speech errors propagate.

use std::fmt;
use std::sync::Arc;
use ns_core::{truncate_chars, Audio, Result, Sentiment, SentimentModel, SpeechModel, SummaryModel};

pub const SENTIMENT_INPUT_CHARS: usize = 512;
pub const SUMMARY_INPUT_CHARS: usize = 1024;
pub const SUMMARY_MIN_LENGTH: usize = 25;
pub const SUMMARY_MAX_LENGTH: usize = 50;
pub const FALLBACK_SUMMARY_CHARS: usize = 100;
pub const SPEECH_INPUT_CHARS: usize = 200;

#[derive(Clone)]
pub struct SentimentClassifier {
    model: Arc<dyn SentimentModel>,
}

impl fmt::Debug for SentimentClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentClassifier")
            .field("model", &self.model.name())
            .finish()
    }
}

impl SentimentClassifier {
    pub fn new(model: Arc<dyn SentimentModel>) -> Self {
        Self { model }
    }

    pub async fn classify(&self, text: &str) -> Sentiment {
        match self.model.classify(truncate_chars(text, SENTIMENT_INPUT_CHARS)).await {
            Ok(label) => Sentiment::from_label(&label),
            Err(e) => {
                tracing::warn!("⚠️ {} classifier failed, using Neutral: {}", self.model.name(), e);
                Sentiment::Neutral
            }
        }
    }
}

#[derive(Clone)]
pub struct Summarizer {
    model: Arc<dyn SummaryModel>,
}

impl fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Summarizer")
            .field("model", &self.model.name())
            .finish()
    }
}

impl Summarizer {
    pub fn new(model: Arc<dyn SummaryModel>) -> Self {
        Self { model }
    }

    pub async fn summarize(&self, text: &str) -> String {
        let input = truncate_chars(text, SUMMARY_INPUT_CHARS);
        match self.model.summarize(input, SUMMARY_MIN_LENGTH, SUMMARY_MAX_LENGTH).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("⚠️ {} summarizer failed, using text prefix: {}", self.model.name(), e);
                fallback_summary(text)
            }
        }
    }
}

/// The first hundred characters of `text` followed by `...`.
pub fn fallback_summary(text: &str) -> String {
    format!("{}...", truncate_chars(text, FALLBACK_SUMMARY_CHARS))
}

#[derive(Clone)]
pub struct SpeechSynthesizer {
    model: Arc<dyn SpeechModel>,
}

impl fmt::Debug for SpeechSynthesizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechSynthesizer")
            .field("model", &self.model.name())
            .finish()
    }
}

impl SpeechSynthesizer {
    pub fn new(model: Arc<dyn SpeechModel>) -> Self {
        Self { model }
    }

    pub async fn synthesize(&self, text: &str) -> Result<Audio> {
        self.model.synthesize(truncate_chars(text, SPEECH_INPUT_CHARS)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ns_core::Error;
    use std::sync::Mutex;

    /// Records every input and replies with a fixed outcome.
    struct Scripted {
        reply: Option<String>,
        inputs: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn ok(reply: &str) -> Arc<Self> {
            Arc::new(Self { reply: Some(reply.to_string()), inputs: Mutex::new(Vec::new()) })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self { reply: None, inputs: Mutex::new(Vec::new()) })
        }

        fn respond(&self, text: &str) -> Result<String> {
            self.inputs.lock().unwrap().push(text.to_string());
            self.reply.clone().ok_or_else(|| Error::Model("backend down".to_string()))
        }

        fn last_input(&self) -> String {
            self.inputs.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    #[async_trait]
    impl SentimentModel for Scripted {
        fn name(&self) -> &str {
            "Scripted"
        }

        async fn classify(&self, text: &str) -> Result<String> {
            self.respond(text)
        }
    }

    #[async_trait]
    impl SummaryModel for Scripted {
        fn name(&self) -> &str {
            "Scripted"
        }

        async fn summarize(&self, text: &str, min_length: usize, max_length: usize) -> Result<String> {
            assert_eq!((min_length, max_length), (SUMMARY_MIN_LENGTH, SUMMARY_MAX_LENGTH));
            self.respond(text)
        }
    }

    #[async_trait]
    impl SpeechModel for Scripted {
        fn name(&self) -> &str {
            "Scripted"
        }

        async fn synthesize(&self, text: &str) -> Result<Audio> {
            let reply = self.respond(text)?;
            Ok(Audio { bytes: reply.into_bytes(), content_type: "audio/wav".to_string() })
        }
    }

    #[tokio::test]
    async fn test_classifier_maps_labels() {
        for (label, expected) in [
            ("POSITIVE", Sentiment::Positive),
            ("NEGATIVE", Sentiment::Negative),
            ("NEUTRAL", Sentiment::Neutral),
            ("positive", Sentiment::Neutral),
        ] {
            let classifier = SentimentClassifier::new(Scripted::ok(label));
            assert_eq!(classifier.classify("text").await, expected, "label {}", label);
        }
    }

    #[tokio::test]
    async fn test_classifier_truncates_input() {
        let model = Scripted::ok("POSITIVE");
        let classifier = SentimentClassifier::new(model.clone());
        classifier.classify(&"é".repeat(600)).await;
        assert_eq!(model.last_input().chars().count(), SENTIMENT_INPUT_CHARS);
    }

    #[tokio::test]
    async fn test_classifier_failure_is_neutral() {
        let classifier = SentimentClassifier::new(Scripted::failing());
        assert_eq!(classifier.classify("great results").await, Sentiment::Neutral);
    }

    #[tokio::test]
    async fn test_summarizer_truncates_input() {
        let model = Scripted::ok("summary");
        let summarizer = Summarizer::new(model.clone());
        assert_eq!(summarizer.summarize(&"a".repeat(2000)).await, "summary");
        assert_eq!(model.last_input().len(), SUMMARY_INPUT_CHARS);
    }

    #[tokio::test]
    async fn test_summarizer_fallback_long_text() {
        let summarizer = Summarizer::new(Scripted::failing());
        let text = "x".repeat(150);
        assert_eq!(summarizer.summarize(&text).await, format!("{}...", &text[..100]));
    }

    #[tokio::test]
    async fn test_summarizer_fallback_exactly_hundred() {
        let summarizer = Summarizer::new(Scripted::failing());
        let text = "y".repeat(100);
        assert_eq!(summarizer.summarize(&text).await, format!("{}...", text));
    }

    #[tokio::test]
    async fn test_summarizer_fallback_short_text() {
        let summarizer = Summarizer::new(Scripted::failing());
        assert_eq!(summarizer.summarize("short").await, "short...");
        assert_eq!(summarizer.summarize("").await, "...");
    }

    #[test]
    fn test_fallback_summary_multibyte() {
        let text = "ख".repeat(120);
        assert_eq!(fallback_summary(&text), format!("{}...", "ख".repeat(100)));
    }

    #[tokio::test]
    async fn test_synthesizer_truncates_input() {
        let model = Scripted::ok("audio");
        let synthesizer = SpeechSynthesizer::new(model.clone());
        let audio = synthesizer.synthesize(&"क".repeat(500)).await.unwrap();
        assert_eq!(audio.bytes, b"audio");
        assert_eq!(model.last_input().chars().count(), SPEECH_INPUT_CHARS);
    }

    #[tokio::test]
    async fn test_synthesizer_failure_propagates() {
        let synthesizer = SpeechSynthesizer::new(Scripted::failing());
        assert!(matches!(synthesizer.synthesize("text").await, Err(Error::Model(_))));
    }
}
