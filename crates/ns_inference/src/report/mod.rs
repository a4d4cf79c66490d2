use std::fmt;
use std::sync::Arc;
use ns_core::{AnalyzedArticle, Article, ComparativeScore, Report, SentimentModel, SummaryModel};
use crate::pipelines::{SentimentClassifier, Summarizer};

/// Reports analyze at most this many articles; the rest are ignored.
pub const MAX_ARTICLES: usize = 10;

/// Static until cross-article comparison exists; it does not look at the counts.
pub fn comparative_analysis(company: &str) -> String {
    format!(
        "Positive articles focus on {}'s growth, while negative ones highlight challenges.",
        company
    )
}

/// Hindi narration of a report, read out by the speech synthesizer.
pub fn narration(report: &Report) -> String {
    let dist = report.distribution();
    format!(
        "{company} की खबरों का सारांश: कुल {total} लेख मिले। सकारात्मक: {positive}, नकारात्मक: {negative}, तटस्थ: {neutral}। \
         सकारात्मक लेखों में {company} की वृद्धि पर ध्यान है, जबकि नकारात्मक लेख चुनौतियों को उजागर करते हैं।",
        company = report.company,
        total = report.articles.len(),
        positive = dist.positive,
        negative = dist.negative,
        neutral = dist.neutral,
    )
}

pub struct ReportBuilder {
    summarizer: Summarizer,
    classifier: SentimentClassifier,
}

impl fmt::Debug for ReportBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportBuilder")
            .field("summarizer", &self.summarizer)
            .field("classifier", &self.classifier)
            .finish()
    }
}

impl ReportBuilder {
    pub fn new(sentiment: Arc<dyn SentimentModel>, summary: Arc<dyn SummaryModel>) -> Self {
        Self {
            summarizer: Summarizer::new(summary),
            classifier: SentimentClassifier::new(sentiment),
        }
    }

    /// Summarizes and classifies the first [`MAX_ARTICLES`] articles in order.
    pub async fn build_report(&self, company_name: &str, articles: &[Article]) -> Report {
        let selected = &articles[..articles.len().min(MAX_ARTICLES)];
        tracing::info!("📊 Building report for {} from {} of {} articles", company_name, selected.len(), articles.len());

        let mut analyzed = Vec::with_capacity(selected.len());
        let mut score = ComparativeScore::default();
        for (i, article) in selected.iter().enumerate() {
            tracing::debug!("🤖 Analyzing article {}/{}: {}", i + 1, selected.len(), article.title);
            let summary = self.summarizer.summarize(&article.content).await;
            let sentiment = self.classifier.classify(&article.content).await;
            score.distribution.record(sentiment);
            analyzed.push(AnalyzedArticle::new(article.title.clone(), summary, sentiment));
        }

        tracing::info!(
            "✨ Report for {}: {} positive, {} negative, {} neutral",
            company_name, score.distribution.positive, score.distribution.negative, score.distribution.neutral
        );

        Report {
            company: company_name.to_string(),
            articles: analyzed,
            score,
            comparative_analysis: comparative_analysis(company_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DummyModel;
    use async_trait::async_trait;
    use ns_core::{Error, Result, Sentiment, SentimentDistribution, NO_CONTENT, PLACEHOLDER_TOPIC};

    /// Labels by the article body: the body itself is the native label.
    struct EchoLabel;

    #[async_trait]
    impl SentimentModel for EchoLabel {
        fn name(&self) -> &str {
            "EchoLabel"
        }

        async fn classify(&self, text: &str) -> Result<String> {
            Ok(text.to_string())
        }
    }

    struct Broken;

    #[async_trait]
    impl SummaryModel for Broken {
        fn name(&self) -> &str {
            "Broken"
        }

        async fn summarize(&self, _text: &str, _min: usize, _max: usize) -> Result<String> {
            Err(Error::Model("unavailable".to_string()))
        }
    }

    #[async_trait]
    impl SentimentModel for Broken {
        fn name(&self) -> &str {
            "Broken"
        }

        async fn classify(&self, _text: &str) -> Result<String> {
            Err(Error::Model("unavailable".to_string()))
        }
    }

    fn article(title: &str, content: &str) -> Article {
        Article { title: title.to_string(), content: content.to_string() }
    }

    fn dummy_builder() -> ReportBuilder {
        let model = Arc::new(DummyModel::new());
        ReportBuilder::new(model.clone(), model)
    }

    #[tokio::test]
    async fn test_empty_report() {
        let report = dummy_builder().build_report("Acme", &[]).await;
        assert!(report.is_empty());
        assert_eq!(report.company, "Acme");
        assert_eq!(*report.distribution(), SentimentDistribution::default());
        assert_eq!(report.comparative_analysis, comparative_analysis("Acme"));
    }

    #[tokio::test]
    async fn test_caps_at_ten_and_preserves_order() {
        let articles: Vec<Article> = (0..12).map(|i| article(&format!("t{}", i), NO_CONTENT)).collect();
        let report = dummy_builder().build_report("Acme", &articles).await;

        assert_eq!(report.articles.len(), MAX_ARTICLES);
        for (i, analyzed) in report.articles.iter().enumerate() {
            assert_eq!(analyzed.title, format!("t{}", i));
            assert_eq!(analyzed.topics, vec![PLACEHOLDER_TOPIC.to_string()]);
        }
        assert_eq!(report.distribution().total(), 10);
    }

    #[tokio::test]
    async fn test_distribution_matches_labels() {
        let model = Arc::new(DummyModel::new());
        let builder = ReportBuilder::new(Arc::new(EchoLabel), model);
        let articles = vec![
            article("a", "POSITIVE"),
            article("b", "NEGATIVE"),
            article("c", "NEUTRAL"),
            article("d", "POSITIVE"),
            article("e", "Positive"),
        ];

        let report = builder.build_report("Acme", &articles).await;
        let sentiments: Vec<Sentiment> = report.articles.iter().map(|a| a.sentiment).collect();
        assert_eq!(sentiments, vec![
            Sentiment::Positive,
            Sentiment::Negative,
            Sentiment::Neutral,
            Sentiment::Positive,
            Sentiment::Neutral,
        ]);
        let dist = report.distribution();
        assert_eq!((dist.positive, dist.negative, dist.neutral), (2, 1, 2));
        assert_eq!(dist.total(), report.articles.len());
    }

    #[tokio::test]
    async fn test_single_native_neutral_label() {
        let builder = ReportBuilder::new(Arc::new(EchoLabel), Arc::new(DummyModel::new()));
        let report = builder.build_report("Acme", &[article("only", "NEUTRAL")]).await;
        assert_eq!(report.articles[0].sentiment, Sentiment::Neutral);
        assert_eq!(report.distribution().neutral, 1);
    }

    #[tokio::test]
    async fn test_failing_models_never_fail_report() {
        let builder = ReportBuilder::new(Arc::new(Broken), Arc::new(Broken));
        let long = "z".repeat(140);
        let report = builder.build_report("Acme", &[article("x", &long), article("y", "tiny")]).await;

        assert_eq!(report.articles.len(), 2);
        assert_eq!(report.articles[0].summary, format!("{}...", "z".repeat(100)));
        assert_eq!(report.articles[1].summary, "tiny...");
        assert!(report.articles.iter().all(|a| a.sentiment == Sentiment::Neutral));
        assert_eq!(report.distribution().neutral, 2);
    }

    #[tokio::test]
    async fn test_narration_mentions_counts() {
        let builder = ReportBuilder::new(Arc::new(EchoLabel), Arc::new(DummyModel::new()));
        let report = builder
            .build_report("Acme", &[article("a", "POSITIVE"), article("b", "NEGATIVE"), article("c", "POSITIVE")])
            .await;

        let text = narration(&report);
        assert!(text.starts_with("Acme की खबरों का सारांश: कुल 3 लेख मिले।"));
        assert!(text.contains("सकारात्मक: 2, नकारात्मक: 1, तटस्थ: 0।"));
        assert!(text.contains("Acme की वृद्धि"));
    }

    #[test]
    fn test_comparative_analysis_template() {
        assert_eq!(
            comparative_analysis("Acme"),
            "Positive articles focus on Acme's growth, while negative ones highlight challenges."
        );
    }
}
