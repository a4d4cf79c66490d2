use std::sync::Arc;
use ns_core::{NewsSearch, PageFetcher};
use ns_inference::{Models, ReportBuilder, SpeechSynthesizer};
use ns_scrappers::ArticleFetcher;

pub struct AppState {
    pub fetcher: ArticleFetcher,
    pub reports: ReportBuilder,
    pub speech: SpeechSynthesizer,
}

impl AppState {
    pub fn new(search: Arc<dyn NewsSearch>, pages: Arc<dyn PageFetcher>, models: Models) -> Self {
        Self {
            fetcher: ArticleFetcher::new(search, pages),
            reports: ReportBuilder::new(models.sentiment, models.summary),
            speech: SpeechSynthesizer::new(models.speech),
        }
    }
}
