use std::fmt;
use std::sync::Arc;
use ns_core::{Error, Result, SentimentModel, SpeechModel, SummaryModel};
use crate::InferenceConfig;

pub mod dummy;
pub mod huggingface;

pub use dummy::DummyModel;
pub use huggingface::{HuggingFaceConfig, HuggingFaceModel};

pub const HUGGINGFACE: &str = "huggingface";
pub const DUMMY: &str = "dummy";

/// The three collaborators a backend provides.
#[derive(Clone)]
pub struct Models {
    pub sentiment: Arc<dyn SentimentModel>,
    pub summary: Arc<dyn SummaryModel>,
    pub speech: Arc<dyn SpeechModel>,
}

impl fmt::Debug for Models {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Models")
            .field("sentiment", &self.sentiment.name())
            .field("summary", &self.summary.name())
            .field("speech", &self.speech.name())
            .finish()
    }
}

impl Models {
    fn from_shared<M>(model: Arc<M>) -> Self
    where
        M: SentimentModel + SummaryModel + SpeechModel + 'static,
    {
        Self {
            sentiment: model.clone(),
            summary: model.clone(),
            speech: model,
        }
    }
}

pub fn create_models(config: &InferenceConfig) -> Result<Models> {
    match config.model_name.as_str() {
        HUGGINGFACE => {
            let mut hf_config = HuggingFaceConfig::default();
            if let Some(url) = &config.model_url {
                hf_config.base_url = url.clone();
            }
            hf_config.api_token = config.api_key.clone();
            let model = HuggingFaceModel::new(hf_config)?;
            Ok(Models::from_shared(Arc::new(model)))
        }
        DUMMY => Ok(Models::from_shared(Arc::new(DummyModel::new()))),
        other => Err(Error::Config(format!(
            "Unknown model backend '{}'. Available models: {}, {}",
            other, HUGGINGFACE, DUMMY
        ))),
    }
}
