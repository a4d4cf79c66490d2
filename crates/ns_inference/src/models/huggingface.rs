use async_trait::async_trait;
use ns_core::{Audio, Error, Result, SentimentModel, SpeechModel, SummaryModel};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";
pub const DEFAULT_SUMMARY_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
pub const DEFAULT_SPEECH_MODEL: &str = "facebook/mms-tts-hin";
const DEFAULT_AUDIO_TYPE: &str = "audio/flac";

#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub sentiment_model: String,
    pub summary_model: String,
    pub speech_model: String,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            sentiment_model: DEFAULT_SENTIMENT_MODEL.to_string(),
            summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
            speech_model: DEFAULT_SPEECH_MODEL.to_string(),
        }
    }
}

#[derive(Serialize)]
struct TextRequest<'a> {
    inputs: &'a str,
}

#[derive(Serialize)]
struct SummaryRequest<'a> {
    inputs: &'a str,
    parameters: SummaryParameters,
}

#[derive(Serialize)]
struct SummaryParameters {
    min_length: usize,
    max_length: usize,
    do_sample: bool,
}

#[derive(Deserialize)]
struct LabelScore {
    label: String,
    score: f32,
}

/// Text classification comes back nested for single inputs on some
/// deployments and flat on others.
#[derive(Deserialize)]
#[serde(untagged)]
enum ClassificationResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassificationResponse {
    fn top_label(self) -> Option<String> {
        let scores = match self {
            ClassificationResponse::Nested(outer) => outer.into_iter().next().unwrap_or_default(),
            ClassificationResponse::Flat(scores) => scores,
        };
        scores
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .map(|s| s.label)
    }
}

#[derive(Deserialize)]
struct SummaryResponse {
    summary_text: String,
}

/// Pretrained pipelines served by the Hugging Face Inference API.
pub struct HuggingFaceModel {
    client: Client,
    config: HuggingFaceConfig,
}

impl fmt::Debug for HuggingFaceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceModel")
            .field("client", &"<reqwest::Client>")
            .field("api_token", &self.config.api_token.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl HuggingFaceModel {
    pub fn new(mut config: HuggingFaceConfig) -> Result<Self> {
        Url::parse(&config.base_url)
            .map_err(|e| Error::Config(format!("Invalid model URL {}: {}", config.base_url, e)))?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}", self.config.base_url, model)
    }

    async fn post<T: Serialize + ?Sized>(&self, model: &str, body: &T) -> Result<Response> {
        let mut request = self.client.post(self.endpoint(model)).json(body);
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Model(format!("{} returned {}: {}", model, status, detail.trim())));
        }
        Ok(response)
    }

    async fn post_json<T, R>(&self, model: &str, body: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: for<'de> Deserialize<'de>,
    {
        let body = self.post(model, body).await?.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::Model(format!("Unexpected response from {}: {}", model, e)))
    }
}

#[async_trait]
impl SentimentModel for HuggingFaceModel {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn classify(&self, text: &str) -> Result<String> {
        let model = &self.config.sentiment_model;
        let response: ClassificationResponse = self.post_json(model, &TextRequest { inputs: text }).await?;
        response
            .top_label()
            .ok_or_else(|| Error::Model(format!("{} returned no labels", model)))
    }
}

#[async_trait]
impl SummaryModel for HuggingFaceModel {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn summarize(&self, text: &str, min_length: usize, max_length: usize) -> Result<String> {
        let model = &self.config.summary_model;
        let request = SummaryRequest {
            inputs: text,
            parameters: SummaryParameters {
                min_length,
                max_length,
                do_sample: false,
            },
        };
        let response: Vec<SummaryResponse> = self.post_json(model, &request).await?;
        response
            .into_iter()
            .next()
            .map(|r| r.summary_text)
            .ok_or_else(|| Error::Model(format!("{} returned no summary", model)))
    }
}

#[async_trait]
impl SpeechModel for HuggingFaceModel {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn synthesize(&self, text: &str) -> Result<Audio> {
        let response = self.post(&self.config.speech_model, &TextRequest { inputs: text }).await?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_AUDIO_TYPE)
            .to_string();
        let bytes = response.bytes().await?.to_vec();
        if bytes.is_empty() {
            return Err(Error::Model(format!("{} returned empty audio", self.config.speech_model)));
        }

        Ok(Audio { bytes, content_type })
    }
}
