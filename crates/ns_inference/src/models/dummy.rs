use std::fmt;
use ns_core::{Audio, Result, SentimentModel, SpeechModel, SummaryModel};

const POSITIVE_WORDS: &[&str] = &[
    "beat", "boost", "gain", "gains", "growth", "grow", "grows", "improve", "improved",
    "profit", "profits", "record", "rise", "rises", "rally", "strong", "surge", "upgrade",
    "win", "wins",
];

const NEGATIVE_WORDS: &[&str] = &[
    "cut", "cuts", "decline", "declines", "downgrade", "drop", "drops", "fall", "falls",
    "fraud", "lawsuit", "layoffs", "loss", "losses", "miss", "probe", "recall", "slump",
    "weak", "warning",
];

const SAMPLE_RATE: u32 = 16_000;
const SAMPLES_PER_CHAR: u32 = SAMPLE_RATE / 20;
/// One minute of audio at most.
const MAX_SAMPLES: u32 = SAMPLE_RATE * 60;

/// Offline stand-in for every model: word lists, leading words and silence.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

/// A silent 16-bit mono PCM WAV file of at most [`MAX_SAMPLES`] samples.
fn silent_wav(samples: u32) -> Vec<u8> {
    let data_len = samples.min(MAX_SAMPLES) * 2;
    let mut wav = Vec::with_capacity(44 + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.resize(44 + data_len as usize, 0);
    wav
}

#[async_trait::async_trait]
impl SentimentModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn classify(&self, text: &str) -> Result<String> {
        let lower = text.to_lowercase();
        let (mut positive, mut negative) = (0usize, 0usize);
        for word in lower.split(|c: char| !c.is_alphanumeric()) {
            if POSITIVE_WORDS.contains(&word) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&word) {
                negative += 1;
            }
        }

        let label = match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => "POSITIVE",
            std::cmp::Ordering::Less => "NEGATIVE",
            std::cmp::Ordering::Equal => "NEUTRAL",
        };
        Ok(label.to_string())
    }
}

#[async_trait::async_trait]
impl SummaryModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn summarize(&self, text: &str, _min_length: usize, max_length: usize) -> Result<String> {
        // Take first 20 words and join them
        let words: Vec<&str> = text.split_whitespace().take(max_length.min(20)).collect();
        Ok(words.join(" "))
    }
}

#[async_trait::async_trait]
impl SpeechModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn synthesize(&self, text: &str) -> Result<Audio> {
        let chars = u32::try_from(text.chars().count().max(1)).unwrap_or(u32::MAX);
        Ok(Audio {
            bytes: silent_wav(chars.saturating_mul(SAMPLES_PER_CHAR)),
            content_type: "audio/wav".to_string(),
        })
    }
}
