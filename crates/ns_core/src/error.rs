use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True for failures that happened while talking to a remote service,
    /// as opposed to failures in what came back.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Network(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
