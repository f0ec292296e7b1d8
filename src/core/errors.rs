use thiserror::Error;
use tokio::task::JoinError;

#[derive(Error, Debug)]
pub enum MorphError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Malformed vocabulary record at line {line}: {content:?}")]
    MalformedVocabulary { line: usize, content: String },

    #[error("Malformed paradigm record at line {line}: {content:?}")]
    MalformedParadigm { line: usize, content: String },

    #[error("Paradigm lookup failed: {0}")]
    Lookup(String),

    #[error("Paradigm lookup for '{word}' timed out after {millis} ms")]
    LookupTimeout { word: String, millis: u64 },

    #[error("MorphError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for MorphError {
    fn from(error: std::io::Error) -> Self {
        MorphError::Io(Box::new(error))
    }
}

impl From<JoinError> for MorphError {
    fn from(error: JoinError) -> Self {
        MorphError::Lookup(error.to_string())
    }
}
