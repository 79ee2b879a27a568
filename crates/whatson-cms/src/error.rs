use thiserror::Error;

#[derive(Debug, Error)]
pub enum CmsError {
    #[error("Missing required field '{field}' for locale '{locale}'")]
    MissingField { field: &'static str, locale: String },

    #[error("Invalid timestamp in field '{field}': {value}")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CmsError>;
