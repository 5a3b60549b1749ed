#[derive(Debug, thiserror::Error)]
pub enum BitrixError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {error}: {description}")]
    Api { error: String, description: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Method {0} returned an unexpected result")]
    UnexpectedResult(String),
}

pub type BitrixResult<T> = Result<T, BitrixError>;
