use thiserror::Error;

/// Represents errors that can occur at the crate boundary: calling the
/// generative-AI service and deserializing the document it returns.
#[derive(Error, Debug)]
pub enum DeckApiError {
    /// Error originating from the underlying HTTP client (`reqwest`).
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Error occurred during deserialization of the JSON document returned by the model.
    #[error("Failed to deserialize JSON response: {0}")]
    JsonDeserialization(#[from] serde_json::Error),

    /// An error reported by the generative-AI API itself (e.g., 4xx or 5xx status code).
    #[error("API returned an error: Status {status}, Message: {message}")]
    ApiError {
        status: reqwest::StatusCode,
        message: String,
    },

    /// An error indicating invalid input was provided to a client function.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The model replied, but with no usable slide document in its candidates.
    #[error("Model response contained no slide document: {0}")]
    EmptyResponse(String),

    /// An error related to reading environment variables.
    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] std::env::VarError),
}

/// A type alias for `Result<T, DeckApiError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, DeckApiError>;
