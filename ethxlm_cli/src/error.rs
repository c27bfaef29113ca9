use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Account {0} was not found")]
    NotFound(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON-RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}
