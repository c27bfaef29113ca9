use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Invalid Ethereum private key: {0}")]
    InvalidEthereumKey(String),
    #[error("Invalid Stellar secret seed: {0}")]
    InvalidStellarSecret(String),
}
