//! Secrets and SHA-256 hashlocks for hashed-timelock exchanges.
//!
//! Every value here is a `0x`-prefixed lowercase hex string. A secret is 32 random bytes; its hashlock is the SHA-256
//! digest of those raw bytes (not of the hex text).

use crate::hex_string::{encode_prefixed, normalize_hex, without_prefix};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt::Debug;
use thiserror::Error;
use zeroize::Zeroizing;

/// Length of a secret in bytes.
pub const SECRET_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitmentError {
    #[error("Secret must be exactly 32 bytes (64 hex characters)")]
    InvalidSecret,
}

/// A freshly generated secret together with its hashlock.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretPair {
    pub secret: String,
    pub hashlock: String,
}

impl Debug for SecretPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretPair").field("secret", &"<redacted>").field("hashlock", &self.hashlock).finish()
    }
}

/// Draws 32 bytes from the thread-local CSPRNG and returns them hex-encoded.
pub fn generate_secret() -> String {
    encode_prefixed(&random_secret()[..])
}

/// Computes the hashlock for `secret`.
///
/// The `0x` prefix is optional. Anything other than exactly 64 hex digits is rejected.
pub fn create_hashlock(secret: &str) -> Result<String, CommitmentError> {
    let bytes = decode_secret(secret)?;
    Ok(hashlock_of(&bytes))
}

/// Returns true if `secret` hashes to `hashlock`. Comparison ignores case and the presence of the prefix.
///
/// This never fails: a malformed secret simply does not verify.
pub fn verify_secret(secret: &str, hashlock: &str) -> bool {
    match create_hashlock(secret) {
        Ok(computed) => computed.eq_ignore_ascii_case(&normalize_hex(hashlock)),
        Err(_) => false,
    }
}

pub fn generate_secret_pair() -> SecretPair {
    let bytes = random_secret();
    SecretPair { secret: encode_prefixed(&bytes[..]), hashlock: hashlock_of(&bytes) }
}

fn random_secret() -> Zeroizing<[u8; SECRET_LEN]> {
    let mut secret = Zeroizing::new([0u8; SECRET_LEN]);
    rand::rng().fill_bytes(&mut secret[..]);
    secret
}

fn hashlock_of(secret: &[u8; SECRET_LEN]) -> String {
    encode_prefixed(Sha256::digest(secret))
}

fn decode_secret(secret: &str) -> Result<Zeroizing<[u8; SECRET_LEN]>, CommitmentError> {
    let mut bytes = Zeroizing::new([0u8; SECRET_LEN]);
    hex::decode_to_slice(without_prefix(secret), &mut bytes[..]).map_err(|_| CommitmentError::InvalidSecret)?;
    Ok(bytes)
}
