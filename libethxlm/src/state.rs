//! The persisted credential document.
//!
//! ```json
//! {
//!   "ethereum": { "privateKey": "0x...", "address": "0x..." },
//!   "stellar": { "keypair": { "secret": "S...", "public": "G..." } }
//! }
//! ```
//!
//! Missing sections or fields deserialize to empty strings, so a document written by a single-section update reads
//! back as a complete [`CredentialState`].

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialState {
    pub ethereum: EthereumCredentials,
    pub stellar: StellarCredentials,
}

impl CredentialState {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EthereumCredentials {
    pub private_key: String,
    pub address: String,
}

impl EthereumCredentials {
    pub fn new(private_key: impl Into<String>, address: impl Into<String>) -> Self {
        Self { private_key: private_key.into(), address: address.into() }
    }

    /// True when both the key and the address are set.
    pub fn is_complete(&self) -> bool {
        !self.private_key.is_empty() && !self.address.is_empty()
    }
}

impl Debug for EthereumCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EthereumCredentials")
            .field("private_key", &redacted(&self.private_key))
            .field("address", &self.address)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StellarCredentials {
    pub keypair: StellarKeypairRecord,
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StellarKeypairRecord {
    pub secret: String,
    pub public: String,
}

impl StellarKeypairRecord {
    pub fn new(secret: impl Into<String>, public: impl Into<String>) -> Self {
        Self { secret: secret.into(), public: public.into() }
    }

    /// True when both the secret and the public key are set.
    pub fn is_complete(&self) -> bool {
        !self.secret.is_empty() && !self.public.is_empty()
    }
}

impl Debug for StellarKeypairRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StellarKeypairRecord")
            .field("secret", &redacted(&self.secret))
            .field("public", &self.public)
            .finish()
    }
}

fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}
