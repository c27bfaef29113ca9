//! Identifiers for orders and HTLCs.
//!
//! Format is `<prefix>_<unix millis>_<8 lowercase hex chars>`. Uniqueness is probabilistic: two ids minted in the same
//! millisecond collide with probability 2^-32.

use crate::helpers::unix_millis;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// The chain an HTLC lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HtlcKind {
    Ethereum,
    Stellar,
}

impl HtlcKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HtlcKind::Ethereum => "ethereum",
            HtlcKind::Stellar => "stellar",
        }
    }
}

impl Display for HtlcKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown HTLC kind: {0}. Expected 'ethereum' or 'stellar'")]
pub struct UnknownHtlcKind(pub String);

impl FromStr for HtlcKind {
    type Err = UnknownHtlcKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ethereum" => Ok(HtlcKind::Ethereum),
            "stellar" => Ok(HtlcKind::Stellar),
            other => Err(UnknownHtlcKind(other.to_string())),
        }
    }
}

pub fn generate_order_id() -> String {
    format!("order_{}_{}", unix_millis(), random_suffix())
}

pub fn generate_htlc_id(kind: HtlcKind) -> String {
    format!("{kind}_htlc_{}_{}", unix_millis(), random_suffix())
}

fn random_suffix() -> String {
    hex::encode(rand::random::<[u8; 4]>())
}
