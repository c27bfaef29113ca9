//! Clients for the services the init flows talk to. Each one sits behind a trait so the flows can run against fakes.

mod ethereum_rpc;
#[cfg(test)]
pub mod fakes;
mod friendbot;
mod horizon;

pub use ethereum_rpc::{parse_quantity, JsonRpcClient};
pub use friendbot::FriendbotClient;
pub use horizon::HorizonClient;

use crate::config::Endpoints;
use crate::error::NetworkError;
use serde::Deserialize;
use std::fmt::Display;
use std::time::Duration;

#[allow(async_fn_in_trait)]
pub trait EthereumClient {
    /// Balance of `address` at the latest block, in wei.
    async fn get_balance(&self, address: &str) -> Result<u128, NetworkError>;
}

#[allow(async_fn_in_trait)]
pub trait StellarClient {
    /// Loads an account. An account that does not exist on the ledger yet is [`NetworkError::NotFound`].
    async fn load_account(&self, account_id: &str) -> Result<StellarAccount, NetworkError>;
}

#[allow(async_fn_in_trait)]
pub trait Faucet {
    /// Asks the faucet to fund `account_id`. `Ok(false)` means the faucet answered but refused.
    async fn fund(&self, account_id: &str) -> Result<bool, NetworkError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StellarAccount {
    pub id: String,
    #[serde(default)]
    pub balances: Vec<StellarBalance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StellarBalance {
    pub balance: String,
    pub asset_type: String,
    #[serde(default)]
    pub asset_code: Option<String>,
}

impl Display for StellarBalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.asset_type.as_str(), &self.asset_code) {
            ("native", _) => write!(f, "{} XLM", self.balance),
            (_, Some(code)) => write!(f, "{} {code}", self.balance),
            (asset_type, None) => write!(f, "{} ({asset_type})", self.balance),
        }
    }
}

/// The three live clients, sharing one HTTP connection pool.
pub struct NetworkClients {
    pub ethereum: JsonRpcClient,
    pub horizon: HorizonClient,
    pub friendbot: FriendbotClient,
}

impl NetworkClients {
    pub fn new(endpoints: &Endpoints) -> Result<Self, NetworkError> {
        let http = reqwest::Client::builder().timeout(Duration::from_secs(endpoints.timeout_secs)).build()?;
        Ok(Self {
            ethereum: JsonRpcClient::new(http.clone(), &endpoints.eth_rpc_url),
            horizon: HorizonClient::new(http.clone(), &endpoints.horizon_url),
            friendbot: FriendbotClient::new(http, &endpoints.friendbot_url),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn horizon_account_json() {
        let json = r#"{
            "id": "GA6HCMBLTZS5VYYBCATRBRZ3BZJMAFUDKYYF6AH6MVCMGWMRDNSWJPIH",
            "account_id": "GA6HCMBLTZS5VYYBCATRBRZ3BZJMAFUDKYYF6AH6MVCMGWMRDNSWJPIH",
            "sequence": "123",
            "balances": [
                { "balance": "25.5000000", "asset_type": "credit_alphanum4", "asset_code": "USDC", "asset_issuer": "GB" },
                { "balance": "10000.0000000", "asset_type": "native" }
            ]
        }"#;
        let account: StellarAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.balances.len(), 2);
        assert_eq!(account.balances[0].to_string(), "25.5000000 USDC");
        assert_eq!(account.balances[1].to_string(), "10000.0000000 XLM");
    }
}
