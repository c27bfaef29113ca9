//! In-memory stand-ins for the network collaborators.

use crate::error::NetworkError;
use crate::network::{EthereumClient, Faucet, StellarAccount, StellarBalance, StellarClient};
use std::collections::HashMap;
use std::sync::Mutex;

/// A ledger of Stellar accounts. When `broken` is set every lookup fails with a non-404 error.
#[derive(Default)]
pub struct FakeHorizon {
    pub accounts: Mutex<HashMap<String, Vec<StellarBalance>>>,
    pub broken: bool,
}

impl FakeHorizon {
    pub fn with_account(account_id: &str, xlm: &str) -> Self {
        let horizon = Self::default();
        horizon.credit(account_id, xlm);
        horizon
    }

    pub fn credit(&self, account_id: &str, xlm: &str) {
        let balance = StellarBalance { balance: xlm.to_string(), asset_type: "native".into(), asset_code: None };
        self.accounts.lock().unwrap().insert(account_id.to_string(), vec![balance]);
    }

    pub fn exists(&self, account_id: &str) -> bool {
        self.accounts.lock().unwrap().contains_key(account_id)
    }
}

impl StellarClient for FakeHorizon {
    async fn load_account(&self, account_id: &str) -> Result<StellarAccount, NetworkError> {
        if self.broken {
            return Err(NetworkError::InvalidResponse("horizon is down".into()));
        }
        match self.accounts.lock().unwrap().get(account_id) {
            Some(balances) => Ok(StellarAccount { id: account_id.to_string(), balances: balances.clone() }),
            None => Err(NetworkError::NotFound(account_id.to_string())),
        }
    }
}

/// Friendbot that credits 10,000 XLM on the given ledger, or refuses when `accept` is false.
pub struct FakeFriendbot<'a> {
    pub ledger: &'a FakeHorizon,
    pub accept: bool,
    pub calls: Mutex<Vec<String>>,
}

impl<'a> FakeFriendbot<'a> {
    pub fn new(ledger: &'a FakeHorizon, accept: bool) -> Self {
        Self { ledger, accept, calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Faucet for FakeFriendbot<'_> {
    async fn fund(&self, account_id: &str) -> Result<bool, NetworkError> {
        self.calls.lock().unwrap().push(account_id.to_string());
        if self.accept {
            self.ledger.credit(account_id, "10000.0000000");
        }
        Ok(self.accept)
    }
}

/// An Ethereum node where every unknown address holds zero wei.
#[derive(Default)]
pub struct FakeRpc {
    pub balances: HashMap<String, u128>,
    pub broken: bool,
}

impl EthereumClient for FakeRpc {
    async fn get_balance(&self, address: &str) -> Result<u128, NetworkError> {
        if self.broken {
            return Err(NetworkError::Rpc { code: -32000, message: "node is syncing".into() });
        }
        Ok(self.balances.get(address).copied().unwrap_or(0))
    }
}
