use crate::error::NetworkError;
use crate::network::{StellarAccount, StellarClient};
use log::*;
use reqwest::StatusCode;

/// Minimal Horizon REST client: account lookups only.
pub struct HorizonClient {
    http: reqwest::Client,
    base_url: String,
}

impl HorizonClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self { http, base_url: base_url.trim_end_matches('/').to_string() }
    }
}

impl StellarClient for HorizonClient {
    async fn load_account(&self, account_id: &str) -> Result<StellarAccount, NetworkError> {
        let url = format!("{}/accounts/{account_id}", self.base_url);
        trace!("GET {url}");
        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(NetworkError::NotFound(account_id.to_string()));
        }
        let account = response.error_for_status()?.json::<StellarAccount>().await?;
        debug!("Loaded Stellar account {} with {} balance(s)", account.id, account.balances.len());
        Ok(account)
    }
}
