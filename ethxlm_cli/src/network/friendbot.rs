use crate::error::NetworkError;
use crate::network::Faucet;
use log::*;

pub struct FriendbotClient {
    http: reqwest::Client,
    url: String,
}

impl FriendbotClient {
    pub fn new(http: reqwest::Client, url: &str) -> Self {
        Self { http, url: url.to_string() }
    }
}

impl Faucet for FriendbotClient {
    async fn fund(&self, account_id: &str) -> Result<bool, NetworkError> {
        let response = self.http.get(&self.url).query(&[("addr", account_id)]).send().await?;
        let status = response.status();
        debug!("Friendbot answered {status} for {account_id}");
        Ok(status.is_success())
    }
}
