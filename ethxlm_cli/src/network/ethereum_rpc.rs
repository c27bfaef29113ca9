use crate::error::NetworkError;
use crate::network::EthereumClient;
use log::*;
use serde::Deserialize;
use serde_json::json;

/// Ethereum JSON-RPC over HTTP.
pub struct JsonRpcClient {
    http: reqwest::Client,
    url: String,
}

impl JsonRpcClient {
    pub fn new(http: reqwest::Client, url: &str) -> Self {
        Self { http, url: url.to_string() }
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<String>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

impl EthereumClient for JsonRpcClient {
    async fn get_balance(&self, address: &str) -> Result<u128, NetworkError> {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "eth_getBalance",
            "params": [address, "latest"],
        });
        trace!("eth_getBalance({address}) -> {}", self.url);
        let response = self.http.post(&self.url).json(&request).send().await?.error_for_status()?;
        let response: RpcResponse = response.json().await?;
        match response {
            RpcResponse { result: Some(quantity), .. } => parse_quantity(&quantity),
            RpcResponse { error: Some(err), .. } => Err(NetworkError::Rpc { code: err.code, message: err.message }),
            _ => Err(NetworkError::InvalidResponse("JSON-RPC response had neither result nor error".into())),
        }
    }
}

/// Parses a JSON-RPC `QUANTITY`: `0x`-prefixed hex without leading zeros, e.g. `0x0` or `0x1bc16d674ec80000`.
pub fn parse_quantity(value: &str) -> Result<u128, NetworkError> {
    let digits = value
        .strip_prefix("0x")
        .filter(|d| !d.is_empty())
        .ok_or_else(|| NetworkError::InvalidResponse(format!("'{value}' is not a hex quantity")))?;
    u128::from_str_radix(digits, 16)
        .map_err(|e| NetworkError::InvalidResponse(format!("'{value}' is not a hex quantity: {e}")))
}
