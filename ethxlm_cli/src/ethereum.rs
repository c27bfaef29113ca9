//! The Ethereum half of account setup: load or create an account, persist it and report its balance.
//!
//! There is no faucet step; Sepolia faucets need a captcha.

use crate::error::NetworkError;
use crate::network::EthereumClient;
use libethxlm::accounts::ethereum::generate_account;
use libethxlm::state::EthereumCredentials;
use libethxlm::storage::{StateError, StateStore};
use log::*;

const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

pub struct AccountResult {
    pub account: EthereumCredentials,
    pub is_new: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}

/// Returns the stored account if both key and address are present, otherwise a freshly generated one.
pub fn get_or_create_account<S: StateStore>(store: &S) -> AccountResult {
    match store.read() {
        Ok(state) if state.ethereum.is_complete() => {
            info!("Using existing Ethereum account from state");
            return AccountResult { account: state.ethereum, is_new: false };
        }
        Ok(_) => info!("No valid Ethereum account found in state"),
        Err(err) => warn!("Could not read existing state: {err}"),
    }
    info!("Generating new Ethereum account");
    AccountResult { account: generate_account(), is_new: true }
}

/// Stores the account unless the state already holds exactly this account. An unreadable state file is left as it is.
pub fn save_account<S: StateStore>(store: &mut S, account: &EthereumCredentials) -> Result<SaveOutcome, StateError> {
    if store.read()?.ethereum == *account {
        return Ok(SaveOutcome::AlreadySaved);
    }
    store.update_ethereum_account(account)?;
    Ok(SaveOutcome::Saved)
}

pub async fn check_balance<C: EthereumClient>(client: &C, address: &str) -> Result<u128, NetworkError> {
    let wei = client.get_balance(address).await?;
    debug!("{address} holds {wei} wei");
    Ok(wei)
}

/// Formats wei as ether, keeping every significant fractional digit and at least one (`0.0`, `1.5`).
pub fn format_ether(wei: u128) -> String {
    let whole = wei / WEI_PER_ETHER;
    let fraction = format!("{:018}", wei % WEI_PER_ETHER);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{whole}.0")
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Runs the whole Ethereum setup. Only the balance query can fail the command.
pub async fn init_ethereum<S, C>(store: &mut S, client: &C) -> Result<EthereumCredentials, anyhow::Error>
where
    S: StateStore,
    C: EthereumClient,
{
    let AccountResult { account, is_new } = get_or_create_account(&*store);
    println!("Ethereum Private Key: {}", account.private_key);
    println!("Ethereum Address: {}", account.address);

    if is_new {
        match save_account(store, &account) {
            Ok(SaveOutcome::Saved) => println!("Account saved to state"),
            Ok(SaveOutcome::AlreadySaved) => println!("Account already saved in state"),
            Err(err) => println!("Could not save account to state: {err}"),
        }
    }

    let wei = check_balance(client, &account.address).await?;
    println!("Ethereum Balance: {}", format_ether(wei));
    Ok(account)
}
