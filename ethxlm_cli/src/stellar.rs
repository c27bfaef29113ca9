//! The Stellar half of account setup: load or create a keypair, persist it, fund it and report its balances.

use crate::error::NetworkError;
use crate::network::{Faucet, StellarBalance, StellarClient};
use libethxlm::accounts::stellar::generate_keypair;
use libethxlm::state::StellarKeypairRecord;
use libethxlm::storage::{StateError, StateStore};
use log::*;

pub struct KeypairResult {
    pub keypair: StellarKeypairRecord,
    pub is_new: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundOutcome {
    /// The account already exists on the ledger, so the faucet was not called.
    AlreadyFunded,
    Funded,
    /// The faucet answered with an error status.
    FaucetRejected,
    /// Either the lookup or the faucet call failed outright.
    Failed,
}

/// Returns the stored keypair if both halves are present, otherwise a freshly generated one.
///
/// An unreadable state file is not fatal here; it just means a new keypair.
pub fn create_or_get_keypair<S: StateStore>(store: &S) -> KeypairResult {
    match store.read() {
        Ok(state) if state.stellar.keypair.is_complete() => {
            info!("Using existing Stellar keypair from state");
            return KeypairResult { keypair: state.stellar.keypair, is_new: false };
        }
        Ok(_) => info!("No valid Stellar keypair found in state"),
        Err(err) => warn!("Could not read existing state: {err}"),
    }
    info!("Generating new Stellar keypair");
    KeypairResult { keypair: generate_keypair(), is_new: true }
}

/// Stores the keypair unless the state already holds exactly this keypair.
///
/// Nothing is written when the existing state cannot be read, so a stored secret is never replaced blindly.
pub fn save_keypair<S: StateStore>(store: &mut S, keypair: &StellarKeypairRecord) -> Result<SaveOutcome, StateError> {
    if store.read()?.stellar.keypair == *keypair {
        return Ok(SaveOutcome::AlreadySaved);
    }
    store.update_stellar_keypair(keypair)?;
    Ok(SaveOutcome::Saved)
}

/// Funds the account through the faucet if, and only if, the ledger does not know it yet.
pub async fn fund_account<C, F>(client: &C, faucet: &F, account_id: &str) -> FundOutcome
where
    C: StellarClient,
    F: Faucet,
{
    debug!("Checking whether {account_id} is already funded");
    match client.load_account(account_id).await {
        Ok(_) => FundOutcome::AlreadyFunded,
        Err(NetworkError::NotFound(_)) => {
            info!("Account {account_id} not found. Requesting funds from the faucet.");
            match faucet.fund(account_id).await {
                Ok(true) => FundOutcome::Funded,
                Ok(false) => FundOutcome::FaucetRejected,
                Err(err) => {
                    error!("Faucet request failed: {err}");
                    FundOutcome::Failed
                }
            }
        }
        Err(err) => {
            error!("Error checking account status: {err}");
            FundOutcome::Failed
        }
    }
}

pub async fn check_balance<C>(client: &C, account_id: &str) -> Result<Vec<StellarBalance>, NetworkError>
where
    C: StellarClient,
{
    let account = client.load_account(account_id).await?;
    Ok(account.balances)
}

/// Runs the whole Stellar setup. Only the final balance query can fail the command.
pub async fn init_stellar<S, C, F>(store: &mut S, client: &C, faucet: &F) -> Result<StellarKeypairRecord, anyhow::Error>
where
    S: StateStore,
    C: StellarClient,
    F: Faucet,
{
    let KeypairResult { keypair, is_new } = create_or_get_keypair(&*store);
    println!("Stellar Secret Key: {}", keypair.secret);
    println!("Stellar Public Key: {}", keypair.public);

    if is_new {
        match save_keypair(store, &keypair) {
            Ok(SaveOutcome::Saved) => println!("Keypair saved to state"),
            Ok(SaveOutcome::AlreadySaved) => println!("Keypair already saved in state"),
            Err(err) => println!("Could not save keypair to state: {err}"),
        }
    }

    match fund_account(client, faucet, &keypair.public).await {
        FundOutcome::AlreadyFunded => println!("Account is already funded, skipping Friendbot"),
        FundOutcome::Funded => println!("Account funded successfully"),
        FundOutcome::FaucetRejected => println!("Failed to fund account"),
        FundOutcome::Failed => println!("Could not fund account, see the log for details"),
    }

    let balances = check_balance(client, &keypair.public).await?;
    for balance in &balances {
        println!("Stellar Balance: {balance}");
    }
    Ok(keypair)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::network::fakes::{FakeFriendbot, FakeHorizon};
    use libethxlm::state::{CredentialState, EthereumCredentials};
    use libethxlm::storage::JsonFileStore;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("state.json"))
    }

    #[test]
    fn reuses_a_complete_stored_keypair() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let stored = generate_keypair();
        store.update_stellar_keypair(&stored).unwrap();
        let result = create_or_get_keypair(&store);
        assert!(!result.is_new);
        assert_eq!(result.keypair, stored);
    }

    #[test]
    fn generates_when_stored_keypair_is_incomplete() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.update_stellar_keypair(&StellarKeypairRecord::new("SONLYSECRET", "")).unwrap();
        let result = create_or_get_keypair(&store);
        assert!(result.is_new);
        assert!(result.keypair.public.starts_with('G'));
    }

    #[test]
    fn generates_when_state_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{ not json").unwrap();
        let result = create_or_get_keypair(&store);
        assert!(result.is_new);
        assert!(result.keypair.is_complete());
    }

    #[test]
    fn save_skips_identical_keypair_and_keeps_other_chain() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let mut state = CredentialState::default();
        state.ethereum = EthereumCredentials::new("0x01", "0x02");
        store.write_full(&state).unwrap();

        let keypair = generate_keypair();
        assert_eq!(save_keypair(&mut store, &keypair).unwrap(), SaveOutcome::Saved);
        assert_eq!(save_keypair(&mut store, &keypair).unwrap(), SaveOutcome::AlreadySaved);

        let state = store.read().unwrap();
        assert_eq!(state.stellar.keypair, keypair);
        assert_eq!(state.ethereum, EthereumCredentials::new("0x01", "0x02"));
    }

    #[test]
    fn save_leaves_unreadable_state_alone() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let corrupt = "{\"stellar\": {\"keyp";
        std::fs::write(store.path(), corrupt).unwrap();
        let err = save_keypair(&mut store, &generate_keypair()).unwrap_err();
        assert!(matches!(err, StateError::Malformed { .. }), "unexpected error: {err:?}");
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), corrupt);
    }

    #[test]
    fn mistyped_ethereum_section_keeps_the_stored_keypair() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let stored = generate_keypair();
        let doc = serde_json::json!({
            "ethereum": { "privateKey": null, "address": null },
            "stellar": { "keypair": { "secret": stored.secret, "public": stored.public } }
        });
        std::fs::write(store.path(), doc.to_string()).unwrap();

        let result = create_or_get_keypair(&store);
        assert!(!result.is_new);
        assert_eq!(result.keypair, stored);
        assert_eq!(save_keypair(&mut store, &generate_keypair()).unwrap(), SaveOutcome::Saved);
        let doc: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(doc["ethereum"], serde_json::json!({ "privateKey": null, "address": null }));
    }

    #[tokio::test]
    async fn init_reuses_the_keypair_beside_a_mistyped_ethereum_section() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let stored = generate_keypair();
        let doc = serde_json::json!({
            "ethereum": { "privateKey": 12, "address": ["0x"] },
            "stellar": { "keypair": { "secret": stored.secret, "public": stored.public } }
        });
        std::fs::write(store.path(), doc.to_string()).unwrap();
        let horizon = FakeHorizon::with_account(&stored.public, "42.0000000");
        let friendbot = FakeFriendbot::new(&horizon, true);

        let keypair = init_stellar(&mut store, &horizon, &friendbot).await.unwrap();
        assert_eq!(keypair, stored);
        assert!(friendbot.calls().is_empty());
        assert_eq!(store.read().unwrap().stellar.keypair, stored);
    }

    #[tokio::test]
    async fn init_does_not_overwrite_unreadable_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        std::fs::write(store.path(), "{ not json").unwrap();
        let horizon = FakeHorizon::default();
        let friendbot = FakeFriendbot::new(&horizon, true);
        init_stellar(&mut store, &horizon, &friendbot).await.unwrap();
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "{ not json");
    }

    #[tokio::test]
    async fn funded_accounts_skip_the_faucet() {
        let horizon = FakeHorizon::with_account("GFUNDED", "42.0000000");
        let friendbot = FakeFriendbot::new(&horizon, true);
        assert_eq!(fund_account(&horizon, &friendbot, "GFUNDED").await, FundOutcome::AlreadyFunded);
        assert!(friendbot.calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_accounts_are_funded() {
        let horizon = FakeHorizon::default();
        let friendbot = FakeFriendbot::new(&horizon, true);
        assert_eq!(fund_account(&horizon, &friendbot, "GNEW").await, FundOutcome::Funded);
        assert_eq!(friendbot.calls(), vec!["GNEW".to_string()]);
        assert!(horizon.exists("GNEW"));
    }

    #[tokio::test]
    async fn faucet_refusal_is_reported() {
        let horizon = FakeHorizon::default();
        let friendbot = FakeFriendbot::new(&horizon, false);
        assert_eq!(fund_account(&horizon, &friendbot, "GNEW").await, FundOutcome::FaucetRejected);
        assert!(!horizon.exists("GNEW"));
    }

    #[tokio::test]
    async fn lookup_errors_do_not_call_the_faucet() {
        let horizon = FakeHorizon { broken: true, ..Default::default() };
        let friendbot = FakeFriendbot::new(&horizon, true);
        assert_eq!(fund_account(&horizon, &friendbot, "GNEW").await, FundOutcome::Failed);
        assert!(friendbot.calls().is_empty());
    }

    #[tokio::test]
    async fn init_creates_saves_and_funds_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let horizon = FakeHorizon::default();
        let friendbot = FakeFriendbot::new(&horizon, true);

        let first = init_stellar(&mut store, &horizon, &friendbot).await.unwrap();
        assert_eq!(store.read().unwrap().stellar.keypair, first);
        assert_eq!(friendbot.calls(), vec![first.public.clone()]);
        let balances = check_balance(&horizon, &first.public).await.unwrap();
        assert_eq!(balances[0].to_string(), "10000.0000000 XLM");

        let second = init_stellar(&mut store, &horizon, &friendbot).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(friendbot.calls().len(), 1);
    }

    #[tokio::test]
    async fn init_fails_when_balance_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let horizon = FakeHorizon { broken: true, ..Default::default() };
        let friendbot = FakeFriendbot::new(&horizon, true);
        assert!(init_stellar(&mut store, &horizon, &friendbot).await.is_err());
        // The keypair was still persisted before the network steps
        assert!(store.read().unwrap().stellar.keypair.is_complete());
    }
}
