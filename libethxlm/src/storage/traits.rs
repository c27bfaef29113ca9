use crate::state::{CredentialState, EthereumCredentials, StellarKeypairRecord};
use crate::storage::StateError;

/// Access to the locally held credential document.
///
/// `read` is strict: a missing document yields the default state, anything unreadable is an error. The two section
/// updates are lenient: they merge into whatever object can be recovered (or an empty one) and leave every other
/// section untouched.
pub trait StateStore {
    fn read(&self) -> Result<CredentialState, StateError>;
    fn write_full(&mut self, state: &CredentialState) -> Result<(), StateError>;
    fn update_stellar_keypair(&mut self, keypair: &StellarKeypairRecord) -> Result<(), StateError>;
    fn update_ethereum_account(&mut self, account: &EthereumCredentials) -> Result<(), StateError>;
}
