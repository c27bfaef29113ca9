use crate::accounts::AccountError;
use crate::state::StellarKeypairRecord;
use ed25519_dalek::SigningKey;
use rand::RngCore;
use stellar_strkey::ed25519::{PrivateKey, PublicKey};
use zeroize::Zeroizing;

/// Generates a new ed25519 keypair encoded as StrKeys (`S...` secret seed, `G...` account id).
pub fn generate_keypair() -> StellarKeypairRecord {
    let mut seed = Zeroizing::new([0u8; 32]);
    rand::rng().fill_bytes(&mut seed[..]);
    keypair_from_seed(&seed)
}

/// Rebuilds the keypair for an existing `S...` secret seed.
pub fn keypair_from_secret(secret: &str) -> Result<StellarKeypairRecord, AccountError> {
    let seed = PrivateKey::from_string(secret).map_err(|e| AccountError::InvalidStellarSecret(format!("{e:?}")))?;
    let seed = Zeroizing::new(seed.0);
    Ok(keypair_from_seed(&seed))
}

fn keypair_from_seed(seed: &[u8; 32]) -> StellarKeypairRecord {
    let key = SigningKey::from_bytes(seed);
    let public = PublicKey(key.verifying_key().to_bytes()).to_string();
    let secret = PrivateKey(*seed).to_string();
    StellarKeypairRecord { secret, public }
}
