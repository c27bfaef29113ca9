use crate::accounts::AccountError;
use crate::hex_string::{encode_prefixed, without_prefix};
use crate::state::EthereumCredentials;
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::RngCore;
use sha3::{Digest, Keccak256};
use zeroize::Zeroizing;

/// Generates a new secp256k1 account.
///
/// The private key is `0x` + 64 lowercase hex digits and the address is EIP-55 checksummed.
pub fn generate_account() -> EthereumCredentials {
    loop {
        let mut seed = Zeroizing::new([0u8; 32]);
        rand::rng().fill_bytes(&mut seed[..]);
        // Zero and values >= the curve order are not valid scalars; the odds of hitting one are negligible.
        if let Ok(key) = SigningKey::from_slice(&seed[..]) {
            return credentials_for(&key);
        }
    }
}

/// Rebuilds the credentials for an existing private key (`0x` prefix optional).
pub fn account_from_private_key(private_key: &str) -> Result<EthereumCredentials, AccountError> {
    let mut bytes = Zeroizing::new([0u8; 32]);
    hex::decode_to_slice(without_prefix(private_key), &mut bytes[..])
        .map_err(|e| AccountError::InvalidEthereumKey(e.to_string()))?;
    let key = SigningKey::from_slice(&bytes[..]).map_err(|e| AccountError::InvalidEthereumKey(e.to_string()))?;
    Ok(credentials_for(&key))
}

fn credentials_for(key: &SigningKey) -> EthereumCredentials {
    let private_key = encode_prefixed(key.to_bytes());
    let point = key.verifying_key().to_encoded_point(false);
    // Skip the 0x04 SEC1 tag
    let hash = Keccak256::digest(&point.as_bytes()[1..]);
    let address = to_checksum_address(&hash[12..]);
    EthereumCredentials { private_key, address }
}

/// Formats a 20-byte address with the EIP-55 mixed-case checksum.
pub fn to_checksum_address(address: &[u8]) -> String {
    let lower = hex::encode(address);
    let hash = Keccak256::digest(lower.as_bytes());
    let mut result = String::with_capacity(2 + lower.len());
    result.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 { hash[i / 2] >> 4 } else { hash[i / 2] & 0x0f };
        if nibble >= 8 {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
    }
    result
}
