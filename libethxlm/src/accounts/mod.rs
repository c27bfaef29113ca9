//! Fresh key material for the two chains, in the string forms the state document stores.

mod error;
pub mod ethereum;
pub mod stellar;

pub use error::AccountError;
