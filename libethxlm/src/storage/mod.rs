mod error;
mod file_store;
mod traits;

pub use error::StateError;
pub use file_store::{JsonFileStore, DEFAULT_STATE_FILE};
pub use traits::StateStore;
