use crate::state::{CredentialState, EthereumCredentials, StellarKeypairRecord};
use crate::storage::{StateError, StateStore};
use log::*;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// The file name used when no state path is configured. It is resolved against the working directory.
pub const DEFAULT_STATE_FILE: &str = "state.json";

/// A [`StateStore`] backed by a single pretty-printed JSON file.
///
/// Writes go to a sibling `<name>.tmp` file which is then renamed over the target, so a reader never observes a
/// half-written document. There is no locking: two processes updating the same file concurrently can lose an update.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for the document at `path`. Nothing is touched on disk until the first write.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document as a raw JSON object for merging.
    ///
    /// A missing, empty, non-UTF-8, unparseable or non-object document all count as an empty object. Only genuine I/O
    /// failures are returned.
    fn read_raw(&self) -> Result<Map<String, Value>, std::io::Error> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No state file at {:?} yet", self.path);
                return Ok(Map::new());
            }
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                warn!("State file {:?} is not UTF-8 ({err}). Its contents will be discarded.", self.path);
                return Ok(Map::new());
            }
            Err(err) => return Err(err),
        };
        let data = data.trim();
        if data.is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(data) {
            Ok(Value::Object(doc)) => Ok(doc),
            Ok(_) => {
                warn!("State file {:?} does not hold a JSON object. Its contents will be discarded.", self.path);
                Ok(Map::new())
            }
            Err(err) => {
                warn!("State file {:?} is corrupt ({err}). Its contents will be discarded.", self.path);
                Ok(Map::new())
            }
        }
    }

    /// Read-modify-write of one top-level section. Every other section is carried over as-is.
    fn merge_section<F>(&mut self, section: &'static str, key: &str, update: F) -> Result<(), StateError>
    where
        F: FnOnce(&mut Map<String, Value>),
    {
        let update_error = |source: std::io::Error| StateError::Update { section, source };
        let mut doc = self.read_raw().map_err(update_error)?;
        let entry = doc.entry(key).or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            warn!("State section '{key}' is not an object and will be replaced");
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(fields) = entry {
            update(fields);
        }
        let data = serde_json::to_string_pretty(&doc).map_err(|source| StateError::Encode { section, source })?;
        self.persist(&data).map_err(update_error)?;
        debug!("Updated {section} in {:?}", self.path);
        Ok(())
    }

    fn persist(&self, data: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.temp_path();
        fs::write(&tmp, data)?;
        if let Err(err) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Decodes one top-level section, falling back to its default when the section has the wrong shape.
fn decode_section<T: DeserializeOwned + Default>(doc: &mut Map<String, Value>, key: &str) -> T {
    match doc.remove(key) {
        None | Some(Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|err| {
            warn!("State section '{key}' has an unexpected shape ({err}). Treating it as empty.");
            T::default()
        }),
    }
}

impl StateStore for JsonFileStore {
    fn read(&self) -> Result<CredentialState, StateError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No state file at {:?}. Using empty state.", self.path);
                return Ok(CredentialState::default());
            }
            Err(source) => return Err(StateError::Read { path: self.path.clone(), source }),
        };
        let malformed = |source: serde_json::Error| StateError::Malformed { path: self.path.clone(), source };
        let mut doc = match serde_json::from_str::<Value>(&data).map_err(malformed)? {
            Value::Object(doc) => doc,
            other => return Err(malformed(serde::de::Error::custom(format!("expected a JSON object, found {other}")))),
        };
        let ethereum = decode_section(&mut doc, "ethereum");
        let stellar = decode_section(&mut doc, "stellar");
        debug!("Loaded state from {:?}", self.path);
        Ok(CredentialState { ethereum, stellar })
    }

    fn write_full(&mut self, state: &CredentialState) -> Result<(), StateError> {
        let data =
            serde_json::to_string_pretty(state).map_err(|source| StateError::Encode { section: "state", source })?;
        self.persist(&data).map_err(|source| StateError::Write { path: self.path.clone(), source })?;
        debug!("Wrote state to {:?}", self.path);
        Ok(())
    }

    fn update_stellar_keypair(&mut self, keypair: &StellarKeypairRecord) -> Result<(), StateError> {
        self.merge_section("stellar keypair", "stellar", |stellar| {
            stellar.insert("keypair".into(), json!({ "secret": keypair.secret, "public": keypair.public }));
        })
    }

    fn update_ethereum_account(&mut self, account: &EthereumCredentials) -> Result<(), StateError> {
        self.merge_section("ethereum account", "ethereum", |ethereum| {
            ethereum.insert("privateKey".into(), Value::String(account.private_key.clone()));
            ethereum.insert("address".into(), Value::String(account.address.clone()));
        })
    }
}
