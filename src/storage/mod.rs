//! JSON persistence: one document per entity type under a base directory.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::{auth::CredentialVault, errors::StoreError, store::Depot};

const BUSES_FILE: &str = "buses.json";
const CLIENTS_FILE: &str = "clients.json";
const CREDITS_FILE: &str = "credits.json";
const PEOPLE_FILE: &str = "people.json";
const USERS_FILE: &str = "users.json";

/// Environment override for the data directory, used by tests and scripts.
pub const DATA_DIR_ENV: &str = "DEPOT_DATA_DIR";

/// File-per-collection JSON store rooted at a base directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    base: PathBuf,
}

impl JsonStore {
    pub fn new(base: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// Resolves the base directory from `DEPOT_DATA_DIR`, falling back to the
    /// platform data directory and finally `.depot` in the working directory.
    pub fn new_default() -> Result<Self, StoreError> {
        let base = env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::data_dir().map(|dir| dir.join("depot")))
            .unwrap_or_else(|| PathBuf::from(".depot"));
        Self::new(base)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Loads the full depot. Missing files load as empty collections.
    pub fn load_depot(&self) -> Result<Depot, StoreError> {
        Ok(Depot {
            buses: self.read_or_default(BUSES_FILE)?,
            clients: self.read_or_default(CLIENTS_FILE)?,
            credits: self.read_or_default(CREDITS_FILE)?,
            people: self.read_or_default(PEOPLE_FILE)?,
        })
    }

    pub fn save_depot(&self, depot: &Depot) -> Result<(), StoreError> {
        self.write_atomic(BUSES_FILE, &depot.buses)?;
        self.write_atomic(CLIENTS_FILE, &depot.clients)?;
        self.write_atomic(CREDITS_FILE, &depot.credits)?;
        self.write_atomic(PEOPLE_FILE, &depot.people)?;
        tracing::debug!(records = depot.total_records(), "depot saved");
        Ok(())
    }

    pub fn load_vault(&self) -> Result<CredentialVault, StoreError> {
        self.read_or_default(USERS_FILE)
    }

    pub fn save_vault(&self, vault: &CredentialVault) -> Result<(), StoreError> {
        self.write_atomic(USERS_FILE, vault)
    }

    fn path(&self, file: &str) -> PathBuf {
        self.base.join(file)
    }

    fn read_or_default<T>(&self, file: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path(file);
        if !path.exists() {
            return Ok(T::default());
        }
        let data = fs::read_to_string(&path)?;
        serde_json::from_str(&data).map_err(|source| StoreError::Malformed {
            file: file.to_string(),
            source,
        })
    }

    /// Stages to a `.tmp` sibling and renames over the target, so a failed
    /// write never clobbers the previous snapshot.
    fn write_atomic<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        let path = self.path(file);
        let tmp = path.with_extension("tmp");
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&tmp, json)?;
        fs::rename(tmp, path)?;
        Ok(())
    }
}
