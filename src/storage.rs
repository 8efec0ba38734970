//! Engine state persistence
//!
//! Saves and loads the engine plus treasury snapshot as JSON between CLI
//! invocations. Writes go through a temporary file and an atomic rename.

use crate::engine::ApprovalEngine;
use crate::transfer::Treasury;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use thiserror::Error;

/// Storage errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Snapshot persisted between invocations
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VaultState {
    pub engine: ApprovalEngine,
    pub treasury: Treasury,
}

/// On-disk store for the vault state
pub struct VaultStore {
    data_dir: PathBuf,
}

const STATE_FILE: &str = "vault.json";

impl VaultStore {
    /// Create a store rooted at `data_dir` (created if missing)
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn state_path(&self) -> PathBuf {
        self.data_dir.join(STATE_FILE)
    }

    /// Whether a saved state exists
    pub fn exists(&self) -> bool {
        self.state_path().exists()
    }

    /// Save the state to disk
    pub fn save(&self, state: &VaultState) -> Result<(), StoreError> {
        let temp_path = self.data_dir.join("vault.tmp");
        let file = fs::File::create(&temp_path)?;
        let writer = BufWriter::new(file);

        serde_json::to_writer_pretty(writer, state)?;

        // Atomic rename
        fs::rename(&temp_path, self.state_path())?;

        Ok(())
    }

    /// Load the state from disk
    pub fn load(&self) -> Result<VaultState, StoreError> {
        let path = self.state_path();

        if !path.exists() {
            return Err(StoreError::InvalidData(
                "Vault state file not found".to_string(),
            ));
        }

        let file = fs::File::open(&path)?;
        let reader = BufReader::new(file);
        let state: VaultState = serde_json::from_reader(reader)?;

        Ok(state)
    }
}
