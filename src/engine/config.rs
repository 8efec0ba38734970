//! Construction-time engine configuration

use serde::{Deserialize, Serialize};

/// Engine configuration, supplied once at construction and immutable after
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Custodian identity, appended as an initiating signer to every wallet
    pub custodian: String,
    /// Cap on in-flight proposals per wallet
    pub max_pending_transactions: usize,
    /// Cap on supplied co-signers per wallet (the appended custodian record is
    /// not counted against it)
    pub max_signers: usize,
}

impl EngineConfig {
    /// Create a configuration with explicit caps
    pub fn new(
        custodian: impl Into<String>,
        max_pending_transactions: usize,
        max_signers: usize,
    ) -> Self {
        Self {
            custodian: custodian.into(),
            max_pending_transactions,
            max_signers,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            custodian: "0x0000000000000000000000000000000000000000".to_string(),
            max_pending_transactions: 10,
            max_signers: 10,
        }
    }
}
