//! Observable engine events
//!
//! Emitted on proposal creation and on settlement, retained in the engine's
//! event log and mirrored to the `log` facade.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Emitted when a transfer proposal enters a wallet's pending ledger
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PendingTransactionInitiation {
    pub recipient: String,
    pub owner: String,
    pub amount: u64,
    pub timestamp: DateTime<Utc>,
}

/// Emitted when a proposal reaches quorum and settles
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PendingTransactionClose {
    pub recipient: String,
    pub owner: String,
    /// The signer whose approval reached the threshold
    pub final_approver: String,
    pub amount: u64,
    pub approval_count: u16,
    pub timestamp: DateTime<Utc>,
}

/// An entry in the engine's event log
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum EngineEvent {
    Initiation(PendingTransactionInitiation),
    Close(PendingTransactionClose),
}
