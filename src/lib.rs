//! Quorum-Vault: a custodial multi-party approval engine
//!
//! This crate provides a registry of quorum-guarded wallets featuring:
//! - One wallet per owner identity, created at most once
//! - Per-wallet signer sets with separate initiate and approve rights
//! - A pending ledger of in-flight transfer proposals
//! - Per-signer approval tracking with double-signing prevention
//! - Quorum-triggered settlement through an external transfer seam
//! - Per-wallet reentrancy protection around settlement
//! - JSON persistence and an operator CLI
//!
//! Authorization is by caller identity; there is no signature-scheme
//! cryptography and no cross-wallet interaction.
//!
//! # Example
//!
//! ```rust
//! use quorum_vault::{ApprovalEngine, ApprovalOutcome, EngineConfig, Signer, Treasury};
//!
//! let config = EngineConfig::new("0xc0ffee", 10, 10);
//! let mut engine = ApprovalEngine::new(config);
//!
//! // A wallet guarded by one co-signer plus the custodian
//! engine
//!     .create_wallet("0xa11ce", vec![Signer::approver("0xb0b")], 1)
//!     .unwrap();
//! engine.fund_wallet("0xa11ce", 100).unwrap();
//!
//! // The custodian proposes; the co-signer's approval reaches quorum
//! engine
//!     .initiate_transaction("0xc0ffee", "0xa11ce", 40, "0xdead")
//!     .unwrap();
//!
//! let mut treasury = Treasury::new();
//! let outcome = engine.approve("0xa11ce", 0, "0xb0b", &mut treasury).unwrap();
//! assert!(matches!(outcome, ApprovalOutcome::Settled { amount: 40 }));
//! assert_eq!(engine.get_balance("0xa11ce"), 60);
//! assert_eq!(treasury.balance("0xdead"), 40);
//! ```

pub mod cli;
pub mod engine;
pub mod events;
pub mod identity;
pub mod storage;
pub mod transfer;

// Re-export commonly used types
pub use engine::{
    ApprovalEngine, ApprovalOutcome, EngineConfig, EngineError, PendingTransaction, Signer, Wallet,
};
pub use events::{EngineEvent, PendingTransactionClose, PendingTransactionInitiation};
pub use storage::{StoreError, VaultState, VaultStore};
pub use transfer::{FundsTransfer, TransferError, Treasury};
