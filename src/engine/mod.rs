//! Custodial multi-party approval engine
//!
//! A registry of quorum-guarded wallets: each wallet is owned by one principal,
//! guarded by a set of co-signers, and every outbound transfer needs a quorum
//! of distinct approvals before it settles.
//!
//! # Example
//!
//! ```ignore
//! use quorum_vault::engine::{ApprovalEngine, EngineConfig, Signer};
//! use quorum_vault::transfer::Treasury;
//!
//! let mut engine = ApprovalEngine::new(EngineConfig::new(custodian, 10, 10));
//!
//! // Create a wallet guarded by two co-signers, threshold 2
//! engine.create_wallet(&owner, vec![Signer::initiator(a), Signer::approver(b)], 2)?;
//! engine.fund_wallet(&owner, 1_000)?;
//!
//! // Propose and collect approvals; the final approval settles
//! engine.initiate_transaction(&a, &owner, 400, &recipient)?;
//! engine.approve(&owner, 0, &a, &mut treasury)?;
//! engine.approve(&owner, 0, &b, &mut treasury)?; // quorum -> settled
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod wallet;

pub use config::EngineConfig;
pub use engine::{ApprovalEngine, ApprovalOutcome};
pub use error::EngineError;
pub use wallet::{PendingTransaction, Signer, Wallet};
