//! Engine error taxonomy
//!
//! Every error aborts the whole operation; no partial mutation is ever
//! observable after a failed call.

use crate::transfer::TransferError;
use thiserror::Error;

/// Errors returned by the approval engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Wallet already exists for owner: {0}")]
    WalletAlreadyExists(String),
    #[error("Wallet does not exist for owner: {0}")]
    WalletDoesNotExist(String),
    #[error("Depositor has no wallet yet: {0}")]
    NoWalletYet(String),
    #[error("Approval threshold {threshold} exceeds signer count {signers}")]
    ApprovalCountExceedsSignersLength { threshold: u16, signers: usize },
    #[error("Signer count {count} exceeds maximum {max}")]
    SignersLengthExceedsMaximum { count: usize, max: usize },
    #[error("Initiator not authorized: {0}")]
    UnauthorizedInitiator(String),
    #[error("Caller is not a signer: {0}")]
    InvalidSigner(String),
    #[error("Signer already approved this transaction: {0}")]
    DoubleSigningNotAllowed(String),
    #[error("Reentrant call on wallet: {0}")]
    ReentrantCall(String),
    #[error("Pending transaction limit reached: {max}")]
    PendingTransactionsLimitReached { max: usize },
    #[error("No pending transaction at index {index} for owner {owner}")]
    TransactionNotFound { owner: String, index: usize },
    #[error("Insufficient funds: have {have}, need {need}")]
    InsufficientFunds { have: u64, need: u64 },
    #[error("Deposit overflows wallet balance")]
    DepositOverflow,
    #[error("Transfer failed: {0}")]
    TransferFailed(#[from] TransferError),
}
