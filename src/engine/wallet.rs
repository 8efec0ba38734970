//! Wallet data model
//!
//! A wallet is owned by one principal and guarded by a set of signers; every
//! outbound transfer waits in the pending ledger until a quorum of distinct
//! signers has approved it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A party authorized to act on a wallet
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Signer {
    /// Principal identity (opaque to the engine)
    pub identity: String,
    /// Whether this signer may propose transactions, not just approve them
    pub can_initiate: bool,
}

impl Signer {
    /// Create a signer record
    pub fn new(identity: impl Into<String>, can_initiate: bool) -> Self {
        Self {
            identity: identity.into(),
            can_initiate,
        }
    }

    /// A signer that may only approve
    pub fn approver(identity: impl Into<String>) -> Self {
        Self::new(identity, false)
    }

    /// A signer that may also initiate
    pub fn initiator(identity: impl Into<String>) -> Self {
        Self::new(identity, true)
    }
}

/// An in-flight transfer proposal awaiting quorum
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PendingTransaction {
    /// Where the funds go on settlement
    pub recipient: String,
    /// The signer that proposed the transfer
    pub initiator: String,
    /// Amount to move
    pub amount: u64,
    /// Distinct approvals collected so far
    pub approval_count: u16,
    /// Identities that have already approved; append-only, duplicate-free
    pub previous_signers: Vec<String>,
    /// When the proposal entered the ledger
    pub created_at: DateTime<Utc>,
}

impl PendingTransaction {
    /// Create a fresh proposal with no approvals
    pub fn new(
        recipient: impl Into<String>,
        initiator: impl Into<String>,
        amount: u64,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            initiator: initiator.into(),
            amount,
            approval_count: 0,
            previous_signers: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether `identity` has already approved this proposal
    pub fn has_approved(&self, identity: &str) -> bool {
        self.previous_signers.iter().any(|s| s == identity)
    }
}

/// A quorum-guarded wallet
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Wallet {
    /// Current balance, in the engine's single fungible unit
    pub balance: u64,
    /// Authorized signers (supplied co-signers plus the appended custodian)
    pub signers: Vec<Signer>,
    /// Ordered ledger of in-flight proposals
    pub pending_transactions: Vec<PendingTransaction>,
    /// Distinct approvals required before a proposal settles
    pub approval_threshold: u16,
    /// Reentrancy flag, true only inside an in-flight settlement. Never
    /// persisted as true.
    #[serde(skip)]
    pub locked: bool,
}

impl Wallet {
    pub(crate) fn new(approval_threshold: u16) -> Self {
        Self {
            approval_threshold,
            ..Self::default()
        }
    }

    /// Whether `identity` may approve this wallet's transactions
    pub fn is_signer(&self, identity: &str) -> bool {
        self.signers.iter().any(|s| s.identity == identity)
    }

    /// Whether `identity` may propose transactions for this wallet
    pub fn can_initiate(&self, identity: &str) -> bool {
        self.signers
            .iter()
            .any(|s| s.identity == identity && s.can_initiate)
    }

    /// Total signer count
    pub fn signer_count(&self) -> usize {
        self.signers.len()
    }

    /// Number of proposals awaiting quorum
    pub fn pending_count(&self) -> usize {
        self.pending_transactions.len()
    }

    /// Description like "3-of-5"
    pub fn description(&self) -> String {
        format!("{}-of-{}", self.approval_threshold, self.signers.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signer_constructors() {
        assert!(!Signer::approver("0xa").can_initiate);
        assert!(Signer::initiator("0xa").can_initiate);
    }

    #[test]
    fn test_has_approved() {
        let mut tx = PendingTransaction::new("0xdead", "0xa", 10);
        assert!(!tx.has_approved("0xb"));

        tx.previous_signers.push("0xb".to_string());
        assert!(tx.has_approved("0xb"));
        assert!(!tx.has_approved("0xc"));
    }

    #[test]
    fn test_initiate_rights_are_per_signer() {
        let mut wallet = Wallet::new(2);
        wallet.signers.push(Signer::approver("0xa"));
        wallet.signers.push(Signer::initiator("0xb"));

        assert!(wallet.is_signer("0xa"));
        assert!(!wallet.can_initiate("0xa"));
        assert!(wallet.can_initiate("0xb"));
        assert!(!wallet.is_signer("0xc"));
    }

    #[test]
    fn test_description() {
        let mut wallet = Wallet::new(2);
        wallet.signers.push(Signer::approver("0xa"));
        wallet.signers.push(Signer::approver("0xb"));
        wallet.signers.push(Signer::initiator("0xc"));

        assert_eq!(wallet.description(), "2-of-3");
    }

    #[test]
    fn test_lock_flag_not_persisted() {
        let mut wallet = Wallet::new(1);
        wallet.locked = true;

        let json = serde_json::to_string(&wallet).unwrap();
        let restored: Wallet = serde_json::from_str(&json).unwrap();
        assert!(!restored.locked);
    }
}
