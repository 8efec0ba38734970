//! External funds-transfer seam
//!
//! Settlement moves funds out of a wallet through the [`FundsTransfer`] trait,
//! the one point where control leaves the engine. [`Treasury`] is the in-memory
//! account book used by the CLI; tests substitute failing implementations to
//! exercise the rollback path.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors from the fund-movement side
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Recipient rejected the transfer: {0}")]
    Rejected(String),
    #[error("Recipient balance overflow: {0}")]
    BalanceOverflow(String),
}

/// Destination for settled funds
///
/// An implementation must either complete the transfer fully or fail without
/// side effects; the engine treats any error as grounds to reject the
/// settlement that requested it.
pub trait FundsTransfer {
    /// Move `amount` units to `recipient`.
    fn transfer(&mut self, recipient: &str, amount: u64) -> Result<(), TransferError>;
}

/// In-memory account book crediting settlement recipients
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Treasury {
    /// Credited balances by account
    accounts: HashMap<String, u64>,
}

impl Treasury {
    /// Create an empty treasury
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// Balance credited to an account (zero for unknown accounts)
    pub fn balance(&self, account: &str) -> u64 {
        self.accounts.get(account).copied().unwrap_or(0)
    }

    /// Iterate over all credited accounts
    pub fn accounts(&self) -> impl Iterator<Item = (&str, u64)> {
        self.accounts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of accounts that have received funds
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

impl FundsTransfer for Treasury {
    fn transfer(&mut self, recipient: &str, amount: u64) -> Result<(), TransferError> {
        let credited = self
            .balance(recipient)
            .checked_add(amount)
            .ok_or_else(|| TransferError::BalanceOverflow(recipient.to_string()))?;
        self.accounts.insert(recipient.to_string(), credited);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credits_accumulate() {
        let mut treasury = Treasury::new();
        treasury.transfer("acct", 40).unwrap();
        treasury.transfer("acct", 2).unwrap();

        assert_eq!(treasury.balance("acct"), 42);
        assert_eq!(treasury.account_count(), 1);
    }

    #[test]
    fn test_unknown_account_is_zero() {
        let treasury = Treasury::new();
        assert_eq!(treasury.balance("nobody"), 0);
    }

    #[test]
    fn test_overflow_rejected_without_side_effects() {
        let mut treasury = Treasury::new();
        treasury.transfer("acct", u64::MAX).unwrap();

        let result = treasury.transfer("acct", 1);
        assert!(matches!(result, Err(TransferError::BalanceOverflow(_))));
        assert_eq!(treasury.balance("acct"), u64::MAX);
    }
}
