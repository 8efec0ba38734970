//! Wallet registry and approval engine
//!
//! Holds every wallet keyed by owner identity and drives the full lifecycle:
//! creation, deposits, proposal initiation, approval collection, and
//! quorum-triggered settlement through the external transfer seam.

use crate::engine::config::EngineConfig;
use crate::engine::error::EngineError;
use crate::engine::wallet::{PendingTransaction, Signer, Wallet};
use crate::events::{EngineEvent, PendingTransactionClose, PendingTransactionInitiation};
use crate::transfer::FundsTransfer;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of a successful `approve` call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// Approval recorded; quorum not yet reached
    Recorded { approvals: u16 },
    /// Quorum reached; the proposal settled within this call
    Settled { amount: u64 },
}

/// Result of the locked section of an approval, before events are emitted
enum LockedOutcome {
    Recorded { approvals: u16 },
    Settled { settled: PendingTransaction },
}

/// The custodial approval engine: wallet registry plus approval state machine
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApprovalEngine {
    /// Immutable construction-time configuration
    config: EngineConfig,
    /// Wallets by owner identity; at most one per owner
    wallets: HashMap<String, Wallet>,
    /// Log of observable events, in emission order
    events: Vec<EngineEvent>,
}

impl ApprovalEngine {
    /// Create an engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            wallets: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// The engine's configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Create a wallet for `owner` guarded by `signers`.
    ///
    /// Validation order: owner must not already have a wallet, the threshold
    /// must not exceed the supplied signer count, and the supplied signer count
    /// must not exceed the configured maximum. On success the custodian is
    /// appended as one extra signer with initiate rights, so the stored list
    /// holds `signers.len() + 1` entries; the cap applies to the supplied list
    /// only.
    pub fn create_wallet(
        &mut self,
        owner: &str,
        signers: Vec<Signer>,
        approval_threshold: u16,
    ) -> Result<(), EngineError> {
        if self.wallets.contains_key(owner) {
            return Err(EngineError::WalletAlreadyExists(owner.to_string()));
        }

        if approval_threshold as usize > signers.len() {
            return Err(EngineError::ApprovalCountExceedsSignersLength {
                threshold: approval_threshold,
                signers: signers.len(),
            });
        }

        if signers.len() > self.config.max_signers {
            return Err(EngineError::SignersLengthExceedsMaximum {
                count: signers.len(),
                max: self.config.max_signers,
            });
        }

        let mut wallet = Wallet::new(approval_threshold);
        wallet.signers = signers;
        wallet
            .signers
            .push(Signer::initiator(self.config.custodian.clone()));

        log::info!("Wallet created for {} ({})", owner, wallet.description());
        self.wallets.insert(owner.to_string(), wallet);

        Ok(())
    }

    /// Whether `owner` has a wallet
    pub fn wallet_exists(&self, owner: &str) -> bool {
        self.wallets.contains_key(owner)
    }

    /// Full wallet record for `owner`; never fails, unknown owners yield an
    /// empty default record
    pub fn get_wallet(&self, owner: &str) -> Wallet {
        self.wallets.get(owner).cloned().unwrap_or_default()
    }

    /// Balance for `owner`; zero for unknown owners
    pub fn get_balance(&self, owner: &str) -> u64 {
        self.wallets.get(owner).map(|w| w.balance).unwrap_or(0)
    }

    /// Pending ledger for `owner`; empty for unknown owners
    pub fn pending_for(&self, owner: &str) -> &[PendingTransaction] {
        self.wallets
            .get(owner)
            .map(|w| w.pending_transactions.as_slice())
            .unwrap_or(&[])
    }

    /// All wallet owners
    pub fn owners(&self) -> impl Iterator<Item = &str> {
        self.wallets.keys().map(|k| k.as_str())
    }

    /// Number of registered wallets
    pub fn wallet_count(&self) -> usize {
        self.wallets.len()
    }

    /// Events emitted so far, in order
    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    /// Credit `amount` to an existing wallet
    pub fn fund_wallet(&mut self, owner: &str, amount: u64) -> Result<(), EngineError> {
        let wallet = self
            .wallets
            .get_mut(owner)
            .ok_or_else(|| EngineError::WalletDoesNotExist(owner.to_string()))?;

        wallet.balance = wallet
            .balance
            .checked_add(amount)
            .ok_or(EngineError::DepositOverflow)?;

        log::info!("Funded {} with {} (balance {})", owner, amount, wallet.balance);
        Ok(())
    }

    /// Direct-deposit fallback: credit the caller's own wallet.
    ///
    /// Refused with `NoWalletYet` when the caller has no wallet, so funds are
    /// never stranded against a non-existent record.
    pub fn deposit(&mut self, caller: &str, amount: u64) -> Result<(), EngineError> {
        if !self.wallets.contains_key(caller) {
            return Err(EngineError::NoWalletYet(caller.to_string()));
        }
        self.fund_wallet(caller, amount)
    }

    /// Propose a transfer of `amount` to `recipient` from `owner`'s wallet.
    ///
    /// The initiator must be a signer with initiate rights. Funds are checked
    /// but not reserved: several pending proposals may collectively exceed the
    /// balance, and settlement is first-settled-first-served.
    pub fn initiate_transaction(
        &mut self,
        initiator: &str,
        owner: &str,
        amount: u64,
        recipient: &str,
    ) -> Result<(), EngineError> {
        let wallet = self
            .wallets
            .get_mut(owner)
            .ok_or_else(|| EngineError::WalletDoesNotExist(owner.to_string()))?;

        if !wallet.can_initiate(initiator) {
            return Err(EngineError::UnauthorizedInitiator(initiator.to_string()));
        }

        if wallet.pending_transactions.len() >= self.config.max_pending_transactions {
            return Err(EngineError::PendingTransactionsLimitReached {
                max: self.config.max_pending_transactions,
            });
        }

        if amount > wallet.balance {
            return Err(EngineError::InsufficientFunds {
                have: wallet.balance,
                need: amount,
            });
        }

        wallet
            .pending_transactions
            .push(PendingTransaction::new(recipient, initiator, amount));

        log::info!(
            "Transaction initiated on {}: {} -> {} (index {})",
            owner,
            amount,
            recipient,
            wallet.pending_transactions.len() - 1
        );
        self.events
            .push(EngineEvent::Initiation(PendingTransactionInitiation {
                recipient: recipient.to_string(),
                owner: owner.to_string(),
                amount,
                timestamp: Utc::now(),
            }));

        Ok(())
    }

    /// Approve pending transaction `index` on `owner`'s wallet as `caller`.
    ///
    /// Guard order: reentrancy, signer authorization, double-signing. Any
    /// signer may approve regardless of initiate rights. When this approval
    /// reaches the wallet's threshold, settlement runs synchronously within the
    /// same call through `transfer`; a transfer failure rejects the whole
    /// approval with nothing mutated.
    ///
    /// Settlement removes the proposal order-preservingly, so indices are not
    /// stable across settlements.
    pub fn approve(
        &mut self,
        owner: &str,
        index: usize,
        caller: &str,
        transfer: &mut dyn FundsTransfer,
    ) -> Result<ApprovalOutcome, EngineError> {
        let wallet = self
            .wallets
            .get_mut(owner)
            .ok_or_else(|| EngineError::WalletDoesNotExist(owner.to_string()))?;

        if wallet.locked {
            return Err(EngineError::ReentrantCall(owner.to_string()));
        }

        // Per-wallet exclusion scoped to this call: the single release below
        // covers success and every failure inside the locked section.
        wallet.locked = true;
        let result = Self::approve_locked(wallet, owner, index, caller, transfer);
        wallet.locked = false;

        match result {
            Ok(LockedOutcome::Recorded { approvals }) => {
                log::info!(
                    "Approval recorded on {} tx {} by {} ({} so far)",
                    owner,
                    index,
                    caller,
                    approvals
                );
                Ok(ApprovalOutcome::Recorded { approvals })
            }
            Ok(LockedOutcome::Settled { settled }) => {
                let approval_count = settled.approval_count + 1;
                log::info!(
                    "Settled {} from {} to {} ({} approvals)",
                    settled.amount,
                    owner,
                    settled.recipient,
                    approval_count
                );
                self.events.push(EngineEvent::Close(PendingTransactionClose {
                    recipient: settled.recipient,
                    owner: owner.to_string(),
                    final_approver: caller.to_string(),
                    amount: settled.amount,
                    approval_count,
                    timestamp: Utc::now(),
                }));
                Ok(ApprovalOutcome::Settled {
                    amount: settled.amount,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// The fallible body of an approval, run while the wallet is locked.
    ///
    /// Mutates the wallet only on success. On the settlement path the external
    /// transfer runs before any mutation, so a failure leaves the wallet
    /// exactly as it was.
    fn approve_locked(
        wallet: &mut Wallet,
        owner: &str,
        index: usize,
        caller: &str,
        transfer: &mut dyn FundsTransfer,
    ) -> Result<LockedOutcome, EngineError> {
        if !wallet.is_signer(caller) {
            return Err(EngineError::InvalidSigner(caller.to_string()));
        }

        let tx = wallet
            .pending_transactions
            .get(index)
            .ok_or_else(|| EngineError::TransactionNotFound {
                owner: owner.to_string(),
                index,
            })?;

        if tx.has_approved(caller) {
            return Err(EngineError::DoubleSigningNotAllowed(caller.to_string()));
        }

        let approvals = tx.approval_count + 1;
        if approvals >= wallet.approval_threshold {
            // No escrow at initiation, so the balance must be re-checked here:
            // earlier settlements may have drained the wallet.
            if tx.amount > wallet.balance {
                return Err(EngineError::InsufficientFunds {
                    have: wallet.balance,
                    need: tx.amount,
                });
            }
            transfer.transfer(&tx.recipient, tx.amount)?;

            // Order-preserving removal; later entries shift down one index.
            let settled = wallet.pending_transactions.remove(index);
            wallet.balance -= settled.amount;
            Ok(LockedOutcome::Settled { settled })
        } else {
            let tx = &mut wallet.pending_transactions[index];
            tx.approval_count = approvals;
            tx.previous_signers.push(caller.to_string());
            Ok(LockedOutcome::Recorded { approvals })
        }
    }
}
