//! CLI commands for the vault
//!
//! Implements all command handlers for the CLI interface. This is the
//! deployment-tooling side: `init` instantiates the engine with the custodian
//! identity and the two caps, the rest drives it.

use crate::engine::{ApprovalEngine, ApprovalOutcome, EngineConfig, Signer};
use crate::events::EngineEvent;
use crate::identity;
use crate::storage::{VaultState, VaultStore};
use crate::transfer::Treasury;
use std::path::Path;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Application state loaded from disk for the duration of one command
pub struct AppState {
    pub state: VaultState,
    store: VaultStore,
}

impl AppState {
    /// Open an existing vault
    pub fn open(data_dir: &Path) -> CliResult<Self> {
        let store = VaultStore::new(data_dir)?;
        if !store.exists() {
            return Err(format!(
                "No vault found in {:?}; run `quorum-vault init` first",
                data_dir
            )
            .into());
        }
        let state = store.load()?;
        Ok(Self { state, store })
    }

    /// Persist the current state
    pub fn save(&self) -> CliResult<()> {
        self.store.save(&self.state)?;
        Ok(())
    }
}

/// Initialize a new vault
pub fn cmd_init(
    data_dir: &Path,
    custodian: Option<String>,
    max_pending: usize,
    max_signers: usize,
) -> CliResult<()> {
    let store = VaultStore::new(data_dir)?;

    if store.exists() {
        println!("⚠️  Vault already exists at {:?}", data_dir);
        return Ok(());
    }

    let custodian = custodian.unwrap_or_else(identity::new_identity);
    let config = EngineConfig::new(custodian.clone(), max_pending, max_signers);
    let state = VaultState {
        engine: ApprovalEngine::new(config),
        treasury: Treasury::new(),
    };
    store.save(&state)?;

    println!("✅ Vault initialized!");
    println!("   📁 Data directory: {:?}", data_dir);
    println!("   🔑 Custodian: {}", custodian);
    println!("   📊 Max pending per wallet: {}", max_pending);
    println!("   👥 Max co-signers per wallet: {}", max_signers);

    Ok(())
}

/// Generate a fresh principal identity
pub fn cmd_account_new() -> CliResult<()> {
    println!("🆕 New identity: {}", identity::new_identity());
    Ok(())
}

/// Parse a signer spec of the form `identity[:initiate|:approve]`
pub fn parse_signer(spec: &str) -> CliResult<Signer> {
    match spec.split_once(':') {
        None => Ok(Signer::approver(spec)),
        Some((id, "initiate")) => Ok(Signer::initiator(id)),
        Some((id, "approve")) => Ok(Signer::approver(id)),
        Some((_, role)) => Err(format!(
            "Unknown signer role '{}' (expected 'initiate' or 'approve')",
            role
        )
        .into()),
    }
}

/// Create a wallet
pub fn cmd_create(
    app: &mut AppState,
    owner: &str,
    signer_specs: &[String],
    threshold: u16,
) -> CliResult<()> {
    let signers = signer_specs
        .iter()
        .map(|s| parse_signer(s))
        .collect::<CliResult<Vec<Signer>>>()?;

    app.state.engine.create_wallet(owner, signers, threshold)?;
    app.save()?;

    let wallet = app.state.engine.get_wallet(owner);
    println!("✅ Wallet created for {}", owner);
    println!("   🔐 Quorum: {}", wallet.description());
    Ok(())
}

/// Credit a wallet
pub fn cmd_fund(app: &mut AppState, owner: &str, amount: u64) -> CliResult<()> {
    app.state.engine.fund_wallet(owner, amount)?;
    app.save()?;

    println!(
        "💰 Funded {} with {} (balance {})",
        owner,
        amount,
        app.state.engine.get_balance(owner)
    );
    Ok(())
}

/// Deposit into the caller's own wallet
pub fn cmd_deposit(app: &mut AppState, from: &str, amount: u64) -> CliResult<()> {
    app.state.engine.deposit(from, amount)?;
    app.save()?;

    println!(
        "💰 Deposited {} into {} (balance {})",
        amount,
        from,
        app.state.engine.get_balance(from)
    );
    Ok(())
}

/// Propose an outbound transfer
pub fn cmd_initiate(
    app: &mut AppState,
    initiator: &str,
    owner: &str,
    amount: u64,
    recipient: &str,
) -> CliResult<()> {
    app.state
        .engine
        .initiate_transaction(initiator, owner, amount, recipient)?;
    app.save()?;

    let index = app.state.engine.pending_for(owner).len() - 1;
    println!("📝 Transaction proposed at index {}", index);
    println!("   {} -> {} ({} units)", owner, recipient, amount);
    Ok(())
}

/// Approve a pending transaction
pub fn cmd_approve(app: &mut AppState, owner: &str, index: usize, caller: &str) -> CliResult<()> {
    let VaultState { engine, treasury } = &mut app.state;
    let outcome = engine.approve(owner, index, caller, treasury)?;
    app.save()?;

    match outcome {
        ApprovalOutcome::Recorded { approvals } => {
            let threshold = app.state.engine.get_wallet(owner).approval_threshold;
            println!("✍️  Approval recorded ({}/{})", approvals, threshold);
        }
        ApprovalOutcome::Settled { amount } => {
            println!("✅ Quorum reached — settled {} units", amount);
            println!(
                "   💼 Wallet balance: {}",
                app.state.engine.get_balance(owner)
            );
        }
    }
    Ok(())
}

/// Show a wallet in full
pub fn cmd_show(app: &AppState, owner: &str) -> CliResult<()> {
    if !app.state.engine.wallet_exists(owner) {
        println!("⚠️  No wallet for {}", owner);
        return Ok(());
    }

    let wallet = app.state.engine.get_wallet(owner);
    println!("💼 Wallet {}", owner);
    println!("   Balance: {}", wallet.balance);
    println!("   Quorum: {}", wallet.description());
    println!("   Signers:");
    for signer in &wallet.signers {
        let role = if signer.can_initiate {
            "initiate+approve"
        } else {
            "approve"
        };
        println!("     {} ({})", signer.identity, role);
    }

    if wallet.pending_transactions.is_empty() {
        println!("   Pending: none");
    } else {
        println!("   Pending:");
        for (i, tx) in wallet.pending_transactions.iter().enumerate() {
            println!(
                "     [{}] {} -> {} ({} approvals, proposed {})",
                i,
                tx.amount,
                tx.recipient,
                tx.approval_count,
                tx.created_at.format("%Y-%m-%d %H:%M:%S")
            );
        }
    }
    Ok(())
}

/// Show a wallet balance
pub fn cmd_balance(app: &AppState, owner: &str) -> CliResult<()> {
    println!(
        "💰 Balance of {}: {}",
        owner,
        app.state.engine.get_balance(owner)
    );
    Ok(())
}

/// Show treasury credits
pub fn cmd_treasury(app: &AppState) -> CliResult<()> {
    if app.state.treasury.account_count() == 0 {
        println!("🏦 Treasury: no settlements yet");
        return Ok(());
    }

    println!(
        "🏦 Treasury ({} accounts):",
        app.state.treasury.account_count()
    );
    for (account, balance) in app.state.treasury.accounts() {
        println!("   {}: {}", account, balance);
    }
    Ok(())
}

/// Show the event log
pub fn cmd_events(app: &AppState) -> CliResult<()> {
    let events = app.state.engine.events();
    if events.is_empty() {
        println!("📜 No events yet");
        return Ok(());
    }

    println!("📜 Events ({}):", events.len());
    for event in events {
        match event {
            EngineEvent::Initiation(init) => println!(
                "   [{}] initiated: {} -> {} ({} units)",
                init.timestamp.format("%Y-%m-%d %H:%M:%S"),
                init.owner,
                init.recipient,
                init.amount
            ),
            EngineEvent::Close(close) => println!(
                "   [{}] settled: {} -> {} ({} units, {} approvals, final {})",
                close.timestamp.format("%Y-%m-%d %H:%M:%S"),
                close.owner,
                close.recipient,
                close.amount,
                close.approval_count,
                close.final_approver
            ),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signer_roles() {
        assert!(!parse_signer("0xa").unwrap().can_initiate);
        assert!(!parse_signer("0xa:approve").unwrap().can_initiate);
        assert!(parse_signer("0xa:initiate").unwrap().can_initiate);
        assert!(parse_signer("0xa:admin").is_err());
    }
}
