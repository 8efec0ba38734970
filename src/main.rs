//! Quorum-Vault CLI Application
//!
//! A command-line interface for operating the custodial approval engine.

use clap::{Parser, Subcommand};
use quorum_vault::cli::commands::{self, AppState, CliResult};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quorum-vault")]
#[command(author = "Darshan")]
#[command(version = "0.1.0")]
#[command(about = "A custodial multi-party approval engine", long_about = None)]
struct Cli {
    /// Data directory for vault storage
    #[arg(short, long, default_value = ".vault_data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new vault
    Init {
        /// Custodian identity (generated when omitted)
        #[arg(short, long)]
        custodian: Option<String>,

        /// Maximum pending transactions per wallet
        #[arg(long, default_value = "10")]
        max_pending: usize,

        /// Maximum co-signers per wallet
        #[arg(long, default_value = "10")]
        max_signers: usize,
    },

    /// Generate a fresh principal identity
    Account,

    /// Create a quorum-guarded wallet
    Create {
        /// Owner identity
        #[arg(short, long)]
        owner: String,

        /// Co-signer as identity[:initiate|:approve]; repeatable
        #[arg(short, long)]
        signer: Vec<String>,

        /// Approvals required before a proposal settles
        #[arg(short, long)]
        threshold: u16,
    },

    /// Credit an existing wallet
    Fund {
        /// Owner identity
        #[arg(short, long)]
        owner: String,

        /// Amount to credit
        #[arg(short, long)]
        amount: u64,
    },

    /// Deposit into your own wallet
    Deposit {
        /// Depositor identity
        #[arg(short, long)]
        from: String,

        /// Amount to deposit
        #[arg(short, long)]
        amount: u64,
    },

    /// Propose an outbound transfer
    Initiate {
        /// Initiating signer identity
        #[arg(short, long)]
        initiator: String,

        /// Wallet owner identity
        #[arg(short, long)]
        owner: String,

        /// Amount to transfer
        #[arg(short, long)]
        amount: u64,

        /// Recipient identity
        #[arg(short, long)]
        recipient: String,
    },

    /// Approve a pending transaction
    Approve {
        /// Wallet owner identity
        #[arg(short, long)]
        owner: String,

        /// Index in the wallet's pending ledger
        #[arg(short, long)]
        index: usize,

        /// Approving signer identity
        #[arg(short, long)]
        caller: String,
    },

    /// Show a wallet in full
    Show {
        /// Owner identity
        #[arg(short, long)]
        owner: String,
    },

    /// Show a wallet balance
    Balance {
        /// Owner identity
        #[arg(short, long)]
        owner: String,
    },

    /// Show settled funds by recipient
    Treasury,

    /// Show the event log
    Events,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    if let Err(e) = run(args) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Cli) -> CliResult<()> {
    match args.command {
        Commands::Init {
            custodian,
            max_pending,
            max_signers,
        } => commands::cmd_init(&args.data_dir, custodian, max_pending, max_signers),
        Commands::Account => commands::cmd_account_new(),
        Commands::Create {
            owner,
            signer,
            threshold,
        } => {
            let mut app = AppState::open(&args.data_dir)?;
            commands::cmd_create(&mut app, &owner, &signer, threshold)
        }
        Commands::Fund { owner, amount } => {
            let mut app = AppState::open(&args.data_dir)?;
            commands::cmd_fund(&mut app, &owner, amount)
        }
        Commands::Deposit { from, amount } => {
            let mut app = AppState::open(&args.data_dir)?;
            commands::cmd_deposit(&mut app, &from, amount)
        }
        Commands::Initiate {
            initiator,
            owner,
            amount,
            recipient,
        } => {
            let mut app = AppState::open(&args.data_dir)?;
            commands::cmd_initiate(&mut app, &initiator, &owner, amount, &recipient)
        }
        Commands::Approve {
            owner,
            index,
            caller,
        } => {
            let mut app = AppState::open(&args.data_dir)?;
            commands::cmd_approve(&mut app, &owner, index, &caller)
        }
        Commands::Show { owner } => {
            let app = AppState::open(&args.data_dir)?;
            commands::cmd_show(&app, &owner)
        }
        Commands::Balance { owner } => {
            let app = AppState::open(&args.data_dir)?;
            commands::cmd_balance(&app, &owner)
        }
        Commands::Treasury => {
            let app = AppState::open(&args.data_dir)?;
            commands::cmd_treasury(&app)
        }
        Commands::Events => {
            let app = AppState::open(&args.data_dir)?;
            commands::cmd_events(&app)
        }
    }
}
