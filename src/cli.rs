use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::debug;
use serde_json::{Value, json};

use crate::client::{DEFAULT_CONTRACT_PAGE, DEFAULT_HISTORY_PAGE, DEFAULT_LATEST_BLOCKS, DEFAULT_RICHLIST_LIMIT, NodeClient};
use crate::config::{ClientConfig, client_config, load_configuration};
use crate::http::SdkError;
use crate::units;

#[derive(Parser)]
#[command(name = "strat")]
#[command(about = "STRAT node client", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,
    #[command(subcommand)]
    pub command: Commands,
}

/// Connection settings. Flags win over the config file, which wins over defaults.
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    #[arg(short, long, global = true, help = "Path to the config file", default_value = "data/config.toml")]
    pub config: PathBuf,
    #[arg(short = 'u', long, global = true, help = "Base URL of the STRAT node")]
    pub base_url: Option<String>,
    #[arg(
        long,
        global = true,
        env = "STRAT_API_KEY",
        hide_env_values = true,
        help = "Bearer token sent with every request"
    )]
    pub api_key: Option<String>,
    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,
}

impl ConnectionArgs {
    pub fn apply_to(&self, config: &mut ClientConfig) -> Result<(), SdkError> {
        if let Some(base_url) = &self.base_url {
            config.base_url = url::Url::parse(base_url)?;
        }
        if let Some(api_key) = &self.api_key {
            config.auth_token = Some(api_key.clone());
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the node is up
    Health,
    /// Show the node's API name and version
    Version,
    /// Show chain height, difficulty and latest block
    Info,
    /// Show a block by height or hash
    Block {
        #[arg(help = "Block height (digits only) or block hash")]
        identifier: String,
        #[arg(long, help = "Treat the identifier as a hash even if it is all digits")]
        hash: bool,
    },
    /// List the most recent blocks
    Blocks {
        #[arg(short = 'n', long, help = "Number of blocks", default_value_t = DEFAULT_LATEST_BLOCKS)]
        count: u32,
    },
    /// Show a transaction
    Transaction { id: String },
    /// List pending transactions
    Pending,
    /// Show an address's transaction history
    History {
        address: String,
        #[arg(short, long, default_value_t = DEFAULT_HISTORY_PAGE)]
        limit: u32,
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
    },
    /// Send funds. The private key is forwarded to the node, which signs.
    Send {
        #[arg(long, help = "Sender address")]
        from: String,
        #[arg(long, help = "Recipient address")]
        to: String,
        #[arg(short, long, help = "Amount in STRAT")]
        amount: f64,
        #[arg(long, env = "STRAT_PRIVATE_KEY", hide_env_values = true, help = "Sender private key")]
        private_key: String,
    },
    /// Show an address's balance
    Balance { address: String },
    /// Show wallet details for an address
    Wallet { address: String },
    /// List unspent outputs of an address
    Utxos { address: String },
    /// Show a deployed contract
    Contract {
        address: String,
        #[arg(long, help = "Show the contract's storage instead of its metadata")]
        state: bool,
    },
    /// List deployed contracts
    Contracts {
        #[arg(short, long, default_value_t = DEFAULT_CONTRACT_PAGE)]
        limit: u32,
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
    },
    /// Mining control and statistics
    Mining {
        #[command(subcommand)]
        mining_subcommand: MiningCommand,
    },
    /// Show mempool statistics
    Mempool {
        #[arg(long, help = "List the transactions instead of statistics")]
        transactions: bool,
    },
    /// Show staking position of an address
    Staking { address: String },
    /// Show an NFT
    Nft { token_id: u64 },
    /// List NFTs owned by an address
    Nfts { owner: String },
    /// Show a governance proposal
    Proposal { id: u64 },
    /// List governance proposals
    Proposals {
        #[arg(short, long, help = "Only proposals in this status")]
        status: Option<String>,
    },
    /// Explorer view of an address
    Address { address: String },
    /// Show the largest holders
    Richlist {
        #[arg(short, long, default_value_t = DEFAULT_RICHLIST_LIMIT)]
        limit: u32,
    },
    /// Show network-wide statistics
    Stats,
    /// Check an address's format without contacting the node
    ValidateAddress { address: String },
    /// Convert STRAT to wei
    ToWei {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Convert wei to STRAT
    FromWei {
        #[arg(allow_negative_numbers = true)]
        wei: i128,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiningCommand {
    /// Show miner status
    Info,
    /// Start mining to an address
    Start { address: String },
    /// Stop mining
    Stop,
    /// Show mining statistics of an address
    Stats { address: String },
}

impl Commands {
    /// Evaluates commands that need no node. Returns `None` for the rest.
    pub fn run_offline(&self) -> Option<Value> {
        match self {
            Commands::ValidateAddress { address } => Some(json!({
                "address": address,
                "valid": units::is_valid_address(address),
            })),
            // Wei amounts can exceed what a JSON number holds exactly.
            Commands::ToWei { amount } => Some(json!({ "wei": units::to_wei(*amount).to_string() })),
            Commands::FromWei { wei } => Some(json!({ "amount": units::from_wei(*wei) })),
            _ => None,
        }
    }

    /// Runs a command against the node and returns its JSON answer.
    pub async fn execute(self, client: &NodeClient) -> Result<Value, SdkError> {
        match self {
            Commands::Health => client.health_check().await,
            Commands::Version => client.get_api_version().await,
            Commands::Info => client.get_blockchain_info().await,
            Commands::Block { identifier, hash } => {
                if hash {
                    client.get_block_by_hash(&identifier).await
                } else {
                    client.get_block(&identifier).await
                }
            },
            Commands::Blocks { count } => client.get_latest_blocks(count).await,
            Commands::Transaction { id } => client.get_transaction(&id).await,
            Commands::Pending => client.get_pending_transactions().await,
            Commands::History { address, limit, offset } => {
                client.get_transaction_history(&address, limit, offset).await
            },
            Commands::Send {
                from,
                to,
                amount,
                private_key,
            } => client.send_transaction(&from, &to, amount, &private_key).await,
            Commands::Balance { address } => {
                let balance = client.get_balance(&address).await?;
                Ok(json!({ "address": address, "balance": balance }))
            },
            Commands::Wallet { address } => client.get_wallet_info(&address).await,
            Commands::Utxos { address } => client.get_utxos(&address).await,
            Commands::Contract { address, state } => {
                if state {
                    client.get_contract_state(&address).await
                } else {
                    client.get_contract(&address).await
                }
            },
            Commands::Contracts { limit, offset } => client.list_contracts(limit, offset).await,
            Commands::Mining { mining_subcommand } => match mining_subcommand {
                MiningCommand::Info => client.get_mining_info().await,
                MiningCommand::Start { address } => client.start_mining(&address).await,
                MiningCommand::Stop => client.stop_mining().await,
                MiningCommand::Stats { address } => client.get_mining_stats(&address).await,
            },
            Commands::Mempool { transactions } => {
                if transactions {
                    client.get_mempool_transactions().await
                } else {
                    client.get_mempool_info().await
                }
            },
            Commands::Staking { address } => client.get_staking_info(&address).await,
            Commands::Nft { token_id } => client.get_nft(token_id).await,
            Commands::Nfts { owner } => client.list_nfts(&owner).await,
            Commands::Proposal { id } => client.get_proposal(id).await,
            Commands::Proposals { status } => client.list_proposals(status.as_deref()).await,
            Commands::Address { address } => client.search_address(&address).await,
            Commands::Richlist { limit } => client.get_rich_list(limit).await,
            Commands::Stats => client.get_network_stats().await,
            offline @ (Commands::ValidateAddress { .. } | Commands::ToWei { .. } | Commands::FromWei { .. }) => {
                Ok(offline.run_offline().unwrap_or_default())
            },
        }
    }
}

/// Resolves configuration, runs the command and closes the client.
///
/// Failures are returned, not logged; the caller reports them once.
pub async fn run(cli: Cli) -> anyhow::Result<Value> {
    if let Some(answer) = cli.command.run_offline() {
        return Ok(answer);
    }

    let cfg = load_configuration(&cli.connection.config)?;
    let mut config = client_config(&cfg)?;
    cli.connection
        .apply_to(&mut config)
        .context("Invalid connection override")?;

    let client = NodeClient::new(config)?;
    debug!(node:% = client.get_address(); "Dispatching command");

    let result = cli.command.execute(&client).await;
    client.close().await;
    Ok(result?)
}
