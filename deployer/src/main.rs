//! Ledger Deployer
//!
//! Deploys a Counter and a fixed-supply Token for a deployer account and
//! prints a deployment summary.
//!
//! # Usage
//!
//! Deploy both (default):
//! ```bash
//! cargo run -p ledger_deployer -- all
//! ```
//!
//! Deploy only the token, summary as JSON:
//! ```bash
//! cargo run -p ledger_deployer -- --json token
//! ```

mod config;
mod deployment;
mod logger;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{defaults, DeployerConfig, LogLevel, TokenConfig};
use deployment::{deploy_all, deploy_token, Deployer};
use ledger_common::{config::VERSION, AccountId};
use log::info;

#[derive(Subcommand, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum DeployCommand {
    /// Deploy the Counter and the Token
    #[default]
    All,
    /// Deploy only the Token
    Token,
}

/// Command line configuration
#[derive(Parser, Clone, Debug)]
#[command(name = "ledger_deployer")]
#[command(about = "Deploy the Counter and Token state machines")]
struct CliConfig {
    #[command(subcommand)]
    command: Option<DeployCommand>,

    /// Set log level
    #[clap(long, value_enum, default_value_t = defaults::LOG_LEVEL)]
    log_level: LogLevel,

    /// Set file log level, same as log level by default
    #[clap(long, value_enum)]
    file_log_level: Option<LogLevel>,

    /// Disable the log file
    #[clap(long)]
    disable_file_logging: bool,

    /// Disable the usage of colors in log
    #[clap(long)]
    disable_log_color: bool,

    /// Log filename
    #[clap(long, default_value_t = String::from(defaults::FILENAME_LOG))]
    filename_log: String,

    /// Logs directory
    #[clap(long, default_value_t = String::from(defaults::LOGS_PATH))]
    logs_path: String,

    /// Deployer account as hex, random when omitted
    #[clap(long)]
    deployer: Option<AccountId>,

    /// Token name
    #[clap(long)]
    token_name: Option<String>,

    /// Token symbol
    #[clap(long)]
    token_symbol: Option<String>,

    /// Token decimals
    #[clap(long)]
    token_decimals: Option<u8>,

    /// Initial supply in whole tokens
    #[clap(long)]
    initial_supply: Option<String>,

    /// Print the summary as JSON
    #[clap(long)]
    json: bool,

    /// JSON File to load the configuration from
    #[clap(long)]
    config_file: Option<String>,

    /// Generate the template at the `config_file` path
    #[clap(long)]
    generate_config_template: bool,
}

impl CliConfig {
    fn into_config(self) -> DeployerConfig {
        let token_defaults = TokenConfig::default();
        DeployerConfig {
            log_level: self.log_level,
            file_log_level: self.file_log_level,
            disable_file_logging: self.disable_file_logging,
            disable_log_color: self.disable_log_color,
            filename_log: self.filename_log,
            logs_path: self.logs_path,
            deployer: self.deployer,
            token: TokenConfig {
                name: self.token_name.unwrap_or(token_defaults.name),
                symbol: self.token_symbol.unwrap_or(token_defaults.symbol),
                decimals: self.token_decimals.unwrap_or(token_defaults.decimals),
                initial_supply: self.initial_supply.unwrap_or(token_defaults.initial_supply),
            },
            json: self.json,
        }
    }
}

fn main() -> Result<()> {
    let cli_config = CliConfig::parse();
    let command = cli_config.command.unwrap_or_default();

    if let Some(path) = cli_config.config_file.as_ref() {
        if cli_config.generate_config_template {
            if Path::new(path).exists() {
                eprintln!("Config file already exists at {path}");
                return Ok(());
            }

            DeployerConfig::generate_template(path)?;
            println!("Configuration template generated at {path}");
            return Ok(());
        }
    }

    let config = match cli_config.config_file.clone() {
        Some(path) => DeployerConfig::from_file(path)?,
        None => cli_config.into_config(),
    };
    config.validate()?;

    logger::init(&config).context("Failed to initialize logger")?;
    if log::log_enabled!(log::Level::Info) {
        info!("Ledger Deployer v{} starting...", VERSION);
    }

    let account = config
        .deployer
        .unwrap_or_else(|| AccountId::new(rand::random()));
    let metadata = config.token.metadata()?;
    let initial_supply = config.token.initial_supply_units()?;

    let mut deployer = Deployer::new(account);
    let summary = match command {
        DeployCommand::All => deploy_all(&mut deployer, initial_supply, metadata)?,
        DeployCommand::Token => deploy_token(&mut deployer, initial_supply, metadata)?,
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }

    Ok(())
}
