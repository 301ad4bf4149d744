use std::{fmt, path::Path};

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::{debug, LevelFilter};
use serde::{Deserialize, Serialize};

use ledger_common::{
    amount::parse_units,
    config::{INITIAL_SUPPLY_UNITS, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL},
    AccountId, TokenMetadata, U256,
};

/// Default values for configuration
pub mod defaults {
    use super::LogLevel;

    pub const LOG_LEVEL: LogLevel = LogLevel::Info;
    pub const FILENAME_LOG: &str = "ledger-deployer.log";
    pub const LOGS_PATH: &str = "logs/";
    pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level: LevelFilter = (*self).into();
        write!(f, "{}", level.as_str().to_lowercase())
    }
}

/// Token deployment parameters
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenConfig {
    #[serde(default = "default_token_name")]
    pub name: String,

    #[serde(default = "default_token_symbol")]
    pub symbol: String,

    #[serde(default = "default_token_decimals")]
    pub decimals: u8,

    /// Initial supply in whole tokens, decimal string
    #[serde(default = "default_initial_supply")]
    pub initial_supply: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: default_token_name(),
            symbol: default_token_symbol(),
            decimals: default_token_decimals(),
            initial_supply: default_initial_supply(),
        }
    }
}

impl TokenConfig {
    pub fn metadata(&self) -> Result<TokenMetadata> {
        TokenMetadata::new(&self.name, &self.symbol, self.decimals)
            .context("Invalid token metadata")
    }

    /// Initial supply converted to base units
    pub fn initial_supply_units(&self) -> Result<U256> {
        parse_units(&self.initial_supply, self.decimals)
            .with_context(|| format!("Invalid initial supply '{}'", self.initial_supply))
    }
}

/// Deployer configuration, either from the command line or a JSON file
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeployerConfig {
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    /// File log level, same as `log_level` when absent
    #[serde(default)]
    pub file_log_level: Option<LogLevel>,

    #[serde(default)]
    pub disable_file_logging: bool,

    #[serde(default)]
    pub disable_log_color: bool,

    #[serde(default = "default_filename_log")]
    pub filename_log: String,

    #[serde(default = "default_logs_path")]
    pub logs_path: String,

    /// Account deploying the contracts, random when absent
    #[serde(default)]
    pub deployer: Option<AccountId>,

    #[serde(default)]
    pub token: TokenConfig,

    /// Print the summary as JSON
    #[serde(default)]
    pub json: bool,
}

// Default functions for serde
fn default_log_level() -> LogLevel {
    defaults::LOG_LEVEL
}
fn default_filename_log() -> String {
    defaults::FILENAME_LOG.to_string()
}
fn default_logs_path() -> String {
    defaults::LOGS_PATH.to_string()
}
fn default_token_name() -> String {
    TOKEN_NAME.to_string()
}
fn default_token_symbol() -> String {
    TOKEN_SYMBOL.to_string()
}
fn default_token_decimals() -> u8 {
    TOKEN_DECIMALS
}
fn default_initial_supply() -> String {
    INITIAL_SUPPLY_UNITS.to_string()
}

impl Default for DeployerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            file_log_level: None,
            disable_file_logging: false,
            disable_log_color: false,
            filename_log: default_filename_log(),
            logs_path: default_logs_path(),
            deployer: None,
            token: TokenConfig::default(),
            json: false,
        }
    }
}

impl DeployerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn generate_template<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config template {}", path.display()))?;
        Ok(())
    }

    /// Reject anything that would make a deployment fail halfway
    pub fn validate(&self) -> Result<()> {
        self.token.metadata()?;
        self.token.initial_supply_units()?;
        Ok(())
    }

    pub fn file_log_level(&self) -> LogLevel {
        self.file_log_level.unwrap_or(self.log_level)
    }
}
