//! Deployment of the Counter and Token state machines.
//!
//! Every deployment gets its own address derived from the deployer
//! account and its deployment nonce, so replaying the same sequence
//! with the same deployer yields the same addresses.

use std::fmt;

use anyhow::Result;
use log::info;
use serde::Serialize;
use sha3::{Digest, Keccak256};

use ledger_common::{amount::format_units, AccountId, Counter, TokenLedger, TokenMetadata, U256};

/// keccak256(deployer || nonce)
pub fn contract_address(deployer: &AccountId, nonce: u64) -> AccountId {
    let mut hasher = Keccak256::new();
    hasher.update(deployer.as_bytes());
    hasher.update(nonce.to_be_bytes());

    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hasher.finalize());
    AccountId::new(bytes)
}

/// A deployed instance together with its address
#[derive(Debug, Clone)]
pub struct Deployed<T> {
    pub address: AccountId,
    pub instance: T,
}

pub struct Deployer {
    account: AccountId,
    nonce: u64,
}

impl Deployer {
    pub fn new(account: AccountId) -> Self {
        Self { account, nonce: 0 }
    }

    pub fn account(&self) -> AccountId {
        self.account
    }

    fn next_address(&mut self) -> AccountId {
        let address = contract_address(&self.account, self.nonce);
        self.nonce += 1;
        address
    }

    pub fn deploy_counter(&mut self) -> Deployed<Counter> {
        Deployed {
            address: self.next_address(),
            instance: Counter::new(),
        }
    }

    /// Deploy a token whose whole supply is minted to the deployer
    pub fn deploy_token(
        &mut self,
        initial_supply: U256,
        metadata: TokenMetadata,
    ) -> Deployed<TokenLedger> {
        Deployed {
            address: self.next_address(),
            instance: TokenLedger::with_metadata(self.account, initial_supply, metadata),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CounterReport {
    pub address: AccountId,
    pub number: U256,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenReport {
    pub address: AccountId,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Total supply in whole tokens
    pub total_supply: String,
    /// Deployer balance in whole tokens
    pub deployer_balance: String,
}

impl TokenReport {
    fn new(deployed: &Deployed<TokenLedger>, deployer: &AccountId) -> Result<Self> {
        let token = &deployed.instance;
        Ok(Self {
            address: deployed.address,
            name: token.name().to_owned(),
            symbol: token.symbol().to_owned(),
            decimals: token.decimals(),
            total_supply: format_units(token.total_supply(), token.decimals())?,
            deployer_balance: format_units(token.balance_of(deployer), token.decimals())?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeploymentSummary {
    pub deployer: AccountId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter: Option<CounterReport>,
    pub token: TokenReport,
}

impl fmt::Display for DeploymentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Deployment Summary ===")?;
        writeln!(f, "Deployer: {}", self.deployer)?;
        if let Some(counter) = &self.counter {
            writeln!(f, "Counter: {}", counter.address)?;
        }
        writeln!(f, "Token: {}", self.token.address)?;
        writeln!(
            f,
            "Total supply: {} {}",
            self.token.total_supply, self.token.symbol
        )?;
        write!(
            f,
            "Deployer balance: {} {}",
            self.token.deployer_balance, self.token.symbol
        )
    }
}

/// Deploy a Counter then a Token
pub fn deploy_all(
    deployer: &mut Deployer,
    initial_supply: U256,
    metadata: TokenMetadata,
) -> Result<DeploymentSummary> {
    info!("Deploying contracts with account: {}", deployer.account());

    info!("=== Deploying Counter ===");
    let counter = deployer.deploy_counter();
    info!("Counter deployed to: {}", counter.address);

    let mut summary = deploy_token(deployer, initial_supply, metadata)?;
    summary.counter = Some(CounterReport {
        address: counter.address,
        number: counter.instance.number(),
    });
    Ok(summary)
}

/// Deploy only a Token
pub fn deploy_token(
    deployer: &mut Deployer,
    initial_supply: U256,
    metadata: TokenMetadata,
) -> Result<DeploymentSummary> {
    info!("=== Deploying Token ===");
    let token = deployer.deploy_token(initial_supply, metadata);
    token.instance.check_conservation()?;

    let report = TokenReport::new(&token, &deployer.account())?;
    info!("Token deployed to: {}", report.address);
    info!("Total supply: {} {}", report.total_supply, report.symbol);
    info!(
        "Deployer balance: {} {}",
        report.deployer_balance, report.symbol
    );

    Ok(DeploymentSummary {
        deployer: deployer.account(),
        counter: None,
        token: report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_common::config::initial_supply;

    fn deployer() -> Deployer {
        Deployer::new(AccountId::new([7u8; 32]))
    }

    #[test]
    fn test_addresses_are_deterministic() {
        let account = AccountId::new([7u8; 32]);
        assert_eq!(contract_address(&account, 0), contract_address(&account, 0));
        assert_ne!(contract_address(&account, 0), contract_address(&account, 1));
        assert_ne!(
            contract_address(&account, 0),
            contract_address(&AccountId::new([8u8; 32]), 0)
        );
    }

    #[test]
    fn test_each_deployment_gets_next_nonce() {
        let mut deployer = deployer();
        let counter = deployer.deploy_counter();
        let token = deployer.deploy_token(U256::one(), TokenMetadata::default());

        assert_eq!(counter.address, contract_address(&deployer.account(), 0));
        assert_eq!(token.address, contract_address(&deployer.account(), 1));
    }

    #[test]
    fn test_deploy_all_summary() {
        let mut deployer = deployer();
        let summary =
            deploy_all(&mut deployer, initial_supply(), TokenMetadata::default()).unwrap();

        let counter = summary.counter.as_ref().unwrap();
        assert_eq!(counter.number, U256::zero());
        assert_eq!(summary.token.name, "MyToken");
        assert_eq!(summary.token.symbol, "MTK");
        assert_eq!(summary.token.total_supply, "1000000.0");
        assert_eq!(summary.token.deployer_balance, "1000000.0");

        let text = summary.to_string();
        assert!(text.contains("=== Deployment Summary ==="));
        assert!(text.contains(&format!("Counter: {}", counter.address)));
        assert!(text.contains("Total supply: 1000000.0 MTK"));
    }

    #[test]
    fn test_deploy_token_only() {
        let mut deployer = deployer();
        let summary =
            deploy_token(&mut deployer, initial_supply(), TokenMetadata::default()).unwrap();
        assert!(summary.counter.is_none());
        assert_eq!(summary.token.address, contract_address(&deployer.account(), 0));

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("counter").is_none());
        assert_eq!(json["token"]["deployer_balance"], "1000000.0");
    }
}
