// Counter and Token deployment scenarios
//
// Mirrors how a deployment harness drives the two state machines:
// - Counter: start value, increment, set, decrement
// - Token: metadata, initial mint to the owner, transfer between accounts

use ledger_common::{
    amount::{format_units, parse_units},
    config::{initial_supply, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL},
    AccountId, Counter, LedgerError, TokenLedger, U256,
};

fn owner() -> AccountId {
    AccountId::new([0x11; 32])
}

fn user1() -> AccountId {
    AccountId::new([0x22; 32])
}

/// Token deployed the way the deployment script does it
fn deploy_token() -> TokenLedger {
    TokenLedger::create(owner(), initial_supply(), TOKEN_NAME, TOKEN_SYMBOL)
}

// ============================================================================
// Counter
// ============================================================================

#[test]
fn test_counter_starts_with_zero() {
    let counter = Counter::new();
    assert_eq!(counter.number(), U256::zero());
}

#[test]
fn test_counter_increment() {
    let mut counter = Counter::new();
    counter.increment().unwrap();
    assert_eq!(counter.number(), U256::one());
}

#[test]
fn test_counter_set_number() {
    let mut counter = Counter::new();
    counter.set_number(U256::from(42u64));
    assert_eq!(counter.number(), U256::from(42u64));
}

#[test]
fn test_counter_decrement() {
    let mut counter = Counter::new();
    counter.set_number(U256::from(10u64));
    counter.decrement().unwrap();
    assert_eq!(counter.number(), U256::from(9u64));
}

#[test]
fn test_counter_fresh_decrement_underflows() {
    let mut counter = Counter::new();
    assert_eq!(counter.decrement(), Err(LedgerError::Underflow));
    assert_eq!(counter.number(), U256::zero());
}

// ============================================================================
// Token
// ============================================================================

#[test]
fn test_token_deployment_with_raw_supply() {
    let token = TokenLedger::create(owner(), U256::from(1_000_000u64), "MyToken", "MTK");
    assert_eq!(token.name(), "MyToken");
    assert_eq!(token.symbol(), "MTK");
    assert_eq!(token.total_supply(), U256::from(1_000_000u64));
    assert_eq!(token.balance_of(&owner()), U256::from(1_000_000u64));
}

#[test]
fn test_token_transfer_with_raw_supply() {
    let mut token = TokenLedger::create(owner(), U256::from(1_000_000u64), "MyToken", "MTK");
    token.transfer(owner(), user1(), U256::from(50u64)).unwrap();

    assert_eq!(token.balance_of(&user1()), U256::from(50u64));
    assert_eq!(token.balance_of(&owner()), U256::from(999_950u64));
    assert_eq!(token.total_supply(), U256::from(1_000_000u64));
}

#[test]
fn test_token_has_correct_name_and_symbol() {
    let token = deploy_token();
    assert_eq!(token.name(), "MyToken");
    assert_eq!(token.symbol(), "MTK");
    assert_eq!(token.decimals(), TOKEN_DECIMALS);
}

#[test]
fn test_token_mints_initial_supply_to_owner() {
    let token = deploy_token();
    assert_eq!(token.total_supply(), token.balance_of(&owner()));
    assert_eq!(
        format_units(token.total_supply(), token.decimals()).unwrap(),
        "1000000.0"
    );
}

#[test]
fn test_token_transfers_between_accounts() {
    let mut token = deploy_token();
    let amount = parse_units("50", token.decimals()).unwrap();

    token.transfer(owner(), user1(), amount).unwrap();

    assert_eq!(token.balance_of(&user1()), amount);
    assert_eq!(
        format_units(token.balance_of(&owner()), token.decimals()).unwrap(),
        "999950.0"
    );
    token.check_conservation().unwrap();
}

#[test]
fn test_token_recipient_cannot_overspend() {
    let mut token = deploy_token();
    let amount = parse_units("50", token.decimals()).unwrap();
    token.transfer(owner(), user1(), amount).unwrap();

    let err = token
        .transfer(user1(), owner(), amount + U256::one())
        .unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
    assert_eq!(token.balance_of(&user1()), amount);
}
