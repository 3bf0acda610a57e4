#![cfg(test)]

use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};
use strategy_vault::{StrategyVaultClient, StrategyVaultContract};

struct Setup<'a> {
    env: Env,
    vault: Address,
    token: TokenClient<'a>,
    token_admin: StellarAssetClient<'a>,
    strategy: StrategyVaultClient<'a>,
}

fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let vault = Address::generate(&env);
    let token_id = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let strategy_id = env.register(
        StrategyVaultContract {},
        (vault.clone(), token_id.clone(), admin.clone()),
    );

    Setup {
        token: TokenClient::new(&env, &token_id),
        token_admin: StellarAssetClient::new(&env, &token_id),
        strategy: StrategyVaultClient::new(&env, &strategy_id),
        vault,
        env,
    }
}

fn fund(s: &Setup, amount: i128) {
    s.token_admin.mint(&s.strategy.address, &amount);
    s.strategy.deposit(&amount);
}

#[test]
fn test_deposit_tracks_principal() {
    let s = setup();
    fund(&s, 1000);
    assert_eq!(s.strategy.principal(), 1000);
    assert_eq!(s.strategy.total_assets(), 1000);
    assert_eq!(s.strategy.vault(), s.vault);
}

#[test]
fn test_harvest_sends_only_gain() {
    let s = setup();
    fund(&s, 1000);
    s.token_admin.mint(&s.strategy.address, &100);

    assert_eq!(s.strategy.harvest(), 100);
    assert_eq!(s.token.balance(&s.vault), 100);
    assert_eq!(s.strategy.total_assets(), 1000);
    assert_eq!(s.strategy.harvest(), 0);
}

#[test]
fn test_withdraw_capped_at_balance() {
    let s = setup();
    fund(&s, 1000);
    let rescuer = Address::generate(&s.env);
    s.strategy.rescue(&rescuer, &400);

    assert_eq!(s.strategy.withdraw(&1000), 600);
    assert_eq!(s.token.balance(&s.vault), 600);
    assert_eq!(s.strategy.principal(), 400);
    assert_eq!(s.strategy.total_assets(), 0);
}

#[test]
fn test_rescue_leaves_principal() {
    let s = setup();
    fund(&s, 1000);
    let rescuer = Address::generate(&s.env);
    s.strategy.rescue(&rescuer, &250);

    assert_eq!(s.strategy.principal(), 1000);
    assert_eq!(s.strategy.total_assets(), 750);
    assert_eq!(s.strategy.harvest(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #4102)")]
fn test_rescue_more_than_held() {
    let s = setup();
    fund(&s, 100);
    s.strategy.rescue(&Address::generate(&s.env), &101);
}

#[test]
#[should_panic(expected = "Error(Contract, #4101)")]
fn test_zero_deposit() {
    let s = setup();
    s.strategy.deposit(&0);
}

#[test]
#[should_panic]
fn test_deposit_requires_vault_auth() {
    let s = setup();
    s.env.set_auths(&[]);
    s.strategy.deposit(&100);
}
