use soroban_sdk::token::TokenClient;
use soroban_sdk::{contract, contractimpl, Address, Env, Error, Symbol};
use test_suites::setup::{create_fixture_with_data, FIRST_DEPOSIT};
use yield_vault::VaultError;

/// Adapter that only ever sends back half of what it is asked for
#[contract]
pub struct HalfPayStrategy;

#[contractimpl]
impl HalfPayStrategy {
    pub fn __constructor(e: Env, vault: Address, token: Address) {
        e.storage().instance().set(&Symbol::new(&e, "Vault"), &vault);
        e.storage().instance().set(&Symbol::new(&e, "Token"), &token);
    }

    pub fn deposit(_e: Env, _amount: i128) {}

    pub fn withdraw(e: Env, amount: i128) -> i128 {
        let vault: Address = e.storage().instance().get(&Symbol::new(&e, "Vault")).unwrap();
        let paid = amount / 2;
        token(&e).transfer(&e.current_contract_address(), &vault, &paid);
        paid
    }

    pub fn harvest(_e: Env) -> i128 {
        0
    }

    pub fn total_assets(e: Env) -> i128 {
        token(&e).balance(&e.current_contract_address())
    }
}

fn token(e: &Env) -> TokenClient<'_> {
    let token: Address = e.storage().instance().get(&Symbol::new(e, "Token")).unwrap();
    TokenClient::new(e, &token)
}

#[test]
fn test_deposit_deploys_to_strategy() {
    let fixture = create_fixture_with_data();
    fixture.vault.deposit(&500, &fixture.users[1]);

    assert_eq!(fixture.token.balance(&fixture.vault.address), 0);
    assert_eq!(fixture.strategy.total_assets(), 1500);
    assert_eq!(fixture.strategy.principal(), 1500);
    assert_eq!(fixture.vault.strategy().unwrap().principal, 1500);
}

#[test]
fn test_withdraw_pulls_only_the_shortfall() {
    let fixture = create_fixture_with_data();
    let user = &fixture.users[0];
    // idle tokens the ledger does not count
    fixture.token.mint(&fixture.vault.address, &100);

    fixture.vault.withdraw(&300, user);

    assert_eq!(fixture.token.balance(&fixture.vault.address), 0);
    assert_eq!(fixture.strategy.total_assets(), 800);
    assert_eq!(fixture.vault.strategy().unwrap().principal, 800);
    assert_eq!(fixture.vault.total_assets(), 700);
}

#[test]
#[should_panic(expected = "Error(Contract, #4045)")]
fn test_withdraw_fails_when_strategy_cannot_cover() {
    let fixture = create_fixture_with_data();
    fixture.inflict_loss(500);
    fixture.vault.withdraw(&FIRST_DEPOSIT, &fixture.users[0]);
}

#[test]
fn test_migrate_strategy() {
    let fixture = create_fixture_with_data();
    fixture.accrue_yield(50);
    let next = fixture.create_strategy();

    fixture.vault.set_strategy(&Some(next.address.clone()));

    assert_eq!(fixture.strategy.total_assets(), 0);
    assert_eq!(next.total_assets(), 1050);
    assert_eq!(next.principal(), 1050);

    let binding = fixture.vault.strategy().unwrap();
    assert_eq!(binding.adapter, next.address);
    assert_eq!(binding.principal, 1050);

    // unharvested yield moves over as backing, not as share value
    assert_eq!(fixture.vault.total_assets(), FIRST_DEPOSIT);
    assert_eq!(fixture.vault.total_assets_reported(), 1050);
    assert_eq!(fixture.vault.harvestable_yield(), 0);
}

#[test]
fn test_migrate_fails_when_old_strategy_pays_short() {
    let fixture = create_fixture_with_data();
    let half_pay = fixture.env.register(
        HalfPayStrategy,
        (fixture.vault.address.clone(), fixture.token.address.clone()),
    );
    fixture.vault.set_strategy(&Some(half_pay.clone()));
    assert_eq!(fixture.token.balance(&half_pay), FIRST_DEPOSIT);

    let result = fixture
        .vault
        .try_set_strategy(&Some(fixture.strategy.address.clone()));
    assert_eq!(
        result.err(),
        Some(Ok(Error::from_contract_error(
            VaultError::InsufficientBalance as u32
        )))
    );

    // the binding and its funds stay where they were
    let binding = fixture.vault.strategy().unwrap();
    assert_eq!(binding.adapter, half_pay);
    assert_eq!(binding.principal, FIRST_DEPOSIT);
    assert_eq!(fixture.token.balance(&half_pay), FIRST_DEPOSIT);
    assert_eq!(fixture.token.balance(&fixture.vault.address), 0);
}

#[test]
fn test_unbind_strategy_keeps_assets_idle() {
    let fixture = create_fixture_with_data();
    let user = &fixture.users[0];

    fixture.vault.set_strategy(&None);
    assert_eq!(fixture.vault.strategy(), None);
    assert_eq!(fixture.token.balance(&fixture.vault.address), FIRST_DEPOSIT);

    fixture.vault.deposit(&200, &fixture.users[1]);
    assert_eq!(fixture.token.balance(&fixture.vault.address), 1200);

    fixture.vault.withdraw(&FIRST_DEPOSIT, user);
    assert_eq!(fixture.token.balance(user), 1_000_000);
}

#[test]
fn test_rebind_deploys_idle_balance() {
    let fixture = create_fixture_with_data();
    fixture.vault.set_strategy(&None);

    fixture.vault.set_strategy(&Some(fixture.strategy.address.clone()));
    assert_eq!(fixture.token.balance(&fixture.vault.address), 0);
    assert_eq!(fixture.vault.strategy().unwrap().principal, FIRST_DEPOSIT);
}

#[test]
#[should_panic(expected = "Error(Contract, #4081)")]
fn test_rebind_same_strategy() {
    let fixture = create_fixture_with_data();
    fixture.vault.set_strategy(&Some(fixture.strategy.address.clone()));
}

#[test]
#[should_panic]
fn test_strategy_rejects_foreign_caller() {
    let fixture = create_fixture_with_data();
    fixture.env.set_auths(&[]);
    fixture.strategy.withdraw(&100);
}
