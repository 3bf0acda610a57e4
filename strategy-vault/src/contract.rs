use soroban_sdk::token::TokenClient;
use soroban_sdk::{contract, contractclient, contractimpl, panic_with_error, Address, Env};

use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::storage;

#[contract]
pub struct StrategyVaultContract;

/// A passive strategy that holds vault assets as a token balance. Anything
/// it holds above the principal the vault deployed counts as yield.
#[contractclient(name = "StrategyVaultClient")]
pub trait StrategyVault {
    /// (Vault only) Record `amount` of principal the vault already transferred in
    ///
    /// ### Panics
    /// - `ZeroAmount` if amount is not positive
    fn deposit(e: Env, amount: i128);

    /// (Vault only) Return up to `amount` to the vault
    ///
    /// ### Returns
    /// The amount actually returned, capped at the strategy's balance
    fn withdraw(e: Env, amount: i128) -> i128;

    /// (Vault only) Send everything above principal to the vault
    ///
    /// ### Returns
    /// The yield sent, 0 if the balance does not exceed principal
    fn harvest(e: Env) -> i128;

    /// The strategy's token balance, including unharvested yield
    fn total_assets(e: Env) -> i128;

    fn principal(e: Env) -> i128;

    fn vault(e: Env) -> Address;

    /// (Admin only) Move funds out of the strategy without touching principal
    ///
    /// ### Panics
    /// - `InsufficientFunds` if the strategy holds less than `amount`
    fn rescue(e: Env, to: Address, amount: i128);
}

#[contractimpl]
impl StrategyVaultContract {
    pub fn __constructor(e: Env, vault: Address, token: Address, admin: Address) {
        storage::set_vault(&e, &vault);
        storage::set_token(&e, &token);
        storage::set_admin(&e, &admin);
        storage::set_principal(&e, &0);
        storage::extend_instance(&e);
    }
}

fn require_positive(e: &Env, amount: i128) {
    if amount <= 0 {
        panic_with_error!(e, StrategyError::ZeroAmount);
    }
}

#[contractimpl]
impl StrategyVault for StrategyVaultContract {
    fn deposit(e: Env, amount: i128) {
        storage::extend_instance(&e);
        storage::get_vault(&e).require_auth();
        require_positive(&e, amount);

        let principal = storage::get_principal(&e) + amount;
        storage::set_principal(&e, &principal);
        StrategyEvents::deposit(&e, amount, principal);
    }

    fn withdraw(e: Env, amount: i128) -> i128 {
        storage::extend_instance(&e);
        let vault = storage::get_vault(&e);
        vault.require_auth();
        require_positive(&e, amount);

        let token_client = TokenClient::new(&e, &storage::get_token(&e));
        let balance = token_client.balance(&e.current_contract_address());
        let sent = amount.min(balance);
        // funds lost below principal are not principal anymore
        let principal = storage::get_principal(&e);
        let principal = principal - sent.min(principal);
        storage::set_principal(&e, &principal);

        if sent > 0 {
            token_client.transfer(&e.current_contract_address(), &vault, &sent);
        }
        StrategyEvents::withdraw(&e, sent, principal);
        sent
    }

    fn harvest(e: Env) -> i128 {
        storage::extend_instance(&e);
        let vault = storage::get_vault(&e);
        vault.require_auth();

        let token_client = TokenClient::new(&e, &storage::get_token(&e));
        let balance = token_client.balance(&e.current_contract_address());
        let yield_amount = balance - storage::get_principal(&e);
        if yield_amount <= 0 {
            return 0;
        }

        token_client.transfer(&e.current_contract_address(), &vault, &yield_amount);
        StrategyEvents::harvest(&e, yield_amount);
        yield_amount
    }

    fn total_assets(e: Env) -> i128 {
        storage::extend_instance(&e);
        TokenClient::new(&e, &storage::get_token(&e)).balance(&e.current_contract_address())
    }

    fn principal(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_principal(&e)
    }

    fn vault(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_vault(&e)
    }

    fn rescue(e: Env, to: Address, amount: i128) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();
        require_positive(&e, amount);

        let token_client = TokenClient::new(&e, &storage::get_token(&e));
        if token_client.balance(&e.current_contract_address()) < amount {
            panic_with_error!(e, StrategyError::InsufficientFunds);
        }
        token_client.transfer(&e.current_contract_address(), &to, &amount);
        StrategyEvents::rescue(&e, to, amount);
    }
}
