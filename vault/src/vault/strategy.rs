use soroban_sdk::token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::dependencies::StrategyClient;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::types::StrategyBinding;

/// Forward `amount` of idle assets to the bound strategy, if any
pub fn deploy(e: &Env, token: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    if let Some(mut binding) = storage::get_strategy(e) {
        binding.principal += amount;
        storage::set_strategy(e, &binding);

        TokenClient::new(e, token).transfer(&e.current_contract_address(), &binding.adapter, &amount);
        StrategyClient::new(e, &binding.adapter).deposit(&amount);
    }
}

/// Make sure the vault holds at least `amount` idle assets, pulling the
/// shortfall back from the strategy.
///
/// ### Panics
/// If the vault and strategy together cannot cover `amount`
pub fn ensure_liquidity(e: &Env, token: &Address, amount: i128) {
    let vault = e.current_contract_address();
    let token_client = TokenClient::new(e, token);
    let idle = token_client.balance(&vault);
    if idle >= amount {
        return;
    }

    let mut binding = match storage::get_strategy(e) {
        Some(binding) => binding,
        None => panic_with_error!(e, VaultError::InsufficientBalance),
    };
    StrategyClient::new(e, &binding.adapter).withdraw(&(amount - idle));

    // only trust what actually arrived
    let available = token_client.balance(&vault);
    let received = available - idle;
    binding.principal -= received.max(0).min(binding.principal);
    storage::set_strategy(e, &binding);

    if available < amount {
        panic_with_error!(e, VaultError::InsufficientBalance);
    }
}

/// Assets the bound strategy reports holding, 0 without a strategy
pub fn reported_assets(e: &Env) -> i128 {
    match storage::get_strategy(e) {
        Some(binding) => StrategyClient::new(e, &binding.adapter).total_assets(),
        None => 0,
    }
}

/// Gain the strategy holds over its principal
pub fn harvestable_yield(e: &Env) -> i128 {
    match storage::get_strategy(e) {
        Some(binding) => {
            let held = StrategyClient::new(e, &binding.adapter).total_assets();
            (held - binding.principal).max(0)
        }
        None => 0,
    }
}

/// Unbind the current strategy, recalling everything it holds, then bind
/// `new_strategy` and deploy the vault's idle balance into it.
///
/// ### Panics
/// If the current strategy returns less than it reports holding
pub fn execute_set_strategy(e: &Env, new_strategy: &Option<Address>) {
    let vault = e.current_contract_address();
    let token = storage::get_token(e);
    let token_client = TokenClient::new(e, &token);
    let old = storage::get_strategy(e);

    if let (Some(current), Some(next)) = (&old, new_strategy) {
        if current.adapter == *next {
            panic_with_error!(e, VaultError::InvalidConfiguration);
        }
    }

    storage::del_strategy(e);
    let mut withdrawn = 0;
    if let Some(current) = &old {
        let client = StrategyClient::new(e, &current.adapter);
        let held = client.total_assets();
        if held > 0 {
            let before = token_client.balance(&vault);
            client.withdraw(&held);
            withdrawn = token_client.balance(&vault) - before;
            // nothing may be left behind in an unbound adapter
            if withdrawn < held {
                panic_with_error!(e, VaultError::InsufficientBalance);
            }
        }
    }

    let mut redeployed = 0;
    if let Some(adapter) = new_strategy {
        storage::set_strategy(
            e,
            &StrategyBinding {
                adapter: adapter.clone(),
                principal: 0,
            },
        );
        redeployed = token_client.balance(&vault);
        deploy(e, &token, redeployed);
    }

    VaultEvents::set_strategy(
        e,
        old.map(|binding| binding.adapter),
        new_strategy.clone(),
        withdrawn,
        redeployed,
    );
}
