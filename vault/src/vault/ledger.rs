use soroban_sdk::token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::math::{mul_div, pro_rata, Rounding};
use crate::storage;
use crate::types::{BootstrapPolicy, VaultMode};
use crate::vault::solvency;
use crate::vault::state::{require_positive, unwrap_or_panic, VaultState};
use crate::vault::strategy;

/// Shares a deposit mints, split between the receiver and the dead share sentinel
struct DepositQuote {
    shares: i128,
    dead_shares: i128,
}

fn quote_deposit(e: &Env, state: &VaultState, assets: i128) -> DepositQuote {
    require_positive(e, assets);
    let minted = unwrap_or_panic(e, state.conversion().shares_for_deposit(assets));
    if minted == 0 {
        panic_with_error!(e, VaultError::ZeroShares);
    }

    let mut dead_shares = 0;
    if state.total_shares == 0 {
        match storage::get_bootstrap(e) {
            BootstrapPolicy::Disabled => {}
            BootstrapPolicy::MinimumDeposit(minimum) => {
                if assets < minimum {
                    panic_with_error!(e, VaultError::DepositTooSmall);
                }
            }
            BootstrapPolicy::DeadShares(amount) => {
                if minted <= amount {
                    panic_with_error!(e, VaultError::DepositTooSmall);
                }
                dead_shares = amount;
            }
        }
    }

    DepositQuote {
        shares: minted - dead_shares,
        dead_shares,
    }
}

/// Shares burned to withdraw `assets`. In Emergency the virtual offset is
/// dropped and holders burn their exact fraction of the realized backing.
fn quote_withdraw(e: &Env, state: &VaultState, assets: i128) -> i128 {
    require_positive(e, assets);
    if assets > state.total_assets {
        panic_with_error!(e, VaultError::InsufficientBalance);
    }
    if state.mode == VaultMode::Emergency {
        return unwrap_or_panic(
            e,
            mul_div(assets, state.total_shares, state.total_assets, Rounding::Ceiling),
        );
    }
    unwrap_or_panic(e, state.conversion().shares_for_withdraw(assets))
}

/// Dead shares live on the vault's own address and can never leave it
fn require_not_sentinel(e: &Env, holder: &Address) {
    if *holder == e.current_contract_address() {
        panic_with_error!(e, VaultError::Unauthorized);
    }
}

fn require_balance(e: &Env, holder: &Address, shares: i128) {
    if storage::get_shares(e, holder) < shares {
        panic_with_error!(e, VaultError::InsufficientShares);
    }
}

/// Load the vault state as withdrawals in the current mode would see it.
/// Emergency views are marked down to the realizable backing without writing.
fn load_for_withdraw(e: &Env) -> VaultState {
    let mut state = VaultState::load(e);
    if state.mode == VaultMode::Emergency {
        state.total_assets = solvency::realizable_assets(e, &state);
    }
    state
}

/********** Queries **********/

pub fn preview_deposit(e: &Env, assets: i128) -> i128 {
    let state = VaultState::load(e);
    quote_deposit(e, &state, assets).shares
}

pub fn preview_withdraw(e: &Env, assets: i128) -> i128 {
    let state = load_for_withdraw(e);
    quote_withdraw(e, &state, assets)
}

pub fn preview_emergency_withdraw(e: &Env, shares: i128) -> i128 {
    require_positive(e, shares);
    let state = VaultState::load(e);
    let backing = solvency::realizable_assets(e, &state);
    unwrap_or_panic(e, pro_rata(shares, backing, state.total_shares))
}

pub fn convert_to_shares(e: &Env, assets: i128) -> i128 {
    let state = VaultState::load(e);
    unwrap_or_panic(e, state.conversion().shares_for_deposit(assets))
}

pub fn convert_to_assets(e: &Env, shares: i128) -> i128 {
    let state = VaultState::load(e);
    unwrap_or_panic(e, state.conversion().assets_for_shares(shares))
}

/// Assets `owner` can withdraw right now, 0 while the vault is Frozen
pub fn max_withdraw(e: &Env, owner: &Address) -> i128 {
    if *owner == e.current_contract_address() {
        return 0;
    }
    let state = load_for_withdraw(e);
    if state.mode == VaultMode::Frozen {
        return 0;
    }
    let balance = storage::get_shares(e, owner);
    let assets = if state.mode == VaultMode::Emergency {
        unwrap_or_panic(e, pro_rata(balance, state.total_assets, state.total_shares))
    } else {
        unwrap_or_panic(e, state.conversion().assets_for_shares(balance))
    };
    assets.min(state.total_assets)
}

/********** Actions **********/

pub fn execute_deposit(e: &Env, assets: i128, receiver: &Address, min_shares: i128) -> i128 {
    let mut state = VaultState::load(e);
    state.require_mode_below(e, VaultMode::Paused);
    let quote = quote_deposit(e, &state, assets);
    if quote.shares < min_shares {
        panic_with_error!(e, VaultError::SlippageExceeded);
    }

    state.total_assets += assets;
    state.mint(e, receiver, quote.shares);
    if quote.dead_shares > 0 {
        state.mint(e, &e.current_contract_address(), quote.dead_shares);
        VaultEvents::dead_shares(e, quote.dead_shares);
    }
    state.store(e);
    state.checkpoint(e);

    TokenClient::new(e, &state.token).transfer(receiver, &e.current_contract_address(), &assets);
    strategy::deploy(e, &state.token, assets);

    VaultEvents::deposit(e, receiver.clone(), assets, quote.shares);
    quote.shares
}

pub fn execute_withdraw(e: &Env, assets: i128, owner: &Address, max_shares: i128) -> i128 {
    let mut state = VaultState::load(e);
    state.require_mode_below(e, VaultMode::Frozen);
    require_not_sentinel(e, owner);
    if state.mode == VaultMode::Emergency {
        solvency::realize_loss(e, &mut state);
    }

    let shares = quote_withdraw(e, &state, assets);
    if shares > max_shares {
        panic_with_error!(e, VaultError::SlippageExceeded);
    }
    require_balance(e, owner, shares);

    state.total_assets -= assets;
    state.burn(e, owner, shares);
    state.store(e);
    state.checkpoint(e);

    strategy::ensure_liquidity(e, &state.token, assets);
    TokenClient::new(e, &state.token).transfer(&e.current_contract_address(), owner, &assets);

    VaultEvents::withdraw(e, owner.clone(), assets, shares);
    shares
}

pub fn execute_emergency_withdraw(e: &Env, shares: i128, owner: &Address) -> i128 {
    require_positive(e, shares);
    let mut state = VaultState::load(e);
    if state.mode != VaultMode::Emergency {
        panic_with_error!(e, VaultError::ModeRestricted);
    }
    require_not_sentinel(e, owner);
    require_balance(e, owner, shares);

    solvency::realize_loss(e, &mut state);
    let assets = unwrap_or_panic(e, pro_rata(shares, state.total_assets, state.total_shares));
    if assets == 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }

    state.total_assets -= assets;
    state.burn(e, owner, shares);
    state.store(e);
    state.checkpoint(e);

    strategy::ensure_liquidity(e, &state.token, assets);
    TokenClient::new(e, &state.token).transfer(&e.current_contract_address(), owner, &assets);

    VaultEvents::emergency_withdraw(e, owner.clone(), shares, assets);
    assets
}

pub fn execute_transfer(e: &Env, from: &Address, to: &Address, shares: i128) {
    require_positive(e, shares);
    let state = VaultState::load(e);
    state.require_mode_below(e, VaultMode::Frozen);
    require_not_sentinel(e, from);
    require_not_sentinel(e, to);
    require_balance(e, from, shares);

    if from != to {
        storage::set_shares(e, from, storage::get_shares(e, from) - shares);
        storage::set_shares(e, to, storage::get_shares(e, to) + shares);
    }

    VaultEvents::transfer(e, from.clone(), to.clone(), shares);
}
