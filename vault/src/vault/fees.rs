use soroban_sdk::token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::constants::MAX_BPS;
use crate::dependencies::StrategyClient;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::math::{mul_div, Rounding};
use crate::storage;
use crate::types::VaultMode;
use crate::vault::state::{unwrap_or_panic, VaultState};
use crate::vault::strategy;

/// Realize strategy yield, pay the performance fee and compound the rest.
///
/// Only the reinvested part is added to the ledger, so the fee never
/// dilutes existing holders. Returns the gross yield.
pub fn execute_harvest(e: &Env) -> i128 {
    let mut state = VaultState::load(e);
    state.require_mode_below(e, VaultMode::Emergency);

    let mut fees = storage::get_fee_config(e);
    let now = e.ledger().timestamp();
    if now < fees.last_harvest.saturating_add(fees.cooldown) {
        panic_with_error!(e, VaultError::CooldownNotElapsed);
    }
    let binding = match storage::get_strategy(e) {
        Some(binding) => binding,
        None => panic_with_error!(e, VaultError::NoStrategy),
    };

    let vault = e.current_contract_address();
    let token_client = TokenClient::new(e, &state.token);
    let before = token_client.balance(&vault);
    let reported = StrategyClient::new(e, &binding.adapter).harvest();
    let received = token_client.balance(&vault) - before;
    let yield_amount = reported.min(received);
    if yield_amount <= 0 {
        panic_with_error!(e, VaultError::NothingToHarvest);
    }

    let fee = unwrap_or_panic(
        e,
        mul_div(yield_amount, fees.fee_rate_bps as i128, MAX_BPS as i128, Rounding::Floor),
    );
    let reinvested = yield_amount - fee;

    state.total_assets += reinvested;
    state.store(e);
    state.checkpoint(e);

    fees.last_harvest = now;
    fees.total_yield += yield_amount;
    fees.total_fees += fee;
    storage::set_fee_config(e, &fees);

    if fee > 0 {
        token_client.transfer(&vault, &fees.recipient, &fee);
    }
    strategy::deploy(e, &state.token, reinvested);

    VaultEvents::harvest(e, yield_amount, fee, now);
    yield_amount
}

pub fn execute_set_performance_fee(e: &Env, fee_rate_bps: u32) {
    let mut fees = storage::get_fee_config(e);
    if fee_rate_bps > fees.max_fee_bps {
        panic_with_error!(e, VaultError::InvalidConfiguration);
    }
    fees.fee_rate_bps = fee_rate_bps;
    storage::set_fee_config(e, &fees);
    VaultEvents::set_fee_rate(e, fee_rate_bps);
}

pub fn execute_set_fee_recipient(e: &Env, recipient: &Address) {
    let mut fees = storage::get_fee_config(e);
    fees.recipient = recipient.clone();
    storage::set_fee_config(e, &fees);
    VaultEvents::set_fee_recipient(e, recipient.clone());
}

pub fn execute_set_harvest_cooldown(e: &Env, cooldown: u64) {
    let mut fees = storage::get_fee_config(e);
    fees.cooldown = cooldown;
    storage::set_fee_config(e, &fees);
    VaultEvents::set_cooldown(e, cooldown);
}
