use sep_40_oracle::{Asset, PriceData, PriceFeedClient};
use soroban_sdk::{panic_with_error, Address, Env};

use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::math::{bps_of, mul_div, Rounding};
use crate::storage;
use crate::types::{OracleConfig, VaultMode};
use crate::vault::solvency;
use crate::vault::state::{unwrap_or_panic, VaultState};

fn load_config(e: &Env) -> OracleConfig {
    match storage::get_oracle_config(e) {
        Some(config) => config,
        None => panic_with_error!(e, VaultError::OracleNotConfigured),
    }
}

fn require_valid_params(
    e: &Env,
    staleness_threshold: u64,
    max_deviation_bps: u32,
    min_price: i128,
    max_price: i128,
) {
    if staleness_threshold == 0 || max_deviation_bps == 0 || min_price < 0 || min_price >= max_price {
        panic_with_error!(e, VaultError::InvalidConfiguration);
    }
}

/// Fetch the latest round and run every check except the deviation check
fn validate(e: &Env, config: &OracleConfig) -> Result<(PriceData, u32), VaultError> {
    if config.breaker_tripped {
        return Err(VaultError::CircuitBreakerActive);
    }
    let client = PriceFeedClient::new(e, &config.oracle);
    let data = client
        .lastprice(&config.asset)
        .ok_or(VaultError::IncompleteRound)?;

    let now = e.ledger().timestamp();
    if data.price <= 0 {
        return Err(VaultError::InvalidPrice);
    }
    if data.timestamp == 0 || data.timestamp > now {
        return Err(VaultError::IncompleteRound);
    }
    if now - data.timestamp > config.staleness_threshold {
        return Err(VaultError::StalePrice);
    }
    if data.price < config.min_price || data.price > config.max_price {
        return Err(VaultError::PriceOutOfBounds);
    }
    Ok((data, client.decimals()))
}

/// Move from the last accepted price, 0 before any price was accepted
fn deviation_bps(config: &OracleConfig, price: i128) -> Result<i128, VaultError> {
    if config.last_price <= 0 {
        return Ok(0);
    }
    bps_of((price - config.last_price).abs(), config.last_price)
}

/// Fetch and validate a price, recording it as the new reference.
///
/// A move beyond `max_deviation_bps` trips the breaker and is written to
/// storage before `ExcessiveDeviation` is returned. The trip only survives if
/// the caller completes without aborting.
pub fn fetch(e: &Env, config: &mut OracleConfig) -> Result<(i128, u32), VaultError> {
    let (data, decimals) = validate(e, config)?;
    if deviation_bps(config, data.price)? > config.max_deviation_bps as i128 {
        config.breaker_tripped = true;
        storage::set_oracle_config(e, config);
        VaultEvents::breaker_tripped(e, config.last_price, data.price);
        return Err(VaultError::ExcessiveDeviation);
    }

    config.last_price = data.price;
    config.last_updated = data.timestamp;
    storage::set_oracle_config(e, config);
    VaultEvents::price_updated(e, data.price, data.timestamp);
    Ok((data.price, decimals))
}

/// Same checks as `fetch` without touching storage
pub fn read(e: &Env, config: &OracleConfig) -> Result<(i128, u32), VaultError> {
    let (data, decimals) = validate(e, config)?;
    if deviation_bps(config, data.price)? > config.max_deviation_bps as i128 {
        return Err(VaultError::ExcessiveDeviation);
    }
    Ok((data.price, decimals))
}

/// Whether the breaker is tripped or trips on a fresh read. Read failures
/// other than a deviation do not count as a trip.
pub fn breaker_active(e: &Env) -> bool {
    match storage::get_oracle_config(e) {
        Some(mut config) => {
            config.breaker_tripped
                || matches!(fetch(e, &mut config), Err(VaultError::ExcessiveDeviation))
        }
        None => false,
    }
}

pub fn execute_get_price(e: &Env) -> (i128, u32) {
    let mut config = load_config(e);
    unwrap_or_panic(e, fetch(e, &mut config))
}

pub fn execute_get_price_read_only(e: &Env) -> (i128, u32) {
    let config = load_config(e);
    unwrap_or_panic(e, read(e, &config))
}

/// Value of the vault's assets in the oracle's quote asset
pub fn total_value(e: &Env) -> i128 {
    let config = load_config(e);
    let (price, decimals) = unwrap_or_panic(e, read(e, &config));
    let scalar = match 10i128.checked_pow(decimals) {
        Some(scalar) => scalar,
        None => panic_with_error!(e, VaultError::MathOverflow),
    };
    unwrap_or_panic(
        e,
        mul_div(storage::get_total_assets(e), price, scalar, Rounding::Floor),
    )
}

pub fn execute_set_oracle(
    e: &Env,
    oracle: &Address,
    asset: &Asset,
    staleness_threshold: u64,
    max_deviation_bps: u32,
    min_price: i128,
    max_price: i128,
) {
    require_valid_params(e, staleness_threshold, max_deviation_bps, min_price, max_price);
    storage::set_oracle_config(
        e,
        &OracleConfig {
            oracle: oracle.clone(),
            asset: asset.clone(),
            staleness_threshold,
            max_deviation_bps,
            min_price,
            max_price,
            last_price: 0,
            last_updated: 0,
            breaker_tripped: false,
        },
    );
    VaultEvents::set_oracle(
        e,
        oracle.clone(),
        staleness_threshold,
        max_deviation_bps,
        min_price,
        max_price,
    );
}

pub fn execute_update_oracle_config(
    e: &Env,
    staleness_threshold: u64,
    max_deviation_bps: u32,
    min_price: i128,
    max_price: i128,
) {
    let mut config = load_config(e);
    require_valid_params(e, staleness_threshold, max_deviation_bps, min_price, max_price);
    config.staleness_threshold = staleness_threshold;
    config.max_deviation_bps = max_deviation_bps;
    config.min_price = min_price;
    config.max_price = max_price;
    storage::set_oracle_config(e, &config);
    VaultEvents::set_oracle(
        e,
        config.oracle.clone(),
        staleness_threshold,
        max_deviation_bps,
        min_price,
        max_price,
    );
}

pub fn execute_trigger_circuit_breaker(e: &Env) {
    let mut config = load_config(e);
    if !config.breaker_tripped {
        config.breaker_tripped = true;
        storage::set_oracle_config(e, &config);
        VaultEvents::breaker_tripped(e, config.last_price, 0);
    }

    let mut state = VaultState::load(e);
    if solvency::escalate(e, &mut state, VaultMode::Emergency) {
        state.store(e);
    }
}

/// Clear the breaker and take the feed's current price as the new reference
pub fn execute_reset_circuit_breaker(e: &Env) {
    let mut config = load_config(e);
    let data = match PriceFeedClient::new(e, &config.oracle).lastprice(&config.asset) {
        Some(data) => data,
        None => panic_with_error!(e, VaultError::IncompleteRound),
    };
    if data.price <= 0 {
        panic_with_error!(e, VaultError::InvalidPrice);
    }

    config.breaker_tripped = false;
    config.last_price = data.price;
    config.last_updated = data.timestamp;
    storage::set_oracle_config(e, &config);
    VaultEvents::breaker_reset(e, data.price);
}
