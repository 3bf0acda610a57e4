use soroban_sdk::token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::constants::{MAX_BPS, SCALAR_7};
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::math::{bps_of, mul_div, Rounding};
use crate::storage;
use crate::types::VaultMode;
use crate::vault::oracle;
use crate::vault::state::{unwrap_or_panic, VaultState};
use crate::vault::strategy;

struct SolvencyReport {
    actual: i128,
    required: i128,
    loss_bps: i128,
}

impl SolvencyReport {
    fn assess(e: &Env, state: &VaultState) -> SolvencyReport {
        let actual = actual_assets(e, &state.token);
        if state.total_shares == 0 {
            return SolvencyReport {
                actual,
                required: 0,
                loss_bps: 0,
            };
        }

        let config = storage::get_solvency_config(e);
        let rate = storage::get_last_rate(e);
        let claims = unwrap_or_panic(
            e,
            mul_div(state.total_shares, rate, SCALAR_7, Rounding::Ceiling),
        );
        let required = unwrap_or_panic(
            e,
            mul_div(claims, config.tolerance_bps as i128, MAX_BPS as i128, Rounding::Ceiling),
        );
        let loss_bps = if actual < state.total_assets {
            unwrap_or_panic(e, bps_of(state.total_assets - actual, state.total_assets))
        } else {
            0
        };
        SolvencyReport {
            actual,
            required,
            loss_bps,
        }
    }

    fn is_solvent(&self) -> bool {
        self.actual >= self.required
    }
}

/// Idle balance plus whatever the strategy reports holding
pub fn actual_assets(e: &Env, token: &Address) -> i128 {
    let idle = TokenClient::new(e, token).balance(&e.current_contract_address());
    idle + strategy::reported_assets(e)
}

/// The internal counter capped at the assets that actually back it
pub fn realizable_assets(e: &Env, state: &VaultState) -> i128 {
    state.total_assets.min(actual_assets(e, &state.token))
}

/// Write the internal counter down to the actual backing. Never writes it up.
/// Returns the loss recognized.
pub fn realize_loss(e: &Env, state: &mut VaultState) -> i128 {
    let actual = actual_assets(e, &state.token);
    if actual >= state.total_assets {
        return 0;
    }
    let loss = state.total_assets - actual;
    state.total_assets = actual;
    VaultEvents::loss_realized(e, loss, actual);
    loss
}

/// Raise the mode to `target` if it is more restrictive. The caller stores
/// the state. Returns whether the mode changed.
pub fn escalate(e: &Env, state: &mut VaultState, target: VaultMode) -> bool {
    if target <= state.mode {
        return false;
    }
    VaultEvents::set_mode(e, state.mode, target);
    state.mode = target;
    true
}

/// Permissionless health check. Moves the vault to Emergency on a breaker
/// trip or an outsized loss and to Paused when backing falls below the
/// tolerance. Never relaxes the mode.
pub fn execute_check_solvency(e: &Env) -> VaultMode {
    let mut state = VaultState::load(e);
    if state.mode == VaultMode::Frozen {
        return state.mode;
    }

    let config = storage::get_solvency_config(e);
    let report = SolvencyReport::assess(e, &state);
    let target = if oracle::breaker_active(e) || report.loss_bps > config.max_loss_bps as i128 {
        VaultMode::Emergency
    } else if !report.is_solvent() {
        VaultMode::Paused
    } else {
        VaultMode::Normal
    };

    if escalate(e, &mut state, target) {
        storage::set_mode(e, &state.mode);
    }
    state.mode
}

pub fn execute_pause(e: &Env) {
    let mut state = VaultState::load(e);
    if escalate(e, &mut state, VaultMode::Paused) {
        storage::set_mode(e, &state.mode);
    }
}

pub fn execute_freeze(e: &Env) {
    let mut state = VaultState::load(e);
    if escalate(e, &mut state, VaultMode::Frozen) {
        storage::set_mode(e, &state.mode);
    }
}

/// Return the vault to Normal once the breaker is clear and the backing
/// passes the solvency check again
pub fn execute_recover(e: &Env) {
    let mut state = VaultState::load(e);
    if state.mode == VaultMode::Normal {
        return;
    }
    if let Some(config) = storage::get_oracle_config(e) {
        if config.breaker_tripped {
            panic_with_error!(e, VaultError::CircuitBreakerActive);
        }
    }

    let config = storage::get_solvency_config(e);
    let report = SolvencyReport::assess(e, &state);
    if !report.is_solvent() || report.loss_bps > config.max_loss_bps as i128 {
        panic_with_error!(e, VaultError::Insolvent);
    }

    VaultEvents::set_mode(e, state.mode, VaultMode::Normal);
    state.mode = VaultMode::Normal;
    storage::set_mode(e, &state.mode);
}

/// Recognize any shortfall between the internal counter and the actual
/// backing and re-anchor the solvency rate
pub fn execute_sync(e: &Env) {
    let mut state = VaultState::load(e);
    realize_loss(e, &mut state);
    state.store(e);
    state.checkpoint(e);
    VaultEvents::sync(e, state.total_assets, actual_assets(e, &state.token));
}
