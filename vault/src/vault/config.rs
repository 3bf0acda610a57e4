use soroban_sdk::{panic_with_error, Address, Env};

use crate::constants::{MAX_BPS, MAX_FEE_CEILING_BPS, SCALAR_7};
use crate::errors::VaultError;
use crate::storage;
use crate::types::{BootstrapPolicy, FeeConfig, SolvencyConfig, VaultConfig, VaultMode};

pub fn execute_initialize(e: &Env, admin: &Address, token: &Address, config: &VaultConfig) {
    require_valid_config(e, config);

    storage::set_admin(e, admin);
    storage::set_token(e, token);
    storage::set_total_assets(e, &0);
    storage::set_total_shares(e, &0);
    storage::set_virtual_shares(e, &config.virtual_shares);
    storage::set_bootstrap(e, &config.bootstrap);
    storage::set_mode(e, &VaultMode::Normal);
    storage::set_last_rate(e, &SCALAR_7);
    storage::set_locked(e, false);

    storage::set_fee_config(
        e,
        &FeeConfig {
            fee_rate_bps: config.fee_rate_bps,
            max_fee_bps: config.max_fee_bps,
            recipient: config.fee_recipient.clone(),
            cooldown: config.harvest_cooldown,
            // the first harvest waits out a full cooldown from deployment
            last_harvest: e.ledger().timestamp(),
            total_yield: 0,
            total_fees: 0,
        },
    );
    storage::set_solvency_config(
        e,
        &SolvencyConfig {
            tolerance_bps: config.solvency_tolerance_bps,
            max_loss_bps: config.max_loss_bps,
        },
    );
}

fn require_valid_config(e: &Env, config: &VaultConfig) {
    if config.max_fee_bps > MAX_FEE_CEILING_BPS
        || config.fee_rate_bps > config.max_fee_bps
        || config.virtual_shares < 0
        || config.solvency_tolerance_bps == 0
        || config.solvency_tolerance_bps > MAX_BPS
        || config.max_loss_bps == 0
        || config.max_loss_bps > MAX_BPS
    {
        panic_with_error!(e, VaultError::InvalidConfiguration);
    }
    match config.bootstrap {
        BootstrapPolicy::Disabled => {}
        BootstrapPolicy::MinimumDeposit(amount) | BootstrapPolicy::DeadShares(amount) => {
            if amount <= 0 {
                panic_with_error!(e, VaultError::InvalidConfiguration);
            }
        }
    }
}
