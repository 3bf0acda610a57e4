#![cfg(feature = "testutils")]

use crate::{BootstrapPolicy, VaultClient, VaultConfig, VaultContract, DEFAULT_VIRTUAL_SHARES};
use soroban_sdk::{Address, Env};

/// 10% performance fee, one hour cooldown, 99% solvency tolerance and a 5%
/// loss trigger with the default virtual share offset
pub fn default_config(fee_recipient: &Address) -> VaultConfig {
    VaultConfig {
        virtual_shares: DEFAULT_VIRTUAL_SHARES,
        bootstrap: BootstrapPolicy::Disabled,
        fee_rate_bps: 1_000,
        max_fee_bps: 2_000,
        fee_recipient: fee_recipient.clone(),
        harvest_cooldown: 3600,
        solvency_tolerance_bps: 9_900,
        max_loss_bps: 500,
    }
}

pub fn create_vault<'a>(
    e: &Env,
    admin: &Address,
    token: &Address,
    config: VaultConfig,
) -> VaultClient<'a> {
    let vault_id = e.register(VaultContract {}, (admin.clone(), token.clone(), config));
    VaultClient::new(e, &vault_id)
}
