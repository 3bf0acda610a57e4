use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol};

use crate::types::{BootstrapPolicy, FeeConfig, OracleConfig, SolvencyConfig, StrategyBinding, VaultMode};

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

/********** Storage Types **********/

const ADMIN_KEY: &str = "Admin";
const PROPOSED_ADMIN_KEY: &str = "PropAdmin";
const TOKEN_KEY: &str = "Token";
const TOTAL_ASSETS_KEY: &str = "TotAssets";
const TOTAL_SHARES_KEY: &str = "TotShares";
const VIRTUAL_SHARES_KEY: &str = "VirtShares";
const BOOTSTRAP_KEY: &str = "Bootstrap";
const MODE_KEY: &str = "Mode";
const FEES_KEY: &str = "Fees";
const ORACLE_KEY: &str = "Oracle";
const STRATEGY_KEY: &str = "Strategy";
const SOLVENCY_KEY: &str = "Solvency";
const LAST_RATE_KEY: &str = "LastRate";
const LOCKED_KEY: &str = "Locked";

#[derive(Clone)]
#[contracttype]
pub enum VaultDataKey {
    // Share balance of a holder
    Shares(Address),
}

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/********** Admin **********/

/// Fetch the current admin Address
///
/// ### Panics
/// If the admin does not exist
pub fn get_admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, ADMIN_KEY))
        .unwrap_optimized()
}

/// Set a new admin
///
/// ### Arguments
/// * `new_admin` - The Address for the admin
pub fn set_admin(e: &Env, new_admin: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY), new_admin);
}

/// Fetch the proposed admin, if any
pub fn get_proposed_admin(e: &Env) -> Option<Address> {
    e.storage()
        .temporary()
        .get(&Symbol::new(e, PROPOSED_ADMIN_KEY))
}

/// Set a new proposed admin
///
/// ### Arguments
/// * `proposed_admin` - The Address for the proposed admin
pub fn set_proposed_admin(e: &Env, proposed_admin: &Address) {
    e.storage()
        .temporary()
        .set::<Symbol, Address>(&Symbol::new(e, PROPOSED_ADMIN_KEY), proposed_admin);
    e.storage().temporary().extend_ttl(
        &Symbol::new(e, PROPOSED_ADMIN_KEY),
        10 * ONE_DAY_LEDGERS,
        10 * ONE_DAY_LEDGERS,
    );
}

pub fn del_proposed_admin(e: &Env) {
    e.storage()
        .temporary()
        .remove(&Symbol::new(e, PROPOSED_ADMIN_KEY));
}

/********** Token **********/

pub fn get_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, TOKEN_KEY))
        .unwrap_optimized()
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&Symbol::new(e, TOKEN_KEY), token);
}

/********** Ledger Counters **********/

pub fn get_total_assets(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, TOTAL_ASSETS_KEY))
        .unwrap_or(0)
}

pub fn set_total_assets(e: &Env, total_assets: &i128) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, TOTAL_ASSETS_KEY), total_assets);
}

pub fn get_total_shares(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, TOTAL_SHARES_KEY))
        .unwrap_or(0)
}

pub fn set_total_shares(e: &Env, total_shares: &i128) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, TOTAL_SHARES_KEY), total_shares);
}

pub fn get_virtual_shares(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, VIRTUAL_SHARES_KEY))
        .unwrap_or(0)
}

pub fn set_virtual_shares(e: &Env, virtual_shares: &i128) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, VIRTUAL_SHARES_KEY), virtual_shares);
}

pub fn get_bootstrap(e: &Env) -> BootstrapPolicy {
    e.storage()
        .instance()
        .get(&Symbol::new(e, BOOTSTRAP_KEY))
        .unwrap_or(BootstrapPolicy::Disabled)
}

pub fn set_bootstrap(e: &Env, policy: &BootstrapPolicy) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, BOOTSTRAP_KEY), policy);
}

/********** Holder Shares **********/

/// Fetch the share balance of a holder, 0 if they never held shares
///
/// ### Arguments
/// * `holder` - The address of the holder
pub fn get_shares(e: &Env, holder: &Address) -> i128 {
    let key = VaultDataKey::Shares(holder.clone());
    if let Some(balance) = e.storage().persistent().get::<VaultDataKey, i128>(&key) {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
        balance
    } else {
        0
    }
}

/// Set the share balance of a holder. A zero balance removes the entry.
///
/// ### Arguments
/// * `holder` - The address of the holder
/// * `balance` - The new share balance
pub fn set_shares(e: &Env, holder: &Address, balance: i128) {
    let key = VaultDataKey::Shares(holder.clone());
    if balance == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage()
        .persistent()
        .set::<VaultDataKey, i128>(&key, &balance);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/********** Mode **********/

pub fn get_mode(e: &Env) -> VaultMode {
    e.storage()
        .instance()
        .get(&Symbol::new(e, MODE_KEY))
        .unwrap_or(VaultMode::Normal)
}

pub fn set_mode(e: &Env, mode: &VaultMode) {
    e.storage().instance().set(&Symbol::new(e, MODE_KEY), mode);
}

/********** Fees **********/

pub fn get_fee_config(e: &Env) -> FeeConfig {
    e.storage()
        .instance()
        .get(&Symbol::new(e, FEES_KEY))
        .unwrap_optimized()
}

pub fn set_fee_config(e: &Env, config: &FeeConfig) {
    e.storage().instance().set(&Symbol::new(e, FEES_KEY), config);
}

/********** Oracle **********/

pub fn get_oracle_config(e: &Env) -> Option<OracleConfig> {
    e.storage().instance().get(&Symbol::new(e, ORACLE_KEY))
}

pub fn set_oracle_config(e: &Env, config: &OracleConfig) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, ORACLE_KEY), config);
}

/********** Strategy **********/

pub fn get_strategy(e: &Env) -> Option<StrategyBinding> {
    e.storage().instance().get(&Symbol::new(e, STRATEGY_KEY))
}

pub fn set_strategy(e: &Env, binding: &StrategyBinding) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, STRATEGY_KEY), binding);
}

pub fn del_strategy(e: &Env) {
    e.storage().instance().remove(&Symbol::new(e, STRATEGY_KEY));
}

/********** Solvency **********/

pub fn get_solvency_config(e: &Env) -> SolvencyConfig {
    e.storage()
        .instance()
        .get(&Symbol::new(e, SOLVENCY_KEY))
        .unwrap_optimized()
}

pub fn set_solvency_config(e: &Env, config: &SolvencyConfig) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, SOLVENCY_KEY), config);
}

/// Exchange rate (assets per share, SCALAR_7) recorded at the last accounting checkpoint
pub fn get_last_rate(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, LAST_RATE_KEY))
        .unwrap_or(crate::constants::SCALAR_7)
}

pub fn set_last_rate(e: &Env, rate: &i128) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, LAST_RATE_KEY), rate);
}

/********** Reentrancy **********/

pub fn is_locked(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&Symbol::new(e, LOCKED_KEY))
        .unwrap_or(false)
}

pub fn set_locked(e: &Env, locked: bool) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, LOCKED_KEY), &locked);
}
