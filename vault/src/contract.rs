use sep_40_oracle::Asset;
use soroban_sdk::{contract, contractclient, contractimpl, panic_with_error, Address, Env};

use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::guard::non_reentrant;
use crate::types::{FeeConfig, OracleConfig, StrategyBinding, VaultConfig, VaultMode};
use crate::{storage, vault};

#[contract]
pub struct VaultContract;

#[contractclient(name = "VaultClient")]
pub trait Vault {
    /********** Admin **********/

    /// (Admin only) Set a new address to become the admin of the vault. This
    /// must be accepted by the new admin w/ `accept_admin` to take effect.
    ///
    /// ### Arguments
    /// * `new_admin` - The new admin address
    fn propose_admin(e: Env, new_admin: Address);

    /// (Proposed admin only) Accept the admin role
    ///
    /// ### Panics
    /// - `Unauthorized` if no admin was proposed
    fn accept_admin(e: Env);

    /// (Admin only) Rebind the vault to a new strategy adapter, or unbind it
    ///
    /// Everything the current adapter holds is recalled first. The vault's
    /// whole idle balance is then deployed into `strategy`.
    ///
    /// ### Arguments
    /// * `strategy` - The new adapter, `None` to keep all assets idle
    ///
    /// ### Panics
    /// - `InvalidConfiguration` if `strategy` is already bound
    fn set_strategy(e: Env, strategy: Option<Address>);

    /// (Admin only) Set the performance fee charged on harvested yield
    ///
    /// ### Panics
    /// - `InvalidConfiguration` if `fee_rate_bps` exceeds the fee ceiling
    fn set_performance_fee(e: Env, fee_rate_bps: u32);

    /// (Admin only) Set the receiver of performance fees
    fn set_fee_recipient(e: Env, recipient: Address);

    /// (Admin only) Set the minimum number of seconds between harvests
    fn set_harvest_cooldown(e: Env, cooldown: u64);

    /// (Admin only) Configure the price feed used to value the vault
    ///
    /// ### Arguments
    /// * `oracle` - A SEP-40 price feed
    /// * `asset` - The asset to price
    /// * `staleness_threshold` - Max age of a price in seconds
    /// * `max_deviation_bps` - Max single-step move before the circuit breaker trips
    /// * `min_price` - Lowest accepted price
    /// * `max_price` - Highest accepted price
    ///
    /// ### Panics
    /// - `InvalidConfiguration` if any parameter is out of range
    fn set_oracle(
        e: Env,
        oracle: Address,
        asset: Asset,
        staleness_threshold: u64,
        max_deviation_bps: u32,
        min_price: i128,
        max_price: i128,
    );

    /// (Admin only) Retune the oracle checks, keeping the feed and reference price
    ///
    /// ### Panics
    /// - `OracleNotConfigured` if no oracle is set
    /// - `InvalidConfiguration` if any parameter is out of range
    fn update_oracle_config(
        e: Env,
        staleness_threshold: u64,
        max_deviation_bps: u32,
        min_price: i128,
        max_price: i128,
    );

    /// (Admin only) Trip the oracle circuit breaker and move the vault to Emergency
    fn trigger_circuit_breaker(e: Env);

    /// (Admin only) Clear the circuit breaker, adopting the feed's current
    /// price as the new reference. The vault mode is left unchanged.
    fn reset_circuit_breaker(e: Env);

    /// (Admin only) Move the vault to Paused, if not already more restrictive
    fn pause(e: Env);

    /// (Admin only) Move the vault to Frozen
    fn freeze(e: Env);

    /// (Admin only) Return the vault to Normal
    ///
    /// ### Panics
    /// - `CircuitBreakerActive` if the breaker is still tripped
    /// - `Insolvent` if the backing still fails the solvency check
    fn recover(e: Env);

    /// (Admin only) Write the internal asset counter down to the actual
    /// backing, realizing any loss for every holder. Never writes it up.
    fn sync(e: Env);

    /********** Holders **********/

    /// Deposit `assets` from `receiver` and mint shares to them
    ///
    /// ### Returns
    /// The shares minted
    ///
    /// ### Panics
    /// - `ZeroAmount` if assets is 0
    /// - `ZeroShares` if the deposit is too small to mint a share
    /// - `DepositTooSmall` if the first deposit fails the bootstrap policy
    /// - `ModeRestricted` if the vault is not Normal
    fn deposit(e: Env, assets: i128, receiver: Address) -> i128;

    /// Same as `deposit`, failing with `SlippageExceeded` if fewer than
    /// `min_shares` would be minted
    fn deposit_with_min_shares(e: Env, assets: i128, receiver: Address, min_shares: i128) -> i128;

    /// Burn shares from `owner` and send them exactly `assets`
    ///
    /// Shares burned are rounded up. In Emergency the loss is realized first,
    /// so every holder exits at the same reduced rate.
    ///
    /// ### Returns
    /// The shares burned
    ///
    /// ### Panics
    /// - `InsufficientShares` if `owner` holds too few shares
    /// - `InsufficientBalance` if the vault cannot source the assets
    /// - `ModeRestricted` if the vault is Frozen
    fn withdraw(e: Env, assets: i128, owner: Address) -> i128;

    /// Same as `withdraw`, failing with `SlippageExceeded` if more than
    /// `max_shares` would be burned
    fn withdraw_with_max_shares(e: Env, assets: i128, owner: Address, max_shares: i128) -> i128;

    /// (Emergency only) Redeem `shares` for a proportional slice of the
    /// actual backing
    ///
    /// ### Returns
    /// The assets sent to `owner`
    ///
    /// ### Panics
    /// - `ModeRestricted` if the vault is not in Emergency
    /// - `ZeroAmount` if the shares are worth nothing after rounding
    fn emergency_withdraw(e: Env, shares: i128, owner: Address) -> i128;

    /// Move `shares` from `from` to `to`
    fn transfer(e: Env, from: Address, to: Address, shares: i128);

    /********** Keepers **********/

    /// Realize strategy yield, pay the performance fee and compound the rest
    ///
    /// ### Returns
    /// The gross yield harvested
    ///
    /// ### Panics
    /// - `CooldownNotElapsed` if called again before the cooldown passed
    /// - `NoStrategy` if no strategy is bound
    /// - `NothingToHarvest` if the strategy has no yield
    fn harvest(e: Env) -> i128;

    /// Fetch a validated price, recording it as the new reference
    ///
    /// ### Returns
    /// `(price, decimals)`
    fn get_price(e: Env) -> (i128, u32);

    /// Check the backing and escalate the mode if needed. Never relaxes it.
    ///
    /// ### Returns
    /// The resulting mode
    fn check_solvency(e: Env) -> VaultMode;

    /********** Queries **********/

    fn token(e: Env) -> Address;

    fn admin(e: Env) -> Address;

    fn balance(e: Env, holder: Address) -> i128;

    fn total_shares(e: Env) -> i128;

    /// The internal asset counter used for every conversion. Direct token
    /// transfers to the vault never change it.
    fn total_assets(e: Env) -> i128;

    /// Idle balance plus the strategy's own valuation, including unharvested
    /// yield. Informational only.
    fn total_assets_reported(e: Env) -> i128;

    fn preview_deposit(e: Env, assets: i128) -> i128;

    fn preview_withdraw(e: Env, assets: i128) -> i128;

    fn preview_emergency_withdraw(e: Env, shares: i128) -> i128;

    fn convert_to_shares(e: Env, assets: i128) -> i128;

    fn convert_to_assets(e: Env, shares: i128) -> i128;

    fn max_withdraw(e: Env, owner: Address) -> i128;

    fn harvestable_yield(e: Env) -> i128;

    fn strategy(e: Env) -> Option<StrategyBinding>;

    fn fee_config(e: Env) -> FeeConfig;

    fn oracle_config(e: Env) -> Option<OracleConfig>;

    /// Validated price without recording it or tripping the breaker
    fn get_price_read_only(e: Env) -> (i128, u32);

    /// Total assets priced through the read-only oracle path
    fn total_value(e: Env) -> i128;

    fn get_mode(e: Env) -> VaultMode;
}

#[contractimpl]
impl VaultContract {
    /// Construct the vault
    ///
    /// ### Arguments
    /// * `admin` - The admin of the vault
    /// * `token` - The underlying SEP-41 token
    /// * `config` - Conversion, bootstrap, fee and solvency parameters
    ///
    /// ### Panics
    /// - `InvalidConfiguration` if the config is out of range
    pub fn __constructor(e: Env, admin: Address, token: Address, config: VaultConfig) {
        vault::execute_initialize(&e, &admin, &token, &config);
        storage::extend_instance(&e);
    }
}

#[contractimpl]
impl Vault for VaultContract {
    fn propose_admin(e: Env, new_admin: Address) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        non_reentrant(&e, || {
            storage::set_proposed_admin(&e, &new_admin);
            VaultEvents::propose_admin(&e, admin, new_admin);
        });
    }

    fn accept_admin(e: Env) {
        storage::extend_instance(&e);
        let proposed_admin = match storage::get_proposed_admin(&e) {
            Some(admin) => admin,
            None => panic_with_error!(e, VaultError::Unauthorized),
        };
        proposed_admin.require_auth();

        non_reentrant(&e, || {
            storage::set_admin(&e, &proposed_admin);
            storage::del_proposed_admin(&e);
            VaultEvents::accept_admin(&e, proposed_admin);
        });
    }

    fn set_strategy(e: Env, strategy: Option<Address>) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        non_reentrant(&e, || vault::execute_set_strategy(&e, &strategy));
    }

    fn set_performance_fee(e: Env, fee_rate_bps: u32) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        non_reentrant(&e, || vault::execute_set_performance_fee(&e, fee_rate_bps));
    }

    fn set_fee_recipient(e: Env, recipient: Address) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        non_reentrant(&e, || vault::execute_set_fee_recipient(&e, &recipient));
    }

    fn set_harvest_cooldown(e: Env, cooldown: u64) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        non_reentrant(&e, || vault::execute_set_harvest_cooldown(&e, cooldown));
    }

    fn set_oracle(
        e: Env,
        oracle: Address,
        asset: Asset,
        staleness_threshold: u64,
        max_deviation_bps: u32,
        min_price: i128,
        max_price: i128,
    ) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        non_reentrant(&e, || {
            vault::execute_set_oracle(
                &e,
                &oracle,
                &asset,
                staleness_threshold,
                max_deviation_bps,
                min_price,
                max_price,
            )
        });
    }

    fn update_oracle_config(
        e: Env,
        staleness_threshold: u64,
        max_deviation_bps: u32,
        min_price: i128,
        max_price: i128,
    ) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        non_reentrant(&e, || {
            vault::execute_update_oracle_config(
                &e,
                staleness_threshold,
                max_deviation_bps,
                min_price,
                max_price,
            )
        });
    }

    fn trigger_circuit_breaker(e: Env) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        non_reentrant(&e, || vault::execute_trigger_circuit_breaker(&e));
    }

    fn reset_circuit_breaker(e: Env) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        non_reentrant(&e, || vault::execute_reset_circuit_breaker(&e));
    }

    fn pause(e: Env) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        non_reentrant(&e, || vault::execute_pause(&e));
    }

    fn freeze(e: Env) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        non_reentrant(&e, || vault::execute_freeze(&e));
    }

    fn recover(e: Env) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        non_reentrant(&e, || vault::execute_recover(&e));
    }

    fn sync(e: Env) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        non_reentrant(&e, || vault::execute_sync(&e));
    }

    fn deposit(e: Env, assets: i128, receiver: Address) -> i128 {
        storage::extend_instance(&e);
        receiver.require_auth();

        non_reentrant(&e, || vault::execute_deposit(&e, assets, &receiver, 0))
    }

    fn deposit_with_min_shares(e: Env, assets: i128, receiver: Address, min_shares: i128) -> i128 {
        storage::extend_instance(&e);
        receiver.require_auth();

        non_reentrant(&e, || vault::execute_deposit(&e, assets, &receiver, min_shares))
    }

    fn withdraw(e: Env, assets: i128, owner: Address) -> i128 {
        storage::extend_instance(&e);
        owner.require_auth();

        non_reentrant(&e, || vault::execute_withdraw(&e, assets, &owner, i128::MAX))
    }

    fn withdraw_with_max_shares(e: Env, assets: i128, owner: Address, max_shares: i128) -> i128 {
        storage::extend_instance(&e);
        owner.require_auth();

        non_reentrant(&e, || vault::execute_withdraw(&e, assets, &owner, max_shares))
    }

    fn emergency_withdraw(e: Env, shares: i128, owner: Address) -> i128 {
        storage::extend_instance(&e);
        owner.require_auth();

        non_reentrant(&e, || vault::execute_emergency_withdraw(&e, shares, &owner))
    }

    fn transfer(e: Env, from: Address, to: Address, shares: i128) {
        storage::extend_instance(&e);
        from.require_auth();

        non_reentrant(&e, || vault::execute_transfer(&e, &from, &to, shares));
    }

    fn harvest(e: Env) -> i128 {
        storage::extend_instance(&e);
        non_reentrant(&e, || vault::execute_harvest(&e))
    }

    fn get_price(e: Env) -> (i128, u32) {
        storage::extend_instance(&e);
        non_reentrant(&e, || vault::execute_get_price(&e))
    }

    fn check_solvency(e: Env) -> VaultMode {
        storage::extend_instance(&e);
        non_reentrant(&e, || vault::execute_check_solvency(&e))
    }

    fn token(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_token(&e)
    }

    fn admin(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_admin(&e)
    }

    fn balance(e: Env, holder: Address) -> i128 {
        storage::extend_instance(&e);
        storage::get_shares(&e, &holder)
    }

    fn total_shares(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_total_shares(&e)
    }

    fn total_assets(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_total_assets(&e)
    }

    fn total_assets_reported(e: Env) -> i128 {
        storage::extend_instance(&e);
        vault::actual_assets(&e, &storage::get_token(&e))
    }

    fn preview_deposit(e: Env, assets: i128) -> i128 {
        storage::extend_instance(&e);
        vault::preview_deposit(&e, assets)
    }

    fn preview_withdraw(e: Env, assets: i128) -> i128 {
        storage::extend_instance(&e);
        vault::preview_withdraw(&e, assets)
    }

    fn preview_emergency_withdraw(e: Env, shares: i128) -> i128 {
        storage::extend_instance(&e);
        vault::preview_emergency_withdraw(&e, shares)
    }

    fn convert_to_shares(e: Env, assets: i128) -> i128 {
        storage::extend_instance(&e);
        vault::convert_to_shares(&e, assets)
    }

    fn convert_to_assets(e: Env, shares: i128) -> i128 {
        storage::extend_instance(&e);
        vault::convert_to_assets(&e, shares)
    }

    fn max_withdraw(e: Env, owner: Address) -> i128 {
        storage::extend_instance(&e);
        vault::max_withdraw(&e, &owner)
    }

    fn harvestable_yield(e: Env) -> i128 {
        storage::extend_instance(&e);
        vault::harvestable_yield(&e)
    }

    fn strategy(e: Env) -> Option<StrategyBinding> {
        storage::extend_instance(&e);
        storage::get_strategy(&e)
    }

    fn fee_config(e: Env) -> FeeConfig {
        storage::extend_instance(&e);
        storage::get_fee_config(&e)
    }

    fn oracle_config(e: Env) -> Option<OracleConfig> {
        storage::extend_instance(&e);
        storage::get_oracle_config(&e)
    }

    fn get_price_read_only(e: Env) -> (i128, u32) {
        storage::extend_instance(&e);
        vault::execute_get_price_read_only(&e)
    }

    fn total_value(e: Env) -> i128 {
        storage::extend_instance(&e);
        vault::total_value(&e)
    }

    fn get_mode(e: Env) -> VaultMode {
        storage::extend_instance(&e);
        storage::get_mode(&e)
    }
}
