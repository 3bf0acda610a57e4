use soroban_sdk::{Address, Env, Symbol};

use crate::types::VaultMode;

pub struct VaultEvents {}

impl VaultEvents {
    /// Emitted when tokens are deposited into the vault
    ///
    /// - topics - `["deposit", receiver: Address]`
    /// - data - `[assets: i128, shares: i128]`
    ///
    /// ### Arguments
    /// * receiver - The address receiving the minted shares
    /// * assets - The amount of tokens deposited
    /// * shares - The amount of shares minted to the receiver
    pub fn deposit(e: &Env, receiver: Address, assets: i128, shares: i128) {
        let topics = (Symbol::new(e, "deposit"), receiver);
        e.events().publish(topics, (assets, shares));
    }

    /// Emitted when dead shares are minted to the vault on the first deposit
    ///
    /// - topics - `["dead_shares"]`
    /// - data - `shares: i128`
    pub fn dead_shares(e: &Env, shares: i128) {
        let topics = (Symbol::new(e, "dead_shares"),);
        e.events().publish(topics, shares);
    }

    /// Emitted when assets are withdrawn from the vault
    ///
    /// - topics - `["withdraw", owner: Address]`
    /// - data - `[assets: i128, shares: i128]`
    ///
    /// ### Arguments
    /// * owner - The address whose shares were burned
    /// * assets - The amount of tokens sent to the owner
    /// * shares - The amount of shares burned
    pub fn withdraw(e: &Env, owner: Address, assets: i128, shares: i128) {
        let topics = (Symbol::new(e, "withdraw"), owner);
        e.events().publish(topics, (assets, shares));
    }

    /// Emitted when shares are redeemed proportionally in Emergency mode
    ///
    /// - topics - `["emergency_withdraw", owner: Address]`
    /// - data - `[shares: i128, assets: i128]`
    pub fn emergency_withdraw(e: &Env, owner: Address, shares: i128, assets: i128) {
        let topics = (Symbol::new(e, "emergency_withdraw"), owner);
        e.events().publish(topics, (shares, assets));
    }

    /// Emitted when shares move between holders
    ///
    /// - topics - `["transfer", from: Address, to: Address]`
    /// - data - `shares: i128`
    pub fn transfer(e: &Env, from: Address, to: Address, shares: i128) {
        let topics = (Symbol::new(e, "transfer"), from, to);
        e.events().publish(topics, shares);
    }

    /// Emitted when yield is harvested and compounded
    ///
    /// - topics - `["harvest"]`
    /// - data - `[yield_amount: i128, fee: i128, timestamp: u64]`
    ///
    /// ### Arguments
    /// * yield_amount - The yield realized by the strategy
    /// * fee - The performance fee sent to the fee recipient
    /// * timestamp - The ledger timestamp of the harvest
    pub fn harvest(e: &Env, yield_amount: i128, fee: i128, timestamp: u64) {
        let topics = (Symbol::new(e, "harvest"),);
        e.events().publish(topics, (yield_amount, fee, timestamp));
    }

    /// Emitted when the bound strategy changes
    ///
    /// - topics - `["set_strategy"]`
    /// - data - `[old: Option<Address>, new: Option<Address>, withdrawn: i128, redeployed: i128]`
    pub fn set_strategy(
        e: &Env,
        old: Option<Address>,
        new: Option<Address>,
        withdrawn: i128,
        redeployed: i128,
    ) {
        let topics = (Symbol::new(e, "set_strategy"),);
        e.events().publish(topics, (old, new, withdrawn, redeployed));
    }

    /// Emitted when the performance fee rate changes
    ///
    /// - topics - `["set_fee_rate"]`
    /// - data - `fee_rate_bps: u32`
    pub fn set_fee_rate(e: &Env, fee_rate_bps: u32) {
        let topics = (Symbol::new(e, "set_fee_rate"),);
        e.events().publish(topics, fee_rate_bps);
    }

    /// Emitted when the fee recipient changes
    ///
    /// - topics - `["set_fee_recipient"]`
    /// - data - `recipient: Address`
    pub fn set_fee_recipient(e: &Env, recipient: Address) {
        let topics = (Symbol::new(e, "set_fee_recipient"),);
        e.events().publish(topics, recipient);
    }

    /// Emitted when the harvest cooldown changes
    ///
    /// - topics - `["set_cooldown"]`
    /// - data - `cooldown: u64`
    pub fn set_cooldown(e: &Env, cooldown: u64) {
        let topics = (Symbol::new(e, "set_cooldown"),);
        e.events().publish(topics, cooldown);
    }

    /// Emitted when an oracle price is accepted
    ///
    /// - topics - `["price_updated"]`
    /// - data - `[price: i128, timestamp: u64]`
    pub fn price_updated(e: &Env, price: i128, timestamp: u64) {
        let topics = (Symbol::new(e, "price_updated"),);
        e.events().publish(topics, (price, timestamp));
    }

    /// Emitted when the oracle circuit breaker trips
    ///
    /// - topics - `["breaker_tripped"]`
    /// - data - `[last_price: i128, rejected_price: i128]`
    ///
    /// ### Arguments
    /// * last_price - The last accepted price
    /// * rejected_price - The price that tripped the breaker, 0 for a manual trip
    pub fn breaker_tripped(e: &Env, last_price: i128, rejected_price: i128) {
        let topics = (Symbol::new(e, "breaker_tripped"),);
        e.events().publish(topics, (last_price, rejected_price));
    }

    /// Emitted when the admin resets the circuit breaker
    ///
    /// - topics - `["breaker_reset"]`
    /// - data - `price: i128`
    pub fn breaker_reset(e: &Env, price: i128) {
        let topics = (Symbol::new(e, "breaker_reset"),);
        e.events().publish(topics, price);
    }

    /// Emitted when the oracle parameters are set or updated
    ///
    /// - topics - `["set_oracle", oracle: Address]`
    /// - data - `[staleness_threshold: u64, max_deviation_bps: u32, min_price: i128, max_price: i128]`
    pub fn set_oracle(
        e: &Env,
        oracle: Address,
        staleness_threshold: u64,
        max_deviation_bps: u32,
        min_price: i128,
        max_price: i128,
    ) {
        let topics = (Symbol::new(e, "set_oracle"), oracle);
        e.events().publish(
            topics,
            (staleness_threshold, max_deviation_bps, min_price, max_price),
        );
    }

    /// Emitted when the vault mode changes
    ///
    /// - topics - `["set_mode"]`
    /// - data - `[old: VaultMode, new: VaultMode]`
    pub fn set_mode(e: &Env, old: VaultMode, new: VaultMode) {
        let topics = (Symbol::new(e, "set_mode"),);
        e.events().publish(topics, (old, new));
    }

    /// Emitted when the internal asset counter is written down to the actual backing
    ///
    /// - topics - `["loss_realized"]`
    /// - data - `[loss: i128, total_assets: i128]`
    pub fn loss_realized(e: &Env, loss: i128, total_assets: i128) {
        let topics = (Symbol::new(e, "loss_realized"),);
        e.events().publish(topics, (loss, total_assets));
    }

    /// Emitted when the admin syncs the internal asset counter
    ///
    /// - topics - `["sync"]`
    /// - data - `[total_assets: i128, actual_assets: i128]`
    pub fn sync(e: &Env, total_assets: i128, actual_assets: i128) {
        let topics = (Symbol::new(e, "sync"),);
        e.events().publish(topics, (total_assets, actual_assets));
    }

    /// Emitted when a new admin is proposed
    ///
    /// - topics - `["propose_admin", admin: Address]`
    /// - data - `new_admin: Address`
    pub fn propose_admin(e: &Env, admin: Address, new_admin: Address) {
        let topics = (Symbol::new(e, "propose_admin"), admin);
        e.events().publish(topics, new_admin);
    }

    /// Emitted when the proposed admin accepts the role
    ///
    /// - topics - `["accept_admin", new_admin: Address]`
    /// - data - `()`
    pub fn accept_admin(e: &Env, new_admin: Address) {
        let topics = (Symbol::new(e, "accept_admin"), new_admin);
        e.events().publish(topics, ());
    }
}
