use soroban_sdk::{Address, Env, Symbol};

pub struct StrategyEvents {}

impl StrategyEvents {
    /// Emitted when the vault deploys principal
    ///
    /// - topics - `["deposit"]`
    /// - data - `[amount: i128, principal: i128]`
    pub fn deposit(e: &Env, amount: i128, principal: i128) {
        let topics = (Symbol::new(e, "deposit"),);
        e.events().publish(topics, (amount, principal));
    }

    /// Emitted when assets are returned to the vault
    ///
    /// - topics - `["withdraw"]`
    /// - data - `[amount: i128, principal: i128]`
    pub fn withdraw(e: &Env, amount: i128, principal: i128) {
        let topics = (Symbol::new(e, "withdraw"),);
        e.events().publish(topics, (amount, principal));
    }

    /// - topics - `["harvest"]`
    /// - data - `yield_amount: i128`
    pub fn harvest(e: &Env, yield_amount: i128) {
        let topics = (Symbol::new(e, "harvest"),);
        e.events().publish(topics, yield_amount);
    }

    /// Emitted when the admin moves funds out of the strategy
    ///
    /// - topics - `["rescue", to: Address]`
    /// - data - `amount: i128`
    pub fn rescue(e: &Env, to: Address, amount: i128) {
        let topics = (Symbol::new(e, "rescue"), to);
        e.events().publish(topics, amount);
    }
}
