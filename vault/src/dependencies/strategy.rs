use soroban_sdk::{contractclient, Env};

/// Yield source interface - the only surface the vault needs from an adapter
///
/// Adapters must only accept `deposit`, `withdraw` and `harvest` from the
/// vault they are bound to.
#[contractclient(name = "Client")]
pub trait YieldStrategy {
    /// Accept `amount` tokens the vault has already transferred to the adapter
    fn deposit(e: Env, amount: i128);

    /// Best effort withdrawal back to the vault, returns the amount actually sent
    fn withdraw(e: Env, amount: i128) -> i128;

    /// Send realized yield to the vault and return how much was sent
    fn harvest(e: Env) -> i128;

    /// Current valuation of the adapter including unharvested yield
    fn total_assets(e: Env) -> i128;
}
