mod state;
mod config;
pub use config::execute_initialize;
mod ledger;
pub use ledger::{
    convert_to_assets, convert_to_shares, execute_deposit, execute_emergency_withdraw,
    execute_transfer, execute_withdraw, max_withdraw, preview_deposit,
    preview_emergency_withdraw, preview_withdraw,
};
mod strategy;
pub use strategy::{execute_set_strategy, harvestable_yield};
mod fees;
pub use fees::{
    execute_harvest, execute_set_fee_recipient, execute_set_harvest_cooldown,
    execute_set_performance_fee,
};
mod oracle;
pub use oracle::{
    execute_get_price, execute_get_price_read_only, execute_reset_circuit_breaker,
    execute_set_oracle, execute_trigger_circuit_breaker, execute_update_oracle_config,
    total_value,
};
mod solvency;
pub use solvency::{
    actual_assets, execute_check_solvency, execute_freeze, execute_pause, execute_recover,
    execute_sync,
};
