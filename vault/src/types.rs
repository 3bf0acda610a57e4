use sep_40_oracle::Asset;
use soroban_sdk::{contracttype, Address};

/// Vault-wide operating mode, ordered from least to most restrictive
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultMode {
    Normal = 0,    // Full operations
    Paused = 1,    // Deposits blocked, withdrawals at full rate
    Emergency = 2, // Withdrawals are proportional to the actual backing
    Frozen = 3,    // Everything halted pending manual recovery
}

/// Protection applied to the very first deposit into an empty vault
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BootstrapPolicy {
    Disabled,
    MinimumDeposit(i128), // first deposit must be at least this many assets
    DeadShares(i128),     // shares minted to the vault itself, never redeemable
}

/// Parameters supplied at construction
#[contracttype]
#[derive(Clone, Debug)]
pub struct VaultConfig {
    pub virtual_shares: i128,        // Virtual share offset, 0 disables the offset (immutable)
    pub bootstrap: BootstrapPolicy,  // First deposit protection
    pub fee_rate_bps: u32,           // Performance fee charged on harvested yield
    pub max_fee_bps: u32,            // Ceiling for fee_rate_bps (immutable)
    pub fee_recipient: Address,      // Receiver of performance fees
    pub harvest_cooldown: u64,       // Minimum seconds between harvests
    pub solvency_tolerance_bps: u32, // Fraction of share claims that must stay backed
    pub max_loss_bps: u32,           // Single-step loss that moves the vault to Emergency
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeConfig {
    pub fee_rate_bps: u32,
    pub max_fee_bps: u32,
    pub recipient: Address,
    pub cooldown: u64,
    pub last_harvest: u64,
    pub total_yield: i128, // reporting only
    pub total_fees: i128,  // reporting only
}

#[contracttype]
#[derive(Clone)]
pub struct OracleConfig {
    pub oracle: Address,          // SEP-40 price feed
    pub asset: Asset,             // Asset priced by the feed
    pub staleness_threshold: u64, // Max age of a price in seconds
    pub max_deviation_bps: u32,   // Max single-step move before the breaker trips
    pub min_price: i128,
    pub max_price: i128,
    pub last_price: i128, // 0 until the first accepted price
    pub last_updated: u64,
    pub breaker_tripped: bool,
}

/// The adapter the vault deploys into and the principal it believes is there
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyBinding {
    pub adapter: Address,
    pub principal: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SolvencyConfig {
    pub tolerance_bps: u32,
    pub max_loss_bps: u32,
}
