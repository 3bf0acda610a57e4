// Fixed point precision used for exchange rates
pub const SCALAR_7: i128 = 10_000_000; // 7 decimal places

// Basis points
pub const MAX_BPS: u32 = 10_000; // 100%
pub const MAX_FEE_CEILING_BPS: u32 = 2_000; // hard cap on any performance fee ceiling (20%)

// Suggested virtual share offset for new deployments
pub const DEFAULT_VIRTUAL_SHARES: i128 = 1_000;
