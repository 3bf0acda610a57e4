use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    // Amount validation errors
    ZeroAmount = 4041,
    InsufficientShares = 4042,
    InvalidAmount = 4043,
    ZeroShares = 4044,

    // Vault capacity errors
    InsufficientBalance = 4045,
    DepositTooSmall = 4046,
    MathOverflow = 4047,
    DivisionByZero = 4048,
    SlippageExceeded = 4049,

    // Oracle errors
    InvalidPrice = 4060,
    StalePrice = 4061,
    IncompleteRound = 4062,
    PriceOutOfBounds = 4063,
    ExcessiveDeviation = 4064,
    CircuitBreakerActive = 4065,
    OracleNotConfigured = 4066,

    // Harvest and strategy errors
    CooldownNotElapsed = 4070,
    NothingToHarvest = 4071,
    NoStrategy = 4072,

    // Access, mode and configuration errors
    Unauthorized = 4080,
    InvalidConfiguration = 4081,
    ModeRestricted = 4082,
    ReentrantCall = 4083,
    Insolvent = 4084,
}
