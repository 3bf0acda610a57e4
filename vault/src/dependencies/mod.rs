mod strategy;
pub use strategy::Client as StrategyClient;
