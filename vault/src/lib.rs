#![no_std]

mod constants;
mod errors;
mod events;
mod guard;
mod types;
mod dependencies;
mod vault;
mod contract;

pub mod math;
pub mod storage;
pub mod testutils;

pub use constants::*;
pub use contract::*;
pub use errors::VaultError;
pub use types::*;
