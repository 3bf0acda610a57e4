use soroban_sdk::{panic_with_error, Address, Env};

use crate::constants::SCALAR_7;
use crate::errors::VaultError;
use crate::math::{mul_div, Conversion, Rounding};
use crate::storage;
use crate::types::VaultMode;

/// The vault aggregate: ledger counters and operating mode, loaded once per
/// call and written back explicitly.
pub struct VaultState {
    pub token: Address,
    pub total_assets: i128, // Assets the vault believes it holds, never read from a balance
    pub total_shares: i128,
    pub virtual_shares: i128,
    pub mode: VaultMode,
}

impl VaultState {
    pub fn load(e: &Env) -> VaultState {
        VaultState {
            token: storage::get_token(e),
            total_assets: storage::get_total_assets(e),
            total_shares: storage::get_total_shares(e),
            virtual_shares: storage::get_virtual_shares(e),
            mode: storage::get_mode(e),
        }
    }

    pub fn store(&self, e: &Env) {
        storage::set_total_assets(e, &self.total_assets);
        storage::set_total_shares(e, &self.total_shares);
        storage::set_mode(e, &self.mode);
    }

    pub fn conversion(&self) -> Conversion {
        Conversion::new(self.total_assets, self.total_shares, self.virtual_shares)
    }

    /// Require the current mode to be less restrictive than `limit`
    pub fn require_mode_below(&self, e: &Env, limit: VaultMode) {
        if self.mode >= limit {
            panic_with_error!(e, VaultError::ModeRestricted);
        }
    }

    pub fn mint(&mut self, e: &Env, holder: &Address, shares: i128) {
        let balance = storage::get_shares(e, holder);
        storage::set_shares(e, holder, balance + shares);
        self.total_shares += shares;
    }

    /// Burn `shares` from `holder`. The caller must have checked the balance.
    pub fn burn(&mut self, e: &Env, holder: &Address, shares: i128) {
        let balance = storage::get_shares(e, holder);
        storage::set_shares(e, holder, balance - shares);
        self.total_shares -= shares;
        // rounding dust left behind by the last holder is not claimable
        if self.total_shares == 0 {
            self.total_assets = 0;
        }
    }

    /// Record the current exchange rate for the solvency check
    pub fn checkpoint(&self, e: &Env) {
        if self.total_shares == 0 {
            storage::set_last_rate(e, &SCALAR_7);
            return;
        }
        let rate = unwrap_or_panic(
            e,
            mul_div(self.total_assets, SCALAR_7, self.total_shares, Rounding::Floor),
        );
        storage::set_last_rate(e, &rate);
    }
}

/// Require a strictly positive amount
pub fn require_positive(e: &Env, amount: i128) {
    if amount == 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }
    if amount < 0 {
        panic_with_error!(e, VaultError::InvalidAmount);
    }
}

/// Abort the invocation with the error of a failed calculation
pub fn unwrap_or_panic<T>(e: &Env, result: Result<T, VaultError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic_with_error!(e, err),
    }
}
