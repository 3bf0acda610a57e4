use soroban_fixed_point_math::FixedPoint;

use crate::errors::VaultError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rounding {
    Floor,
    Ceiling,
}

/// Asset/share conversion priced against a snapshot of the vault counters.
///
/// Every rounding decision favors the holders already in the vault:
/// deposits round shares down, withdrawals round shares burned up and
/// redemptions round assets down.
///
/// With `virtual_shares > 0` the virtual offset formula is used:
///
/// shares = assets × (total_shares + virtual_shares) / (total_assets + 1)
///
/// which keeps a "virtual" share supply in an empty vault so a donation
/// cannot push the price of a share high enough to round a later deposit
/// down to zero.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Conversion {
    pub total_assets: i128,
    pub total_shares: i128,
    pub virtual_shares: i128,
}

impl Conversion {
    pub fn new(total_assets: i128, total_shares: i128, virtual_shares: i128) -> Self {
        Conversion {
            total_assets,
            total_shares,
            virtual_shares,
        }
    }

    /// Shares minted for a deposit of `assets` (floor)
    pub fn shares_for_deposit(&self, assets: i128) -> Result<i128, VaultError> {
        self.to_shares(assets, Rounding::Floor)
    }

    /// Shares burned to withdraw `assets` (ceiling)
    pub fn shares_for_withdraw(&self, assets: i128) -> Result<i128, VaultError> {
        self.to_shares(assets, Rounding::Ceiling)
    }

    /// Assets redeemable for `shares` (floor)
    pub fn assets_for_shares(&self, shares: i128) -> Result<i128, VaultError> {
        self.to_assets(shares, Rounding::Floor)
    }

    pub fn to_shares(&self, assets: i128, rounding: Rounding) -> Result<i128, VaultError> {
        if self.virtual_shares > 0 {
            let (virtual_assets, virtual_shares) = self.virtual_totals()?;
            return mul_div(assets, virtual_shares, virtual_assets, rounding);
        }
        // First deposit: 1:1 ratio
        if self.total_shares == 0 {
            return Ok(assets);
        }
        mul_div(assets, self.total_shares, self.total_assets, rounding)
    }

    pub fn to_assets(&self, shares: i128, rounding: Rounding) -> Result<i128, VaultError> {
        if self.virtual_shares > 0 {
            let (virtual_assets, virtual_shares) = self.virtual_totals()?;
            return mul_div(shares, virtual_assets, virtual_shares, rounding);
        }
        if self.total_shares == 0 {
            return Ok(0);
        }
        mul_div(shares, self.total_assets, self.total_shares, rounding)
    }

    fn virtual_totals(&self) -> Result<(i128, i128), VaultError> {
        let virtual_assets = self
            .total_assets
            .checked_add(1)
            .ok_or(VaultError::MathOverflow)?;
        let virtual_shares = self
            .total_shares
            .checked_add(self.virtual_shares)
            .ok_or(VaultError::MathOverflow)?;
        Ok((virtual_assets, virtual_shares))
    }
}

/// Assets paid out for `shares` when every holder receives the same fraction
/// of `actual_assets`, regardless of nominal share value (floor).
pub fn pro_rata(shares: i128, actual_assets: i128, total_shares: i128) -> Result<i128, VaultError> {
    if total_shares == 0 {
        return Ok(0);
    }
    mul_div(shares, actual_assets, total_shares, Rounding::Floor)
}

/// Computes `value × numerator / denominator` with the given rounding.
pub fn mul_div(
    value: i128,
    numerator: i128,
    denominator: i128,
    rounding: Rounding,
) -> Result<i128, VaultError> {
    if denominator <= 0 {
        return Err(VaultError::DivisionByZero);
    }
    let result = match rounding {
        Rounding::Floor => value.fixed_mul_floor(numerator, denominator),
        Rounding::Ceiling => value.fixed_mul_ceil(numerator, denominator),
    };
    result.ok_or(VaultError::MathOverflow)
}

/// Basis points of `part` relative to `whole` (floor)
pub fn bps_of(part: i128, whole: i128) -> Result<i128, VaultError> {
    mul_div(part, crate::constants::MAX_BPS as i128, whole, Rounding::Floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_div_floor() {
        assert_eq!(mul_div(100, 3, 2, Rounding::Floor).unwrap(), 150);
        assert_eq!(mul_div(100, 1, 3, Rounding::Floor).unwrap(), 33);
    }

    #[test]
    fn test_mul_div_ceiling() {
        assert_eq!(mul_div(100, 3, 2, Rounding::Ceiling).unwrap(), 150);
        assert_eq!(mul_div(100, 1, 3, Rounding::Ceiling).unwrap(), 34);
    }

    #[test]
    fn test_mul_div_zero_denominator() {
        assert_eq!(
            mul_div(100, 100, 0, Rounding::Floor),
            Err(VaultError::DivisionByZero)
        );
    }

    #[test]
    fn test_mul_div_overflow() {
        assert_eq!(
            mul_div(i128::MAX, i128::MAX, 1, Rounding::Floor),
            Err(VaultError::MathOverflow)
        );
    }

    #[test]
    fn test_first_deposit_one_to_one() {
        let conversion = Conversion::new(0, 0, 0);
        assert_eq!(conversion.shares_for_deposit(1000).unwrap(), 1000);
        assert_eq!(conversion.assets_for_shares(1000).unwrap(), 0);
    }

    #[test]
    fn test_deposit_after_yield() {
        // 2000 assets backing 1000 shares, 500 assets buys 250 shares
        let conversion = Conversion::new(2000, 1000, 0);
        assert_eq!(conversion.shares_for_deposit(500).unwrap(), 250);
        assert_eq!(conversion.assets_for_shares(500).unwrap(), 1000);
    }

    #[test]
    fn test_withdraw_rounds_up() {
        // 100 * 333 / 1000 = 33.3
        let conversion = Conversion::new(1000, 333, 0);
        assert_eq!(conversion.shares_for_deposit(100).unwrap(), 33);
        assert_eq!(conversion.shares_for_withdraw(100).unwrap(), 34);
    }

    #[test]
    fn test_exchange_rate_after_harvest() {
        // 1000 deposited, 90 reinvested after a 10% fee on 100 of yield
        let conversion = Conversion::new(1090, 1000, 0);
        assert_eq!(conversion.assets_for_shares(1000).unwrap(), 1090);
        assert_eq!(conversion.shares_for_withdraw(1090).unwrap(), 1000);
    }

    #[test]
    fn test_inflation_attack_without_offset() {
        // Attacker deposits 1 for 1 share, then donates 1000 directly
        let conversion = Conversion::new(1 + 1000, 1, 0);
        // Victim deposit of 999 rounds to nothing
        assert_eq!(conversion.shares_for_deposit(999).unwrap(), 0);
    }

    #[test]
    fn test_inflation_attack_with_offset() {
        let empty = Conversion::new(0, 0, 1000);
        let attacker_shares = empty.shares_for_deposit(1).unwrap();
        assert_eq!(attacker_shares, 1000);

        let inflated = Conversion::new(1 + 1000, attacker_shares, 1000);
        let victim_shares = inflated.shares_for_deposit(999).unwrap();
        // 999 * 2000 / 1002
        assert_eq!(victim_shares, 1994);
        assert!(victim_shares > 0);
    }

    #[test]
    fn test_virtual_offset_round_trip() {
        let conversion = Conversion::new(1_000_000, 1_000_000_000, 1000);
        let shares = conversion.shares_for_deposit(100_000).unwrap();
        let after = Conversion::new(1_100_000, 1_000_000_000 + shares, 1000);
        assert!(after.assets_for_shares(shares).unwrap() <= 100_000);
    }

    #[test]
    fn test_pro_rata() {
        // 900 left backing 1000 shares
        assert_eq!(pro_rata(250, 900, 1000).unwrap(), 225);
        assert_eq!(pro_rata(1, 900, 1000).unwrap(), 0);
        assert_eq!(pro_rata(1000, 900, 1000).unwrap(), 900);
        assert_eq!(pro_rata(10, 900, 0).unwrap(), 0);
    }

    #[test]
    fn test_bps_of() {
        assert_eq!(bps_of(1000, 2000).unwrap(), 5000);
        assert_eq!(bps_of(1500, 2000).unwrap(), 7500);
        assert_eq!(bps_of(1, 3).unwrap(), 3333);
    }
}
