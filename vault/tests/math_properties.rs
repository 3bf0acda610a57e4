//! Rounding properties of the share conversion

use proptest::prelude::*;
use yield_vault::math::{pro_rata, Conversion};

const MAX_AMOUNT: i128 = 1_000_000_000_000_000; // 1e8 tokens at 7 decimals

fn vault_state() -> impl Strategy<Value = (i128, i128, i128)> {
    // assets per share between 0.01 and 100
    (1i128..MAX_AMOUNT, 1i128..10_000, prop_oneof![Just(0i128), 1i128..10_000]).prop_map(
        |(total_shares, rate_bps, virtual_shares)| {
            let total_assets = (total_shares * rate_bps / 100).max(1);
            (total_assets, total_shares, virtual_shares)
        },
    )
}

proptest! {
    #[test]
    fn deposit_then_redeem_never_profits(
        (total_assets, total_shares, virtual_shares) in vault_state(),
        assets in 1i128..MAX_AMOUNT,
    ) {
        let before = Conversion::new(total_assets, total_shares, virtual_shares);
        let shares = before.shares_for_deposit(assets).unwrap();
        let after = Conversion::new(total_assets + assets, total_shares + shares, virtual_shares);
        prop_assert!(after.assets_for_shares(shares).unwrap() <= assets);
    }

    #[test]
    fn withdraw_burns_at_least_fair_shares(
        (total_assets, total_shares, virtual_shares) in vault_state(),
        assets in 1i128..MAX_AMOUNT,
    ) {
        let conversion = Conversion::new(total_assets, total_shares, virtual_shares);
        let burned = conversion.shares_for_withdraw(assets).unwrap();
        let minted = conversion.shares_for_deposit(assets).unwrap();
        prop_assert!(burned >= minted);
        prop_assert!(burned - minted <= 1);
        prop_assert!(conversion.assets_for_shares(burned).unwrap() + 1 >= assets);
    }

    #[test]
    fn pro_rata_payouts_never_exceed_backing(
        actual in 0i128..MAX_AMOUNT,
        splits in proptest::collection::vec(1i128..1_000_000, 1..8),
    ) {
        let mut total_shares: i128 = splits.iter().sum();
        let mut backing = actual;
        for shares in splits {
            let paid = pro_rata(shares, backing, total_shares).unwrap();
            prop_assert!(paid <= backing);
            backing -= paid;
            total_shares -= shares;
        }
        prop_assert_eq!(total_shares, 0);
        prop_assert!(backing >= 0);
    }
}
