use proptest::prelude::*;
use test_suites::setup::create_fixture_with_data;
use test_suites::test_fixture::TestFixture;
use yield_vault::VaultMode;

fn fixture_with_two_holders<'a>() -> TestFixture<'a> {
    let fixture = create_fixture_with_data();
    fixture.vault.deposit(&1000, &fixture.users[1]);
    fixture
}

#[test]
fn test_large_loss_moves_to_emergency() {
    let fixture = fixture_with_two_holders();
    assert_eq!(fixture.vault.total_shares(), 2_000_000);

    fixture.inflict_loss(200);
    assert_eq!(fixture.vault.check_solvency(), VaultMode::Emergency);
    // the counter is only written down on the next exit
    assert_eq!(fixture.vault.total_assets(), 2000);
    assert_eq!(fixture.vault.preview_emergency_withdraw(&1_000_000), 900);
}

#[test]
fn test_emergency_withdrawals_split_actual_backing() {
    let fixture = fixture_with_two_holders();
    let (user0, user1) = (&fixture.users[0], &fixture.users[1]);
    fixture.inflict_loss(200);
    fixture.vault.check_solvency();

    assert_eq!(fixture.vault.emergency_withdraw(&1_000_000, user0), 900);
    assert_eq!(fixture.vault.total_assets(), 900);
    assert_eq!(fixture.vault.emergency_withdraw(&1_000_000, user1), 900);

    assert_eq!(fixture.token.balance(user0), 1_000_000 - 100);
    assert_eq!(fixture.token.balance(user1), 1_000_000 - 100);
    assert_eq!(fixture.vault.total_shares(), 0);
    assert_eq!(fixture.vault.total_assets(), 0);
    assert_eq!(fixture.strategy.total_assets(), 0);
}

#[test]
fn test_emergency_withdraw_burns_fair_fraction() {
    let fixture = fixture_with_two_holders();
    let (user0, user1) = (&fixture.users[0], &fixture.users[1]);
    fixture.inflict_loss(200);
    fixture.vault.check_solvency();

    // 900 × 2_000_000 / 1800, no virtual offset while in Emergency
    assert_eq!(fixture.vault.preview_withdraw(&900), 1_000_000);
    assert_eq!(fixture.vault.max_withdraw(user0), 900);
    assert_eq!(fixture.vault.withdraw(&900, user0), 1_000_000);
    assert_eq!(fixture.vault.balance(user0), 0);

    // the remaining holder is not diluted by the first exit
    assert_eq!(fixture.vault.emergency_withdraw(&1_000_000, user1), 900);
    assert_eq!(fixture.vault.total_shares(), 0);
}

#[test]
fn test_small_loss_pauses_but_keeps_full_rate() {
    let fixture = fixture_with_two_holders();
    let user0 = &fixture.users[0];
    fixture.inflict_loss(60);

    assert_eq!(fixture.vault.check_solvency(), VaultMode::Paused);
    assert!(fixture.vault.try_deposit(&100, &fixture.users[2]).is_err());

    // 500 × 2_001_000 / 2001
    assert_eq!(fixture.vault.withdraw(&500, user0), 500_000);
    assert_eq!(fixture.token.balance(user0), 1_000_000 - 500);
    assert_eq!(fixture.strategy.total_assets(), 1440);
}

#[test]
fn test_sync_then_recover() {
    let fixture = fixture_with_two_holders();
    fixture.inflict_loss(200);
    fixture.vault.check_solvency();

    fixture.vault.sync();
    assert_eq!(fixture.vault.total_assets(), 1800);
    fixture.vault.recover();
    assert_eq!(fixture.vault.get_mode(), VaultMode::Normal);

    // new deposits price against the written down backing
    let shares = fixture.vault.deposit(&900, &fixture.users[2]);
    assert_eq!(shares, 999_944);
}

#[test]
#[should_panic(expected = "Error(Contract, #4084)")]
fn test_recover_refused_before_sync() {
    let fixture = fixture_with_two_holders();
    fixture.inflict_loss(200);
    fixture.vault.check_solvency();
    fixture.vault.recover();
}

#[test]
fn test_frozen_ignores_keeper() {
    let fixture = fixture_with_two_holders();
    fixture.vault.freeze();
    fixture.inflict_loss(200);

    assert_eq!(fixture.vault.check_solvency(), VaultMode::Frozen);
    assert!(fixture.vault.try_harvest().is_err());
    assert!(fixture
        .vault
        .try_emergency_withdraw(&1_000_000, &fixture.users[0])
        .is_err());
    assert_eq!(fixture.vault.max_withdraw(&fixture.users[0]), 0);
}

#[test]
fn test_escalation_never_relaxes() {
    let fixture = fixture_with_two_holders();
    fixture.inflict_loss(200);
    assert_eq!(fixture.vault.check_solvency(), VaultMode::Emergency);

    // backing restored, the keeper still leaves the mode alone
    fixture.token.mint(&fixture.strategy.address, &200);
    assert_eq!(fixture.vault.check_solvency(), VaultMode::Emergency);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn emergency_exits_pay_out_exactly_the_backing(
        deposits in proptest::collection::vec(100i128..10_000, 1..3),
        loss_bps in 600i128..9_000,
    ) {
        let fixture = create_fixture_with_data();
        for (i, amount) in deposits.iter().enumerate() {
            fixture.vault.deposit(amount, &fixture.users[i + 1]);
        }
        let backing = fixture.vault.total_assets();
        let loss = backing * loss_bps / 10_000;
        fixture.inflict_loss(loss);
        prop_assert_eq!(fixture.vault.check_solvency(), VaultMode::Emergency);

        let mut paid = 0;
        for user in fixture.users.iter().take(deposits.len() + 1) {
            let shares = fixture.vault.balance(user);
            paid += fixture.vault.emergency_withdraw(&shares, user);
        }
        prop_assert_eq!(paid, backing - loss);
        prop_assert_eq!(fixture.vault.total_shares(), 0);
    }
}
