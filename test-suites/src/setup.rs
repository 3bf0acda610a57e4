use crate::test_fixture::TestFixture;

pub const FIRST_DEPOSIT: i128 = 1000;

/// Fixture where the first user deposited `FIRST_DEPOSIT` into the strategy
/// and the first harvest cooldown has passed
pub fn create_fixture_with_data<'a>() -> TestFixture<'a> {
    let fixture = TestFixture::create();
    fixture.vault.deposit(&FIRST_DEPOSIT, &fixture.users[0]);
    fixture.jump(fixture.vault.fee_config().cooldown);
    fixture
}

#[cfg(test)]
mod tests {
    use super::*;
    use yield_vault::{VaultMode, DEFAULT_VIRTUAL_SHARES};

    #[test]
    fn test_create_fixture_with_data() {
        let fixture = create_fixture_with_data();

        assert_eq!(fixture.vault.total_assets(), FIRST_DEPOSIT);
        assert_eq!(
            fixture.vault.balance(&fixture.users[0]),
            FIRST_DEPOSIT * DEFAULT_VIRTUAL_SHARES
        );
        assert_eq!(fixture.vault.get_mode(), VaultMode::Normal);

        // everything deposited sits in the strategy
        assert_eq!(fixture.token.balance(&fixture.vault.address), 0);
        assert_eq!(fixture.strategy.total_assets(), FIRST_DEPOSIT);
        assert_eq!(fixture.strategy.principal(), FIRST_DEPOSIT);
        assert_eq!(fixture.vault.strategy().unwrap().principal, FIRST_DEPOSIT);
    }
}
