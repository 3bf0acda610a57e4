use sep_40_oracle::testutils::{Asset, MockPriceOracleClient, MockPriceOracleWASM};
use sep_40_oracle::Asset as StellarAsset;
use sep_41_token::testutils::MockTokenClient;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{vec as svec, Address, Env, Symbol};
use strategy_vault::{StrategyVaultClient, StrategyVaultContract};
use yield_vault::testutils::{create_vault, default_config};
use yield_vault::{VaultClient, VaultConfig};

pub const START_TIME: u64 = 1_700_000_100; // multiple of ORACLE_RESOLUTION
pub const ORACLE_DECIMALS: u32 = 7;
pub const ORACLE_RESOLUTION: u32 = 300; // mock oracle rounds timestamps down to this
pub const START_PRICE: i128 = 2000_0000000; // 2000 USD
pub const MIN_PRICE: i128 = 1_0000000;
pub const MAX_PRICE: i128 = 100_000_0000000;
pub const STALENESS: u64 = 3600;
pub const MAX_DEVIATION_BPS: u32 = 5_000;

pub struct TestFixture<'a> {
    pub env: Env,
    pub admin: Address,
    pub fee_recipient: Address,
    pub users: Vec<Address>,
    pub token: MockTokenClient<'a>,
    pub vault: VaultClient<'a>,
    pub strategy: StrategyVaultClient<'a>,
    pub oracle: MockPriceOracleClient<'a>,
    pub asset: StellarAsset,
}

impl TestFixture<'_> {
    /// A vault with the default config, bound to a fresh strategy and priced
    /// by a mock oracle at `START_PRICE`
    pub fn create<'a>() -> TestFixture<'a> {
        TestFixture::create_with(|config| config)
    }

    pub fn create_with<'a>(tune: impl FnOnce(VaultConfig) -> VaultConfig) -> TestFixture<'a> {
        let e = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();
        e.ledger().set_timestamp(START_TIME);

        let admin = Address::generate(&e);
        let fee_recipient = Address::generate(&e);

        let token_id = e.register_stellar_asset_contract_v2(admin.clone()).address();
        let token = MockTokenClient::new(&e, &token_id);

        let vault = create_vault(&e, &admin, &token_id, tune(default_config(&fee_recipient)));
        let strategy = create_strategy(&e, &vault.address, &token_id, &admin);
        vault.set_strategy(&Some(strategy.address.clone()));

        let oracle_id = e.register(MockPriceOracleWASM, ());
        let oracle = MockPriceOracleClient::new(&e, &oracle_id);
        oracle.set_data(
            &admin,
            &Asset::Other(Symbol::new(&e, "USD")),
            &svec![&e, Asset::Stellar(token_id.clone())],
            &ORACLE_DECIMALS,
            &ORACLE_RESOLUTION,
        );
        oracle.set_price_stable(&svec![&e, START_PRICE]);

        let asset = StellarAsset::Stellar(token_id.clone());
        vault.set_oracle(
            &oracle_id,
            &asset,
            &STALENESS,
            &MAX_DEVIATION_BPS,
            &MIN_PRICE,
            &MAX_PRICE,
        );

        let users = vec![Address::generate(&e), Address::generate(&e), Address::generate(&e)];
        for user in users.iter() {
            token.mint(user, &1_000_000);
        }

        TestFixture {
            env: e,
            admin,
            fee_recipient,
            users,
            token,
            vault,
            strategy,
            oracle,
            asset,
        }
    }

    /// A second adapter for the same vault and token
    pub fn create_strategy<'a>(&self) -> StrategyVaultClient<'a> {
        create_strategy(&self.env, &self.vault.address, &self.token.address, &self.admin)
    }

    /********** Market Helpers ***********/

    /// Yield accrues as tokens landing in the strategy
    pub fn accrue_yield(&self, amount: i128) {
        self.token.mint(&self.strategy.address, &amount);
    }

    /// Funds leave the strategy without the vault's involvement
    pub fn inflict_loss(&self, amount: i128) {
        let sink = Address::generate(&self.env);
        self.strategy.rescue(&sink, &amount);
    }

    pub fn set_price(&self, price: i128) {
        self.oracle.set_price_stable(&svec![&self.env, price]);
    }

    pub fn set_price_at(&self, price: i128, timestamp: u64) {
        self.oracle.set_price(&svec![&self.env, price], &timestamp);
    }

    /********** Chain Helpers ***********/

    pub fn jump(&self, time: u64) {
        self.env.ledger().with_mut(|li| {
            li.timestamp = li.timestamp.saturating_add(time);
            li.sequence_number = li.sequence_number.saturating_add((time / 5) as u32);
        });
    }
}

fn create_strategy<'a>(
    e: &Env,
    vault: &Address,
    token: &Address,
    admin: &Address,
) -> StrategyVaultClient<'a> {
    let strategy_id = e.register(
        StrategyVaultContract {},
        (vault.clone(), token.clone(), admin.clone()),
    );
    StrategyVaultClient::new(e, &strategy_id)
}
