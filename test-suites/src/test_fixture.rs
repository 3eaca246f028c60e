use bridge_interface::AssetDescriptor;
use bridge_proxy::{BridgeProxyClient, BridgeProxyContract};
use mock_bridge::{MockBridgeClient, MockBridgeContract};
use mock_staking_pool::{MockStakingPool, MockStakingPoolClient};
use sep_41_token::testutils::MockTokenClient;
use soroban_sdk::testutils::{Address as _, Ledger, LedgerInfo};
use soroban_sdk::{Address, Env};
use staking_bridge::{StakingBridgeClient, StakingBridgeContract};

pub const SCALAR_7: i128 = 1_000_0000;
pub const SCALAR_9: i128 = 1_000_000_000;

/// The staking pool's initial exchange rate, 1.05 native per staked token
pub const STAKING_RATE: i128 = 1_050_000_000;

/// Asset ids used to describe the fixture's assets in conversions
#[repr(u32)]
pub enum AssetId {
    Native = 0,
    Staked = 1,
    Virtual = 2,
}

pub struct TestFixture<'a> {
    pub env: Env,
    pub bombadil: Address,
    pub native: MockTokenClient<'a>,
    pub proxy: BridgeProxyClient<'a>,
    pub staking_pool: MockStakingPoolClient<'a>,
    pub staked_token: MockTokenClient<'a>,
    pub staking_bridge: StakingBridgeClient<'a>,
    pub mock_bridge: MockBridgeClient<'a>,
}

impl TestFixture<'_> {
    /// Create a new TestFixture for the bridge proxy
    ///
    /// Deploys the native asset, the bridge proxy administered by `bombadil`, a staking pool with
    /// its staked token, a staking bridge wrapping the pool, and a mock bridge
    pub fn create<'a>() -> TestFixture<'a> {
        let e = Env::default();
        e.mock_all_auths();
        e.budget().reset_unlimited();

        let bombadil = Address::generate(&e);

        e.ledger().set(LedgerInfo {
            timestamp: 1441065600, // Sept 1st, 2015 12:00:00 AM UTC
            protocol_version: 20,
            sequence_number: 100,
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 10,
            min_persistent_entry_ttl: 10,
            max_entry_ttl: 3110400,
        });

        let native_id = e.register_stellar_asset_contract(bombadil.clone());
        let native_client = MockTokenClient::new(&e, &native_id);

        // deploy the proxy
        let proxy_id = e.register_contract(None, BridgeProxyContract {});
        let proxy_client = BridgeProxyClient::new(&e, &proxy_id);
        proxy_client.initialize(&bombadil, &native_id);

        // deploy the staking pool, which administers the staked token
        let staking_pool_id = e.register_contract(None, MockStakingPool {});
        let staked_token_id = e.register_stellar_asset_contract(staking_pool_id.clone());
        let staked_token_client = MockTokenClient::new(&e, &staked_token_id);
        let staking_pool_client = MockStakingPoolClient::new(&e, &staking_pool_id);
        staking_pool_client.initialize(&bombadil, &native_id, &staked_token_id, &STAKING_RATE);

        // deploy the bridges
        let staking_bridge_id = e.register_contract(None, StakingBridgeContract {});
        let staking_bridge_client = StakingBridgeClient::new(&e, &staking_bridge_id);
        staking_bridge_client.initialize(&proxy_id, &native_id, &staking_pool_id);

        let mock_bridge_id = e.register_contract(None, MockBridgeContract {});
        let mock_bridge_client = MockBridgeClient::new(&e, &mock_bridge_id);
        mock_bridge_client.initialize(&proxy_id, &native_id);

        TestFixture {
            env: e,
            bombadil,
            native: native_client,
            proxy: proxy_client,
            staking_pool: staking_pool_client,
            staked_token: staked_token_client,
            staking_bridge: staking_bridge_client,
            mock_bridge: mock_bridge_client,
        }
    }

    /********** Asset Helpers ***********/

    pub fn native_asset(&self) -> AssetDescriptor {
        AssetDescriptor::native(AssetId::Native as u32)
    }

    pub fn staked_asset(&self) -> AssetDescriptor {
        AssetDescriptor::token(AssetId::Staked as u32, self.staked_token.address.clone())
    }

    /// Mint native tokens to `bombadil` and fund the proxy with them
    pub fn fund_proxy(&self, amount: i128) {
        self.native.mint(&self.bombadil, &amount);
        self.proxy.fund(&self.bombadil, &amount);
    }

    /// Fetch the native and staked token balances of an address
    pub fn balances(&self, address: &Address) -> (i128, i128) {
        (
            self.native.balance(address),
            self.staked_token.balance(address),
        )
    }

    /********** Chain Helpers ***********/

    pub fn jump(&self, time: u64) {
        let blocks = time / 5;
        self.env.ledger().set(LedgerInfo {
            timestamp: self.env.ledger().timestamp().saturating_add(time),
            protocol_version: 20,
            sequence_number: self.env.ledger().sequence().saturating_add(blocks as u32),
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 10,
            min_persistent_entry_ttl: 10,
            max_entry_ttl: 3110400,
        });
    }
}
