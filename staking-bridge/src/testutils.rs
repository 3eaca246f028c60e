#![cfg(test)]

use crate::{StakingBridgeClient, StakingBridgeContract};

use soroban_sdk::{Address, Env};

use mock_staking_pool::{MockStakingPool, MockStakingPoolClient};
use sep_41_token::testutils::MockTokenClient;

/// The staking pool the bridge under test wraps
pub(crate) struct StakingFixture<'a> {
    pub native: Address,
    pub native_client: MockTokenClient<'a>,
    pub staked_token: Address,
    pub staked_client: MockTokenClient<'a>,
    pub pool_client: MockStakingPoolClient<'a>,
}

/// Create a staking pool at a rate of 1.25 native per staked token and a staking bridge
/// wrapping it
pub(crate) fn create_staking_bridge<'a>(
    e: &Env,
    proxy: &Address,
    admin: &Address,
) -> (Address, StakingFixture<'a>) {
    let native = e.register_stellar_asset_contract(admin.clone());
    let pool = e.register_contract(None, MockStakingPool {});
    let staked_token = e.register_stellar_asset_contract(pool.clone());
    let pool_client = MockStakingPoolClient::new(e, &pool);
    pool_client.initialize(admin, &native, &staked_token, &1_250_000_000);

    let bridge = e.register_contract(None, StakingBridgeContract {});
    StakingBridgeClient::new(e, &bridge).initialize(proxy, &native, &pool);
    (
        bridge,
        StakingFixture {
            native: native.clone(),
            native_client: MockTokenClient::new(e, &native),
            staked_token: staked_token.clone(),
            staked_client: MockTokenClient::new(e, &staked_token),
            pool_client,
        },
    )
}
