use bridge_interface::{AssetDescriptor, AssetType, BridgeError};
use sep_41_token::TokenClient;
use soroban_sdk::{panic_with_error, Env};

use crate::{dependencies::StakingPoolClient, storage::StakingBridgeConfig};

/// The conversions the staking bridge supports
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    // native -> staked token
    Stake,
    // staked token -> native
    Unstake,
}

/// Determine the conversion requested by the asset descriptors
///
/// ### Panics
/// If the assets don't describe a stake or an unstake
pub fn load_direction(
    e: &Env,
    config: &StakingBridgeConfig,
    input_asset_a: &AssetDescriptor,
    input_asset_b: &AssetDescriptor,
    output_asset_a: &AssetDescriptor,
    output_asset_b: &AssetDescriptor,
) -> Direction {
    if input_asset_b.is_used() {
        panic_with_error!(e, BridgeError::InvalidInputAsset);
    }
    if output_asset_b.is_used() {
        panic_with_error!(e, BridgeError::InvalidOutputAsset);
    }

    let staked = AssetDescriptor::token(output_asset_a.id, config.staked_token.clone());
    match input_asset_a.asset_type {
        AssetType::Native if input_asset_a.is_valid() => {
            if *output_asset_a != staked {
                panic_with_error!(e, BridgeError::InvalidOutputAsset);
            }
            Direction::Stake
        }
        AssetType::Token if input_asset_a.token.address() == Some(config.staked_token.clone()) => {
            if output_asset_a.asset_type != AssetType::Native || !output_asset_a.is_valid() {
                panic_with_error!(e, BridgeError::InvalidOutputAsset);
            }
            Direction::Unstake
        }
        _ => panic_with_error!(e, BridgeError::InvalidInputAsset),
    }
}

/// Stake `amount` of the native asset held by the bridge
///
/// Returns the amount of staked tokens received
pub fn execute_stake(e: &Env, config: &StakingBridgeConfig, amount: i128) -> i128 {
    if amount == 0 {
        return 0;
    }
    TokenClient::new(e, &config.native).approve(
        &e.current_contract_address(),
        &config.staking_pool,
        &amount,
        &e.ledger().sequence(),
    );
    StakingPoolClient::new(e, &config.staking_pool).submit(&e.current_contract_address(), &amount)
}

/// Redeem `amount` of staked tokens held by the bridge
///
/// Returns the amount of the native asset received
pub fn execute_unstake(e: &Env, config: &StakingBridgeConfig, amount: i128) -> i128 {
    if amount == 0 {
        return 0;
    }
    TokenClient::new(e, &config.staked_token).approve(
        &e.current_contract_address(),
        &config.staking_pool,
        &amount,
        &e.ledger().sequence(),
    );
    StakingPoolClient::new(e, &config.staking_pool).redeem(&e.current_contract_address(), &amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::create_staking_bridge;
    use soroban_sdk::{testutils::Address as _, Address};

    #[test]
    fn test_load_direction() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let proxy = Address::generate(&e);
        let (bridge, fixture) = create_staking_bridge(&e, &proxy, &bombadil);

        e.as_contract(&bridge, || {
            let config = crate::storage::get_config(&e);
            let staked = AssetDescriptor::token(1, fixture.staked_token.clone());
            let native = AssetDescriptor::native(0);
            let not_used = AssetDescriptor::not_used();

            assert_eq!(
                load_direction(&e, &config, &native, &not_used, &staked, &not_used),
                Direction::Stake
            );
            assert_eq!(
                load_direction(&e, &config, &staked, &not_used, &native, &not_used),
                Direction::Unstake
            );
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1500)")]
    fn test_load_direction_unknown_input() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let proxy = Address::generate(&e);
        let (bridge, _) = create_staking_bridge(&e, &proxy, &bombadil);
        let other = Address::generate(&e);

        e.as_contract(&bridge, || {
            let config = crate::storage::get_config(&e);
            load_direction(
                &e,
                &config,
                &AssetDescriptor::token(1, other),
                &AssetDescriptor::not_used(),
                &AssetDescriptor::native(0),
                &AssetDescriptor::not_used(),
            );
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1501)")]
    fn test_load_direction_wrong_output() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let proxy = Address::generate(&e);
        let (bridge, _) = create_staking_bridge(&e, &proxy, &bombadil);

        e.as_contract(&bridge, || {
            let config = crate::storage::get_config(&e);
            load_direction(
                &e,
                &config,
                &AssetDescriptor::native(0),
                &AssetDescriptor::not_used(),
                &AssetDescriptor::virtual_asset(1),
                &AssetDescriptor::not_used(),
            );
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1500)")]
    fn test_load_direction_second_input() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let proxy = Address::generate(&e);
        let (bridge, fixture) = create_staking_bridge(&e, &proxy, &bombadil);

        e.as_contract(&bridge, || {
            let config = crate::storage::get_config(&e);
            load_direction(
                &e,
                &config,
                &AssetDescriptor::native(0),
                &AssetDescriptor::virtual_asset(2),
                &AssetDescriptor::token(1, fixture.staked_token.clone()),
                &AssetDescriptor::not_used(),
            );
        });
    }

    #[test]
    fn test_execute_stake_and_unstake() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let proxy = Address::generate(&e);
        let (bridge, fixture) = create_staking_bridge(&e, &proxy, &bombadil);
        fixture.native_client.mint(&bridge, &100_0000000);

        e.as_contract(&bridge, || {
            let config = crate::storage::get_config(&e);
            let staked = execute_stake(&e, &config, 100_0000000);
            // rate of 1.25 native per staked token
            assert_eq!(staked, 80_0000000);

            let returned = execute_unstake(&e, &config, 20_0000000);
            assert_eq!(returned, 25_0000000);

            assert_eq!(execute_stake(&e, &config, 0), 0);
        });
        assert_eq!(fixture.staked_client.balance(&bridge), 60_0000000);
        assert_eq!(fixture.native_client.balance(&bridge), 25_0000000);
        assert_eq!(
            fixture.native_client.balance(&fixture.pool_client.address),
            75_0000000
        );
    }
}
