use crate::{
    dependencies::StakingPoolClient,
    staking::{self, Direction},
    storage::{self, StakingBridgeConfig},
};
use bridge_interface::{AssetDescriptor, Bridge, BridgeError, ConversionResult, FinaliseResult};
use sep_41_token::TokenClient;
use soroban_sdk::{contract, contractclient, contractimpl, panic_with_error, Address, Env, Symbol};

/// ### StakingBridge
///
/// A bridge that stakes the native asset in a liquid staking pool and redeems the staked token
#[contract]
pub struct StakingBridgeContract;

#[contractclient(name = "StakingBridgeClient")]
pub trait StakingBridge {
    /// Initialize the staking bridge
    ///
    /// ### Arguments
    /// * `proxy` - The bridge proxy allowed to convert through the bridge
    /// * `native` - The address of the native asset contract
    /// * `staking_pool` - The address of the staking pool
    ///
    /// ### Panics
    /// If initialize has already been called
    fn initialize(e: Env, proxy: Address, native: Address, staking_pool: Address);

    /// Fetch the bridge config
    fn get_config(e: Env) -> StakingBridgeConfig;
}

#[contractimpl]
impl StakingBridge for StakingBridgeContract {
    fn initialize(e: Env, proxy: Address, native: Address, staking_pool: Address) {
        storage::extend_instance(&e);
        if storage::has_config(&e) {
            panic_with_error!(&e, BridgeError::AlreadyInitializedError);
        }

        let staked_token = StakingPoolClient::new(&e, &staking_pool).staked_token();
        storage::set_config(
            &e,
            &StakingBridgeConfig {
                proxy,
                native,
                staking_pool,
                staked_token,
            },
        );
    }

    fn get_config(e: Env) -> StakingBridgeConfig {
        storage::get_config(&e)
    }
}

#[contractimpl]
impl Bridge for StakingBridgeContract {
    fn convert(
        e: Env,
        input_asset_a: AssetDescriptor,
        input_asset_b: AssetDescriptor,
        output_asset_a: AssetDescriptor,
        output_asset_b: AssetDescriptor,
        total_input_value: i128,
        _interaction_nonce: u64,
        aux_data: u64,
    ) -> ConversionResult {
        storage::extend_instance(&e);
        let config = storage::get_config(&e);
        config.proxy.require_auth();
        if total_input_value.is_negative() {
            panic_with_error!(&e, BridgeError::NegativeAmountError);
        }

        let direction = staking::load_direction(
            &e,
            &config,
            &input_asset_a,
            &input_asset_b,
            &output_asset_a,
            &output_asset_b,
        );
        let (output_value, output_token, topic) = match direction {
            Direction::Stake => (
                staking::execute_stake(&e, &config, total_input_value),
                &config.staked_token,
                "stake",
            ),
            Direction::Unstake => (
                staking::execute_unstake(&e, &config, total_input_value),
                &config.native,
                "unstake",
            ),
        };

        // aux_data carries the minimum acceptable output
        if output_value < i128::from(aux_data) {
            panic_with_error!(&e, BridgeError::OutputBelowMinimum);
        }
        if output_value > 0 {
            TokenClient::new(&e, output_token).transfer(
                &e.current_contract_address(),
                &config.proxy,
                &output_value,
            );
        }

        e.events().publish(
            (Symbol::new(&e, topic), config.proxy.clone()),
            (total_input_value, output_value),
        );
        ConversionResult {
            is_async: false,
            output_value_a: output_value,
            output_value_b: 0,
        }
    }

    fn finalise(
        e: Env,
        _input_asset_a: AssetDescriptor,
        _input_asset_b: AssetDescriptor,
        _output_asset_a: AssetDescriptor,
        _output_asset_b: AssetDescriptor,
        _interaction_nonce: u64,
        _aux_data: u64,
    ) -> FinaliseResult {
        panic_with_error!(&e, BridgeError::AsyncNotSupported)
    }
}
