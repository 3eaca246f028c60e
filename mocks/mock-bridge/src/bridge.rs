use crate::storage::{self, MockBridgeConfig};
use bridge_interface::{
    AssetDescriptor, Bridge, BridgeError, ConversionResult, FinaliseResult,
};
use sep_41_token::TokenClient;
use soroban_sdk::{contract, contractclient, contractimpl, panic_with_error, Address, Env};

#[contract]
pub struct MockBridgeContract;

#[contractclient(name = "MockBridgeClient")]
pub trait MockBridge {
    /// Initialize the mock bridge
    ///
    /// ### Arguments
    /// * `proxy` - The bridge proxy allowed to call the bridge
    /// * `native` - The address of the native asset contract
    fn initialize(e: Env, proxy: Address, native: Address);

    /// Mock Only: Set how the bridge behaves on `convert` and `finalise`
    ///
    /// ### Arguments
    /// * `config` - The bridge behavior
    fn set_config(e: Env, config: MockBridgeConfig);

    /// Mock Only: Fetch the bridge behavior
    fn get_config(e: Env) -> MockBridgeConfig;
}

#[contractimpl]
impl MockBridge for MockBridgeContract {
    fn initialize(e: Env, proxy: Address, native: Address) {
        storage::extend_instance(&e);
        if storage::has_proxy(&e) {
            panic_with_error!(&e, BridgeError::AlreadyInitializedError);
        }
        storage::set_proxy(&e, &proxy);
        storage::set_native(&e, &native);
    }

    fn set_config(e: Env, config: MockBridgeConfig) {
        storage::set_config(&e, &config);
    }

    fn get_config(e: Env) -> MockBridgeConfig {
        storage::get_config(&e)
    }
}

#[contractimpl]
impl Bridge for MockBridgeContract {
    fn convert(
        e: Env,
        _input_asset_a: AssetDescriptor,
        _input_asset_b: AssetDescriptor,
        output_asset_a: AssetDescriptor,
        output_asset_b: AssetDescriptor,
        _total_input_value: i128,
        interaction_nonce: u64,
        _aux_data: u64,
    ) -> ConversionResult {
        storage::extend_instance(&e);
        storage::get_proxy(&e).require_auth();
        let config = storage::get_config(&e);

        if config.is_async {
            storage::set_pending(&e, interaction_nonce);
        } else {
            deliver(&e, &config, &output_asset_a, &output_asset_b);
        }
        ConversionResult {
            is_async: config.is_async,
            output_value_a: config.report_a,
            output_value_b: config.report_b,
        }
    }

    fn finalise(
        e: Env,
        _input_asset_a: AssetDescriptor,
        _input_asset_b: AssetDescriptor,
        output_asset_a: AssetDescriptor,
        output_asset_b: AssetDescriptor,
        interaction_nonce: u64,
        _aux_data: u64,
    ) -> FinaliseResult {
        storage::extend_instance(&e);
        storage::get_proxy(&e).require_auth();
        if !storage::is_pending(&e, interaction_nonce) {
            panic_with_error!(&e, BridgeError::UnknownInteraction);
        }
        let config = storage::get_config(&e);
        if !config.ready {
            return FinaliseResult {
                output_value_a: 0,
                output_value_b: 0,
                interaction_complete: false,
            };
        }

        deliver(&e, &config, &output_asset_a, &output_asset_b);
        storage::del_pending(&e, interaction_nonce);
        FinaliseResult {
            output_value_a: config.report_a,
            output_value_b: config.report_b,
            interaction_complete: true,
        }
    }
}

/// Transfer the configured outputs to the proxy, then fail if configured to
fn deliver(
    e: &Env,
    config: &MockBridgeConfig,
    output_asset_a: &AssetDescriptor,
    output_asset_b: &AssetDescriptor,
) {
    let native = storage::get_native(e);
    let proxy = storage::get_proxy(e);
    for (asset, amount) in [
        (output_asset_a, config.transfer_a),
        (output_asset_b, config.transfer_b),
    ] {
        if let Some(token) = asset.balance_token(&native) {
            if amount > 0 {
                TokenClient::new(e, &token).transfer(&e.current_contract_address(), &proxy, &amount);
            }
        }
    }
    if config.fail {
        panic_with_error!(e, BridgeError::ConversionFailed);
    }
}
