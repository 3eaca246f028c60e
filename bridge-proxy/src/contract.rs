use crate::{
    errors::ProxyError,
    proxy,
    storage::{self, PendingInteraction},
};
use bridge_interface::{AssetDescriptor, ConversionRequest, ConversionResult};
use soroban_sdk::{
    contract, contractclient, contractimpl, panic_with_error, Address, BytesN, Env, Symbol, Val,
    Vec,
};

/// ### BridgeProxy
///
/// Custodies value on behalf of the rollup and routes conversions through bridge contracts,
/// measuring every output it receives
#[contract]
pub struct BridgeProxyContract;

#[contractclient(name = "BridgeProxyClient")]
pub trait BridgeProxy {
    /// Initialize the bridge proxy
    ///
    /// ### Arguments
    /// * `admin` - The address allowed to deploy bridges and submit conversions
    /// * `native` - The address of the native asset contract
    ///
    /// ### Panics
    /// If initialize has already been called
    fn initialize(e: Env, admin: Address, native: Address);

    /// (Admin only) Deploy and initialize a bridge
    ///
    /// Returns the address of the deployed bridge
    ///
    /// ### Arguments
    /// * `wasm_hash` - The hash of the installed bridge wasm
    /// * `salt` - The salt used to derive the bridge address
    /// * `init_args` - The bridge's `initialize` arguments that follow the proxy address
    ///
    /// ### Panics
    /// If the bridge fails to initialize
    fn deploy_bridge(
        e: Env,
        wasm_hash: BytesN<32>,
        salt: BytesN<32>,
        init_args: Vec<Val>,
    ) -> Address;

    /// Check if a bridge was deployed by the proxy
    ///
    /// ### Arguments
    /// * `bridge` - The address to check
    fn is_bridge(e: Env, bridge: Address) -> bool;

    /// Fund the proxy with the native asset
    ///
    /// ### Arguments
    /// * `from` - The address funding the proxy
    /// * `amount` - The amount of the native asset
    fn fund(e: Env, from: Address, amount: i128);

    /// (Admin only) Convert assets held by the proxy through a bridge
    ///
    /// Returns the conversion result. Output values are the amounts the proxy received.
    ///
    /// ### Arguments
    /// * `bridge` - The address of the bridge
    /// * `input_asset_a` - The first input asset
    /// * `input_asset_b` - The second input asset, or an unused asset
    /// * `output_asset_a` - The first output asset
    /// * `output_asset_b` - The second output asset, or an unused asset
    /// * `total_input_value` - The amount of each used input asset to convert
    /// * `interaction_nonce` - The unique id of the conversion session
    /// * `aux_data` - Bridge specific data
    ///
    /// ### Panics
    /// If the assets are invalid, the proxy can't fund the inputs, the nonce was used, or the
    /// bridge fails
    #[allow(clippy::too_many_arguments)]
    fn convert(
        e: Env,
        bridge: Address,
        input_asset_a: AssetDescriptor,
        input_asset_b: AssetDescriptor,
        output_asset_a: AssetDescriptor,
        output_asset_b: AssetDescriptor,
        total_input_value: i128,
        interaction_nonce: u64,
        aux_data: u64,
    ) -> ConversionResult;

    /// Finalise a pending asynchronous conversion
    ///
    /// Returns the conversion result, or a pending result if the bridge can't complete it yet
    ///
    /// ### Arguments
    /// * `interaction_nonce` - The nonce of the interaction
    ///
    /// ### Panics
    /// If the nonce is unknown or the bridge fails
    fn finalise(e: Env, interaction_nonce: u64) -> ConversionResult;

    /// Fetch a pending interaction
    ///
    /// ### Arguments
    /// * `interaction_nonce` - The nonce of the interaction
    fn get_pending(e: Env, interaction_nonce: u64) -> Option<PendingInteraction>;

    /// Fetch the proxy's balance of an asset
    ///
    /// ### Arguments
    /// * `asset` - The asset
    fn balance(e: Env, asset: AssetDescriptor) -> i128;

    /// Fetch the admin address
    fn admin(e: Env) -> Address;

    /// Fetch the address of the native asset contract
    fn native(e: Env) -> Address;
}

#[contractimpl]
impl BridgeProxy for BridgeProxyContract {
    fn initialize(e: Env, admin: Address, native: Address) {
        storage::extend_instance(&e);
        if storage::has_admin(&e) {
            panic_with_error!(&e, ProxyError::AlreadyInitializedError);
        }

        storage::set_admin(&e, &admin);
        storage::set_native(&e, &native);
    }

    fn deploy_bridge(
        e: Env,
        wasm_hash: BytesN<32>,
        salt: BytesN<32>,
        init_args: Vec<Val>,
    ) -> Address {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        let bridge = proxy::execute_deploy_bridge(&e, wasm_hash, salt, &init_args);

        e.events()
            .publish((Symbol::new(&e, "deploy"),), bridge.clone());
        bridge
    }

    fn is_bridge(e: Env, bridge: Address) -> bool {
        storage::extend_instance(&e);
        storage::is_bridge(&e, &bridge)
    }

    fn fund(e: Env, from: Address, amount: i128) {
        storage::extend_instance(&e);
        from.require_auth();

        proxy::execute_fund(&e, &from, amount);

        e.events()
            .publish((Symbol::new(&e, "fund"), from), amount);
    }

    fn convert(
        e: Env,
        bridge: Address,
        input_asset_a: AssetDescriptor,
        input_asset_b: AssetDescriptor,
        output_asset_a: AssetDescriptor,
        output_asset_b: AssetDescriptor,
        total_input_value: i128,
        interaction_nonce: u64,
        aux_data: u64,
    ) -> ConversionResult {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        let request = ConversionRequest {
            input_asset_a,
            input_asset_b,
            output_asset_a,
            output_asset_b,
            total_input_value,
            interaction_nonce,
            aux_data,
        };
        let result = proxy::execute_convert(&e, &bridge, &request);

        e.events().publish(
            (Symbol::new(&e, "convert"), bridge, interaction_nonce),
            result.clone(),
        );
        result
    }

    fn finalise(e: Env, interaction_nonce: u64) -> ConversionResult {
        storage::extend_instance(&e);
        let bridge = storage::get_pending(&e, interaction_nonce).map(|pending| pending.bridge);

        let result = proxy::execute_finalise(&e, interaction_nonce);

        // only a call that completes the interaction is recorded
        if let Some(bridge) = bridge {
            if !result.is_async {
                e.events().publish(
                    (Symbol::new(&e, "finalise"), bridge, interaction_nonce),
                    result.clone(),
                );
            }
        }
        result
    }

    fn get_pending(e: Env, interaction_nonce: u64) -> Option<PendingInteraction> {
        storage::extend_instance(&e);
        storage::get_pending(&e, interaction_nonce)
    }

    fn balance(e: Env, asset: AssetDescriptor) -> i128 {
        storage::extend_instance(&e);
        if !asset.is_valid() {
            panic_with_error!(&e, ProxyError::InvalidAssetError);
        }
        proxy::asset_balance(&e, &storage::get_native(&e), &asset)
    }

    fn admin(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_admin(&e)
    }

    fn native(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_native(&e)
    }
}

/// Require that an amount is not negative
///
/// ### Arguments
/// * `amount` - The amount
///
/// ### Panics
/// If the amount is negative
pub fn require_nonnegative(e: &Env, amount: i128) {
    if amount.is_negative() {
        panic_with_error!(e, ProxyError::NegativeAmountError);
    }
}
