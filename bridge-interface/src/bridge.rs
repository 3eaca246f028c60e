use soroban_sdk::{contractclient, Env};

use crate::{AssetDescriptor, ConversionResult, FinaliseResult};

/// ### Bridge
///
/// The entry points every bridge contract exposes to the bridge proxy. A bridge wraps exactly one
/// external protocol.
///
/// A bridge must only move funds it was handed by the proxy or already custodies on the proxy's
/// behalf. Synchronous conversions transfer their outputs to the proxy before returning.
/// Asynchronous conversions return a pending result and deliver their outputs when finalised.
#[contractclient(name = "BridgeClient")]
pub trait Bridge {
    /// Convert the input assets into the output assets
    ///
    /// The proxy transfers `total_input_value` of each used, balance backed input asset to the
    /// bridge before calling `convert`.
    ///
    /// Returns the conversion result
    ///
    /// ### Arguments
    /// * `input_asset_a` - The first input asset
    /// * `input_asset_b` - The second input asset, or an unused asset
    /// * `output_asset_a` - The first output asset
    /// * `output_asset_b` - The second output asset, or an unused asset
    /// * `total_input_value` - The amount of each used input asset supplied
    /// * `interaction_nonce` - The unique id of the conversion session
    /// * `aux_data` - Protocol specific data
    ///
    /// ### Panics
    /// If the bridge does not support the asset combination or the conversion fails
    #[allow(clippy::too_many_arguments)]
    fn convert(
        e: Env,
        input_asset_a: AssetDescriptor,
        input_asset_b: AssetDescriptor,
        output_asset_a: AssetDescriptor,
        output_asset_b: AssetDescriptor,
        total_input_value: i128,
        interaction_nonce: u64,
        aux_data: u64,
    ) -> ConversionResult;

    /// Finalise an asynchronous conversion, transferring any outputs to the proxy
    ///
    /// Returns the output values and whether the interaction is complete
    ///
    /// ### Arguments
    /// * `input_asset_a` - The first input asset of the conversion
    /// * `input_asset_b` - The second input asset of the conversion
    /// * `output_asset_a` - The first output asset of the conversion
    /// * `output_asset_b` - The second output asset of the conversion
    /// * `interaction_nonce` - The id of the conversion session
    /// * `aux_data` - Protocol specific data
    ///
    /// ### Panics
    /// If the bridge is synchronous or the interaction is unknown
    fn finalise(
        e: Env,
        input_asset_a: AssetDescriptor,
        input_asset_b: AssetDescriptor,
        output_asset_a: AssetDescriptor,
        output_asset_b: AssetDescriptor,
        interaction_nonce: u64,
        aux_data: u64,
    ) -> FinaliseResult;
}
