use soroban_sdk::contracttype;

use crate::AssetDescriptor;

/// A single conversion session submitted to a bridge
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ConversionRequest {
    pub input_asset_a: AssetDescriptor,
    pub input_asset_b: AssetDescriptor,
    pub output_asset_a: AssetDescriptor,
    pub output_asset_b: AssetDescriptor,
    pub total_input_value: i128, // supplied of input_asset_a, and of input_asset_b when it is used
    pub interaction_nonce: u64,
    pub aux_data: u64,
}

/// The settlement result of a conversion
///
/// `is_async` results carry no output value. The outputs are delivered later through `finalise`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ConversionResult {
    pub is_async: bool,
    pub output_value_a: i128,
    pub output_value_b: i128,
}

impl ConversionResult {
    /// A pending result for an asynchronous conversion
    pub fn pending() -> Self {
        ConversionResult {
            is_async: true,
            output_value_a: 0,
            output_value_b: 0,
        }
    }
}

/// The result of finalising an asynchronous conversion
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FinaliseResult {
    pub output_value_a: i128,
    pub output_value_b: i128,
    pub interaction_complete: bool,
}
