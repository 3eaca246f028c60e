use bridge_interface::{AssetDescriptor, AssetType};
use sep_41_token::TokenClient;
use soroban_sdk::{Address, Env};

/// Fetch the proxy's balance of an asset
///
/// Virtual and unused assets have no on-chain balance and always return 0.
///
/// ### Arguments
/// * `native` - The address of the native asset contract
/// * `asset` - The asset to fetch the balance of
pub fn asset_balance(e: &Env, native: &Address, asset: &AssetDescriptor) -> i128 {
    match asset.balance_token(native) {
        Some(token) => TokenClient::new(e, &token).balance(&e.current_contract_address()),
        None => 0,
    }
}

/// The proxy's balances of the two output assets of a conversion, recorded before the bridge
/// is invoked
pub struct OutputBalances {
    pub balance_a: i128,
    pub balance_b: i128,
}

impl OutputBalances {
    /// Record the proxy's current balances of the output assets
    ///
    /// ### Arguments
    /// * `native` - The address of the native asset contract
    /// * `output_asset_a` - The first output asset
    /// * `output_asset_b` - The second output asset
    pub fn load(
        e: &Env,
        native: &Address,
        output_asset_a: &AssetDescriptor,
        output_asset_b: &AssetDescriptor,
    ) -> Self {
        OutputBalances {
            balance_a: asset_balance(e, native, output_asset_a),
            balance_b: asset_balance(e, native, output_asset_b),
        }
    }

    /// Resolve the output values of a conversion from the balances received since the
    /// balances were recorded
    ///
    /// Returns the authoritative (output_value_a, output_value_b)
    ///
    /// ### Arguments
    /// * `native` - The address of the native asset contract
    /// * `output_asset_a` - The first output asset
    /// * `output_asset_b` - The second output asset
    /// * `reported_a` - The output value of asset a reported by the bridge
    /// * `reported_b` - The output value of asset b reported by the bridge
    pub fn settle(
        &self,
        e: &Env,
        native: &Address,
        output_asset_a: &AssetDescriptor,
        output_asset_b: &AssetDescriptor,
        reported_a: i128,
        reported_b: i128,
    ) -> (i128, i128) {
        let received_a = asset_balance(e, native, output_asset_a) - self.balance_a;
        let received_b = asset_balance(e, native, output_asset_b) - self.balance_b;
        (
            resolve_output(output_asset_a, received_a, reported_a),
            resolve_output(output_asset_b, received_b, reported_b),
        )
    }
}

/// Balance backed outputs are worth what the proxy received. Virtual outputs have no balance
/// to measure, so the bridge's report stands.
fn resolve_output(asset: &AssetDescriptor, received: i128, reported: i128) -> i128 {
    match asset.asset_type {
        AssetType::Native | AssetType::Token => received.max(0),
        AssetType::Virtual => reported,
        AssetType::NotUsed => 0,
    }
}
