use bridge_interface::{AssetDescriptor, BridgeClient, ConversionRequest, ConversionResult};
use sep_41_token::TokenClient;
use soroban_sdk::{log, panic_with_error, Address, Env, Symbol};

use crate::{
    contract::require_nonnegative,
    errors::ProxyError,
    storage::{self, PendingInteraction},
};

use super::OutputBalances;

/// Execute a conversion through a bridge
///
/// Returns the conversion result, with output values measured from the balances the proxy
/// received during the call
///
/// ### Arguments
/// * `bridge` - The address of the bridge to convert through
/// * `request` - The conversion request
///
/// ### Panics
/// If the request is invalid, the proxy can't fund the inputs, or the bridge fails
pub fn execute_convert(e: &Env, bridge: &Address, request: &ConversionRequest) -> ConversionResult {
    require_nonnegative(e, request.total_input_value);
    let native = storage::get_native(e);
    require_valid_request(e, &native, request);
    if storage::has_interaction(e, request.interaction_nonce) {
        panic_with_error!(e, ProxyError::InteractionExists);
    }

    // forward the inputs to the bridge
    forward_input(
        e,
        &native,
        bridge,
        &request.input_asset_a,
        request.total_input_value,
    );
    forward_input(
        e,
        &native,
        bridge,
        &request.input_asset_b,
        request.total_input_value,
    );

    let balances = OutputBalances::load(
        e,
        &native,
        &request.output_asset_a,
        &request.output_asset_b,
    );

    let reported = match BridgeClient::new(e, bridge).try_convert(
        &request.input_asset_a,
        &request.input_asset_b,
        &request.output_asset_a,
        &request.output_asset_b,
        &request.total_input_value,
        &request.interaction_nonce,
        &request.aux_data,
    ) {
        Ok(Ok(result)) => result,
        Ok(Err(_)) => {
            log!(e, "bridge returned a malformed result", bridge.clone());
            panic_with_error!(e, ProxyError::BridgeExecutionError)
        }
        Err(Ok(error)) => {
            log!(e, "bridge conversion failed", bridge.clone(), error.get_code());
            panic_with_error!(e, ProxyError::BridgeExecutionError)
        }
        Err(Err(_)) => {
            log!(e, "bridge conversion aborted", bridge.clone());
            panic_with_error!(e, ProxyError::BridgeExecutionError)
        }
    };

    if reported.is_async {
        storage::set_pending(
            e,
            request.interaction_nonce,
            &PendingInteraction {
                bridge: bridge.clone(),
                request: request.clone(),
            },
        );
        return ConversionResult::pending();
    }

    let (output_value_a, output_value_b) = balances.settle(
        e,
        &native,
        &request.output_asset_a,
        &request.output_asset_b,
        reported.output_value_a,
        reported.output_value_b,
    );
    let result = ConversionResult {
        is_async: false,
        output_value_a,
        output_value_b,
    };
    // settled nonces are final and can't be reused
    storage::set_final(e, request.interaction_nonce, &result);
    if result != reported {
        e.events().publish(
            (
                Symbol::new(e, "bad_report"),
                bridge.clone(),
                request.interaction_nonce,
            ),
            (
                reported.output_value_a,
                reported.output_value_b,
                output_value_a,
                output_value_b,
            ),
        );
    }
    result
}

/// Require that every asset in the request is well formed, the first input is used, and the
/// outputs don't share a balance
fn require_valid_request(e: &Env, native: &Address, request: &ConversionRequest) {
    if !request.input_asset_a.is_used()
        || !request.input_asset_a.is_valid()
        || !request.input_asset_b.is_valid()
        || !request.output_asset_a.is_valid()
        || !request.output_asset_b.is_valid()
    {
        panic_with_error!(e, ProxyError::InvalidAssetError);
    }

    // two outputs backed by the same balance can't be told apart
    let token_a = request.output_asset_a.balance_token(native);
    if token_a.is_some() && token_a == request.output_asset_b.balance_token(native) {
        panic_with_error!(e, ProxyError::InvalidAssetError);
    }
}

/// Transfer `amount` of an input asset from the proxy to the bridge. Assets without a balance
/// are not transferred.
fn forward_input(e: &Env, native: &Address, bridge: &Address, asset: &AssetDescriptor, amount: i128) {
    if let Some(token) = asset.balance_token(native) {
        let token_client = TokenClient::new(e, &token);
        let proxy = e.current_contract_address();
        if token_client.balance(&proxy) < amount {
            panic_with_error!(e, ProxyError::InsufficientBalanceError);
        }
        if amount > 0 {
            token_client.transfer(&proxy, bridge, &amount);
        }
    }
}
