use bridge_interface::{BridgeClient, ConversionResult};
use soroban_sdk::{log, panic_with_error, Env};

use crate::{errors::ProxyError, storage};

use super::OutputBalances;

/// Finalise a pending asynchronous interaction
///
/// Finalising a completed interaction again, or one settled synchronously, returns the stored
/// result. If the bridge can't complete the interaction yet, a pending result is returned and the
/// interaction stays pending.
///
/// Returns the conversion result
///
/// ### Arguments
/// * `interaction_nonce` - The nonce of the interaction
///
/// ### Panics
/// If the nonce is unknown or the bridge fails
pub fn execute_finalise(e: &Env, interaction_nonce: u64) -> ConversionResult {
    if let Some(result) = storage::get_final(e, interaction_nonce) {
        return result;
    }
    let pending = match storage::get_pending(e, interaction_nonce) {
        Some(pending) => pending,
        None => panic_with_error!(e, ProxyError::UnknownInteraction),
    };
    let request = &pending.request;
    let native = storage::get_native(e);

    let balances = OutputBalances::load(
        e,
        &native,
        &request.output_asset_a,
        &request.output_asset_b,
    );
    let finalised = match BridgeClient::new(e, &pending.bridge).try_finalise(
        &request.input_asset_a,
        &request.input_asset_b,
        &request.output_asset_a,
        &request.output_asset_b,
        &interaction_nonce,
        &request.aux_data,
    ) {
        Ok(Ok(result)) => result,
        Err(Ok(error)) => {
            log!(
                e,
                "bridge finalise failed",
                pending.bridge.clone(),
                error.get_code()
            );
            panic_with_error!(e, ProxyError::BridgeExecutionError)
        }
        _ => {
            log!(e, "bridge finalise aborted", pending.bridge.clone());
            panic_with_error!(e, ProxyError::BridgeExecutionError)
        }
    };
    if !finalised.interaction_complete {
        return ConversionResult::pending();
    }

    let (output_value_a, output_value_b) = balances.settle(
        e,
        &native,
        &request.output_asset_a,
        &request.output_asset_b,
        finalised.output_value_a,
        finalised.output_value_b,
    );
    let result = ConversionResult {
        is_async: false,
        output_value_a,
        output_value_b,
    };
    storage::del_pending(e, interaction_nonce);
    storage::set_final(e, interaction_nonce, &result);
    result
}
