use bridge_interface::BridgeError;
use soroban_sdk::{log, panic_with_error, Address, BytesN, Env, Symbol, Val, Vec};

use crate::{errors::ProxyError, storage};

/// Deploy and initialize a bridge owned by the proxy
///
/// The bridge is initialized with the proxy's address followed by `init_args`
///
/// Returns the address of the deployed bridge
///
/// ### Arguments
/// * `wasm_hash` - The hash of the installed bridge wasm
/// * `salt` - The salt used to derive the bridge address
/// * `init_args` - The arguments passed to the bridge's `initialize` after the proxy address
///
/// ### Panics
/// If the bridge fails to initialize
pub fn execute_deploy_bridge(
    e: &Env,
    wasm_hash: BytesN<32>,
    salt: BytesN<32>,
    init_args: &Vec<Val>,
) -> Address {
    let bridge = e.deployer().with_current_contract(salt).deploy(wasm_hash);

    let mut args = init_args.clone();
    args.push_front(e.current_contract_address().to_val());
    let result = e.try_invoke_contract::<Val, BridgeError>(
        &bridge,
        &Symbol::new(e, "initialize"),
        args,
    );
    if !matches!(result, Ok(Ok(_))) {
        log!(e, "bridge failed to initialize", bridge);
        panic_with_error!(e, ProxyError::DeploymentError);
    }

    storage::set_bridge(e, &bridge);
    bridge
}
