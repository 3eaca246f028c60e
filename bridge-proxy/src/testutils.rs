#![cfg(test)]

use crate::{storage, BridgeProxyContract};

use soroban_sdk::{testutils::Address as _, Address, Env, IntoVal};

use mock_bridge::{MockBridgeClient, MockBridgeContract};
use sep_41_token::testutils::{MockTokenClient, MockTokenWASM};

pub(crate) fn create_bridge_proxy(e: &Env) -> Address {
    e.register_contract(None, BridgeProxyContract {})
}

/// Create the native asset contract and set it as the proxy's native asset
pub(crate) fn create_native_token<'a>(
    e: &Env,
    proxy: &Address,
    admin: &Address,
) -> (Address, MockTokenClient<'a>) {
    let contract_address = e.register_stellar_asset_contract(admin.clone());
    e.as_contract(proxy, || {
        storage::set_native(e, &contract_address);
    });
    (contract_address.clone(), MockTokenClient::new(e, &contract_address))
}

pub(crate) fn create_token_contract<'a>(
    e: &Env,
    admin: &Address,
) -> (Address, MockTokenClient<'a>) {
    let contract_address = Address::generate(e);
    e.register_contract_wasm(&contract_address, MockTokenWASM);
    let client = MockTokenClient::new(e, &contract_address);
    client.initialize(admin, &7, &"unit".into_val(e), &"test".into_val(e));
    (contract_address, client)
}

pub(crate) fn create_mock_bridge<'a>(
    e: &Env,
    proxy: &Address,
    native: &Address,
) -> (Address, MockBridgeClient<'a>) {
    let contract_address = e.register_contract(None, MockBridgeContract {});
    let client = MockBridgeClient::new(e, &contract_address);
    client.initialize(proxy, native);
    (contract_address, client)
}
