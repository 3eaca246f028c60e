use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol};

pub(crate) const LEDGER_THRESHOLD_SHARED: u32 = 172800; // ~ 10 days
pub(crate) const LEDGER_BUMP_SHARED: u32 = 241920; // ~ 14 days

pub(crate) const LEDGER_THRESHOLD_INTERACTION: u32 = 518400; // ~ 30 days
pub(crate) const LEDGER_BUMP_INTERACTION: u32 = 535670; // ~ 31 days

/// The behavior of the mock bridge
///
/// `report_*` is what the bridge claims it delivered, `transfer_*` is what it actually transfers
/// to the proxy
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct MockBridgeConfig {
    pub is_async: bool,
    pub report_a: i128,
    pub report_b: i128,
    pub transfer_a: i128,
    pub transfer_b: i128,
    // panic after the outputs are transferred
    pub fail: bool,
    // whether a pending interaction can be finalised
    pub ready: bool,
}

impl MockBridgeConfig {
    /// A synchronous bridge that delivers and reports `output_a` and `output_b`
    pub fn settle(output_a: i128, output_b: i128) -> Self {
        MockBridgeConfig {
            is_async: false,
            report_a: output_a,
            report_b: output_b,
            transfer_a: output_a,
            transfer_b: output_b,
            fail: false,
            ready: true,
        }
    }
}

const PROXY_KEY: &str = "Proxy";
const NATIVE_KEY: &str = "Native";
const CONFIG_KEY: &str = "Config";

#[derive(Clone)]
#[contracttype]
pub enum MockBridgeDataKey {
    Pending(u64),
}

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/// Fetch the proxy allowed to convert
pub fn get_proxy(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, PROXY_KEY))
        .unwrap_optimized()
}

/// Set the proxy allowed to convert
pub fn set_proxy(e: &Env, proxy: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, PROXY_KEY), proxy);
}

/// Checks if the bridge is initialized
pub fn has_proxy(e: &Env) -> bool {
    e.storage().instance().has(&Symbol::new(e, PROXY_KEY))
}

/// Fetch the address of the native asset contract
pub fn get_native(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, NATIVE_KEY))
        .unwrap_optimized()
}

/// Set the address of the native asset contract
pub fn set_native(e: &Env, native: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, NATIVE_KEY), native);
}

/// Fetch the bridge behavior, settling nothing by default
pub fn get_config(e: &Env) -> MockBridgeConfig {
    e.storage()
        .instance()
        .get::<Symbol, MockBridgeConfig>(&Symbol::new(e, CONFIG_KEY))
        .unwrap_or(MockBridgeConfig::settle(0, 0))
}

/// Set the bridge behavior
pub fn set_config(e: &Env, config: &MockBridgeConfig) {
    e.storage()
        .instance()
        .set::<Symbol, MockBridgeConfig>(&Symbol::new(e, CONFIG_KEY), config);
}

/// Check if an interaction is waiting to be finalised
///
/// ### Arguments
/// * `interaction_nonce` - The nonce of the interaction
pub fn is_pending(e: &Env, interaction_nonce: u64) -> bool {
    let key = MockBridgeDataKey::Pending(interaction_nonce);
    if let Some(result) = e
        .storage()
        .persistent()
        .get::<MockBridgeDataKey, bool>(&key)
    {
        e.storage().persistent().extend_ttl(
            &key,
            LEDGER_THRESHOLD_INTERACTION,
            LEDGER_BUMP_INTERACTION,
        );
        result
    } else {
        false
    }
}

/// Mark an interaction as waiting to be finalised
///
/// ### Arguments
/// * `interaction_nonce` - The nonce of the interaction
pub fn set_pending(e: &Env, interaction_nonce: u64) {
    let key = MockBridgeDataKey::Pending(interaction_nonce);
    e.storage()
        .persistent()
        .set::<MockBridgeDataKey, bool>(&key, &true);
    e.storage().persistent().extend_ttl(
        &key,
        LEDGER_THRESHOLD_INTERACTION,
        LEDGER_BUMP_INTERACTION,
    );
}

/// Remove a pending interaction
///
/// ### Arguments
/// * `interaction_nonce` - The nonce of the interaction
pub fn del_pending(e: &Env, interaction_nonce: u64) {
    e.storage()
        .persistent()
        .remove(&MockBridgeDataKey::Pending(interaction_nonce));
}
