use bridge_interface::{ConversionRequest, ConversionResult};
use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol};

pub(crate) const LEDGER_THRESHOLD_SHARED: u32 = 172800; // ~ 10 days
pub(crate) const LEDGER_BUMP_SHARED: u32 = 241920; // ~ 14 days

pub(crate) const LEDGER_THRESHOLD_INTERACTION: u32 = 518400; // ~ 30 days
pub(crate) const LEDGER_BUMP_INTERACTION: u32 = 535670; // ~ 31 days

/********** Storage Types **********/

/// An asynchronous conversion waiting to be finalised
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PendingInteraction {
    pub bridge: Address,
    pub request: ConversionRequest,
}

/********** Storage Key Types **********/

const ADMIN_KEY: &str = "Admin";
const NATIVE_KEY: &str = "Native";

#[derive(Clone)]
#[contracttype]
pub enum ProxyDataKey {
    // Bridges deployed by the proxy
    Bridge(Address),
    // Pending asynchronous interactions by nonce
    Pending(u64),
    // Final results of completed asynchronous interactions by nonce
    Final(u64),
}

/****************************
**         Storage         **
****************************/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/********** Admin **********/

/// Fetch the current admin Address
pub fn get_admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY))
        .unwrap_optimized()
}

/// Set a new admin
///
/// ### Arguments
/// * `new_admin` - The Address for the admin
pub fn set_admin(e: &Env, new_admin: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY), new_admin);
}

/// Checks if an admin is set
pub fn has_admin(e: &Env) -> bool {
    e.storage().instance().has(&Symbol::new(e, ADMIN_KEY))
}

/********** Native Asset **********/

/// Fetch the address of the native asset contract
pub fn get_native(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, NATIVE_KEY))
        .unwrap_optimized()
}

/// Set the address of the native asset contract
///
/// ### Arguments
/// * `native` - The address of the native asset contract
pub fn set_native(e: &Env, native: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, NATIVE_KEY), native);
}

/********** Deployed Bridges **********/

/// Check if the bridge was deployed by the proxy
///
/// ### Arguments
/// * `bridge` - The address of the bridge
pub fn is_bridge(e: &Env, bridge: &Address) -> bool {
    let key = ProxyDataKey::Bridge(bridge.clone());
    if let Some(result) = e.storage().persistent().get::<ProxyDataKey, bool>(&key) {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
        result
    } else {
        false
    }
}

/// Mark a bridge as deployed by the proxy
///
/// ### Arguments
/// * `bridge` - The address of the bridge
pub fn set_bridge(e: &Env, bridge: &Address) {
    let key = ProxyDataKey::Bridge(bridge.clone());
    e.storage()
        .persistent()
        .set::<ProxyDataKey, bool>(&key, &true);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/********** Interactions **********/

/// Fetch a pending interaction, or None if the nonce is not pending
///
/// ### Arguments
/// * `interaction_nonce` - The nonce of the interaction
pub fn get_pending(e: &Env, interaction_nonce: u64) -> Option<PendingInteraction> {
    let key = ProxyDataKey::Pending(interaction_nonce);
    let result = e
        .storage()
        .persistent()
        .get::<ProxyDataKey, PendingInteraction>(&key);
    if result.is_some() {
        e.storage().persistent().extend_ttl(
            &key,
            LEDGER_THRESHOLD_INTERACTION,
            LEDGER_BUMP_INTERACTION,
        );
    }
    result
}

/// Set a pending interaction
///
/// ### Arguments
/// * `interaction_nonce` - The nonce of the interaction
/// * `pending` - The pending interaction
pub fn set_pending(e: &Env, interaction_nonce: u64, pending: &PendingInteraction) {
    let key = ProxyDataKey::Pending(interaction_nonce);
    e.storage()
        .persistent()
        .set::<ProxyDataKey, PendingInteraction>(&key, pending);
    e.storage().persistent().extend_ttl(
        &key,
        LEDGER_THRESHOLD_INTERACTION,
        LEDGER_BUMP_INTERACTION,
    );
}

/// Delete a pending interaction
///
/// ### Arguments
/// * `interaction_nonce` - The nonce of the interaction
pub fn del_pending(e: &Env, interaction_nonce: u64) {
    e.storage()
        .persistent()
        .remove(&ProxyDataKey::Pending(interaction_nonce));
}

/// Fetch the final result of a completed interaction, or None if it has not been finalised
///
/// ### Arguments
/// * `interaction_nonce` - The nonce of the interaction
pub fn get_final(e: &Env, interaction_nonce: u64) -> Option<ConversionResult> {
    let key = ProxyDataKey::Final(interaction_nonce);
    let result = e
        .storage()
        .persistent()
        .get::<ProxyDataKey, ConversionResult>(&key);
    if result.is_some() {
        e.storage().persistent().extend_ttl(
            &key,
            LEDGER_THRESHOLD_INTERACTION,
            LEDGER_BUMP_INTERACTION,
        );
    }
    result
}

/// Set the final result of a completed interaction
///
/// ### Arguments
/// * `interaction_nonce` - The nonce of the interaction
/// * `result` - The final conversion result
pub fn set_final(e: &Env, interaction_nonce: u64, result: &ConversionResult) {
    let key = ProxyDataKey::Final(interaction_nonce);
    e.storage()
        .persistent()
        .set::<ProxyDataKey, ConversionResult>(&key, result);
    e.storage().persistent().extend_ttl(
        &key,
        LEDGER_THRESHOLD_INTERACTION,
        LEDGER_BUMP_INTERACTION,
    );
}

/// Check if an interaction nonce is pending or has been finalised
///
/// ### Arguments
/// * `interaction_nonce` - The nonce of the interaction
pub fn has_interaction(e: &Env, interaction_nonce: u64) -> bool {
    e.storage()
        .persistent()
        .has(&ProxyDataKey::Pending(interaction_nonce))
        || e
            .storage()
            .persistent()
            .has(&ProxyDataKey::Final(interaction_nonce))
}
