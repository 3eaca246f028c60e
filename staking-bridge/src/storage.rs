use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol};

pub(crate) const LEDGER_THRESHOLD_SHARED: u32 = 172800; // ~ 10 days
pub(crate) const LEDGER_BUMP_SHARED: u32 = 241920; // ~ 14 days

/********** Storage Types **********/

/// The bridge's config
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct StakingBridgeConfig {
    pub proxy: Address,        // the only address allowed to convert through the bridge
    pub native: Address,       // the native asset contract
    pub staking_pool: Address, // the wrapped staking pool
    pub staked_token: Address, // the token issued by the staking pool
}

/********** Storage Key Types **********/

const CONFIG_KEY: &str = "Config";

/****************************
**         Storage         **
****************************/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/// Fetch the bridge config
pub fn get_config(e: &Env) -> StakingBridgeConfig {
    e.storage()
        .instance()
        .get::<Symbol, StakingBridgeConfig>(&Symbol::new(e, CONFIG_KEY))
        .unwrap_optimized()
}

/// Set the bridge config
///
/// ### Arguments
/// * `config` - The config for the bridge
pub fn set_config(e: &Env, config: &StakingBridgeConfig) {
    e.storage()
        .instance()
        .set::<Symbol, StakingBridgeConfig>(&Symbol::new(e, CONFIG_KEY), config);
}

/// Checks if the bridge has been initialized
pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&Symbol::new(e, CONFIG_KEY))
}
