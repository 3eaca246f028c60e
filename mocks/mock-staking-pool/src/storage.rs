use soroban_sdk::{unwrap::UnwrapOptimized, Address, Env, Symbol};

pub(crate) const LEDGER_THRESHOLD_SHARED: u32 = 172800; // ~ 10 days
pub(crate) const LEDGER_BUMP_SHARED: u32 = 241920; // ~ 14 days

const ADMIN_KEY: &str = "Admin";
const NATIVE_KEY: &str = "Native";
const STAKED_KEY: &str = "Staked";
const RATE_KEY: &str = "Rate";

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

pub fn get_admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY))
        .unwrap_optimized()
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY), admin);
}

pub fn has_admin(e: &Env) -> bool {
    e.storage().instance().has(&Symbol::new(e, ADMIN_KEY))
}

pub fn get_native(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, NATIVE_KEY))
        .unwrap_optimized()
}

pub fn set_native(e: &Env, native: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, NATIVE_KEY), native);
}

pub fn get_staked_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, STAKED_KEY))
        .unwrap_optimized()
}

pub fn set_staked_token(e: &Env, staked_token: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, STAKED_KEY), staked_token);
}

/// Fetch the native value of one staked token, in 9 decimals
pub fn get_rate(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get::<Symbol, i128>(&Symbol::new(e, RATE_KEY))
        .unwrap_optimized()
}

pub fn set_rate(e: &Env, rate: i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, RATE_KEY), &rate);
}
