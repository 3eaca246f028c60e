use soroban_sdk::{contractclient, Address, Env};

/// The liquid staking pool wrapped by the bridge
#[contractclient(name = "StakingPoolClient")]
pub trait StakingPool {
    /// The address of the staked token issued by the pool
    fn staked_token(e: Env) -> Address;

    /// Stake `amount` of the native asset from `from`, pulled through an allowance granted to
    /// the pool. Returns the staked tokens minted.
    fn submit(e: Env, from: Address, amount: i128) -> i128;

    /// Redeem `amount` staked tokens from `from`, burned through an allowance granted to the
    /// pool. Returns the native asset returned.
    fn redeem(e: Env, from: Address, amount: i128) -> i128;
}
