mod staking_pool;
pub use staking_pool::StakingPoolClient;
