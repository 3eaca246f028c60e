#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod errors;
mod staking_pool;
mod storage;

pub use errors::StakingPoolError;
pub use staking_pool::*;

/// Fixed point scalar for exchange rates
pub const SCALAR_9: i128 = 1_000_000_000;
