#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod contract;
mod dependencies;
mod staking;
mod storage;
mod testutils;

pub use contract::*;
pub use storage::StakingBridgeConfig;
