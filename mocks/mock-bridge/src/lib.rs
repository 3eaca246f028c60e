#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod bridge;
mod storage;

pub use bridge::*;
pub use storage::MockBridgeConfig;
