#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod contract;
mod errors;
mod proxy;
mod storage;
mod testutils;

pub use contract::*;
pub use errors::ProxyError;
pub use storage::{PendingInteraction, ProxyDataKey};
