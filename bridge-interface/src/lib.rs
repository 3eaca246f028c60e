#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod asset;
mod bridge;
mod conversion;
mod errors;

pub use asset::{AssetDescriptor, AssetType, TokenAddress};
pub use bridge::{Bridge, BridgeClient};
pub use conversion::{ConversionRequest, ConversionResult, FinaliseResult};
pub use errors::BridgeError;
