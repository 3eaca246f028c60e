use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
/// Error codes shared by bridge contracts. Common errors are codes that match up with the built-in
/// contracts error reporting. Bridge specific errors start at 1500.
pub enum BridgeError {
    // Common Errors
    InternalError = 1,
    AlreadyInitializedError = 3,

    UnauthorizedError = 4,

    NegativeAmountError = 8,

    // Bridge
    InvalidInputAsset = 1500,
    InvalidOutputAsset = 1501,
    AsyncNotSupported = 1502,
    UnknownInteraction = 1503,
    OutputBelowMinimum = 1504,
    ConversionFailed = 1505,
}
