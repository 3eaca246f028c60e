use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
/// Error codes for the bridge proxy contract. Common errors are codes that match up with the built-in
/// contracts error reporting. Bridge proxy specific errors start at 1400.
pub enum ProxyError {
    // Common Errors
    InternalError = 1,
    AlreadyInitializedError = 3,

    UnauthorizedError = 4,

    NegativeAmountError = 8,

    // Bridge Proxy
    InvalidAssetError = 1400,
    InsufficientBalanceError = 1401,
    DeploymentError = 1402,
    BridgeExecutionError = 1403,
    UnknownInteraction = 1404,
    InteractionExists = 1405,
}
