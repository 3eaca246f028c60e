use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
/// Error codes for the mock staking pool. Pool specific errors start at 1600.
pub enum StakingPoolError {
    // Common Errors
    InternalError = 1,
    AlreadyInitializedError = 3,

    UnauthorizedError = 4,

    NegativeAmountError = 8,

    // Staking Pool
    InvalidRate = 1600,
    InsufficientLiquidity = 1601,
}
