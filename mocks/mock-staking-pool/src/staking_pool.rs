use crate::{errors::StakingPoolError, storage, SCALAR_9};
use sep_41_token::TokenClient;
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{
    contract, contractimpl, panic_with_error, token::StellarAssetClient,
    unwrap::UnwrapOptimized, Address, Env, Symbol,
};

/// ### MockStakingPool
///
/// A liquid staking pool that issues a staked token for the native asset at an admin set rate
#[contract]
pub struct MockStakingPool;

pub trait MockStakingPoolTrait {
    /// Initialize the staking pool
    ///
    /// The pool must be the admin of `staked_token`
    ///
    /// ### Arguments
    /// * `admin` - The admin of the pool
    /// * `native` - The address of the native asset contract
    /// * `staked_token` - The address of the staked token
    /// * `rate` - The native value of one staked token, in 9 decimals
    fn initialize(e: Env, admin: Address, native: Address, staked_token: Address, rate: i128);

    /// (Admin only) Set the exchange rate
    ///
    /// ### Arguments
    /// * `rate` - The native value of one staked token, in 9 decimals
    fn set_rate(e: Env, rate: i128);

    /// Fetch the exchange rate
    fn get_rate(e: Env) -> i128;

    /// Fetch the address of the staked token
    fn staked_token(e: Env) -> Address;

    /// Stake native tokens from `from`. The pool pulls `amount` with an allowance `from` granted
    /// the pool.
    ///
    /// Returns the amount of staked tokens minted to `from`
    ///
    /// ### Arguments
    /// * `from` - The address staking
    /// * `amount` - The amount of the native asset to stake
    fn submit(e: Env, from: Address, amount: i128) -> i128;

    /// Redeem staked tokens from `from`. The pool burns `amount` with an allowance `from` granted
    /// the pool.
    ///
    /// Returns the amount of the native asset sent to `from`
    ///
    /// ### Arguments
    /// * `from` - The address redeeming
    /// * `amount` - The amount of staked tokens to redeem
    fn redeem(e: Env, from: Address, amount: i128) -> i128;
}

#[contractimpl]
impl MockStakingPoolTrait for MockStakingPool {
    fn initialize(e: Env, admin: Address, native: Address, staked_token: Address, rate: i128) {
        storage::extend_instance(&e);
        if storage::has_admin(&e) {
            panic_with_error!(&e, StakingPoolError::AlreadyInitializedError);
        }
        require_valid_rate(&e, rate);

        storage::set_admin(&e, &admin);
        storage::set_native(&e, &native);
        storage::set_staked_token(&e, &staked_token);
        storage::set_rate(&e, rate);
    }

    fn set_rate(e: Env, rate: i128) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();
        require_valid_rate(&e, rate);

        storage::set_rate(&e, rate);

        e.events().publish((Symbol::new(&e, "set_rate"),), rate);
    }

    fn get_rate(e: Env) -> i128 {
        storage::get_rate(&e)
    }

    fn staked_token(e: Env) -> Address {
        storage::get_staked_token(&e)
    }

    fn submit(e: Env, from: Address, amount: i128) -> i128 {
        storage::extend_instance(&e);
        from.require_auth();
        require_nonnegative(&e, amount);

        let to_mint = amount
            .fixed_div_floor(storage::get_rate(&e), SCALAR_9)
            .unwrap_optimized();
        let pool = e.current_contract_address();
        if amount > 0 {
            TokenClient::new(&e, &storage::get_native(&e)).transfer_from(
                &pool, &from, &pool, &amount,
            );
        }
        if to_mint > 0 {
            StellarAssetClient::new(&e, &storage::get_staked_token(&e)).mint(&from, &to_mint);
        }

        e.events()
            .publish((Symbol::new(&e, "submit"), from), (amount, to_mint));
        to_mint
    }

    fn redeem(e: Env, from: Address, amount: i128) -> i128 {
        storage::extend_instance(&e);
        from.require_auth();
        require_nonnegative(&e, amount);

        let to_return = amount
            .fixed_mul_floor(storage::get_rate(&e), SCALAR_9)
            .unwrap_optimized();
        let pool = e.current_contract_address();
        let native_client = TokenClient::new(&e, &storage::get_native(&e));
        if native_client.balance(&pool) < to_return {
            panic_with_error!(&e, StakingPoolError::InsufficientLiquidity);
        }
        if amount > 0 {
            TokenClient::new(&e, &storage::get_staked_token(&e)).burn_from(&pool, &from, &amount);
        }
        if to_return > 0 {
            native_client.transfer(&pool, &from, &to_return);
        }

        e.events()
            .publish((Symbol::new(&e, "redeem"), from), (amount, to_return));
        to_return
    }
}

fn require_valid_rate(e: &Env, rate: i128) {
    if rate <= 0 {
        panic_with_error!(e, StakingPoolError::InvalidRate);
    }
}

fn require_nonnegative(e: &Env, amount: i128) {
    if amount.is_negative() {
        panic_with_error!(e, StakingPoolError::NegativeAmountError);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sep_41_token::testutils::MockTokenClient;
    use soroban_sdk::{
        testutils::{Address as _, Events},
        vec, IntoVal,
    };

    fn create_staking_pool<'a>(
        e: &Env,
        admin: &Address,
        rate: i128,
    ) -> (
        MockStakingPoolClient<'a>,
        MockTokenClient<'a>,
        MockTokenClient<'a>,
    ) {
        let pool = e.register_contract(None, MockStakingPool {});
        let native = e.register_stellar_asset_contract(admin.clone());
        let staked_token = e.register_stellar_asset_contract(pool.clone());
        let client = MockStakingPoolClient::new(e, &pool);
        client.initialize(admin, &native, &staked_token, &rate);
        (
            client,
            MockTokenClient::new(e, &native),
            MockTokenClient::new(e, &staked_token),
        )
    }

    #[test]
    fn test_submit_and_redeem() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let samwise = Address::generate(&e);
        let (pool_client, native_client, staked_client) =
            create_staking_pool(&e, &bombadil, 1_250_000_000);

        native_client.mint(&samwise, &100_0000000);
        native_client.approve(&samwise, &pool_client.address, &100_0000000, &e.ledger().sequence());

        let minted = pool_client.submit(&samwise, &100_0000000);
        assert_eq!(minted, 80_0000000);
        assert_eq!(staked_client.balance(&samwise), 80_0000000);
        assert_eq!(native_client.balance(&samwise), 0);
        assert_eq!(native_client.balance(&pool_client.address), 100_0000000);

        let events = e.events().all();
        assert_eq!(
            vec![&e, events.last_unchecked()],
            vec![
                &e,
                (
                    pool_client.address.clone(),
                    (Symbol::new(&e, "submit"), samwise.clone()).into_val(&e),
                    (100_0000000i128, 80_0000000i128).into_val(&e)
                )
            ]
        );

        staked_client.approve(&samwise, &pool_client.address, &40_0000000, &e.ledger().sequence());
        let returned = pool_client.redeem(&samwise, &40_0000000);
        assert_eq!(returned, 50_0000000);
        assert_eq!(staked_client.balance(&samwise), 40_0000000);
        assert_eq!(native_client.balance(&samwise), 50_0000000);
    }

    #[test]
    fn test_set_rate() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let (pool_client, _, _) = create_staking_pool(&e, &bombadil, SCALAR_9);

        pool_client.set_rate(&1_100_000_000);
        assert_eq!(pool_client.get_rate(), 1_100_000_000);
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1600)")]
    fn test_set_rate_zero() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let (pool_client, _, _) = create_staking_pool(&e, &bombadil, SCALAR_9);

        pool_client.set_rate(&0);
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1601)")]
    fn test_redeem_insufficient_liquidity() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let samwise = Address::generate(&e);
        let (pool_client, native_client, staked_client) =
            create_staking_pool(&e, &bombadil, SCALAR_9);

        native_client.mint(&samwise, &10_0000000);
        native_client.approve(&samwise, &pool_client.address, &10_0000000, &e.ledger().sequence());
        pool_client.submit(&samwise, &10_0000000);

        pool_client.set_rate(&2_000_000_000);
        staked_client.approve(&samwise, &pool_client.address, &10_0000000, &e.ledger().sequence());
        pool_client.redeem(&samwise, &10_0000000);
    }
}
