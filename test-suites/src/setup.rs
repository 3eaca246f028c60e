use soroban_sdk::{testutils::Address as _, Address};

use crate::test_fixture::{TestFixture, SCALAR_7};

/// Create a test fixture with a funded proxy and a staking pool holding native liquidity
///
/// Returns the fixture and `frodo`, a user who staked directly with the pool
pub fn create_fixture_with_data<'a>() -> (TestFixture<'a>, Address) {
    let fixture = TestFixture::create();

    // fund the proxy
    fixture.fund_proxy(350_000 * SCALAR_7);

    // frodo stakes with the pool so redemptions have liquidity
    let frodo = Address::generate(&fixture.env);
    let amount = 1_000_000 * SCALAR_7;
    fixture.native.mint(&frodo, &amount);
    fixture.native.approve(
        &frodo,
        &fixture.staking_pool.address,
        &amount,
        &fixture.env.ledger().sequence(),
    );
    fixture.staking_pool.submit(&frodo, &amount);

    (fixture, frodo)
}
