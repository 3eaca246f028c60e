#![cfg(test)]

use bridge_interface::{AssetDescriptor, ConversionResult};
use mock_bridge::MockBridgeConfig;
use rand::Rng;
use soroban_sdk::{testutils::Events, vec, Error, IntoVal, Symbol};
use test_suites::{create_fixture_with_data, test_fixture::SCALAR_7};

/// Output values match the balances the proxy received, whatever the bridge reports
#[test]
fn test_outputs_are_measured() {
    let (fixture, _) = create_fixture_with_data();
    let proxy = &fixture.proxy;
    let bridge = &fixture.mock_bridge.address;
    let native = fixture.native_asset();
    let staked = fixture.staked_asset();
    let not_used = AssetDescriptor::not_used();

    fixture
        .staked_token
        .mint(bridge, &(1_000_000 * SCALAR_7));

    let mut rng = rand::thread_rng();
    for nonce in 1..=10u64 {
        let transfer = rng.gen_range(0, 1_000 * SCALAR_7);
        let report = rng.gen_range(0, 1_000 * SCALAR_7);
        let amount = rng.gen_range(0, 1_000 * SCALAR_7);
        let mut config = MockBridgeConfig::settle(transfer, 0);
        config.report_a = report;
        config.report_b = rng.gen_range(0, 10);
        fixture.mock_bridge.set_config(&config);

        let (pre_native, pre_staked) = fixture.balances(&proxy.address);
        let result = proxy.convert(
            bridge, &native, &not_used, &staked, &not_used, &amount, &nonce, &0,
        );
        assert_eq!(
            result,
            ConversionResult {
                is_async: false,
                output_value_a: transfer,
                output_value_b: 0,
            }
        );
        assert_eq!(
            fixture.balances(&proxy.address),
            (pre_native - amount, pre_staked + transfer)
        );
    }
}

#[test]
fn test_misreport_is_recorded() {
    let (fixture, _) = create_fixture_with_data();
    let proxy = &fixture.proxy;
    let bridge = &fixture.mock_bridge.address;
    let native = fixture.native_asset();
    let staked = fixture.staked_asset();
    let not_used = AssetDescriptor::not_used();

    fixture.staked_token.mint(bridge, &(100 * SCALAR_7));
    let mut config = MockBridgeConfig::settle(10 * SCALAR_7, 0);
    config.report_a = 50 * SCALAR_7;
    fixture.mock_bridge.set_config(&config);

    let result = proxy.convert(
        bridge,
        &native,
        &not_used,
        &staked,
        &not_used,
        &(20 * SCALAR_7),
        &1,
        &0,
    );
    assert_eq!(result.output_value_a, 10 * SCALAR_7);

    // the mismatch is published ahead of the convert event
    let events = fixture.env.events().all();
    let bad_report = events.get_unchecked(events.len() - 2);
    assert_eq!(
        vec![&fixture.env, bad_report],
        vec![
            &fixture.env,
            (
                proxy.address.clone(),
                (Symbol::new(&fixture.env, "bad_report"), bridge.clone(), 1u64)
                    .into_val(&fixture.env),
                (50 * SCALAR_7, 0i128, 10 * SCALAR_7, 0i128).into_val(&fixture.env)
            )
        ]
    );
}

#[test]
fn test_insufficient_balance_changes_nothing() {
    let (fixture, _) = create_fixture_with_data();
    let proxy = &fixture.proxy;
    let bridge = &fixture.staking_bridge.address;
    let native = fixture.native_asset();
    let staked = fixture.staked_asset();
    let not_used = AssetDescriptor::not_used();

    let pre_proxy = fixture.balances(&proxy.address);
    let pre_bridge = fixture.balances(bridge);
    let pre_pool = fixture.balances(&fixture.staking_pool.address);

    let result = proxy.try_convert(
        bridge,
        &native,
        &not_used,
        &staked,
        &not_used,
        &(pre_proxy.0 + 1),
        &1,
        &0,
    );
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(1401))));
    assert_eq!(fixture.balances(&proxy.address), pre_proxy);
    assert_eq!(fixture.balances(bridge), pre_bridge);
    assert_eq!(fixture.balances(&fixture.staking_pool.address), pre_pool);

    // the nonce was not consumed
    let result = proxy.convert(
        bridge,
        &native,
        &not_used,
        &staked,
        &not_used,
        &pre_proxy.0,
        &1,
        &0,
    );
    assert!(!result.is_async);
    assert_eq!(fixture.balances(&proxy.address).0, 0);
}

#[test]
fn test_failed_bridge_is_atomic() {
    let (fixture, _) = create_fixture_with_data();
    let proxy = &fixture.proxy;
    let native = fixture.native_asset();
    let staked = fixture.staked_asset();
    let not_used = AssetDescriptor::not_used();

    // the mock bridge moves its outputs and then fails
    let mock_bridge = &fixture.mock_bridge.address;
    fixture.staked_token.mint(mock_bridge, &(100 * SCALAR_7));
    let mut config = MockBridgeConfig::settle(40 * SCALAR_7, 0);
    config.fail = true;
    fixture.mock_bridge.set_config(&config);

    let pre_proxy = fixture.balances(&proxy.address);
    let pre_bridge = fixture.balances(mock_bridge);
    let result = proxy.try_convert(
        mock_bridge,
        &native,
        &not_used,
        &staked,
        &not_used,
        &(30 * SCALAR_7),
        &1,
        &0,
    );
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(1403))));
    assert_eq!(fixture.balances(&proxy.address), pre_proxy);
    assert_eq!(fixture.balances(mock_bridge), pre_bridge);
    assert!(proxy.get_pending(&1).is_none());

    // the staking bridge rejects an output below the minimum after staking
    let staking_bridge = &fixture.staking_bridge.address;
    let result = proxy.try_convert(
        staking_bridge,
        &native,
        &not_used,
        &staked,
        &not_used,
        &(30 * SCALAR_7),
        &2,
        &((30 * SCALAR_7) as u64),
    );
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(1403))));
    assert_eq!(fixture.balances(&proxy.address), pre_proxy);
    assert_eq!(fixture.balances(staking_bridge), (0, 0));
}

#[test]
fn test_balance_queries_are_stable() {
    let (fixture, frodo) = create_fixture_with_data();
    let proxy = &fixture.proxy;
    let native = fixture.native_asset();
    let staked = fixture.staked_asset();

    let native_balance = proxy.balance(&native);
    let staked_balance = proxy.balance(&staked);
    assert_eq!(proxy.balance(&native), native_balance);
    assert_eq!(proxy.balance(&staked), staked_balance);
    assert_eq!(fixture.native.balance(&proxy.address), native_balance);

    // unrelated activity does not move the proxy's balances
    fixture.native.mint(&frodo, &(10 * SCALAR_7));
    fixture.jump(60 * 60);
    assert_eq!(proxy.balance(&native), native_balance);
    assert_eq!(proxy.balance(&staked), staked_balance);

    assert_eq!(proxy.balance(&AssetDescriptor::virtual_asset(2)), 0);
    assert_eq!(proxy.balance(&AssetDescriptor::not_used()), 0);
}

#[test]
fn test_fund() {
    let (fixture, frodo) = create_fixture_with_data();
    let proxy = &fixture.proxy;

    let pre_native = fixture.native.balance(&proxy.address);
    fixture.native.mint(&frodo, &(25 * SCALAR_7));
    proxy.fund(&frodo, &(25 * SCALAR_7));
    assert_eq!(
        fixture.native.balance(&proxy.address),
        pre_native + 25 * SCALAR_7
    );

    let events = fixture.env.events().all();
    assert_eq!(
        vec![&fixture.env, events.last_unchecked()],
        vec![
            &fixture.env,
            (
                proxy.address.clone(),
                (Symbol::new(&fixture.env, "fund"), frodo.clone()).into_val(&fixture.env),
                (25 * SCALAR_7).into_val(&fixture.env)
            )
        ]
    );

    let result = proxy.try_fund(&frodo, &-1);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(8))));
}

#[test]
fn test_initialize_once() {
    let (fixture, frodo) = create_fixture_with_data();

    assert_eq!(fixture.proxy.admin(), fixture.bombadil);
    assert_eq!(fixture.proxy.native(), fixture.native.address);

    let result = fixture
        .proxy
        .try_initialize(&frodo, &fixture.native.address);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(3))));
    assert_eq!(fixture.proxy.admin(), fixture.bombadil);
}

#[test]
fn test_queries_extend_proxy_instance() {
    let (fixture, _) = create_fixture_with_data();
    let proxy = &fixture.proxy;

    // each query lands past the ttl left by the previous call, 5 seconds per ledger
    fixture.jump(100_000 * 5);
    assert_eq!(proxy.admin(), fixture.bombadil);
    fixture.jump(200_000 * 5);
    assert_eq!(proxy.native(), fixture.native.address);
    fixture.jump(200_000 * 5);
    assert!(proxy.get_pending(&1).is_none());
    fixture.jump(200_000 * 5);
    assert_eq!(proxy.balance(&AssetDescriptor::virtual_asset(2)), 0);
}
