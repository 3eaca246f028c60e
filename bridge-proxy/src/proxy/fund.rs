use sep_41_token::TokenClient;
use soroban_sdk::{Address, Env};

use crate::{contract::require_nonnegative, storage};

/// Transfer native value from `from` into the proxy
///
/// ### Arguments
/// * `from` - The address funding the proxy
/// * `amount` - The amount of the native asset to transfer
pub fn execute_fund(e: &Env, from: &Address, amount: i128) {
    require_nonnegative(e, amount);
    if amount == 0 {
        return;
    }
    TokenClient::new(e, &storage::get_native(e)).transfer(
        from,
        &e.current_contract_address(),
        &amount,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{create_bridge_proxy, create_native_token};
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_execute_fund() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let samwise = Address::generate(&e);
        let proxy = create_bridge_proxy(&e);
        let (_, native_client) = create_native_token(&e, &proxy, &bombadil);

        native_client.mint(&samwise, &50_0000000);

        e.as_contract(&proxy, || {
            execute_fund(&e, &samwise, 20_0000000);
            execute_fund(&e, &samwise, 0);
        });
        assert_eq!(native_client.balance(&proxy), 20_0000000);
        assert_eq!(native_client.balance(&samwise), 30_0000000);
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #8)")]
    fn test_execute_fund_negative() {
        let e = Env::default();
        e.mock_all_auths();

        let bombadil = Address::generate(&e);
        let samwise = Address::generate(&e);
        let proxy = create_bridge_proxy(&e);
        create_native_token(&e, &proxy, &bombadil);

        e.as_contract(&proxy, || {
            execute_fund(&e, &samwise, -1);
        });
    }
}
