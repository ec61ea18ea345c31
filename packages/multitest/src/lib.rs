// Testing utils. See tests folder for actual tests.

pub mod coordinator_mock;

use cosmwasm_std::{Addr, Attribute, Coin};
use cw_multi_test::{App, BankSudo, SudoMsg};

/// Gets the value of the first attribute with the given key
pub fn first_attr(data: impl AsRef<[Attribute]>, search_key: &str) -> Option<String> {
    data.as_ref().iter().find_map(|a| {
        if a.key == search_key {
            Some(a.value.clone())
        } else {
            None
        }
    })
}

/// Mints native tokens to the given beneficiary
pub fn mint_native(
    app: &mut App,
    beneficiary: impl Into<String>,
    denom: impl Into<String>,
    amount: u128,
) {
    app.sudo(SudoMsg::Bank(BankSudo::Mint {
        to_address: beneficiary.into(),
        amount: vec![Coin::new(amount, denom.into())],
    }))
    .unwrap();
}

pub fn query_balance_native(app: &App, address: &Addr, denom: &str) -> Coin {
    app.wrap().query_balance(address, denom).unwrap()
}
