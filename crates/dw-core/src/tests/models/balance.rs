use crate::{ActionId, Balance, Currency, RawBalance};

use googletest::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;

fn raw(currency: &str, amount: serde_json::Value) -> RawBalance {
    RawBalance {
        currency: currency.to_string(),
        amount,
        available_actions: vec!["enviar".to_string(), "agregar".to_string()],
    }
}

#[test]
fn given_shuffled_balances_when_normalized_then_order_is_uyu_usd_usdc() {
    // Given
    let input = vec![
        raw("USDc", json!("125000.50")),
        raw("UYU", json!(45000)),
        raw("USD", json!(1250.36)),
    ];

    // When
    let balances = Balance::normalize(&input);

    // Then
    let currencies: Vec<Currency> = balances.iter().map(|b| b.currency).collect();
    assert_that!(
        currencies,
        elements_are![eq(&Currency::Uyu), eq(&Currency::Usd), eq(&Currency::Usdc)]
    );
    assert_that!(balances[0].amount, eq(Decimal::from(45000)));
    assert_that!(balances[1].amount, eq(Decimal::new(125036, 2)));
    assert_that!(balances[2].amount, eq(Decimal::new(12500050, 2)));
}

#[test]
fn given_missing_currency_when_normalized_then_it_is_omitted() {
    // Given
    let input = vec![raw("USDc", json!("10")), raw("UYU", json!("5"))];

    // When
    let balances = Balance::normalize(&input);

    // Then
    assert_that!(balances.len(), eq(2));
    assert_that!(balances[0].currency, eq(Currency::Uyu));
    assert_that!(balances[1].currency, eq(Currency::Usdc));
}

#[test]
fn given_empty_list_when_normalized_then_single_zero_placeholder() {
    // When
    let balances = Balance::normalize(&[]);

    // Then
    assert_that!(balances.len(), eq(1));
    assert_that!(balances[0].amount, eq(Decimal::ZERO));
    assert_that!(balances[0].currency, eq(Currency::Uyu));
}

#[test]
fn given_only_malformed_entries_when_normalized_then_placeholder() {
    // Given
    let input = vec![raw("EUR", json!(10)), raw("USD", json!("not-a-number"))];

    // When
    let balances = Balance::normalize(&input);

    // Then
    assert_that!(balances, elements_are![eq(&Balance::placeholder())]);
}

#[test]
fn given_duplicate_currency_when_normalized_then_first_wins() {
    // Given
    let input = vec![raw("USD", json!(1)), raw("USD", json!(2))];

    // When
    let balances = Balance::normalize(&input);

    // Then
    assert_that!(balances.len(), eq(1));
    assert_that!(balances[0].amount, eq(Decimal::ONE));
}

#[test]
fn given_unknown_action_when_parsed_then_only_known_actions_kept() {
    // Given
    let input = RawBalance {
        currency: "UYU".to_string(),
        amount: json!(1),
        available_actions: vec!["enviar".to_string(), "teleport".to_string()],
    };

    // When
    let balance = Balance::from_raw(&input).unwrap();

    // Then
    assert_that!(balance.allows(ActionId::Enviar), eq(true));
    assert_that!(balance.available_actions.len(), eq(1));
}
