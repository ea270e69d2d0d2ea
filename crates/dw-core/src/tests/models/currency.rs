use crate::Currency;

use std::str::FromStr;

#[test]
fn test_currency_as_str() {
    assert_eq!(Currency::Uyu.as_str(), "UYU");
    assert_eq!(Currency::Usd.as_str(), "USD");
    assert_eq!(Currency::Usdc.as_str(), "USDc");
}

#[test]
fn test_currency_from_str_is_case_insensitive() {
    assert_eq!(Currency::from_str("uyu").unwrap(), Currency::Uyu);
    assert_eq!(Currency::from_str("USDc").unwrap(), Currency::Usdc);
    assert_eq!(Currency::from_str("USDC").unwrap(), Currency::Usdc);
    assert!(Currency::from_str("EUR").is_err());
}

#[test]
fn test_currency_display_order() {
    let positions: Vec<usize> = Currency::DISPLAY_ORDER
        .iter()
        .map(|c| c.display_position())
        .collect();
    assert_eq!(positions, vec![0, 1, 2]);
}

#[test]
fn test_currency_serde_uses_wire_codes() {
    let json = serde_json::to_string(&Currency::Usdc).unwrap();
    assert_eq!(json, "\"USDc\"");
    let parsed: Currency = serde_json::from_str("\"usd\"").unwrap();
    assert_eq!(parsed, Currency::Usd);
}

#[test]
fn test_currency_asset_mapping() {
    assert_eq!(Currency::Usdc.asset_code(), "USDC");
    assert_eq!(Currency::Usdc.asset_type(), "crypto");
    assert_eq!(Currency::Uyu.asset_type(), "fiat");
}
