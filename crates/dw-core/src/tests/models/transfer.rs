use crate::{Currency, DepositRequest, TransferRequest, UserContact};

use rust_decimal::Decimal;

#[test]
fn test_transfer_prefers_contact_id_over_cvu() {
    let mut contact = UserContact::new("Ana");
    contact.contact_id = Some("usr_1".to_string());
    contact.cvu = Some("cvu_1".to_string());

    let request =
        TransferRequest::to_contact(&contact, Currency::Usdc, Decimal::from(10), "rent").unwrap();

    assert_eq!(request.destination, "usr_1");
    assert_eq!(request.asset_code, "USDC");
    assert_eq!(request.asset_type, "crypto");
}

#[test]
fn test_transfer_rejects_contact_without_identifier() {
    let contact = UserContact::new("Ana");

    let result = TransferRequest::to_contact(&contact, Currency::Uyu, Decimal::from(10), "");

    assert!(result.is_err());
}

#[test]
fn test_transfer_rejects_non_positive_amount() {
    let mut contact = UserContact::new("Ana");
    contact.cvu = Some("cvu_1".to_string());

    assert!(TransferRequest::to_contact(&contact, Currency::Uyu, Decimal::ZERO, "").is_err());
}

#[test]
fn test_deposit_serializes_camel_case() {
    let deposit = DepositRequest::new(Currency::Usd, Decimal::new(1050, 2), "top up").unwrap();

    let json = serde_json::to_value(&deposit).unwrap();

    assert_eq!(json["assetCode"], "USD");
    assert_eq!(json["assetType"], "fiat");
    assert_eq!(json["description"], "top up");
}
