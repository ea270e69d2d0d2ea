use dw_api::{ContactSearchResult, DirectoryUser};
use dw_core::{IdentityAttributes, RawBalance, UserContact};

use chrono::{Duration, Utc};
use serde_json::json;

pub fn identity() -> IdentityAttributes {
    IdentityAttributes {
        sub: "sub-7f3a".to_string(),
        email: Some("ana@example.com".to_string()),
        given_name: Some("Ana".to_string()),
        family_name: Some("Suárez".to_string()),
        phone_number: Some("+59899000111".to_string()),
    }
}

pub fn raw_balances() -> Vec<RawBalance> {
    vec![
        raw("USDc", json!("125000.50"), &["enviar", "exchange"]),
        raw("UYU", json!(45000), &["enviar", "agregar", "pagar"]),
        raw("USD", json!(1250.36), &["enviar", "agregar"]),
    ]
}

pub fn raw(currency: &str, amount: serde_json::Value, actions: &[&str]) -> RawBalance {
    RawBalance {
        currency: currency.to_string(),
        amount,
        available_actions: actions.iter().map(|a| a.to_string()).collect(),
    }
}

pub fn app_contact(id: &str, name: &str, phone: &str) -> UserContact {
    UserContact {
        contact_id: Some(id.to_string()),
        phone: Some(phone.to_string()),
        has_dolar_app: true,
        is_saved: true,
        ..UserContact::new(name)
    }
}

pub fn external_contact(cvu: &str, name: &str) -> UserContact {
    UserContact {
        cvu: Some(cvu.to_string()),
        ..UserContact::new(name)
    }
}

pub fn with_last_transfer(mut contact: UserContact, days_ago: i64) -> UserContact {
    contact.last_transaction_date = Some(Utc::now() - Duration::days(days_ago));
    contact
}

pub fn search_result() -> ContactSearchResult {
    ContactSearchResult {
        contacts: vec![app_contact("usr_juan", "Juan Pérez", "+59899123456")],
        users: vec![app_contact("usr_juana", "Juana Ríos", "+59898111222")],
        external: vec![external_contact("0000003100042187650012", "Juan Carlos")],
    }
}

pub fn directory_user(id: &str, phone: &str) -> DirectoryUser {
    DirectoryUser {
        user_id: id.to_string(),
        full_name: "Directory Match".to_string(),
        phone: phone.to_string(),
        avatar: None,
    }
}
