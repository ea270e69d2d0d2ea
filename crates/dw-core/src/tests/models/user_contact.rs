use crate::UserContact;

use googletest::prelude::*;

fn external(name: &str) -> UserContact {
    UserContact::new(name)
}

#[test]
fn given_two_external_contacts_with_same_name_when_ingested_then_keys_differ() {
    // Given
    let first = external("Juan Perez").ingest(0);
    let second = external("Juan Perez").ingest(1);

    // Then
    assert_that!(first.identity_key(), not(eq(second.identity_key())));
    assert_that!(first.surrogate_key.is_empty(), eq(false));
}

#[test]
fn given_contact_with_surrogate_when_ingested_again_then_key_is_kept() {
    // Given
    let contact = external("Ana").ingest(3);
    let key = contact.surrogate_key.clone();

    // When
    let again = contact.ingest(99);

    // Then
    assert_that!(again.surrogate_key, eq(&key));
}

#[test]
fn given_contact_id_and_cvu_when_identity_key_then_contact_id_wins() {
    // Given
    let mut contact = external("Ana").ingest(0);
    contact.cvu = Some("0000003100010000000001".to_string());
    contact.contact_id = Some("usr_2abc".to_string());

    // Then
    assert_that!(contact.identity_key(), eq("usr_2abc"));
    contact.contact_id = None;
    assert_that!(contact.identity_key(), eq("0000003100010000000001"));
}

#[test]
fn given_contact_without_identifiers_then_not_addressable() {
    assert_that!(external("Nobody").is_addressable(), eq(false));

    let mut with_cvu = external("Somebody");
    with_cvu.cvu = Some("123".to_string());
    assert_that!(with_cvu.is_addressable(), eq(true));
}

#[test]
fn given_query_when_matching_then_checks_name_alias_phone_and_cvu() {
    // Given
    let mut contact = external("María Gómez");
    contact.alias = Some("Mari".to_string());
    contact.phone = Some("+598 99 123 456".to_string());
    contact.cvu = Some("0000003100099".to_string());

    // Then
    assert_that!(contact.matches("maría"), eq(true));
    assert_that!(contact.matches("MARI"), eq(true));
    assert_that!(contact.matches("99 123"), eq(true));
    assert_that!(contact.matches("31000"), eq(true));
    assert_that!(contact.matches("pedro"), eq(false));
}

#[test]
fn given_phones_with_different_formatting_then_same_recipient() {
    let mut a = external("A");
    a.phone = Some("+598 99-123-456".to_string());
    let mut b = external("B");
    b.phone = Some("59899123456".to_string());

    assert_that!(a.same_recipient(&b), eq(true));
}
