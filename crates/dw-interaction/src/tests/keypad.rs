use crate::{AmountInput, Key, MAX_FRACTION_DIGITS, MAX_INTEGER_DIGITS};

use googletest::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn type_keys(keys: &[Key]) -> AmountInput {
    let mut input = AmountInput::new();
    for key in keys {
        input.press(*key);
    }
    input
}

#[test]
fn given_empty_input_when_separator_pressed_then_reads_zero_point() {
    let input = type_keys(&[Key::Separator]);

    assert_that!(input.text(), eq("0."));
    assert_that!(input.value(), some(eq(Decimal::ZERO)));
}

#[test]
fn given_separator_present_when_pressed_again_then_rejected() {
    // Given
    let mut input = type_keys(&[Key::Digit(1), Key::Separator, Key::Digit(5)]);

    // When
    let accepted = input.press(Key::Separator);

    // Then
    assert_that!(accepted, eq(false));
    assert_that!(input.text(), eq("1.5"));
}

#[test]
fn given_lone_zero_when_nonzero_digit_pressed_then_zero_is_replaced() {
    let input = type_keys(&[Key::Digit(0), Key::Digit(7)]);

    assert_that!(input.text(), eq("7"));
}

#[test]
fn given_lone_zero_when_zero_pressed_then_rejected() {
    // Given
    let mut input = type_keys(&[Key::Digit(0)]);

    // When
    let accepted = input.press(Key::Digit(0));

    // Then
    assert_that!(accepted, eq(false));
    assert_that!(input.text(), eq("0"));
}

#[test]
fn given_two_decimals_when_third_pressed_then_rejected() {
    // Given
    let mut input = type_keys(&[Key::Digit(3), Key::Separator, Key::Digit(2), Key::Digit(5)]);

    // When
    let accepted = input.press(Key::Digit(9));

    // Then
    assert_that!(accepted, eq(false));
    assert_that!(input.value(), some(eq(Decimal::new(325, 2))));
}

#[test]
fn given_seven_integer_digits_when_eighth_pressed_then_rejected_but_separator_accepted() {
    // Given
    let mut input = type_keys(&[Key::Digit(9); 7]);

    // When
    let digit = input.press(Key::Digit(1));
    let separator = input.press(Key::Separator);

    // Then
    assert_that!(digit, eq(false));
    assert_that!(separator, eq(true));
    assert_that!(input.text(), eq("9999999."));
}

#[test]
fn given_empty_input_when_backspace_pressed_then_noop() {
    let mut input = AmountInput::new();

    assert_that!(input.press(Key::Backspace), eq(false));
    assert_that!(input.value(), none());
}

#[test]
fn given_out_of_range_digit_when_pressed_then_rejected() {
    let mut input = AmountInput::new();

    assert_that!(input.press(Key::Digit(10)), eq(false));
    assert!(input.is_empty());
}

#[test]
fn given_full_width_amount_when_typed_then_accepted_and_further_digits_rejected() {
    // Given
    let keys: Vec<Key> = "1234567.89"
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => Key::Digit(d as u8),
            None => Key::Separator,
        })
        .collect();

    // When
    let input = type_keys(&keys);
    let mut extended = input.clone();
    let extra = extended.press(Key::Digit(5));

    // Then
    assert_that!(input.text(), eq("1234567.89"));
    assert_that!(input.value(), some(eq(Decimal::new(123456789, 2))));
    assert_that!(extra, eq(false));
    assert_that!(extended.text(), eq("1234567.89"));
}

fn any_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        8 => (0u8..=9).prop_map(Key::Digit),
        1 => Just(Key::Separator),
        1 => Just(Key::Backspace),
    ]
}

proptest! {
    #[test]
    fn given_any_keystrokes_when_typed_then_limits_hold(keys in prop::collection::vec(any_key(), 0..40)) {
        let input = type_keys(&keys);
        let text = input.text();

        let (integer, fraction) = match text.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (text, None),
        };
        prop_assert!(integer.len() <= MAX_INTEGER_DIGITS);
        prop_assert!(fraction.is_none_or(|f| f.len() <= MAX_FRACTION_DIGITS));
        prop_assert!(text.matches('.').count() <= 1);
        prop_assert!(!(integer.len() > 1 && integer.starts_with('0')), "leading zero in {text}");
        if !text.is_empty() {
            prop_assert!(input.value().is_some());
        }
    }
}
