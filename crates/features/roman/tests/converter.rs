use numerus_roman::{MAX_VALUE, MIN_VALUE, RomanError, convert, is_valid};
use proptest::prelude::*;

fn decode(numeral: &str) -> i64 {
    let values: Vec<i64> = numeral
        .chars()
        .map(|symbol| match symbol {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            other => panic!("unexpected symbol {other}"),
        })
        .collect();

    values.iter().enumerate().fold(0, |total, (i, &value)| {
        if values.get(i + 1).is_some_and(|&next| next > value) {
            total - value
        } else {
            total + value
        }
    })
}

#[test]
fn single_symbols() {
    let cases = [(1, "I"), (5, "V"), (10, "X"), (50, "L"), (100, "C"), (500, "D"), (1000, "M")];
    for (number, expected) in cases {
        assert_eq!(convert(number).as_deref(), Ok(expected), "{number}");
    }
}

#[test]
fn subtractive_forms() {
    let cases = [(4, "IV"), (9, "IX"), (40, "XL"), (90, "XC"), (400, "CD"), (900, "CM")];
    for (number, expected) in cases {
        assert_eq!(convert(number).as_deref(), Ok(expected), "{number}");
    }
}

#[test]
fn composite_values() {
    assert_eq!(convert(27).as_deref(), Ok("XXVII"));
    assert_eq!(convert(1984).as_deref(), Ok("MCMLXXXIV"));
    assert_eq!(convert(3999).as_deref(), Ok("MMMCMXCIX"));
    assert_eq!(convert(3000).as_deref(), Ok("MMM"));
}

#[test]
fn out_of_range_inputs() {
    for number in [0, -1, 4000] {
        let err = convert(number).expect_err("must be rejected");
        assert!(matches!(err, RomanError::OutOfRange { .. }), "{number}");
        assert_eq!(err.to_string(), "Number must be between 1 and 3999");
    }
}

#[test]
fn fractional_input_is_not_an_integer() {
    let err = convert(1.5).expect_err("must be rejected");
    assert!(matches!(err, RomanError::NotInteger { value, .. } if value == 1.5));
    assert_eq!(err.to_string(), "Number must be an integer");
}

#[test]
fn range_is_checked_before_integrality() {
    assert!(matches!(convert(4000.5), Err(RomanError::OutOfRange { .. })));
    assert!(matches!(convert(0.5), Err(RomanError::OutOfRange { .. })));
    assert!(matches!(convert(f64::NAN), Err(RomanError::NotInteger { .. })));
    assert!(matches!(convert(f64::INFINITY), Err(RomanError::OutOfRange { .. })));
}

#[test]
fn validity_boundaries() {
    assert!(is_valid(MIN_VALUE));
    assert!(is_valid(MAX_VALUE));
    assert!(!is_valid(0));
    assert!(!is_valid(4000));
    assert!(!is_valid(2.5));
    assert!(!is_valid(f64::NAN));
    assert!(!is_valid(f64::NEG_INFINITY));
}

proptest! {
    #[test]
    fn conversion_round_trips(number in MIN_VALUE..=MAX_VALUE) {
        let numeral = convert(number).expect("valid input");
        prop_assert!(numeral.chars().all(|c| "IVXLCDM".contains(c)));
        prop_assert_eq!(decode(&numeral), i64::from(number));
    }

    #[test]
    fn validity_agrees_with_convert(value in any::<f64>()) {
        prop_assert_eq!(is_valid(value), convert(value).is_ok());
    }

    #[test]
    fn integers_outside_range_are_invalid(value in any::<i32>()) {
        let expected = (1..=3999).contains(&value);
        prop_assert_eq!(is_valid(value), expected);
    }
}
