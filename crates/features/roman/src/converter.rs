use crate::error::RomanError;
use std::fmt;

/// Smallest convertible value.
pub const MIN_VALUE: u16 = 1;
/// Largest convertible value; standard notation has no symbol above `M`.
pub const MAX_VALUE: u16 = 3999;

/// Additive and subtractive forms, strictly descending by value.
pub const NUMERAL_TABLE: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Converts a number to its Roman numeral.
///
/// The range is checked before integrality, so `4000.5` is reported as
/// [`RomanError::OutOfRange`]. `NaN` fails no comparison and is reported as
/// [`RomanError::NotInteger`].
///
/// # Errors
/// Returns [`RomanError::OutOfRange`] outside `1..=3999` and
/// [`RomanError::NotInteger`] for values with a fractional part.
///
/// # Example
/// ```rust
/// assert_eq!(numerus_roman::convert(1984).unwrap(), "MCMLXXXIV");
/// assert!(numerus_roman::convert(1.5).is_err());
/// ```
pub fn convert(value: impl Into<f64>) -> Result<String, RomanError> {
    let value = value.into();

    if value < f64::from(MIN_VALUE) || value > f64::from(MAX_VALUE) {
        return Err(RomanError::OutOfRange { value, context: None });
    }
    if value.is_nan() || value.fract() != 0.0 {
        return Err(RomanError::NotInteger { value, context: None });
    }

    // Both checks above bound the value to a whole number in 1..=3999.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = value as u16;
    Ok(encode(whole))
}

/// Whether [`convert`] would succeed for `value`. Never panics.
#[must_use]
pub fn is_valid(value: impl Into<f64>) -> bool {
    let value = value.into();
    value.fract() == 0.0 && (f64::from(MIN_VALUE)..=f64::from(MAX_VALUE)).contains(&value)
}

fn encode(mut remaining: u16) -> String {
    let mut numeral = String::with_capacity(15);

    for &(value, symbol) in &NUMERAL_TABLE {
        while remaining >= value {
            numeral.push_str(symbol);
            remaining -= value;
        }
    }

    numeral
}

/// A validated integer together with its Roman notation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RomanNumeral {
    value: u16,
    symbols: String,
}

impl RomanNumeral {
    /// # Errors
    /// Returns [`RomanError::OutOfRange`] if `value` is outside `1..=3999`.
    pub fn new(value: u16) -> Result<Self, RomanError> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(RomanError::OutOfRange { value: f64::from(value), context: None });
        }
        Ok(Self { value, symbols: encode(value) })
    }

    #[must_use]
    pub const fn value(&self) -> u16 {
        self.value
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.symbols
    }
}

impl TryFrom<u16> for RomanNumeral {
    type Error = RomanError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols)
    }
}

impl AsRef<str> for RomanNumeral {
    fn as_ref(&self) -> &str {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_strictly_descending() {
        assert!(NUMERAL_TABLE.windows(2).all(|pair| pair[0].0 > pair[1].0));
        assert_eq!(NUMERAL_TABLE.last().map(|entry| entry.0), Some(1));
    }

    #[test]
    fn longest_numeral_fits_preallocation() {
        assert_eq!(encode(3888), "MMMDCCCLXXXVIII");
        assert_eq!(encode(3888).len(), 15);
    }

    #[test]
    fn typed_numeral_matches_convert() {
        let numeral = RomanNumeral::new(2024).expect("in range");
        assert_eq!(numeral.value(), 2024);
        assert_eq!(numeral.as_str(), "MMXXIV");
        assert_eq!(numeral.to_string(), convert(2024).expect("in range"));
    }

    #[test]
    fn typed_numeral_rejects_zero_and_overflow() {
        assert!(matches!(RomanNumeral::try_from(0), Err(RomanError::OutOfRange { .. })));
        assert!(matches!(RomanNumeral::try_from(4000), Err(RomanError::OutOfRange { .. })));
    }
}
