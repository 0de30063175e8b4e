use std::borrow::Cow;

#[numerus_derive::numerus_error]
#[derive(PartialEq)]
pub enum RomanError {
    #[error("Number must be between 1 and 3999")]
    OutOfRange { value: f64, context: Option<Cow<'static, str>> },
    #[error("Number must be an integer")]
    NotInteger { value: f64, context: Option<Cow<'static, str>> },
}

impl RomanError {
    /// The rejected input.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::OutOfRange { value, .. } | Self::NotInteger { value, .. } => *value,
        }
    }
}
