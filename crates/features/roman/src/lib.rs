//! Roman numeral slice.
//!
//! The converter is pure and always available. The `server` feature adds the
//! `GET /romannumeral` endpoint on top of it.
mod converter;
mod error;
#[cfg(feature = "server")]
pub mod server;

pub use converter::{MAX_VALUE, MIN_VALUE, NUMERAL_TABLE, RomanNumeral, convert, is_valid};
pub use error::{RomanError, RomanErrorExt};
