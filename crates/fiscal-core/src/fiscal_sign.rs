//! # Fiscal Sign
//!
//! The integrity tag a fiscal storage module computes over a fiscal document
//! (user TIN, registration date and time, register number, document number,
//! serial number, fiscal data operator TIN) using its fiscal sign key.
//!
//! The device produces 6 bytes; receipts print bytes 2 to 5 interpreted as a
//! big-endian `u32`. This type holds that printed number. It does not
//! generate or verify signs.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::numeral;
use crate::value_object::ValueObject;

/// Fiscal sign printed on a receipt.
///
/// Equality is by numeric value: `"0396771107"` and `396771107` are the same
/// sign, and both render as `396771107`.
///
/// The parser accepts the whole `u64` range even though printed signs fit in
/// 32 bits; [`FiscalSign::as_u32()`] exposes the narrow form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FiscalSign(u64);

impl FiscalSign {
    /// Create a fiscal sign from its numeric value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Create a fiscal sign from an `i64` carrying an unsigned magnitude.
    ///
    /// The bit pattern is reinterpreted, so negative inputs map to the upper
    /// half of the `u64` range. Storage that only offers signed 64-bit
    /// integers round-trips through this and [`FiscalSign::as_i64()`].
    pub const fn from_i64(bits: i64) -> Self {
        Self(bits as u64)
    }

    /// Parse an unsigned decimal numeral.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedNumeral`] if the string is empty,
    /// contains a sign or any other non-digit, or exceeds `u64::MAX`.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        numeral::parse_u64(value, Self::NAME).map(Self)
    }

    /// Parse an optional numeral, rejecting `None` with
    /// [`ValidationError::NullArgument`].
    pub fn from_optional(value: Option<&str>) -> Result<Self, ValidationError> {
        match value {
            Some(s) => Self::parse(s),
            None => Err(ValidationError::NullArgument { target: Self::NAME }),
        }
    }

    /// The numeric value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The value's bit pattern as `i64`.
    pub const fn as_i64(self) -> i64 {
        self.0 as i64
    }

    /// The value as the printed 32-bit field, if it fits.
    pub fn as_u32(self) -> Option<u32> {
        u32::try_from(self.0).ok()
    }
}

impl ValueObject for FiscalSign {
    const NAME: &'static str = "fiscal sign";
}

impl std::fmt::Display for FiscalSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for FiscalSign {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for FiscalSign {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<u64> for FiscalSign {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<u32> for FiscalSign {
    fn from(value: u32) -> Self {
        Self(u64::from(value))
    }
}

impl From<FiscalSign> for u64 {
    fn from(sign: FiscalSign) -> Self {
        sign.0
    }
}

/// Accepts a JSON number or a decimal string. Strings go through
/// [`FiscalSign::parse()`], so signs and garbage are rejected.
impl<'de> Deserialize<'de> for FiscalSign {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FiscalSignVisitor;

        impl<'de> serde::de::Visitor<'de> for FiscalSignVisitor {
            type Value = FiscalSign;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("an unsigned integer or a string of decimal digits")
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(FiscalSign(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map(FiscalSign)
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                FiscalSign::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(FiscalSignVisitor)
    }
}
