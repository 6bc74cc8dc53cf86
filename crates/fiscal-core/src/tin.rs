//! # Taxpayer Identification Number
//!
//! The Russian INN, issued by the Federal Tax Service.
//!
//! - Legal entity: 10 digits. Region code (2), tax office (2), record
//!   number (5), one control digit. Foreign organizations registered since
//!   2005 start with `9909`.
//! - Individual (including sole proprietors): 12 digits. Region code (2),
//!   tax office (2), record number (6), two control digits.
//!
//! ## Construction
//!
//! - [`Tin::new()`]: from a digit string. Leading zeros are kept.
//! - [`Tin::from_u64()`] / [`Tin::from_i64()`]: from an integer, rendered
//!   in decimal. This path can never produce a TIN with a leading zero; use
//!   the string path for those.
//! - [`Tin::complete()`]: from a prefix, appending computed control digits.
//!
//! Control digits are checked by [`crate::checksum`].

use serde::{Deserialize, Serialize};

use crate::checksum;
use crate::error::ValidationError;
use crate::numeral;
use crate::value_object::ValueObject;

/// The two TIN formats, distinguished by length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TinKind {
    /// 10-digit TIN of an organization.
    LegalEntity,
    /// 12-digit TIN of a natural person.
    Individual,
}

impl TinKind {
    /// Classify by digit count.
    pub fn from_length(length: usize) -> Option<Self> {
        match length {
            10 => Some(Self::LegalEntity),
            12 => Some(Self::Individual),
            _ => None,
        }
    }

    /// Total digit count.
    pub fn length(self) -> usize {
        match self {
            Self::LegalEntity => 10,
            Self::Individual => 12,
        }
    }

    /// Number of trailing control digits.
    pub fn control_digit_count(self) -> usize {
        match self {
            Self::LegalEntity => 1,
            Self::Individual => 2,
        }
    }

    /// Return the string name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LegalEntity => "legal_entity",
            Self::Individual => "individual",
        }
    }
}

impl std::fmt::Display for TinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Russian Taxpayer Identification Number (INN).
///
/// Holds the validated digit string. Equality, hashing and ordering are by
/// that string, so `"0396771108"` and a 9-digit `"396771108"` could never
/// compare equal (the latter is not a valid TIN in the first place).
///
/// # Validation
///
/// - Only ASCII digits
/// - Exactly 10 or 12 digits
/// - Control digit(s) match the weighted modulus-11 checksum
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Tin(String);

impl<'de> Deserialize<'de> for Tin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl Tin {
    /// Create a TIN from a digit string.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MalformedNumeral`] for an empty string or any
    ///   non-digit character.
    /// - [`ValidationError::InvalidLength`] unless there are 10 or 12 digits.
    /// - [`ValidationError::ChecksumMismatch`] if the control digit(s) are
    ///   wrong.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Create a TIN from an optional string, rejecting `None` with
    /// [`ValidationError::NullArgument`].
    pub fn from_optional(value: Option<&str>) -> Result<Self, ValidationError> {
        match value {
            Some(s) => Self::new(s),
            None => Err(ValidationError::NullArgument { target: Self::NAME }),
        }
    }

    /// Create a TIN from its numeric value.
    ///
    /// The number is rendered without leading zeros, so a TIN whose first
    /// digit is `0` cannot be built this way.
    pub fn from_u64(value: u64) -> Result<Self, ValidationError> {
        Self::new(value.to_string())
    }

    /// Create a TIN from a signed integer.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativeValue`] for negative input, and
    /// otherwise the same errors as [`Tin::from_u64()`].
    pub fn from_i64(value: i64) -> Result<Self, ValidationError> {
        let unsigned = u64::try_from(value).map_err(|_| ValidationError::NegativeValue(value))?;
        Self::from_u64(unsigned)
    }

    /// Append the control digit(s) to a prefix.
    ///
    /// A 9-digit prefix yields a legal-entity TIN, a 10-digit prefix an
    /// individual TIN.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MalformedNumeral`] for non-digit input and
    /// [`ValidationError::InvalidLength`] for any other prefix length.
    pub fn complete(prefix: &str) -> Result<Self, ValidationError> {
        numeral::require_digits(prefix, Self::NAME)?;

        let control = match prefix.len() {
            9 => {
                let number = numeral::parse_u64(prefix, Self::NAME)?;
                checksum::legal_entity_control_for_prefix(number).to_string()
            }
            10 => {
                let number = numeral::parse_u64(prefix, Self::NAME)?;
                let (n11, n12) = checksum::individual_control_for_prefix(number);
                format!("{n11}{n12}")
            }
            _ => {
                return Err(ValidationError::InvalidLength {
                    value: prefix.to_string(),
                    length: prefix.len(),
                    expected: "9 or 10",
                })
            }
        };

        Self::new(format!("{prefix}{control}"))
    }

    /// Validate a TIN string without constructing.
    fn validate(s: &str) -> Result<TinKind, ValidationError> {
        numeral::require_digits(s, Self::NAME)?;

        let kind = TinKind::from_length(s.len()).ok_or_else(|| ValidationError::InvalidLength {
            value: s.to_string(),
            length: s.len(),
            expected: "10 or 12",
        })?;

        // At most 12 digits, so this cannot overflow.
        let number = numeral::parse_u64(s, Self::NAME)?;

        let (actual, expected) = match kind {
            TinKind::LegalEntity => (number % 10, checksum::legal_entity_control(number)),
            TinKind::Individual => (number % 100, checksum::individual_control(number)),
        };

        if actual != expected {
            return Err(ValidationError::ChecksumMismatch {
                value: s.to_string(),
                length: s.len(),
                expected: format!("{expected:0width$}", width = kind.control_digit_count()),
            });
        }

        Ok(kind)
    }

    /// Access the digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the TIN, returning the digit string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Legal entity or individual.
    pub fn kind(&self) -> TinKind {
        if self.0.len() == 12 {
            TinKind::Individual
        } else {
            TinKind::LegalEntity
        }
    }

    /// Federal subject code: the first two digits. `"99"` denotes the
    /// inter-regional inspectorate for major taxpayers.
    pub fn region_code(&self) -> &str {
        &self.0[..2]
    }

    /// Local tax inspectorate code: digits three and four.
    pub fn tax_office_code(&self) -> &str {
        &self.0[2..4]
    }

    /// The trailing control digit(s).
    pub fn control_digits(&self) -> &str {
        let len = self.0.len();
        &self.0[len - self.kind().control_digit_count()..]
    }

    /// Whether this is a foreign organization's TIN (10 digits, prefix
    /// `9909`).
    pub fn is_foreign_organization(&self) -> bool {
        self.kind() == TinKind::LegalEntity && self.0.starts_with("9909")
    }
}

impl ValueObject for Tin {
    const NAME: &'static str = "TIN";
}

impl std::fmt::Display for Tin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Tin {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Tin {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Tin {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u64> for Tin {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_u64(value)
    }
}

impl TryFrom<i64> for Tin {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_i64(value)
    }
}

impl AsRef<str> for Tin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Tin> for String {
    fn from(tin: Tin) -> Self {
        tin.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const TIN10_S: &str = "2310031475";
    const TIN10_L: i64 = 2_310_031_475;
    const TIN12_S: &str = "645393065232";
    const TIN12_L: i64 = 645_393_065_232;

    fn kind_of(result: Result<Tin, ValidationError>) -> ErrorKind {
        result.unwrap_err().kind()
    }

    // -- Construction --

    #[test]
    fn value_10_digits() {
        assert_eq!(Tin::from_i64(TIN10_L).unwrap().as_str(), TIN10_S);
        assert_eq!(Tin::new(TIN10_S).unwrap().as_str(), TIN10_S);
    }

    #[test]
    fn value_12_digits() {
        assert_eq!(Tin::from_i64(TIN12_L).unwrap().as_str(), TIN12_S);
        assert_eq!(Tin::new(TIN12_S).unwrap().as_str(), TIN12_S);
    }

    #[test]
    fn display_is_digit_string() {
        assert_eq!(Tin::new(TIN10_S).unwrap().to_string(), TIN10_S);
        assert_eq!(Tin::new(TIN12_S).unwrap().to_string(), TIN12_S);
    }

    #[test]
    fn leading_zero_preserved_on_string_path() {
        let tin = Tin::new("0396771108").unwrap();
        assert_eq!(tin.as_str(), "0396771108");
        assert_eq!(tin.kind(), TinKind::LegalEntity);
    }

    #[test]
    fn leading_zero_unreachable_on_integer_path() {
        // 396771108 renders with 9 digits.
        assert_eq!(kind_of(Tin::from_u64(396_771_108)), ErrorKind::InvalidLength);
    }

    #[test]
    fn integer_and_string_paths_agree() {
        assert_eq!(Tin::from_u64(7_707_083_893).unwrap(), Tin::new("7707083893").unwrap());
    }

    // -- Rejections --

    #[test]
    fn rejects_absent_input() {
        assert_eq!(kind_of(Tin::from_optional(None)), ErrorKind::NullArgument);
        assert!(Tin::from_optional(Some(TIN10_S)).is_ok());
    }

    #[test]
    fn rejects_too_long() {
        assert_eq!(kind_of(Tin::new("12345678901234")), ErrorKind::InvalidLength);
    }

    #[test]
    fn rejects_too_short() {
        assert_eq!(kind_of(Tin::new("12345")), ErrorKind::InvalidLength);
    }

    #[test]
    fn rejects_eleven_digits() {
        assert_eq!(kind_of(Tin::new("64539306523")), ErrorKind::InvalidLength);
    }

    #[test]
    fn rejects_overlong_digit_string_by_length() {
        assert_eq!(kind_of(Tin::new("9".repeat(40))), ErrorKind::InvalidLength);
    }

    #[test]
    fn rejects_incorrect_checksum() {
        let err = Tin::new("645393065233").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChecksumMismatch);
        assert!(format!("{err}").contains("expected control digits 32"));
    }

    #[test]
    fn rejects_incorrect_10_digit_checksum() {
        let err = Tin::new("2310031476").unwrap_err();
        assert_eq!(
            err,
            ValidationError::ChecksumMismatch {
                value: "2310031476".to_string(),
                length: 10,
                expected: "5".to_string(),
            }
        );
    }

    #[test]
    fn mismatch_pads_expected_control_digits() {
        assert!(Tin::new("770000000300").is_ok());
        let err = Tin::new("770000000301").unwrap_err();
        assert!(format!("{err}").contains("expected control digits 00"));
    }

    #[test]
    fn rejects_negative() {
        assert_eq!(kind_of(Tin::from_i64(-64_539_306_523)), ErrorKind::NegativeValue);
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(kind_of(Tin::new("23100314a5")), ErrorKind::MalformedNumeral);
        assert_eq!(kind_of(Tin::new("+231003147")), ErrorKind::MalformedNumeral);
        assert_eq!(kind_of(Tin::new(" 2310031475")), ErrorKind::MalformedNumeral);
        assert_eq!(kind_of(Tin::new("")), ErrorKind::MalformedNumeral);
    }

    // -- Accessors --

    #[test]
    fn kind_by_length() {
        assert_eq!(Tin::new(TIN10_S).unwrap().kind(), TinKind::LegalEntity);
        assert_eq!(Tin::new(TIN12_S).unwrap().kind(), TinKind::Individual);
    }

    #[test]
    fn region_and_office_codes() {
        let tin = Tin::new("7707083893").unwrap();
        assert_eq!(tin.region_code(), "77");
        assert_eq!(tin.tax_office_code(), "07");
        assert_eq!(tin.control_digits(), "3");

        let tin = Tin::new(TIN12_S).unwrap();
        assert_eq!(tin.region_code(), "64");
        assert_eq!(tin.tax_office_code(), "53");
        assert_eq!(tin.control_digits(), "32");
    }

    #[test]
    fn foreign_organization_prefix() {
        assert!(Tin::new("9909001230").unwrap().is_foreign_organization());
        assert!(!Tin::new(TIN10_S).unwrap().is_foreign_organization());
    }

    #[test]
    fn into_inner_and_string_conversion() {
        let tin = Tin::new(TIN12_S).unwrap();
        assert_eq!(String::from(tin.clone()), TIN12_S);
        assert_eq!(tin.into_inner(), TIN12_S);
    }

    // -- Completion --

    #[test]
    fn complete_legal_entity() {
        assert_eq!(Tin::complete("231003147").unwrap().as_str(), TIN10_S);
    }

    #[test]
    fn complete_individual() {
        assert_eq!(Tin::complete("6453930652").unwrap().as_str(), TIN12_S);
        assert_eq!(Tin::complete("0123456789").unwrap().as_str(), "012345678943");
    }

    #[test]
    fn complete_rejects_bad_prefix() {
        let err = Tin::complete("12345").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLength);
        assert!(format!("{err}").contains("9 or 10"));
        assert_eq!(kind_of(Tin::complete("23100314x")), ErrorKind::MalformedNumeral);
        assert_eq!(kind_of(Tin::complete(&"1".repeat(30))), ErrorKind::InvalidLength);
    }

    // -- Conversions --

    #[test]
    fn from_str_and_try_from() {
        let parsed: Tin = TIN10_S.parse().unwrap();
        assert_eq!(parsed, Tin::try_from(TIN10_S).unwrap());
        assert_eq!(parsed, Tin::try_from(TIN10_S.to_string()).unwrap());
        assert_eq!(parsed, Tin::try_from(2_310_031_475_u64).unwrap());
        assert_eq!(parsed, Tin::try_from(TIN10_L).unwrap());
    }

    // -- Serde --

    #[test]
    fn tin_serde_roundtrip() {
        let tin = Tin::new("0396771108").unwrap();
        let json_str = serde_json::to_string(&tin).unwrap();
        assert_eq!(json_str, "\"0396771108\"");
        let deserialized: Tin = serde_json::from_str(&json_str).unwrap();
        assert_eq!(tin, deserialized);
    }

    #[test]
    fn tin_deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<Tin>("\"645393065233\"").is_err());
        assert!(serde_json::from_str::<Tin>("2310031475").is_err());
    }

    #[test]
    fn tin_kind_serde() {
        assert_eq!(
            serde_json::to_string(&TinKind::LegalEntity).unwrap(),
            "\"legal_entity\""
        );
    }

    // -- Hash collections --

    #[test]
    fn tin_in_hashset() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Tin::new(TIN10_S).unwrap());
        set.insert(Tin::new(TIN12_S).unwrap());
        set.insert(Tin::from_i64(TIN10_L).unwrap());
        assert_eq!(set.len(), 2);
    }
}
