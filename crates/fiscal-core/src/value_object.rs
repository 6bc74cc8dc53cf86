//! # Value Object Contract
//!
//! Shared contract for the immutable identifier types in this crate.
//! Equality and hashing are structural: they are computed from the canonical
//! stored attribute only, never from identity.

use std::fmt::Display;
use std::hash::Hash;

/// An immutable, validated value with structural equality and a canonical
/// string form.
///
/// Implementors guarantee that `Eq`, `Hash` and `Display` are all derived
/// from the same canonical attribute, so two values that compare equal also
/// hash equally and render identically.
pub trait ValueObject: Clone + Eq + Hash + Display + Send + Sync {
    /// Short human-readable name, used in error messages.
    const NAME: &'static str;

    /// Whether `self` and `other` carry the same value.
    fn same_value_as(&self, other: &Self) -> bool {
        self == other
    }

    /// Canonical string form.
    fn canonical(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FiscalSign, Tin};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn assert_contract<T: ValueObject>(a: T, b: T, c: T) {
        assert!(a.same_value_as(&b));
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.canonical(), b.canonical());
        assert!(!a.same_value_as(&c));
    }

    #[test]
    fn tin_honours_contract() {
        assert_contract(
            Tin::new("2310031475").unwrap(),
            Tin::from_u64(2_310_031_475).unwrap(),
            Tin::new("7707083893").unwrap(),
        );
    }

    #[test]
    fn fiscal_sign_honours_contract() {
        assert_contract(
            "0396771107".parse::<FiscalSign>().unwrap(),
            FiscalSign::new(396_771_107),
            FiscalSign::new(1),
        );
    }

    #[test]
    fn names_are_distinct() {
        assert_ne!(Tin::NAME, FiscalSign::NAME);
    }
}
