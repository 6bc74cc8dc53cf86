//! # TIN Control Digits
//!
//! The Federal Tax Service weighted modulus-11 scheme. A single weight table
//! serves both TIN lengths; weights are applied starting at the
//! least-significant digit of the number with its control digit(s) removed.
//!
//! - 10-digit (legal entity): one control digit over the 9 preceding digits.
//! - 12-digit (individual): `n11` over the first 10 digits, then `n12` over
//!   the first 11 digits (which include `n11`).
//!
//! The table order is load-bearing. Reversing it still yields a plausible
//! checksum and silently rejects every real-world TIN.

/// Weights, indexed from the least-significant digit upward.
pub const WEIGHTS: [u64; 11] = [8, 6, 4, 9, 5, 3, 10, 4, 2, 7, 3];

/// Weighted checksum over the `count` least-significant digits of
/// `remainder`: `(Σ WEIGHTS[i] * digit_i) % 11 % 10`.
///
/// `count` is capped at the table length.
pub fn weighted_checksum(remainder: u64, count: usize) -> u64 {
    let mut rest = remainder;
    let mut sum = 0;
    for weight in WEIGHTS.iter().take(count) {
        sum += weight * (rest % 10);
        rest /= 10;
    }
    (sum % 11) % 10
}

/// Control digit of a 10-digit TIN given its full numeric value.
pub fn legal_entity_control(value: u64) -> u64 {
    weighted_checksum(value / 10, 9)
}

/// Control digits of a 12-digit TIN given its full numeric value, as the
/// two-digit number `n11 * 10 + n12`.
pub fn individual_control(value: u64) -> u64 {
    let n11 = weighted_checksum(value / 100, 10);
    let n12 = weighted_checksum(value / 10, 11);
    n11 * 10 + n12
}

/// Control digit for a 9-digit legal-entity prefix.
pub fn legal_entity_control_for_prefix(prefix: u64) -> u64 {
    weighted_checksum(prefix, 9)
}

/// Control digits `(n11, n12)` for a 10-digit individual prefix.
///
/// `n12` covers `n11`, so it is computed over the prefix extended by it.
pub fn individual_control_for_prefix(prefix: u64) -> (u64, u64) {
    let n11 = weighted_checksum(prefix, 10);
    let n12 = weighted_checksum(prefix * 10 + n11, 11);
    (n11, n12)
}
