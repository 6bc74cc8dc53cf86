//! # fiscal-core: Validated Fiscal Identifiers
//!
//! Value types for Russian fiscal document processing. Every other crate in
//! the workspace depends on `fiscal-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`Tin`] and [`FiscalSign`]
//!    are newtypes with validating constructors. Once a value exists it is
//!    valid, and it never changes.
//!
//! 2. **One checksum implementation.** Both TIN lengths share the weight
//!    table in [`checksum`]; nothing else computes control digits.
//!
//! 3. **Structural equality.** Equality and hashing come from the canonical
//!    stored attribute only ([`ValueObject`]).
//!
//! 4. **Segregated hydration.** Storage layers rebuild values through
//!    [`persistence::Hydrating`], which always ends in validation.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public value types derive `Debug`, `Clone` and implement
//!   `Serialize`/`Deserialize`.

pub mod checksum;
pub mod error;
pub mod fiscal_sign;
mod numeral;
pub mod persistence;
pub mod tin;
pub mod value_object;

// Re-export primary types for ergonomic imports.
pub use error::{ErrorKind, FiscalError, ValidationError};
pub use fiscal_sign::FiscalSign;
pub use tin::{Tin, TinKind};
pub use value_object::ValueObject;
