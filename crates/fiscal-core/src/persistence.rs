//! # Persistence Hydration
//!
//! Storage layers need to create a value "empty" and fill it from a row
//! before it can be checked. That path is kept out of the domain types:
//! there is no `Default` for [`Tin`] or [`FiscalSign`], and no way to get
//! one out of a [`Hydrating`] slot without going through the validating
//! constructor.
//!
//! Rejected rows are logged at `warn` level. A stored identifier that fails
//! validation means the table was written by something other than this
//! crate, which operators need to know about.
//!
//! With the `sqlx` feature, [`Tin`] maps to Postgres `TEXT` and
//! [`FiscalSign`] to `BIGINT` (through the signed bit bridge). Decoding
//! re-validates.

use crate::error::ValidationError;
use crate::fiscal_sign::FiscalSign;
use crate::tin::Tin;
use crate::value_object::ValueObject;

/// A value type that can be rebuilt from its stored column.
pub trait Hydrate: ValueObject + Sized {
    /// The column representation.
    type Raw;

    /// Rebuild from a stored column, validating it.
    fn hydrate(raw: Self::Raw) -> Result<Self, ValidationError>;

    /// The column representation of this value.
    fn dehydrate(&self) -> Self::Raw;
}

impl Hydrate for Tin {
    type Raw = String;

    fn hydrate(raw: String) -> Result<Self, ValidationError> {
        Tin::new(raw)
    }

    fn dehydrate(&self) -> String {
        self.as_str().to_string()
    }
}

impl Hydrate for FiscalSign {
    type Raw = i64;

    fn hydrate(raw: i64) -> Result<Self, ValidationError> {
        Ok(FiscalSign::from_i64(raw))
    }

    fn dehydrate(&self) -> i64 {
        self.as_i64()
    }
}

/// An uninitialized slot a storage layer fills before validation.
///
/// ```
/// use fiscal_core::persistence::Hydrating;
/// use fiscal_core::Tin;
///
/// let mut slot = Hydrating::<Tin>::empty();
/// slot.fill("2310031475".to_string());
/// let tin = slot.finish().unwrap();
/// assert_eq!(tin.as_str(), "2310031475");
/// ```
pub struct Hydrating<T: Hydrate> {
    raw: Option<T::Raw>,
}

impl<T: Hydrate> Hydrating<T> {
    /// An unfilled slot.
    pub fn empty() -> Self {
        Self { raw: None }
    }

    /// A slot already holding a column value.
    pub fn from_raw(raw: T::Raw) -> Self {
        Self { raw: Some(raw) }
    }

    /// Store the column value, replacing any previous one.
    pub fn fill(&mut self, raw: T::Raw) {
        self.raw = Some(raw);
    }

    /// Whether a column value has been stored.
    pub fn is_filled(&self) -> bool {
        self.raw.is_some()
    }

    /// Validate the stored column and produce the domain value.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NullArgument`] if the slot was never filled, and
    /// otherwise whatever the type's constructor rejects.
    pub fn finish(self) -> Result<T, ValidationError> {
        let raw = self
            .raw
            .ok_or(ValidationError::NullArgument { target: T::NAME })?;
        T::hydrate(raw).map_err(|e| {
            tracing::warn!(target_type = T::NAME, error = %e, "rejected stored value");
            e
        })
    }
}

impl<T: Hydrate> Default for Hydrating<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::fmt::Debug for Hydrating<T>
where
    T: Hydrate,
    T::Raw: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hydrating")
            .field("type", &T::NAME)
            .field("raw", &self.raw)
            .finish()
    }
}

#[cfg(feature = "sqlx")]
mod postgres {
    use sqlx::encode::IsNull;
    use sqlx::error::BoxDynError;
    use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
    use sqlx::{Decode, Encode, Postgres, Type};

    use super::{Hydrate, Hydrating};
    use crate::fiscal_sign::FiscalSign;
    use crate::tin::Tin;

    impl Type<Postgres> for Tin {
        fn type_info() -> PgTypeInfo {
            <String as Type<Postgres>>::type_info()
        }
    }

    impl<'r> Decode<'r, Postgres> for Tin {
        fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
            let raw = <String as Decode<'r, Postgres>>::decode(value)?;
            Ok(Hydrating::<Tin>::from_raw(raw).finish()?)
        }
    }

    impl<'q> Encode<'q, Postgres> for Tin {
        fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
            <&str as Encode<'q, Postgres>>::encode_by_ref(&self.as_str(), buf)
        }
    }

    impl Type<Postgres> for FiscalSign {
        fn type_info() -> PgTypeInfo {
            <i64 as Type<Postgres>>::type_info()
        }
    }

    impl<'r> Decode<'r, Postgres> for FiscalSign {
        fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
            let raw = <i64 as Decode<'r, Postgres>>::decode(value)?;
            Ok(Hydrating::<FiscalSign>::from_raw(raw).finish()?)
        }
    }

    impl<'q> Encode<'q, Postgres> for FiscalSign {
        fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
            <i64 as Encode<'q, Postgres>>::encode_by_ref(&self.dehydrate(), buf)
        }
    }
}
