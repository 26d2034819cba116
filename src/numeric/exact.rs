// ============================================================================
// Exact Decimal Conversion
// Lossless entry point for native numbers into the decimal domain
// ============================================================================

use super::errors::{ConversionError, ConversionResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Significant digits carried by the decimal intermediate (`Decimal` scale limit).
pub const WORKING_PRECISION: u32 = 28;

/// Digits of headroom kept between the requested precision and the working precision.
pub const SAFETY_MARGIN: u32 = 5;

/// Largest fractional precision a converter may be configured with.
pub const MAX_FRACTION_DIGITS: u32 = WORKING_PRECISION - SAFETY_MARGIN;

/// Conversion of a value into the exact decimal used between radices.
///
/// Floats go through their shortest round-trip string form so that
/// `0.1_f64` becomes exactly `0.1` rather than the nearest binary fraction.
pub trait ToExactDecimal {
    fn to_exact(&self) -> ConversionResult<Decimal>;
}

impl ToExactDecimal for Decimal {
    #[inline]
    fn to_exact(&self) -> ConversionResult<Decimal> {
        Ok(*self)
    }
}

impl<T: ToExactDecimal + ?Sized> ToExactDecimal for &T {
    #[inline]
    fn to_exact(&self) -> ConversionResult<Decimal> {
        (**self).to_exact()
    }
}

macro_rules! impl_exact_for_int {
    ($($t:ty),*) => {
        $(
            impl ToExactDecimal for $t {
                #[inline]
                fn to_exact(&self) -> ConversionResult<Decimal> {
                    Ok(Decimal::from(*self))
                }
            }
        )*
    };
}

impl_exact_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToExactDecimal for i128 {
    fn to_exact(&self) -> ConversionResult<Decimal> {
        Decimal::from_i128(*self).ok_or(ConversionError::Overflow)
    }
}

impl ToExactDecimal for u128 {
    fn to_exact(&self) -> ConversionResult<Decimal> {
        Decimal::from_u128(*self).ok_or(ConversionError::Overflow)
    }
}

macro_rules! impl_exact_for_float {
    ($($t:ty),*) => {
        $(
            impl ToExactDecimal for $t {
                fn to_exact(&self) -> ConversionResult<Decimal> {
                    if !self.is_finite() {
                        return Err(ConversionError::NonFinite);
                    }
                    Decimal::from_str(&self.to_string()).map_err(|_| ConversionError::Overflow)
                }
            }
        )*
    };
}

impl_exact_for_float!(f32, f64);
