use std::str::FromStr;

use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_bigint::BigInt;
use num_traits::Signed;

/// A number accepted by the formatter.
///
/// The `Decimal` variant has arbitrary precision; arithmetic on it loses no
/// precision except where rounding is explicitly requested.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
    Decimal(BigDecimal),
}

impl Number {
    /// Strictly below zero; negative zero selects the positive sub-pattern.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Int(value) => *value < 0,
            Self::Float(value) => *value < 0.0,
            Self::Decimal(value) => value.is_negative(),
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Self::Float(value) => value.is_finite(),
            _ => true,
        }
    }

    /// Whether the value carries digits to the right of the decimal point.
    /// A decimal with a positive stored scale counts as fractional even when
    /// those digits are zeros (`1.00`); one with a non-negative exponent
    /// counts as integer.
    pub fn has_fraction(&self) -> bool {
        match self {
            Self::Int(_) => false,
            Self::Float(value) => value.fract() != 0.0,
            Self::Decimal(value) => value.as_bigint_and_exponent().1 > 0,
        }
    }

    /// Exact decimal view. Floats contribute their shortest round-trip
    /// decimal representation, so `0.1` becomes exactly `0.1`.
    pub(crate) fn to_decimal(&self) -> BigDecimal {
        match self {
            Self::Int(value) => BigDecimal::from(BigInt::from(*value)),
            Self::Float(value) => value
                .to_string()
                .parse()
                .expect("a finite float formats as a plain decimal"),
            Self::Decimal(value) => value.clone(),
        }
    }
}

impl From<&Number> for Number {
    fn from(number: &Number) -> Self {
        number.clone()
    }
}

impl From<BigDecimal> for Number {
    fn from(value: BigDecimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&BigDecimal> for Number {
    fn from(value: &BigDecimal) -> Self {
        Self::Decimal(value.clone())
    }
}

macro_rules! from_int {
    ($($num:ty)+) => {
        $(
            impl From<$num> for Number {
                fn from(n: $num) -> Self {
                    Self::Int(n as i128)
                }
            }
            impl From<&$num> for Number {
                fn from(n: &$num) -> Self {
                    Self::Int(*n as i128)
                }
            }
        )+
    };
}

macro_rules! from_float {
    ($($num:ty)+) => {
        $(
            impl From<$num> for Number {
                fn from(n: $num) -> Self {
                    Self::Float(n as f64)
                }
            }
            impl From<&$num> for Number {
                fn from(n: &$num) -> Self {
                    Self::Float(*n as f64)
                }
            }
        )+
    };
}

from_int!(i8 i16 i32 i64 i128 isize);
from_int!(u8 u16 u32 u64 usize);
from_float!(f32 f64);

impl FromStr for Number {
    type Err = ParseBigDecimalError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if let Ok(int) = input.parse::<i128>() {
            return Ok(Self::Int(int));
        }
        input.parse::<BigDecimal>().map(Self::Decimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(Number::from(42u8), Number::Int(42));
        assert_eq!(Number::from(-7i64), Number::Int(-7));
        assert_eq!(Number::from(1.5f32), Number::Float(1.5));
        assert_eq!("10".parse::<Number>().unwrap(), Number::Int(10));
        assert_eq!(
            "1.50".parse::<Number>().unwrap(),
            Number::Decimal("1.50".parse().unwrap())
        );
    }

    #[test]
    fn fraction_detection() {
        assert!(!Number::Int(3).has_fraction());
        assert!(Number::Float(3.25).has_fraction());
        assert!(!Number::Float(3.0).has_fraction());
        assert!(Number::Decimal("1.5".parse().unwrap()).has_fraction());
        assert!(Number::Decimal("1.00".parse().unwrap()).has_fraction());
        assert!(!Number::Decimal("1500".parse().unwrap()).has_fraction());
    }

    #[test]
    fn negative_zero_is_not_negative() {
        assert!(!Number::Float(-0.0).is_negative());
        assert!(Number::Float(-0.5).is_negative());
    }

    #[test]
    fn float_decimal_view_is_shortest_form() {
        assert_eq!(
            Number::Float(0.1).to_decimal(),
            "0.1".parse::<BigDecimal>().unwrap()
        );
    }
}
