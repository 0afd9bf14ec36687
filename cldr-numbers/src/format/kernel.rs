//! Arithmetic and rounding kernel.
//!
//! The pipeline takes the absolute value first, so every function here sees
//! a non-negative input and the directional rounding modes act on the
//! magnitude. Floats enter exact decimal space (via their shortest
//! round-trip representation) for any operation where binary noise could
//! leak into the rendered digits.

use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use cldr_pattern::RoundingIncrement;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::options::RoundingMode;
use crate::types::number::Number;

fn decimal_mode(mode: RoundingMode) -> bigdecimal::RoundingMode {
    match mode {
        RoundingMode::Up => bigdecimal::RoundingMode::Up,
        RoundingMode::Down => bigdecimal::RoundingMode::Down,
        RoundingMode::Ceiling => bigdecimal::RoundingMode::Ceiling,
        RoundingMode::Floor => bigdecimal::RoundingMode::Floor,
        RoundingMode::HalfUp => bigdecimal::RoundingMode::HalfUp,
        RoundingMode::HalfDown => bigdecimal::RoundingMode::HalfDown,
        RoundingMode::HalfEven => bigdecimal::RoundingMode::HalfEven,
    }
}

pub(crate) fn abs(number: &Number) -> Number {
    match number {
        Number::Int(value) => Number::Int(value.checked_abs().unwrap_or(i128::MAX)),
        Number::Float(value) => Number::Float(value.abs()),
        Number::Decimal(value) => Number::Decimal(value.abs()),
    }
}

pub(crate) fn multiply(number: Number, factor: i32) -> Number {
    if factor == 1 {
        return number;
    }
    match number {
        Number::Int(value) => Number::Int(value.saturating_mul(factor as i128)),
        other => Number::Decimal(other.to_decimal() * BigDecimal::from(factor)),
    }
}

/// Rounds to the nearest multiple of the increment. A zero increment is the
/// skip sentinel; integer inputs are truncated back to integer afterwards.
pub(crate) fn round_to_nearest(
    number: Number,
    increment: RoundingIncrement,
    mode: RoundingMode,
) -> Number {
    if increment.is_none() {
        return number;
    }
    match number {
        Number::Int(value) if (0..=18).contains(&increment.magnitude) => {
            let step =
                (increment.multiple as i128).saturating_mul(10i128.pow(increment.magnitude as u32));
            Number::Int(round_integer(value, step, mode))
        }
        other => {
            let value = other.to_decimal();
            let step = BigDecimal::new(
                BigInt::from(increment.multiple),
                -(increment.magnitude as i64),
            );
            let quotient = (&value / &step).with_scale_round(0, decimal_mode(mode));
            let mut rounded = quotient * step;
            if matches!(other, Number::Int(_)) {
                rounded = rounded.with_scale_round(0, bigdecimal::RoundingMode::Down);
            }
            Number::Decimal(rounded)
        }
    }
}

fn round_integer(value: i128, step: i128, mode: RoundingMode) -> i128 {
    if step <= 1 {
        return value;
    }
    let quotient = value / step;
    let remainder = value % step;
    if remainder == 0 {
        return value;
    }
    let bump = match mode {
        RoundingMode::Up | RoundingMode::Ceiling => true,
        RoundingMode::Down | RoundingMode::Floor => false,
        RoundingMode::HalfUp => remainder * 2 >= step,
        RoundingMode::HalfDown => remainder * 2 > step,
        RoundingMode::HalfEven => match (remainder * 2).cmp(&step) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => quotient % 2 != 0,
        },
    };
    (quotient + i128::from(bump)) * step
}

/// Rounds to at most `max` significant digits and pads trailing zeros up to
/// `min`. `max == 0` disables the whole operation.
pub(crate) fn round_significant(
    number: Number,
    min: usize,
    max: usize,
    mode: RoundingMode,
) -> Number {
    if max == 0 {
        return number;
    }
    let value = number.to_decimal();
    if value.is_zero() {
        return number;
    }
    let (_, scale) = value.as_bigint_and_exponent();
    let digits = value.digits() as i64;
    let mut rounded = if digits > max as i64 {
        value.with_scale_round(scale - (digits - max as i64), decimal_mode(mode))
    } else {
        value
    };
    if min > 0 {
        let (_, scale) = rounded.as_bigint_and_exponent();
        let digits = rounded.digits() as i64;
        if digits < min as i64 {
            rounded = rounded.with_scale(scale + (min as i64 - digits));
        }
    }
    Number::Decimal(rounded)
}

/// Decomposes into `m × 10^e` with `1 ≤ m < 10`, or `(0, 0)` for zero.
pub(crate) fn mantissa_exponent(number: Number) -> (Number, i32) {
    let value = number.to_decimal();
    if value.is_zero() {
        return (Number::Int(0), 0);
    }
    let (bigint, scale) = value.as_bigint_and_exponent();
    let digits = value.digits() as i64;
    let exponent = digits - 1 - scale;
    let mantissa = BigDecimal::new(bigint, digits - 1).normalized();
    (Number::Decimal(mantissa), exponent as i32)
}

/// Rounds to at most `max` decimal places. No-op when the value already
/// fits; trailing zeros introduced by rounding are normalized away (the
/// shape stage re-pads to the minimum).
pub(crate) fn round_fractional(number: Number, max: usize, mode: RoundingMode) -> Number {
    let value = match &number {
        Number::Int(_) => return number,
        Number::Float(value) if value.fract() == 0.0 => return number,
        _ => number.to_decimal(),
    };
    let (_, scale) = value.as_bigint_and_exponent();
    if scale <= max as i64 {
        return number;
    }
    Number::Decimal(
        value
            .with_scale_round(max as i64, decimal_mode(mode))
            .normalized(),
    )
}
