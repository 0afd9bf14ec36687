use smallvec::SmallVec;

use crate::types::number::Number;

/// Inline capacity covers the 17 significant digits of an `f64`.
pub(crate) type Digits = SmallVec<[u8; 17]>;

/// Pipeline intermediate: the absolute digit payload plus the original sign.
///
/// Every byte in `integer`, `fraction` and `exponent` is ASCII `'0'..='9'`.
/// `integer` has its leading zeros stripped (possibly to empty); the shape
/// stage re-establishes the minimum widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DigitTuple {
    pub sign: i8,
    pub integer: Digits,
    pub fraction: Digits,
    pub exponent_negative: bool,
    pub exponent: Digits,
}

impl DigitTuple {
    /// Plain `int[.frac]` view before grouping, used for plural-operand
    /// construction. An empty integer renders as `"0"`.
    pub fn plain(&self) -> String {
        let mut out = String::with_capacity(self.integer.len() + self.fraction.len() + 2);
        if self.integer.is_empty() {
            out.push('0');
        } else {
            for &digit in &self.integer {
                out.push(digit as char);
            }
        }
        if !self.fraction.is_empty() {
            out.push('.');
            for &digit in &self.fraction {
                out.push(digit as char);
            }
        }
        out
    }
}

/// Converts the arithmetic result into the digit tuple. `sign` is the sign
/// of the original input; `exponent` is non-zero only in scientific mode.
pub(crate) fn output_to_tuple(number: &Number, sign: i8, exponent: i32) -> DigitTuple {
    let rendered = match number {
        Number::Int(value) => value.to_string(),
        Number::Float(value) => value.to_string(),
        Number::Decimal(value) => value.to_plain_string(),
    };
    let digits = rendered.trim_start_matches('-');
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (digits, ""),
    };

    let mut integer: Digits = int_part.bytes().collect();
    let nonzero = integer
        .iter()
        .position(|digit| *digit != b'0')
        .unwrap_or(integer.len());
    integer.drain(..nonzero);

    DigitTuple {
        sign,
        integer,
        fraction: frac_part.bytes().collect(),
        exponent_negative: exponent < 0,
        exponent: exponent.unsigned_abs().to_string().bytes().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_to_tuple() {
        let tuple = output_to_tuple(&Number::Int(1234), 1, 0);
        assert_eq!(&tuple.integer[..], b"1234");
        assert!(tuple.fraction.is_empty());
        assert_eq!(tuple.plain(), "1234");
    }

    #[test]
    fn float_to_tuple_strips_leading_zero() {
        let tuple = output_to_tuple(&Number::Float(0.5), 1, 0);
        assert!(tuple.integer.is_empty());
        assert_eq!(&tuple.fraction[..], b"5");
        assert_eq!(tuple.plain(), "0.5");
    }

    #[test]
    fn decimal_keeps_its_trailing_zeros() {
        let number = Number::Decimal("1.50".parse().unwrap());
        let tuple = output_to_tuple(&number, 1, 0);
        assert_eq!(&tuple.fraction[..], b"50");
    }

    #[test]
    fn exponent_digits() {
        let tuple = output_to_tuple(&Number::Float(1.2), 1, -3);
        assert!(tuple.exponent_negative);
        assert_eq!(&tuple.exponent[..], b"3");
    }
}
