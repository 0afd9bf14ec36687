use cldr_pattern::{GroupSizes, Meta};

use super::tuple::DigitTuple;
use super::GROUP_SENTINEL;

/// Applies the meta's digit bounds: leading zeros on the integer side,
/// trailing zeros on the fraction side, the max-integer truncation, and the
/// exponent's minimum width. Runs before grouping.
pub(crate) fn apply_digit_bounds(tuple: &mut DigitTuple, meta: &Meta) {
    let int_min = meta.integer_digits.min;
    if int_min > tuple.integer.len() {
        let zeros = vec![b'0'; int_min - tuple.integer.len()];
        tuple.integer.insert_from_slice(0, &zeros);
    }

    let frac_min = meta.fractional_digits.min;
    if frac_min > tuple.fraction.len() {
        let missing = frac_min - tuple.fraction.len();
        tuple.fraction.extend(std::iter::repeat(b'0').take(missing));
    }

    let int_max = meta.integer_digits.max;
    if int_max > 0 && tuple.integer.len() > int_max {
        let cut = tuple.integer.len() - int_max;
        tuple.integer.drain(..cut);
    }

    if meta.exponent_digits > tuple.exponent.len() {
        let zeros = vec![b'0'; meta.exponent_digits - tuple.exponent.len()];
        tuple.exponent.insert_from_slice(0, &zeros);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Fraction side; the leftmost group is full-sized.
    Forward,
    /// Integer side; the leftmost group is the short one.
    Reverse,
}

/// The grouped digit strings, still carrying sentinel separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Shaped {
    pub integer: String,
    pub fraction: String,
    pub exponent: String,
    pub exponent_negative: bool,
}

pub(crate) fn group_tuple(tuple: &DigitTuple, meta: &Meta, locale_min: usize) -> Shaped {
    Shaped {
        integer: group(
            &tuple.integer,
            meta.grouping.integer,
            locale_min,
            Direction::Reverse,
        ),
        fraction: group(
            &tuple.fraction,
            meta.grouping.fraction,
            locale_min,
            Direction::Forward,
        ),
        exponent: tuple.exponent.iter().map(|&digit| digit as char).collect(),
        exponent_negative: tuple.exponent_negative,
    }
}

/// Inserts group sentinels into a digit run. Grouping only fires once the
/// digit count reaches `locale_min + sizes.first` (the locale's
/// minimum-grouping-digits rule), and runs exactly once per digit vector.
pub(crate) fn group(
    digits: &[u8],
    sizes: GroupSizes,
    locale_min: usize,
    direction: Direction,
) -> String {
    debug_assert!(digits.iter().all(u8::is_ascii_digit));
    let mut out = String::with_capacity(digits.len() * 2);
    group_into(&mut out, digits, sizes, locale_min, direction);
    out
}

fn group_into(
    out: &mut String,
    digits: &[u8],
    sizes: GroupSizes,
    locale_min: usize,
    direction: Direction,
) {
    let len = digits.len();
    if sizes.is_none() || sizes.first == 0 {
        push_digits(out, digits);
        return;
    }
    // CLDR's minimum-grouping-digits rule governs the integer side only;
    // the fraction side just needs enough digits to overflow one group.
    let threshold = match direction {
        Direction::Reverse => locale_min + sizes.first,
        Direction::Forward => sizes.first + 1,
    };
    if len < threshold {
        push_digits(out, digits);
        return;
    }

    if sizes.first == sizes.rest {
        match direction {
            Direction::Forward => {
                for (index, chunk) in digits.chunks(sizes.first).enumerate() {
                    if index > 0 {
                        out.push(GROUP_SENTINEL);
                    }
                    push_digits(out, chunk);
                }
            }
            Direction::Reverse => {
                let lead = len % sizes.first;
                let mut rest = digits;
                if lead > 0 {
                    push_digits(out, &digits[..lead]);
                    out.push(GROUP_SENTINEL);
                    rest = &digits[lead..];
                }
                for (index, chunk) in rest.chunks(sizes.first).enumerate() {
                    if index > 0 {
                        out.push(GROUP_SENTINEL);
                    }
                    push_digits(out, chunk);
                }
            }
        }
    } else {
        // Uneven sizes: the `first` group anchors at the decimal point —
        // rightmost on the integer side (lakh grouping), leftmost on the
        // fraction side — and the remainder regroups by `rest`.
        let rest_sizes = GroupSizes {
            first: sizes.rest,
            rest: sizes.rest,
        };
        match direction {
            Direction::Reverse => {
                let (head, tail) = digits.split_at(len - sizes.first);
                group_into(out, head, rest_sizes, locale_min, direction);
                out.push(GROUP_SENTINEL);
                push_digits(out, tail);
            }
            Direction::Forward => {
                let (head, tail) = digits.split_at(sizes.first);
                push_digits(out, head);
                out.push(GROUP_SENTINEL);
                group_into(out, tail, rest_sizes, locale_min, direction);
            }
        }
    }
}

fn push_digits(out: &mut String, digits: &[u8]) {
    for &digit in digits {
        out.push(digit as char);
    }
}
