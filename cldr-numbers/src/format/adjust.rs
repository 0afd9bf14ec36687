use std::borrow::Cow;

use cldr_pattern::{DigitRange, Meta, RoundingIncrement};

use crate::data::CurrencyInfo;
use crate::types::number::Number;

/// Folds currency fraction data, the significant-digit interaction and the
/// caller's fractional-digits override into a per-call meta, in that fixed
/// order. The shared meta is only cloned when an adjustment applies.
pub(crate) fn adjust_meta<'m>(
    meta: &'m Meta,
    number: &Number,
    currency: Option<&CurrencyInfo>,
    cash: bool,
    fractional_digits: Option<usize>,
) -> Cow<'m, Meta> {
    let mut adjusted = Cow::Borrowed(meta);

    if let Some(info) = currency {
        let digits = info.digits(cash) as usize;
        let target = adjusted.to_mut();
        target.fractional_digits = DigitRange::new(digits, digits);
        target.rounding =
            RoundingIncrement::normalized(info.rounding(cash) as u64, -(digits as i16));
    }

    // Significant-digit rounding would otherwise swallow the trailing
    // fraction of non-integer inputs.
    if adjusted.significant_digits.max > 0 && number.has_fraction() {
        adjusted.to_mut().fractional_digits = DigitRange::new(1, 10);
    }

    if let Some(digits) = fractional_digits {
        adjusted.to_mut().fractional_digits = DigitRange::new(digits, digits);
    }

    adjusted
}
