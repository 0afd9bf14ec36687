//! Locale-aware number formatting driven by [CLDR] number-format patterns.
//!
//! A [`CldrContext`] owns an immutable locale bundle (symbols, named format
//! patterns, currency data, numbering-system digit tables) and formats
//! integers, floats and arbitrary-precision decimals against it. Patterns —
//! either a locale's named styles or inline strings like `"#,##0.00"` — are
//! compiled once by the [`cldr_pattern`] crate and drive a deterministic
//! pipeline: rounding, digit shaping, grouping, affix assembly and
//! transliteration into the target numbering system.
//!
//! [CLDR]: https://cldr.unicode.org/
//!
//! # Example
//!
//! ```
//! use cldr_numbers::{CldrContext, FormatOptions, NumberStyle};
//! use icu::locid::locale;
//!
//! let ctx = CldrContext::new();
//!
//! let options = FormatOptions::new(locale!("en"));
//! assert_eq!(
//!     ctx.format(1234567, NumberStyle::Standard, &options).unwrap(),
//!     "1,234,567",
//! );
//! assert_eq!(ctx.format(12345, "#,##0.00", &options).unwrap(), "12,345.00");
//!
//! let mut in_dollars = FormatOptions::new(locale!("en"));
//! in_dollars.currency = Some("USD".to_string());
//! assert_eq!(
//!     ctx.format(2.5, NumberStyle::Currency, &in_dollars).unwrap(),
//!     "$2.50",
//! );
//! ```

mod context;
mod data;
mod errors;
mod format;
mod options;
mod types;

pub use cldr_pattern::{Meta, PatternError};
pub use context::CldrContext;
pub use data::{CurrencyDisplay, CurrencyInfo, LocaleDocument, NumberSystemNames, Symbols};
pub use errors::{DataError, FormatError};
pub use options::{
    FormatOptions, FormatRef, NumberStyle, NumberSystem, RoundingMode, SubPattern,
};
pub use types::number::Number;
pub use types::plural::{IcuPluralizer, Pluralizer};

/// The pattern compiler, re-exported for callers that want to precompile
/// and inspect metas themselves.
pub use cldr_pattern as pattern;
