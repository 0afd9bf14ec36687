//! Compiler for [CLDR number-format patterns].
//!
//! A pattern string such as `"#,##0.00"` or `"¤#,##0.00;(¤#,##0.00)"` is
//! compiled once into a [`Meta`] record: the affix token sequences of its
//! positive and negative sub-patterns plus all digit, grouping, rounding,
//! exponent, multiplier and padding metadata. The record is immutable and is
//! meant to be compiled ahead of time and shared between format calls.
//!
//! [CLDR number-format patterns]: https://unicode.org/reports/tr35/tr35-numbers.html#Number_Format_Patterns
//!
//! # Example
//!
//! ```
//! use cldr_pattern::{compile, Token};
//!
//! let meta = compile("#,##0.00").expect("pattern is valid");
//! assert_eq!(meta.positive, vec![Token::Format]);
//! assert_eq!(meta.fractional_digits.min, 2);
//! assert_eq!(meta.grouping.integer.first, 3);
//! ```

mod ast;
mod errors;
mod parser;

pub use ast::{
    CurrencyWidth, DigitRange, GroupSizes, Grouping, Meta, RoundingIncrement, Token,
};
pub use errors::PatternError;
pub use parser::compile;
