use cldr_pattern::PatternError;
use icu::locid::Locale;
use thiserror::Error;

/// Errors surfaced by [`CldrContext::format`](crate::CldrContext::format).
///
/// Every validation runs before any arithmetic; a failed call has no side
/// effects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("locale {0} is not part of the configured bundle")]
    UnknownLocale(Locale),
    #[error("numbering system {0:?} has no digit table for this locale")]
    UnknownNumberSystem(String),
    #[error("currency code {0:?} is not in the currency table")]
    UnknownCurrency(String),
    #[error("format style {0:?} is not defined for this locale")]
    UnknownFormat(String),
    #[error("invalid number pattern")]
    Pattern(#[from] PatternError),
}

/// Errors from registering caller-supplied locale documents.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("malformed locale document")]
    Json(#[from] serde_json::Error),
    #[error("locale identifier {0:?} is not valid BCP-47")]
    InvalidLocale(String),
    #[error("invalid pattern for format style {style:?}")]
    InvalidPattern {
        style: String,
        #[source]
        source: PatternError,
    },
    #[error("numbering system {0:?} does not list exactly ten digits")]
    InvalidDigits(String),
}
