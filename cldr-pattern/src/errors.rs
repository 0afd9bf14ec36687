use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("empty pattern")]
    Empty,
    #[error("unterminated quoted literal")]
    UnterminatedQuote,
    #[error("pattern has no digit placeholders")]
    MissingDigits,
    #[error("pattern has more than one digit section")]
    DuplicateDigits,
    #[error("pattern has more than one pad specifier")]
    DuplicatePad,
    #[error("pad specifier is missing its fill character")]
    MissingPadChar,
    #[error("currency placeholder is wider than four signs")]
    CurrencyTooWide,
    #[error("pattern has more than two sub-patterns")]
    TooManySubPatterns,
}
