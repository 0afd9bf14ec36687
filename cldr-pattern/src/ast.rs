use std::borrow::Cow;

/// Width of a run of `¤` currency placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrencyWidth {
    /// `¤` — the currency symbol.
    Symbol,
    /// `¤¤` — the ISO 4217 code.
    Iso,
    /// `¤¤¤` — the plural display name.
    LongName,
    /// `¤¤¤¤` — the narrow symbol, falling back to the symbol.
    Narrow,
}

impl CurrencyWidth {
    pub(crate) fn from_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::Symbol),
            2 => Some(Self::Iso),
            3 => Some(Self::LongName),
            4 => Some(Self::Narrow),
            _ => None,
        }
    }
}

/// One element of a compiled sub-pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The digit core; replaced by the shaped number body.
    Format,
    /// Position at which pad fill is inserted.
    Pad,
    Plus,
    Minus,
    Currency(CurrencyWidth),
    Percent,
    PerMille,
    /// Unquoted or quoted literal text, emitted verbatim.
    Literal(String),
    /// A doubled apostrophe (`''`), emitted as a single `'`.
    Quote,
    /// A single quoted character (`'.'`).
    QuotedChar(char),
}

/// A `{min, max}` digit bound; `max == 0` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitRange {
    pub min: usize,
    pub max: usize,
}

impl DigitRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

/// Group sizes for one side of the decimal point. `first` is the size of the
/// group adjacent to the decimal point, `rest` applies to every further
/// group. `0/0` disables grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupSizes {
    pub first: usize,
    pub rest: usize,
}

impl GroupSizes {
    pub const fn none() -> Self {
        Self { first: 0, rest: 0 }
    }

    pub fn is_none(&self) -> bool {
        self.first == 0 && self.rest == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grouping {
    pub integer: GroupSizes,
    pub fraction: GroupSizes,
}

/// Nearest-increment rounding expressed as `multiple × 10^magnitude`.
/// A zero multiple is the skip sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundingIncrement {
    pub multiple: u64,
    pub magnitude: i16,
}

impl RoundingIncrement {
    pub const NONE: Self = Self {
        multiple: 0,
        magnitude: 0,
    };

    pub fn is_none(&self) -> bool {
        self.multiple == 0
    }

    /// Builds an increment normalized so the multiple carries no trailing
    /// decimal zeros; a zero multiple yields [`RoundingIncrement::NONE`].
    pub fn normalized(mut multiple: u64, mut magnitude: i16) -> Self {
        while multiple != 0 && multiple % 10 == 0 {
            multiple /= 10;
            magnitude += 1;
        }
        if multiple == 0 {
            Self::NONE
        } else {
            Self { multiple, magnitude }
        }
    }
}

impl Default for RoundingIncrement {
    fn default() -> Self {
        Self::NONE
    }
}

/// The compiled, immutable description of a number pattern. One `Meta` is
/// produced per pattern string and drives every format call that uses it.
#[derive(Debug, Clone, PartialEq)]
pub struct Meta {
    /// Token sequence of the positive sub-pattern.
    pub positive: Vec<Token>,
    /// Token sequence of the negative sub-pattern; `None` is the sentinel
    /// "same as positive with a leading minus".
    pub negative: Option<Vec<Token>>,
    pub integer_digits: DigitRange,
    pub fractional_digits: DigitRange,
    /// Both zero when the pattern carries no `@` placeholders.
    pub significant_digits: DigitRange,
    /// Zero outside scientific mode.
    pub exponent_digits: usize,
    /// Force an explicit plus on non-negative exponents.
    pub exponent_sign: bool,
    /// Significant-digit bound on the mantissa; zero leaves it unrounded.
    pub scientific_rounding: usize,
    /// 1 normally, 100 for percent patterns, 1000 for permille.
    pub multiplier: i32,
    pub rounding: RoundingIncrement,
    pub grouping: Grouping,
    /// Zero when the pattern has no pad specifier.
    pub padding_length: usize,
    pub padding_char: char,
}

impl Meta {
    /// Tokens of the negative sub-pattern, fabricating the
    /// minus-plus-positive sequence when the pattern declared none.
    pub fn negative_tokens(&self) -> Cow<'_, [Token]> {
        match &self.negative {
            Some(tokens) => Cow::Borrowed(tokens.as_slice()),
            None => {
                let mut tokens = Vec::with_capacity(self.positive.len() + 1);
                tokens.push(Token::Minus);
                tokens.extend(self.positive.iter().cloned());
                Cow::Owned(tokens)
            }
        }
    }

    pub fn is_scientific(&self) -> bool {
        self.exponent_digits > 0
    }

    pub fn uses_significant_digits(&self) -> bool {
        self.significant_digits.max > 0
    }
}
