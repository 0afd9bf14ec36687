use icu::locid::Locale;

/// Named format styles resolved against the locale bundle.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum NumberStyle {
    Standard,
    Currency,
    Accounting,
    Percent,
    Scientific,
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self::Standard
    }
}

impl From<&str> for NumberStyle {
    fn from(input: &str) -> Self {
        match input {
            "standard" => Self::Standard,
            "currency" => Self::Currency,
            "accounting" => Self::Accounting,
            "percent" => Self::Percent,
            "scientific" => Self::Scientific,
            _ => Self::default(),
        }
    }
}

impl NumberStyle {
    pub(crate) fn key(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Currency => "currency",
            Self::Accounting => "accounting",
            Self::Percent => "percent",
            Self::Scientific => "scientific",
        }
    }
}

/// Selects the numbering system whose digit glyphs render the output.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum NumberSystem {
    /// The locale's default numbering system.
    Default,
    /// The locale's native numbering system (e.g. `deva` for `hi`).
    Native,
    /// A numbering system by name (`"latn"`, `"arab"`, …).
    Named(String),
}

impl Default for NumberSystem {
    fn default() -> Self {
        Self::Default
    }
}

impl From<&str> for NumberSystem {
    fn from(input: &str) -> Self {
        match input {
            "default" => Self::Default,
            "native" => Self::Native,
            other => Self::Named(other.to_string()),
        }
    }
}

/// Rounding mode applied in every rounding step of the pipeline.
///
/// The pipeline works on the absolute value, so the directional modes act on
/// the magnitude.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum RoundingMode {
    Up,
    Down,
    Ceiling,
    Floor,
    HalfUp,
    HalfDown,
    HalfEven,
}

impl Default for RoundingMode {
    fn default() -> Self {
        Self::HalfEven
    }
}

impl From<&str> for RoundingMode {
    fn from(input: &str) -> Self {
        match input {
            "up" => Self::Up,
            "down" => Self::Down,
            "ceiling" => Self::Ceiling,
            "floor" => Self::Floor,
            "halfUp" => Self::HalfUp,
            "halfDown" => Self::HalfDown,
            "halfEven" => Self::HalfEven,
            _ => Self::default(),
        }
    }
}

/// Forces one of the two sub-patterns regardless of the input's sign.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum SubPattern {
    Positive,
    Negative,
}

/// Per-call formatting options.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    pub locale: Locale,
    pub number_system: NumberSystem,
    /// ISO 4217 code; activates currency fraction adjustment and `¤` affixes.
    pub currency: Option<String>,
    /// Use the currency's cash digits and cash rounding increment.
    pub cash: bool,
    pub rounding_mode: RoundingMode,
    /// Overrides both minimum and maximum fraction digits.
    pub fractional_digits: Option<usize>,
    /// Sub-pattern selection; by default the sign of the input decides.
    pub pattern: Option<SubPattern>,
}

impl FormatOptions {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            number_system: NumberSystem::default(),
            currency: None,
            cash: false,
            rounding_mode: RoundingMode::default(),
            fractional_digits: None,
            pattern: None,
        }
    }
}

/// A named style or an inline pattern string, accepted anywhere a format is
/// expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRef<'a> {
    Style(NumberStyle),
    Pattern(&'a str),
}

impl From<NumberStyle> for FormatRef<'static> {
    fn from(style: NumberStyle) -> Self {
        Self::Style(style)
    }
}

impl<'a> From<&'a str> for FormatRef<'a> {
    fn from(pattern: &'a str) -> Self {
        Self::Pattern(pattern)
    }
}
