use std::fs;

use cldr_numbers::{
    CldrContext, FormatOptions, FormatRef, Number, NumberStyle, NumberSystem, RoundingMode,
};
use icu::locid::Locale;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Case {
    input: String,
    #[serde(default)]
    pattern: Option<String>,
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    number_system: Option<String>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    cash: bool,
    #[serde(default)]
    rounding_mode: Option<String>,
    #[serde(default)]
    fractional_digits: Option<usize>,
    expected: String,
}

#[test]
fn fixtures() {
    let ctx = CldrContext::new();
    let mut total = 0;

    for entry in glob::glob("tests/fixtures/*.json").expect("fixture glob is valid") {
        let path = entry.expect("fixture path is readable");
        let source = fs::read_to_string(&path).expect("fixture file is readable");
        let cases: Vec<Case> =
            serde_json::from_str(&source).expect("fixture file is valid JSON");

        for case in cases {
            total += 1;
            let number: Number = case.input.parse().expect("fixture input is numeric");
            let locale: Locale = case
                .locale
                .as_deref()
                .unwrap_or("en")
                .parse()
                .expect("fixture locale is valid");

            let mut options = FormatOptions::new(locale);
            if let Some(system) = &case.number_system {
                options.number_system = NumberSystem::from(system.as_str());
            }
            options.currency = case.currency.clone();
            options.cash = case.cash;
            if let Some(mode) = &case.rounding_mode {
                options.rounding_mode = RoundingMode::from(mode.as_str());
            }
            options.fractional_digits = case.fractional_digits;

            let format = match (&case.pattern, &case.style) {
                (Some(pattern), _) => FormatRef::Pattern(pattern.as_str()),
                (None, Some(style)) => FormatRef::Style(NumberStyle::from(style.as_str())),
                (None, None) => FormatRef::Style(NumberStyle::Standard),
            };

            let formatted = ctx
                .format(&number, format, &options)
                .unwrap_or_else(|error| panic!("{}: {error}", path.display()));
            assert_eq!(
                formatted,
                case.expected,
                "{}: input {:?}",
                path.display(),
                case.input
            );
        }
    }

    assert!(total > 0, "no fixture cases ran");
}
