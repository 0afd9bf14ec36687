//! Serde model of the CLDR locale bundle.
//!
//! One JSON document per locale plus two supplemental documents: currency
//! fraction data and numbering-system digit tables. The documents shipped
//! with the crate are embedded at build time; additional ones can be
//! registered on a [`CldrContext`](crate::CldrContext) at run time.

use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Locale documents embedded with the crate.
pub(crate) const LOCALE_DOCUMENTS: &[&str] = &[
    include_str!("data/en.json"),
    include_str!("data/de.json"),
    include_str!("data/fr.json"),
    include_str!("data/es.json"),
    include_str!("data/ar.json"),
    include_str!("data/hi.json"),
    include_str!("data/ja.json"),
];

pub(crate) const CURRENCY_DOCUMENT: &str = include_str!("data/currencies.json");

pub(crate) const NUMBERING_SYSTEM_DOCUMENT: &str =
    include_str!("data/numbering_systems.json");

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleDocument {
    pub locale: String,
    #[serde(default = "one")]
    pub minimum_grouping_digits: usize,
    pub number_systems: NumberSystemNames,
    /// Symbol sets keyed by numbering-system name.
    pub symbols: FxHashMap<String, Symbols>,
    /// Named format styles, as uncompiled pattern strings.
    pub formats: FxHashMap<String, String>,
    #[serde(default)]
    pub currencies: FxHashMap<String, CurrencyDisplay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NumberSystemNames {
    pub default: String,
    /// Falls back to the default system when absent.
    #[serde(default)]
    pub native: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Symbols {
    pub decimal: String,
    pub group: String,
    #[serde(default = "default_plus")]
    pub plus_sign: String,
    #[serde(default = "default_minus")]
    pub minus_sign: String,
    #[serde(default = "default_percent")]
    pub percent_sign: String,
    #[serde(default = "default_per_mille")]
    pub per_mille: String,
    #[serde(default = "default_exponential")]
    pub exponential: String,
    #[serde(default = "default_infinity")]
    pub infinity: String,
    #[serde(default = "default_nan")]
    pub nan: String,
}

/// Per-locale display data for one currency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyDisplay {
    pub symbol: String,
    #[serde(default)]
    pub narrow_symbol: Option<String>,
    /// Long names keyed by CLDR plural category (`"one"`, `"other"`, …).
    #[serde(default)]
    pub display_names: FxHashMap<String, String>,
}

/// Supplemental fraction and rounding data for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CurrencyInfo {
    #[serde(default = "two")]
    pub digits: u32,
    #[serde(default)]
    pub rounding: u32,
    #[serde(default)]
    pub cash_digits: Option<u32>,
    #[serde(default)]
    pub cash_rounding: Option<u32>,
}

impl CurrencyInfo {
    pub fn digits(&self, cash: bool) -> u32 {
        if cash {
            self.cash_digits.unwrap_or(self.digits)
        } else {
            self.digits
        }
    }

    pub fn rounding(&self, cash: bool) -> u32 {
        if cash {
            self.cash_rounding.unwrap_or(self.rounding)
        } else {
            self.rounding
        }
    }
}

fn one() -> usize {
    1
}

fn two() -> u32 {
    2
}

fn default_plus() -> String {
    "+".into()
}

fn default_minus() -> String {
    "-".into()
}

fn default_percent() -> String {
    "%".into()
}

fn default_per_mille() -> String {
    "‰".into()
}

fn default_exponential() -> String {
    "E".into()
}

fn default_infinity() -> String {
    "∞".into()
}

fn default_nan() -> String {
    "NaN".into()
}
