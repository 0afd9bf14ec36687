use std::str::FromStr;
use std::sync::RwLock;

use fixed_decimal::FixedDecimal;
use icu::locid::Locale;
use icu::plurals::{PluralCategory, PluralOperands, PluralRuleType, PluralRules};
use rustc_hash::FxHashMap;

/// Plural-rule seam used to resolve `¤¤¤` long names.
///
/// The default implementation is backed by `icu`; tests can install a fixed
/// one through [`CldrContext::set_pluralizer`](crate::CldrContext::set_pluralizer).
pub trait Pluralizer: Send + Sync {
    fn cardinal(&self, locale: &Locale, operands: PluralOperands) -> PluralCategory;
}

/// `icu`-backed [`Pluralizer`] memoizing one rule set per locale.
#[derive(Default)]
pub struct IcuPluralizer {
    rules: RwLock<FxHashMap<Locale, PluralRules>>,
}

impl Pluralizer for IcuPluralizer {
    fn cardinal(&self, locale: &Locale, operands: PluralOperands) -> PluralCategory {
        if let Some(rules) = self.rules.read().unwrap().get(locale) {
            return rules.category_for(operands);
        }

        let rules = PluralRules::try_new(&locale.into(), PluralRuleType::Cardinal)
            .expect("cardinal plural rules are compiled in");
        let category = rules.category_for(operands);
        self.rules.write().unwrap().insert(locale.clone(), rules);
        category
    }
}

/// Operands of an already-rounded digit string such as `"1234.50"`; the
/// trailing zeros matter for plural selection.
pub(crate) fn operands_from_digits(body: &str) -> PluralOperands {
    let fixed = FixedDecimal::from_str(body)
        .expect("the shaped digit body is a plain decimal string");
    PluralOperands::from(&fixed)
}

pub(crate) fn category_key(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}
