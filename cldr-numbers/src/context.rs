use std::sync::{Arc, RwLock};

use cldr_pattern::Meta;
use icu::locid::{locale, Locale};
use rustc_hash::FxHashMap;

use crate::data::{self, CurrencyDisplay, CurrencyInfo, LocaleDocument, Symbols};
use crate::errors::{DataError, FormatError};
use crate::format;
use crate::options::{FormatOptions, FormatRef, NumberSystem};
use crate::types::number::Number;
use crate::types::plural::{IcuPluralizer, Pluralizer};

/// One locale's slice of the bundle, with its named styles precompiled.
pub(crate) struct LocaleData {
    pub minimum_grouping_digits: usize,
    pub default_system: String,
    pub native_system: String,
    pub symbols: FxHashMap<String, Symbols>,
    pub formats: FxHashMap<String, Arc<Meta>>,
    pub currencies: FxHashMap<String, CurrencyDisplay>,
}

/// Digit table and symbol set picked for one format call.
pub(crate) struct ResolvedSystem<'c> {
    pub digits: &'c [char; 10],
    pub symbols: &'c Symbols,
}

/// Owns the locale table, numbering systems, currency data, the plural
/// bridge and the compiled-pattern cache.
///
/// The context is the only configuration surface: there is no process-wide
/// state, and a context behind an `Arc` can serve any number of threads
/// concurrently — formatting itself is a pure function of its arguments.
pub struct CldrContext {
    locales: FxHashMap<Locale, LocaleData>,
    currencies: FxHashMap<String, CurrencyInfo>,
    numbering_systems: FxHashMap<String, [char; 10]>,
    default_locale: Locale,
    /// User-supplied patterns memoized after first compilation. Two racing
    /// compilations produce equal metas; the last insert wins.
    patterns: RwLock<FxHashMap<String, Arc<Meta>>>,
    pluralizer: Box<dyn Pluralizer>,
}

impl CldrContext {
    /// Builds a context over the locale documents embedded with the crate.
    pub fn new() -> Self {
        let mut context = Self {
            locales: FxHashMap::default(),
            currencies: serde_json::from_str(data::CURRENCY_DOCUMENT)
                .expect("embedded currency data is valid"),
            numbering_systems: FxHashMap::default(),
            default_locale: locale!("en"),
            patterns: RwLock::new(FxHashMap::default()),
            pluralizer: Box::new(IcuPluralizer::default()),
        };

        let systems: FxHashMap<String, String> =
            serde_json::from_str(data::NUMBERING_SYSTEM_DOCUMENT)
                .expect("embedded numbering-system data is valid");
        for (name, digits) in systems {
            context
                .add_numbering_system(name, &digits)
                .expect("embedded numbering-system data is valid");
        }
        for document in data::LOCALE_DOCUMENTS {
            context
                .add_locale_json(document)
                .expect("embedded locale data is valid");
        }
        context
    }

    /// Registers (or replaces) a locale from its JSON document, compiling
    /// its named format styles eagerly.
    pub fn add_locale_json(&mut self, json: &str) -> Result<Locale, DataError> {
        let document: LocaleDocument = serde_json::from_str(json)?;
        let locale: Locale = document
            .locale
            .parse()
            .map_err(|_| DataError::InvalidLocale(document.locale.clone()))?;

        let mut formats = FxHashMap::default();
        for (style, pattern) in &document.formats {
            let meta = cldr_pattern::compile(pattern).map_err(|source| {
                DataError::InvalidPattern {
                    style: style.clone(),
                    source,
                }
            })?;
            formats.insert(style.clone(), Arc::new(meta));
        }

        let native = document
            .number_systems
            .native
            .unwrap_or_else(|| document.number_systems.default.clone());
        self.locales.insert(
            locale.clone(),
            LocaleData {
                minimum_grouping_digits: document.minimum_grouping_digits,
                default_system: document.number_systems.default,
                native_system: native,
                symbols: document.symbols,
                formats,
                currencies: document.currencies,
            },
        );
        Ok(locale)
    }

    /// Registers a numbering system from its ten digit glyphs.
    pub fn add_numbering_system(&mut self, name: String, digits: &str) -> Result<(), DataError> {
        let glyphs: Vec<char> = digits.chars().collect();
        let table: [char; 10] = glyphs
            .try_into()
            .map_err(|_| DataError::InvalidDigits(name.clone()))?;
        self.numbering_systems.insert(name, table);
        Ok(())
    }

    /// Replaces the plural bridge used for `¤¤¤` long names.
    pub fn set_pluralizer(&mut self, pluralizer: Box<dyn Pluralizer>) {
        self.pluralizer = pluralizer;
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    pub fn set_default_locale(&mut self, locale: Locale) -> Result<(), FormatError> {
        if !self.locales.contains_key(&locale) {
            return Err(FormatError::UnknownLocale(locale));
        }
        self.default_locale = locale;
        Ok(())
    }

    /// Locales currently in the bundle, in no particular order.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.locales.keys()
    }

    /// Options preset for the context's default locale.
    pub fn default_options(&self) -> FormatOptions {
        FormatOptions::new(self.default_locale.clone())
    }

    /// Formats `number` according to a named style or an inline pattern.
    ///
    /// Every validation (locale, numbering system, currency, style,
    /// pattern) happens before any arithmetic; a failed call has no side
    /// effects.
    pub fn format<'a>(
        &self,
        number: impl Into<Number>,
        format: impl Into<FormatRef<'a>>,
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        let number = number.into();
        let data = self
            .locales
            .get(&options.locale)
            .ok_or_else(|| FormatError::UnknownLocale(options.locale.clone()))?;
        let meta = match format.into() {
            FormatRef::Style(style) => data
                .formats
                .get(style.key())
                .cloned()
                .ok_or_else(|| FormatError::UnknownFormat(style.key().to_string()))?,
            FormatRef::Pattern(pattern) => self.compiled(pattern)?,
        };
        format::format_number(self, data, &number, &meta, options)
    }

    fn compiled(&self, pattern: &str) -> Result<Arc<Meta>, FormatError> {
        if let Some(meta) = self.patterns.read().unwrap().get(pattern) {
            return Ok(meta.clone());
        }
        let meta = Arc::new(cldr_pattern::compile(pattern)?);
        self.patterns
            .write()
            .unwrap()
            .insert(pattern.to_string(), meta.clone());
        Ok(meta)
    }

    pub(crate) fn currency_info(&self, code: &str) -> Result<&CurrencyInfo, FormatError> {
        self.currencies
            .get(code)
            .ok_or_else(|| FormatError::UnknownCurrency(code.to_string()))
    }

    pub(crate) fn pluralizer(&self) -> &dyn Pluralizer {
        self.pluralizer.as_ref()
    }

    pub(crate) fn resolve_system<'c>(
        &'c self,
        data: &'c LocaleData,
        selector: &NumberSystem,
    ) -> Result<ResolvedSystem<'c>, FormatError> {
        let name = match selector {
            NumberSystem::Default => data.default_system.as_str(),
            NumberSystem::Native => data.native_system.as_str(),
            NumberSystem::Named(name) => name.as_str(),
        };
        let digits = self
            .numbering_systems
            .get(name)
            .ok_or_else(|| FormatError::UnknownNumberSystem(name.to_string()))?;
        let symbols = data
            .symbols
            .get(name)
            .or_else(|| data.symbols.get(&data.default_system))
            .ok_or_else(|| FormatError::UnknownNumberSystem(name.to_string()))?;
        Ok(ResolvedSystem { digits, symbols })
    }
}

impl Default for CldrContext {
    fn default() -> Self {
        Self::new()
    }
}
