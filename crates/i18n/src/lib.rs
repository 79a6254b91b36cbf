//! English/Amharic translations for the MBet-Adera client
//!
//! Lookups go through a typed [`Key`] table. String keys that are not in the
//! table come back unchanged, so a missing translation shows up on screen
//! instead of failing.
//!
//! ```
//! use mbet_adera_i18n::{format, translate, Locale};
//!
//! let greeting = format(translate(Locale::En, "dashboard.welcome"), &[("name", &"Abebe")]);
//! assert_eq!(greeting, "Welcome, Abebe");
//! assert_eq!(translate(Locale::Am, "no.such.key"), "no.such.key");
//! ```

mod error;
mod keys;
mod locale;
mod store;

use log::{info, warn};
use std::fmt::Display;

pub use error::I18nError;
pub use keys::Key;
pub use locale::Locale;
pub use store::{FilePreferences, MemoryPreferences, PreferenceStore};

/// Preference key holding the selected locale code
pub const LANGUAGE_PREFERENCE: &str = "language";

/// Named values substituted into `{name}` placeholders
pub type Params<'a> = [(&'a str, &'a dyn Display)];

/// Template for a dotted key, or the key itself when it is unknown
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
    match Key::from_name(key) {
        Some(key) => key.text(locale),
        None => key,
    }
}

/// Substitute `{name}` placeholders.
///
/// Each parameter replaces the first occurrence of its placeholder only;
/// unknown placeholders are left in place.
pub fn format(template: &str, params: &Params<'_>) -> String {
    let mut text = template.to_string();
    for (name, value) in params {
        let placeholder = format!("{{{}}}", name);
        text = text.replacen(&placeholder, &value.to_string(), 1);
    }
    text
}

/// The active locale, backed by a durable preference
#[derive(Debug)]
pub struct Language<S> {
    locale: Locale,
    store: S,
}

impl<S: PreferenceStore> Language<S> {
    /// Read the saved locale once. Missing, unknown or unreadable values fall
    /// back to English.
    pub fn load(store: S) -> Self {
        let locale = match store.get(LANGUAGE_PREFERENCE) {
            Ok(Some(code)) => code.parse().unwrap_or_else(|_| {
                warn!("Ignoring unknown saved language {:?}", code);
                Locale::default()
            }),
            Ok(None) => Locale::default(),
            Err(err) => {
                warn!("Failed to read language preference: {}", err);
                Locale::default()
            }
        };

        Self { locale, store }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch locale and persist the choice.
    ///
    /// The in-memory locale changes even if persisting fails.
    pub fn set_locale(&mut self, locale: Locale) -> Result<(), I18nError> {
        if self.locale != locale {
            info!("Switching language from {} to {}", self.locale, locale);
        }
        self.locale = locale;
        self.store.set(LANGUAGE_PREFERENCE, locale.code())
    }

    /// Look up a dotted key and fill in its placeholders
    pub fn t(&self, key: &str, params: &Params<'_>) -> String {
        format(translate(self.locale, key), params)
    }

    /// Typed lookup without parameters
    pub fn text(&self, key: Key) -> &'static str {
        key.text(self.locale)
    }

    /// Typed lookup with parameters
    pub fn format(&self, key: Key, params: &Params<'_>) -> String {
        format(key.text(self.locale), params)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
