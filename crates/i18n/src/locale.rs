//! Supported display languages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::I18nError;

/// A display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Am,
}

impl Locale {
    /// Every supported locale, in switcher order
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::Am];

    /// The code persisted in the language preference
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Am => "am",
        }
    }

    /// The language's name in that language, for the switcher
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Am => "አማርኛ",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "am" => Ok(Locale::Am),
            other => Err(I18nError::UnknownLocale(other.to_string())),
        }
    }
}
