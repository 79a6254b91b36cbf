//! Error type for the translation layer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Preference storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
