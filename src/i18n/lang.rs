// SPDX-License-Identifier: PMPL-1.0-or-later

//! Display languages for explanation text.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add its arms to `Lang::code()`, `Lang::from_code()` and `Lang::name()`
//! 3. Add it to `Lang::all()`
//! 4. Add a translation for every field of every entry in `data/errors.yaml`
//!    (catalog validation rejects entries that miss one)

use crate::error::ExplainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported display languages.
///
/// Each variant maps to an ISO 639-1 two-letter code. Hindi text is written
/// in Latin script (Hinglish), matching how the catalog is authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Hi,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hi => "hi",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive (codes must be
    /// lowercase per ISO 639-1).
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "hi" => Some(Lang::Hi),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Hi]
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Hi => "Hindi",
        }
    }

    /// Comma-separated list of supported codes, for error messages.
    pub fn supported_codes() -> String {
        Lang::all()
            .iter()
            .map(|lang| lang.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Lang {
    type Err = ExplainError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Lang::from_code(code).ok_or_else(|| ExplainError::UnsupportedLanguage(code.to_string()))
    }
}
