// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog entries: declarative specs as read from disk, and the validated
//! form used for lookups.

use crate::error::CatalogError;
use crate::i18n::Lang;
use crate::types::{ExplanationResult, Field};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder replaced with the caller's error string.
pub const ERROR_PLACEHOLDER: &str = "{error}";

/// One entry as written in a catalog file. Texts are keyed by language code.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EntrySpec {
    pub concept: BTreeMap<String, String>,
    pub explanation: BTreeMap<String, String>,
    pub example: BTreeMap<String, String>,
    pub suggested_fix: BTreeMap<String, String>,
}

impl EntrySpec {
    /// Check every field against the supported languages and bind it to
    /// typed [`Lang`] keys.
    pub fn validate(self, name: &str) -> Result<ErrorEntry, CatalogError> {
        Ok(ErrorEntry {
            concept: Localized::from_spec(name, Field::Concept, self.concept)?,
            explanation: Localized::from_spec(name, Field::Explanation, self.explanation)?,
            example: Localized::from_spec(name, Field::Example, self.example)?,
            suggested_fix: Localized::from_spec(name, Field::SuggestedFix, self.suggested_fix)?,
        })
    }
}

/// A text with one variant per supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localized(BTreeMap<Lang, String>);

impl Localized {
    fn from_spec(
        entry: &str,
        field: Field,
        texts: BTreeMap<String, String>,
    ) -> Result<Self, CatalogError> {
        let mut by_lang = BTreeMap::new();
        for (code, text) in texts {
            let lang = Lang::from_code(&code).ok_or_else(|| CatalogError::UnknownLanguage {
                entry: entry.to_string(),
                field: field.catalog_key(),
                code: code.clone(),
            })?;
            by_lang.insert(lang, text);
        }

        if let Some(missing) = Lang::all().iter().find(|lang| !by_lang.contains_key(*lang)) {
            return Err(CatalogError::MissingTranslation {
                entry: entry.to_string(),
                field: field.catalog_key(),
                lang: missing.code(),
            });
        }

        Ok(Self(by_lang))
    }

    /// Text for `lang`. Validation guarantees every language is present.
    pub fn get(&self, lang: Lang) -> &str {
        self.0.get(&lang).map(String::as_str).unwrap_or_default()
    }
}

/// A validated catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    concept: Localized,
    explanation: Localized,
    example: Localized,
    suggested_fix: Localized,
}

impl ErrorEntry {
    /// Raw text of one field, placeholders untouched.
    pub fn text(&self, field: Field, lang: Lang) -> &str {
        let localized = match field {
            Field::Explanation => &self.explanation,
            Field::Concept => &self.concept,
            Field::Example => &self.example,
            Field::SuggestedFix => &self.suggested_fix,
        };
        localized.get(lang)
    }

    /// Render all four fields in `lang`, substituting `error` for the
    /// placeholder.
    pub fn render(&self, lang: Lang, error: &str) -> ExplanationResult {
        let fill = |field| interpolate(self.text(field, lang), error);
        ExplanationResult {
            explanation: fill(Field::Explanation),
            concept: fill(Field::Concept),
            example: fill(Field::Example),
            suggested_fix: fill(Field::SuggestedFix),
        }
    }
}

/// The error string is display-only and inserted verbatim.
fn interpolate(template: &str, error: &str) -> String {
    template.replace(ERROR_PLACEHOLDER, error)
}
