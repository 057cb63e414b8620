// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for codementor

use serde::{Deserialize, Serialize};

/// The four explanation fields, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Explanation,
    Concept,
    Example,
    SuggestedFix,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::Explanation,
            Field::Concept,
            Field::Example,
            Field::SuggestedFix,
        ]
    }

    /// Label used in rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Explanation => "Explanation",
            Field::Concept => "Concept",
            Field::Example => "Example",
            Field::SuggestedFix => "Suggested Fix",
        }
    }

    /// Key used in catalog files.
    pub fn catalog_key(&self) -> &'static str {
        match self {
            Field::Explanation => "explanation",
            Field::Concept => "concept",
            Field::Example => "example",
            Field::SuggestedFix => "suggested_fix",
        }
    }
}

/// A complete explanation. Always carries all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationResult {
    #[serde(rename = "Explanation")]
    pub explanation: String,
    #[serde(rename = "Concept")]
    pub concept: String,
    #[serde(rename = "Example")]
    pub example: String,
    #[serde(rename = "Suggested Fix")]
    pub suggested_fix: String,
}

impl ExplanationResult {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Explanation => &self.explanation,
            Field::Concept => &self.concept,
            Field::Example => &self.example,
            Field::SuggestedFix => &self.suggested_fix,
        }
    }

    /// `(label, value)` pairs in output order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Field::all()
            .iter()
            .map(move |field| (field.label(), self.get(*field)))
    }
}

/// Inputs to a lookup.
///
/// `language` and `code` describe where the error came from. They are kept
/// for callers and logs; the lookup itself only reads `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainRequest {
    pub language: String,
    pub code: String,
    pub error: String,
}

impl ExplainRequest {
    pub fn new(
        language: impl Into<String>,
        code: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
            error: error.into(),
        }
    }
}
