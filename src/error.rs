// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for the library surface.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of an explanation request.
#[derive(Debug, Error)]
pub enum ExplainError {
    #[error(
        "unsupported explanation language '{0}' (supported: {})",
        crate::i18n::Lang::supported_codes()
    )]
    UnsupportedLanguage(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Failure to load or validate an error catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("reading catalog {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported catalog extension for {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    #[error("parsing yaml catalog")]
    Yaml(#[from] serde_yaml::Error),

    #[error("parsing json catalog")]
    Json(#[from] serde_json::Error),

    #[error("built-in catalog is invalid: {0}")]
    Builtin(String),

    #[error("catalog contains an empty error type key")]
    EmptyKey,

    #[error("{entry}: field '{field}' uses unsupported language '{code}'")]
    UnknownLanguage {
        entry: String,
        field: &'static str,
        code: String,
    },

    #[error("{entry}: field '{field}' is missing the '{lang}' translation")]
    MissingTranslation {
        entry: String,
        field: &'static str,
        lang: &'static str,
    },
}
