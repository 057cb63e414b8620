// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error catalog: the registry of known error types and their explanations.
//!
//! The built-in catalog ships as `data/errors.yaml`, embedded at compile time
//! and parsed once on first use. Alternate catalogs use the same schema and
//! can be loaded from JSON or YAML files.

mod entry;

pub use entry::{EntrySpec, ErrorEntry, Localized, ERROR_PLACEHOLDER};

use crate::error::CatalogError;
use crate::explain::error_type;
use crate::i18n::Lang;
use crate::types::{ExplainRequest, ExplanationResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

const BUILTIN_CATALOG: &str = include_str!("../../data/errors.yaml");

static BUILTIN: OnceLock<Result<ErrorCatalog, String>> = OnceLock::new();

/// A catalog file as written on disk.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    pub fallback: EntrySpec,
    #[serde(default)]
    pub entries: BTreeMap<String, EntrySpec>,
}

impl CatalogFile {
    /// Validate every entry and the fallback, producing a lookup-ready catalog.
    pub fn validate(self) -> Result<ErrorCatalog, CatalogError> {
        let fallback = self.fallback.validate("fallback")?;
        let mut entries = BTreeMap::new();
        for (name, spec) in self.entries {
            if name.is_empty() {
                return Err(CatalogError::EmptyKey);
            }
            let entry = spec.validate(&name)?;
            entries.insert(name, entry);
        }
        Ok(ErrorCatalog { entries, fallback })
    }
}

/// An immutable, validated catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCatalog {
    entries: BTreeMap<String, ErrorEntry>,
    fallback: ErrorEntry,
}

impl ErrorCatalog {
    /// The catalog embedded in the binary, parsed on first call.
    pub fn builtin() -> Result<&'static Self, CatalogError> {
        BUILTIN
            .get_or_init(|| Self::from_yaml_str(BUILTIN_CATALOG).map_err(|err| err.to_string()))
            .as_ref()
            .map_err(|msg| CatalogError::Builtin(msg.clone()))
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(source)?;
        let catalog = file.validate()?;
        tracing::debug!(entries = catalog.len(), format = "yaml", "loaded error catalog");
        Ok(catalog)
    }

    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(source)?;
        let catalog = file.validate()?;
        tracing::debug!(entries = catalog.len(), format = "json", "loaded error catalog");
        Ok(catalog)
    }

    /// Load a catalog file, choosing the parser by extension.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let format = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => CatalogFormat::Json,
            Some("yaml") | Some("yml") => CatalogFormat::Yaml,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "reading error catalog");
        match format {
            CatalogFormat::Json => Self::from_json_str(&content),
            CatalogFormat::Yaml => Self::from_yaml_str(&content),
        }
    }

    pub fn lookup(&self, error_type: &str) -> Option<&ErrorEntry> {
        self.entries.get(error_type)
    }

    /// Known error types, sorted.
    pub fn error_types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ErrorEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Explain `request.error` in `lang`.
    ///
    /// Unknown error types get the fallback entry, so this never fails.
    pub fn explain(&self, request: &ExplainRequest, lang: Lang) -> ExplanationResult {
        let kind = error_type(&request.error);
        let entry = self.lookup(kind);
        tracing::trace!(
            error_type = kind,
            known = entry.is_some(),
            lang = %lang,
            source_language = %request.language,
            code_len = request.code.len(),
            "explaining error"
        );
        entry
            .unwrap_or(&self.fallback)
            .render(lang, &request.error)
    }
}

#[derive(Debug, Clone, Copy)]
enum CatalogFormat {
    Json,
    Yaml,
}
