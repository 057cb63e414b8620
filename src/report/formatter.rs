// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console formatting for the demo and catalog listings

use crate::catalog::ErrorCatalog;
use crate::error::CatalogError;
use crate::i18n::Lang;
use crate::report::output::render_text;
use crate::types::{ExplainRequest, ExplanationResult, Field};
use colored::*;
use std::fmt::Write;
use std::path::Path;

pub const DEMO_BANNER: &str = "=== CodeMentor AI – Advanced Student Demo (Offline Mode) ===";
pub const DEMO_FOOTER: &str = "✅ Advanced demo executed successfully.";
pub const EXPLANATION_HEADER: &str = "--- AI Explanation ---";

pub const DEMO_LANGUAGE: &str = "Python";
pub const DEMO_CODE: &str = "print(x)";
pub const DEMO_ERROR: &str = "NameError: name 'x' is not defined";
pub const DEMO_EXPLAIN_LANGUAGE: Lang = Lang::Hi;

/// The sample inputs shown by the demo.
pub fn demo_request() -> ExplainRequest {
    ExplainRequest::new(DEMO_LANGUAGE, DEMO_CODE, DEMO_ERROR)
}

pub struct ExplanationFormatter;

impl ExplanationFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Explain the sample inputs against the built-in catalog and format the
    /// transcript.
    pub fn demo_transcript(&self) -> Result<String, CatalogError> {
        let request = demo_request();
        let result = ErrorCatalog::builtin()?.explain(&request, DEMO_EXPLAIN_LANGUAGE);
        Ok(self.demo(&request, &result))
    }

    /// Full demo transcript: banner, inputs, explanation, footer.
    pub fn demo(&self, request: &ExplainRequest, result: &ExplanationResult) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n{}\n", DEMO_BANNER.bold().cyan());
        let _ = writeln!(out, "Language: {}", request.language);
        let _ = writeln!(out, "Student Code:\n {}", request.code);
        let _ = writeln!(out, "Error: {}", request.error);
        let _ = writeln!(out, "\n{}", EXPLANATION_HEADER.bold().yellow());
        let _ = writeln!(out, "{}", render_text(result));
        let _ = writeln!(out, "\n{}\n", DEMO_FOOTER.green());
        out
    }

    /// Known error types with their concept in every supported language.
    pub fn catalog_listing(&self, catalog: &ErrorCatalog) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} ({} error types)",
            "KNOWN ERROR TYPES".bold().yellow(),
            catalog.len()
        );
        for (name, entry) in catalog.entries() {
            let _ = writeln!(out, "  {}", name.bold());
            for lang in Lang::all() {
                let _ = writeln!(
                    out,
                    "    [{}] {}",
                    lang.code(),
                    entry.text(Field::Concept, *lang)
                );
            }
        }
        out
    }

    /// One-line result of validating a catalog file.
    pub fn check_summary(&self, path: &Path, catalog: &ErrorCatalog) -> String {
        format!(
            "{}: {} ({} error types, languages: {})",
            path.display(),
            "ok".green(),
            catalog.len(),
            Lang::supported_codes()
        )
    }
}

impl Default for ExplanationFormatter {
    fn default() -> Self {
        Self::new()
    }
}
