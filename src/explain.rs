// SPDX-License-Identifier: PMPL-1.0-or-later

//! Explanation lookup against the built-in catalog.

use crate::catalog::ErrorCatalog;
use crate::error::ExplainError;
use crate::i18n::Lang;
use crate::types::{ExplainRequest, ExplanationResult};

/// Error type of an error string: everything before the first colon, or the
/// whole string when there is none. Not trimmed.
///
/// # Examples
/// ```
/// use codementor::explain::error_type;
/// assert_eq!(error_type("NameError: name 'x' is not defined"), "NameError");
/// assert_eq!(error_type("a:b:c"), "a");
/// assert_eq!(error_type("SyntaxError"), "SyntaxError");
/// ```
pub fn error_type(error: &str) -> &str {
    error.split_once(':').map_or(error, |(prefix, _)| prefix)
}

/// Explain `error` in the display language `explain_language` ("en" or "hi").
///
/// `language` and `code` describe where the error came from; they do not
/// influence the result. Unknown error types produce the generic fallback
/// explanation. The only failure is an unsupported `explain_language`.
///
/// # Examples
/// ```
/// let result = codementor::explain(
///     "Python",
///     "print(x)",
///     "NameError: name 'x' is not defined",
///     "hi",
/// )
/// .unwrap();
/// assert_eq!(result.concept, "Variable / Naamkaran ke niyam");
/// ```
pub fn explain(
    language: &str,
    code: &str,
    error: &str,
    explain_language: &str,
) -> Result<ExplanationResult, ExplainError> {
    let lang: Lang = explain_language.parse()?;
    let catalog = ErrorCatalog::builtin()?;
    Ok(catalog.explain(&ExplainRequest::new(language, code, error), lang))
}
