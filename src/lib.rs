// SPDX-License-Identifier: PMPL-1.0-or-later

//! CodeMentor: offline, bilingual explanations for common programming errors.
//!
//! An error string such as `"NameError: name 'x' is not defined"` is reduced
//! to its error type (the text before the first colon) and looked up in a
//! catalog of canned explanations. Each explanation has four fields
//! (Explanation, Concept, Example, Suggested Fix) available in English and
//! Hindi. Unknown error types get a generic explanation instead.
//!
//! The catalog is data: `data/errors.yaml` is embedded at build time, and
//! alternate catalogs with the same schema can be loaded from disk.

pub mod catalog;
pub mod error;
pub mod explain;
pub mod i18n;
pub mod report;
pub mod types;

pub use catalog::ErrorCatalog;
pub use error::{CatalogError, ExplainError};
pub use explain::{error_type, explain};
pub use i18n::Lang;
pub use types::{ExplainRequest, ExplanationResult, Field};
