// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for codementor.
//!
//! ## Supported languages
//!
//! | Code | Language | Script used in the catalog |
//! |------|----------|----------------------------|
//! | en   | English  | Latin                      |
//! | hi   | Hindi    | Latin (Hinglish)           |
//!
//! Unlike UI label lookups, explanation lookups never fall back to English:
//! asking for a language outside this table is an error
//! ([`crate::error::ExplainError::UnsupportedLanguage`]).

mod lang;

pub use lang::Lang;
