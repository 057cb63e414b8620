// SPDX-License-Identifier: PMPL-1.0-or-later

//! Explanation rendering

pub mod formatter;
pub mod output;

pub use formatter::{demo_request, ExplanationFormatter};
pub use output::{render_text, OutputFormat};
