// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported explanations

use crate::types::ExplanationResult;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn render(&self, result: &ExplanationResult) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(render_text(result)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(result)?),
        }
    }
}

/// One `Key: Value` line per field. Multi-line values are kept verbatim.
pub fn render_text(result: &ExplanationResult) -> String {
    result
        .fields()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExplanationResult {
        ExplanationResult {
            explanation: "The error 'E' indicates some issue in your code.".to_string(),
            concept: "Programming Concepts".to_string(),
            example: "print('Hello World')".to_string(),
            suggested_fix: "Please review your code carefully".to_string(),
        }
    }

    #[test]
    fn text_has_one_line_per_field() {
        let text = render_text(&sample());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Explanation: The error 'E' indicates some issue in your code.",
                "Concept: Programming Concepts",
                "Example: print('Hello World')",
                "Suggested Fix: Please review your code carefully",
            ]
        );
    }

    #[test]
    fn json_round_trips() {
        let json = OutputFormat::Json.render(&sample()).unwrap();
        let back: ExplanationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn yaml_uses_display_labels() {
        let yaml = OutputFormat::Yaml.render(&sample()).unwrap();
        assert!(yaml.contains("Suggested Fix: Please review your code carefully"));
    }
}
