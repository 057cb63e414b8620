// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for loading catalogs from disk

use codementor::{CatalogError, ErrorCatalog, ExplainRequest, Lang};
use std::fs;
use tempfile::TempDir;

const YAML_CATALOG: &str = r#"
fallback:
  concept: { en: "General", hi: "Samanya" }
  explanation: { en: "Unknown: {error}", hi: "Anjaan: {error}" }
  example: { en: "pass", hi: "pass" }
  suggested_fix: { en: "Look closer", hi: "Dhyan se dekho" }
entries:
  KeyError:
    concept: { en: "Dictionaries", hi: "Dictionary" }
    explanation: { en: "Missing key in '{error}'", hi: "Key nahi mili '{error}'" }
    example: { en: "d.get('k')", hi: "d.get('k')" }
    suggested_fix: { en: "Use get()", hi: "get() use karo" }
"#;

fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_load_yaml_catalog_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "errors.yml", YAML_CATALOG);

    let catalog = ErrorCatalog::from_file(&path).expect("valid catalog");
    assert_eq!(catalog.error_types().collect::<Vec<_>>(), vec!["KeyError"]);

    let result = catalog.explain(&ExplainRequest::new("Python", "", "KeyError: 'k'"), Lang::Hi);
    assert_eq!(result.concept, "Dictionary");
    assert_eq!(result.explanation, "Key nahi mili 'KeyError: 'k''");

    let fallback = catalog.explain(&ExplainRequest::new("Python", "", "NameError: x"), Lang::En);
    assert_eq!(fallback.explanation, "Unknown: NameError: x");
}

#[test]
fn test_load_json_catalog_from_file() {
    let dir = TempDir::new().unwrap();
    let json = r#"{
        "fallback": {
            "concept": {"en": "General", "hi": "Samanya"},
            "explanation": {"en": "Unknown: {error}", "hi": "Anjaan: {error}"},
            "example": {"en": "pass", "hi": "pass"},
            "suggested_fix": {"en": "Look closer", "hi": "Dhyan se dekho"}
        }
    }"#;
    let path = write(&dir, "errors.json", json);

    let catalog = ErrorCatalog::from_file(&path).expect("valid catalog");
    assert!(catalog.is_empty());
    let result = catalog.explain(&ExplainRequest::new("Python", "", "Boom"), Lang::Hi);
    assert_eq!(result.explanation, "Anjaan: Boom");
    assert_eq!(result.concept, "Samanya");
}

#[test]
fn test_missing_translation_rejected() {
    let dir = TempDir::new().unwrap();
    let broken = YAML_CATALOG.replace(
        r#"suggested_fix: { en: "Use get()", hi: "get() use karo" }"#,
        r#"suggested_fix: { en: "Use get()" }"#,
    );
    let path = write(&dir, "broken.yaml", &broken);

    match ErrorCatalog::from_file(&path) {
        Err(CatalogError::MissingTranslation { entry, field, lang }) => {
            assert_eq!(entry, "KeyError");
            assert_eq!(field, "suggested_fix");
            assert_eq!(lang, "hi");
        }
        other => panic!("expected MissingTranslation, got {other:?}"),
    }
}

#[test]
fn test_unknown_extension_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "errors.toml", YAML_CATALOG);
    assert!(matches!(
        ErrorCatalog::from_file(&path),
        Err(CatalogError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.yaml");
    let err = ErrorCatalog::from_file(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn test_malformed_json_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "errors.json", "{ not json");
    assert!(matches!(
        ErrorCatalog::from_file(&path),
        Err(CatalogError::Json(_))
    ));
}

#[test]
fn test_builtin_catalog_round_trips_through_json() {
    // Re-export the embedded YAML as JSON and load it back.
    let yaml = include_str!("../data/errors.yaml");
    let value: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
    let json = serde_json::to_string(&value).unwrap();

    let from_json = ErrorCatalog::from_json_str(&json).expect("json form loads");
    assert_eq!(&from_json, ErrorCatalog::builtin().unwrap());
}
