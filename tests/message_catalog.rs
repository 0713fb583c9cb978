//! Message Catalog Tests
//!
//! Tests for default-message resolution and catalog overrides:
//! - Builders resolve every default from their message container
//! - Containers derive copies without mutating the originals
//! - Catalog files load from disk and overlay only the kinds they set
//! - Malformed catalog files report typed errors

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use verity::messages::{CatalogError, IntMessages, MessageCatalog, StringMessages};
use verity::{IntSchema, StringSchema};

// =============================================================================
// Container derivation
// =============================================================================

/// A derived container changes behavior without touching the original.
#[test]
fn test_derived_container_is_independent() {
    let base = StringMessages::default();
    let mut localized = base.clone();
    localized.required = "est requis".into();
    localized.min_length = Arc::new(|limit| format!("au moins {} caractères", limit));

    let english = StringSchema::with_messages(base);
    let french = StringSchema::with_messages(localized).min_length(3);

    assert_eq!(english.evaluate_opt(None), Some("is required"));
    assert_eq!(french.evaluate_opt(None), Some("est requis"));
    assert_eq!(french.evaluate("ab"), Some("au moins 3 caractères"));
}

/// Formatter defaults are parameterized by the constraint's value.
#[test]
fn test_formatter_defaults_receive_parameters() {
    let messages = IntMessages::default();
    assert_eq!((messages.min)(5), "must be at least 5");
    assert_eq!((messages.between)(1, 9), "must be between 1 and 9");
}

// =============================================================================
// Catalog loading
// =============================================================================

fn write_catalog(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// A catalog file overlays only the kinds it sets.
#[test]
fn test_catalog_overlays_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        "fr.json",
        r#"{
            "string": { "required": "est requis", "min_length": "au moins {value} caractères" },
            "int": { "min": "doit être au moins {value}", "between": "entre {min} et {max}" }
        }"#,
    );

    let catalog = MessageCatalog::load(&path).unwrap();

    let name = StringSchema::with_messages(catalog.string_messages()).min_length(2);
    assert_eq!(name.evaluate_opt(None), Some("est requis"));
    assert_eq!(name.evaluate("a"), Some("au moins 2 caractères"));
    // Kinds the catalog does not set keep their defaults.
    assert_eq!(
        name.messages().not_empty,
        "must not be empty"
    );

    let count = IntSchema::with_messages(catalog.int_messages())
        .min(5)
        .between(1, 9);
    assert_eq!(count.evaluate(3), Some("doit être au moins 5"));
    assert_eq!(count.evaluate(12), Some("entre 1 et 9"));
}

/// An explicit per-call message still beats a catalog override.
#[test]
fn test_explicit_message_beats_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        "fr.json",
        r#"{ "int": { "min": "doit être au moins {value}" } }"#,
    );

    let catalog = MessageCatalog::load(&path).unwrap();
    let schema = IntSchema::with_messages(catalog.int_messages())
        .min(5)
        .with_message("five or more");

    assert_eq!(schema.evaluate(3), Some("five or more"));
}

/// An empty catalog file leaves every default in place.
#[test]
fn test_empty_catalog_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "empty.json", "{}");

    let catalog = MessageCatalog::load(&path).unwrap();
    let schema = IntSchema::with_messages(catalog.int_messages()).min(5);
    assert_eq!(schema.evaluate(3), Some("must be at least 5"));
}

// =============================================================================
// Catalog errors
// =============================================================================

/// A missing file reports an I/O error with the offending path.
#[test]
fn test_missing_catalog_reports_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nonexistent.json");

    let err = MessageCatalog::load(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("nonexistent.json"));
}

/// Malformed JSON reports a parse error.
#[test]
fn test_malformed_catalog_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "broken.json", "{ not json");

    let err = MessageCatalog::load(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
}
