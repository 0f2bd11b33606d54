//! Conformance tests that run YAML fixtures against patty
//!
//! Run with: cargo test -p patty-test --test conformance

#![cfg(feature = "fixtures")]

use patty_test::fixture::Fixture;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the conformance directory relative to the workspace root
fn fixtures_dir() -> PathBuf {
    // The manifest dir is ext/test; the fixtures live at the workspace root
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let ext_test = Path::new(manifest_dir);

    let workspace_root = ext_test
        .parent() // ext
        .and_then(Path::parent) // workspace
        .expect("Could not find workspace root");

    workspace_root.join("conformance")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Load and run all fixtures in a directory
fn run_fixtures_in_dir(dir: &Path) {
    init_tracing();

    if !dir.exists() {
        panic!("Fixtures directory does not exist: {}", dir.display());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").path())
        .filter(|path| {
            path.extension()
                .is_some_and(|e| e == "yaml" || e == "yml")
        })
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no fixtures in {}", dir.display());

    for path in paths {
        tracing::info!(fixture = %path.display(), "running fixture file");

        let yaml = fs::read_to_string(&path).expect("read yaml");

        // Parse potentially multiple fixtures (separated by ---)
        let fixtures = Fixture::from_yaml_multi(&yaml).unwrap_or_else(|e| {
            panic!("Failed to parse {}: {}", path.display(), e);
        });

        for fixture in fixtures {
            tracing::info!(name = %fixture.name, cases = fixture.cases.len(), "running fixture");
            fixture.run_and_assert();
        }
    }
}

#[test]
fn test_conditions() {
    run_fixtures_in_dir(&fixtures_dir().join("01_conditions"));
}

#[test]
fn test_lists() {
    run_fixtures_in_dir(&fixtures_dir().join("02_lists"));
}

#[test]
fn test_semantics() {
    run_fixtures_in_dir(&fixtures_dir().join("03_semantics"));
}

#[test]
fn test_invariants() {
    run_fixtures_in_dir(&fixtures_dir().join("04_invariants"));
}
