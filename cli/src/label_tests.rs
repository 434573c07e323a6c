//! CLI commands for label parsing test fixture management.
//!
//! Provides the command to update golden fixtures after intentional parser
//! changes.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use labelscan_core::{parse_label, Label};
use serde::{Deserialize, Serialize};

/// A test case for label parsing
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TestCase {
    text: String,
    expected: Label,
}

/// Default path to the fixtures directory
fn default_fixtures_dir() -> PathBuf {
    PathBuf::from("labelscan-core/tests/fixtures/label_parsing")
}

/// Update all test fixtures to match current parser output.
///
/// Runs the parser on each test case's `text` input and updates the
/// `expected` field to match the actual output.
pub fn update_fixtures(fixtures_dir: Option<&Path>) -> Result<()> {
    let fixtures_dir = fixtures_dir
        .map(PathBuf::from)
        .unwrap_or_else(default_fixtures_dir);

    let mut updated = 0;
    let mut unchanged = 0;

    for subdir in ["curated", "bulk"] {
        let dir = fixtures_dir.join(subdir);
        if !dir.exists() {
            continue;
        }

        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().map(|e| e == "json").unwrap_or(false) {
                let content = fs::read_to_string(&path)?;
                let mut test_case: TestCase = serde_json::from_str(&content)?;

                let actual = parse_label(&test_case.text);

                if actual != test_case.expected {
                    test_case.expected = actual;
                    let json = serde_json::to_string_pretty(&test_case)?;
                    fs::write(&path, json)?;
                    updated += 1;
                    println!("Updated: {}", path.display());
                } else {
                    unchanged += 1;
                }
            }
        }
    }

    println!("\nSummary: {} updated, {} unchanged", updated, unchanged);

    Ok(())
}
