//! Test helper functions for E2E tests

use anyhow::{Context, Result};
use gdi_validator::config::ValidatorConfig;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Temp dir laid out like the validator's mounts
///
/// Returns a TempDir that must be kept in scope for the lifetime of the test
pub fn create_mounts() -> Result<(TempDir, ValidatorConfig)> {
    let temp = TempDir::new().context("Failed to create temp directory")?;
    let config = ValidatorConfig::rooted_at(temp.path());
    Ok((temp, config))
}

/// Text with exactly `n` whitespace-separated words, spread over lines
pub fn text_with_words(n: usize) -> String {
    (0..n)
        .map(|i| if i % 12 == 11 { "word\n" } else { "word " })
        .collect()
}

/// Writes a document and returns its path as given to the validator
pub fn write_document(dir: &Path, name: &str, words: usize) -> Result<String> {
    let path = dir.join(name);
    fs::write(&path, text_with_words(words))
        .with_context(|| format!("Failed to write document {name}"))?;
    Ok(path.display().to_string())
}

/// Writes a work order listing `paths` in order
pub fn write_work_order(config: &ValidatorConfig, paths: &[&str]) -> Result<()> {
    let files: Vec<Value> = paths
        .iter()
        .map(|p| serde_json::json!({ "path": p }))
        .collect();
    write_raw_input(config, &serde_json::json!({ "files": files }).to_string())
}

/// Writes the input artifact verbatim
pub fn write_raw_input(config: &ValidatorConfig, body: &str) -> Result<()> {
    fs::write(&config.input_path, body).context("Failed to write input.json")
}

/// Reads and parses the written report
pub fn read_report(config: &ValidatorConfig) -> Result<Value> {
    let json = fs::read_to_string(&config.output_path).context("Failed to read result.json")?;
    serde_json::from_str(&json).context("result.json is not valid JSON")
}

/// Replaces every `time` field so two reports can be compared
pub fn strip_times(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if map.contains_key("time") {
                map.insert("time".to_string(), Value::Null);
            }
            for v in map.values_mut() {
                strip_times(v);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(strip_times),
        _ => {}
    }
}
