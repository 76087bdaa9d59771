//! JSON writer for rule set files.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::RuleSet;

/// Generate the JSON document for a rule set.
///
/// Two-space indentation, non-ASCII text written literally, trailing newline.
/// The output depends only on the rule set contents, so re-running an export
/// produces byte-identical files.
pub fn generate_json(rule_set: &RuleSet) -> Result<String> {
    let mut content = serde_json::to_string_pretty(rule_set)?;
    content.push('\n');
    Ok(content)
}

/// Save a rule set as a JSON file.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// This ensures partial writes don't corrupt existing files on crash.
///
/// # Arguments
/// * `rule_set` - The rule set to save
/// * `output` - Destination path; parent directories are created as needed
///
/// # Returns
/// Path to the saved file
pub fn save_json(rule_set: &RuleSet, output: &Path) -> Result<PathBuf> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = generate_json(rule_set)?;
    let temp_file = temp_path(output);

    // Write to temp file first, then sync and rename for atomicity
    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?; // Ensure data is flushed to disk
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output.exists() {
        fs::remove_file(output)?;
    }

    // Atomic rename (on most filesystems)
    fs::rename(&temp_file, output)?;

    Ok(output.to_path_buf())
}

/// Temp-file path next to the destination, so the final rename stays on one
/// filesystem.
fn temp_path(output: &Path) -> PathBuf {
    let temp_name = output.file_name().map_or_else(
        || String::from(".rules.json.tmp"),
        |name| format!(".{}.tmp", name.to_string_lossy()),
    );
    output.with_file_name(temp_name)
}
