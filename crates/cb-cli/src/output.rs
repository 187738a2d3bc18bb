//! Per-category artifact writing.

use std::fs;
use std::path::{Path, PathBuf};

use cb_core::types::{Category, RuleSet};

/// Artifact path for a category: `<dir>/blocked_content_<category>.json`.
pub fn artifact_path(dir: &Path, category: Category) -> PathBuf {
    dir.join(format!("blocked_content_{category}.json"))
}

/// Serialize a rule set to pretty JSON and write it, creating parent
/// directories on demand. An empty set still produces an artifact.
pub fn write_rules(path: &Path, rules: &RuleSet) -> Result<(), String> {
    let json = serde_json::to_string_pretty(rules)
        .map_err(|e| format!("Failed to serialize rules: {e}"))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create '{}': {}", parent.display(), e))?;
    }
    fs::write(path, json).map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;
    Ok(())
}

/// Read an artifact back into a rule set.
pub fn read_rules(path: &Path) -> Result<RuleSet, String> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
    serde_json::from_str(&json)
        .map_err(|e| format!("Invalid rule file '{}': {}", path.display(), e))
}
