use std::path::Path;

use crate::artifact::artifact_model::{RawRunReport, RawTestEntry};

// ============================================================================
// Artifact loading
// ============================================================================

/// Load raw test entries from a results artifact.
///
/// A missing file is not an error: the dashboard degrades to an empty
/// run. A file that exists but does not parse as the expected JSON
/// shape is fatal and surfaced to the caller.
pub fn load(path: &str) -> Result<Vec<RawTestEntry>, Box<dyn std::error::Error>> {
    if !Path::new(path).exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)?;
    let report: RawRunReport = serde_json::from_str(&content)
        .map_err(|e| format!("malformed results artifact '{}': {}", path, e))?;

    Ok(report.tests)
}
