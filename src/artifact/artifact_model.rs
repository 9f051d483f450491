use serde::{Deserialize, Serialize};

// ============================================================================
// Raw artifact model — results JSON written by an external test runner
// ============================================================================

/// Top-level shape of a test-run artifact (pytest-json style).
///
/// Only the `tests` list is consumed. A report without the key is an
/// empty run; any other top-level fields the producing tool emits are
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRunReport {
    /// Raw test entries for one run
    #[serde(default)]
    pub tests: Vec<RawTestEntry>,
}

/// One raw entry from the artifact, before normalization.
///
/// Every field is optional so a single incomplete entry can never make
/// the whole artifact unreadable; `normalize()` fills in sentinels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTestEntry {
    /// Test identifier, conventionally `<source-path>::<test-name>`
    #[serde(default)]
    pub nodeid: Option<String>,

    /// Terminal outcome string as reported by the runner
    #[serde(default)]
    pub outcome: Option<String>,

    /// Elapsed seconds
    #[serde(default)]
    pub duration: Option<f64>,
}

// ============================================================================
// Normalized records
// ============================================================================

/// Terminal result of a single test execution.
///
/// An open set: `passed`, `failed`, and `xfailed` get dedicated handling
/// in summaries and charts; any other string the runner emits (skipped,
/// error, ...) is preserved verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Outcome {
    Passed,
    Failed,
    XFailed,
    Other(String),
}

impl From<String> for Outcome {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "passed" => Outcome::Passed,
            "failed" => Outcome::Failed,
            "xfailed" => Outcome::XFailed,
            _ => Outcome::Other(raw),
        }
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Passed => "passed".to_string(),
            Outcome::Failed => "failed".to_string(),
            Outcome::XFailed => "xfailed".to_string(),
            Outcome::Other(raw) => raw,
        }
    }
}

/// A normalized test record, ready for classification and aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Unique-within-run identifier (empty for entries that had none)
    pub identifier: String,

    /// Terminal outcome
    pub outcome: Outcome,

    /// Elapsed seconds, rounded to 2 decimals, never negative
    pub duration: f64,
}
