use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate report — outcome counts grouped by inferred category
// ============================================================================

/// Outcome counts for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCounts {
    /// Category label this bucket belongs to
    pub category: String,

    /// Number of passed tests
    pub passed: usize,

    /// Number of failed tests
    pub failed: usize,

    /// Number of expected failures
    pub xfailed: usize,

    /// Tests with any other outcome (skipped, error, ...)
    pub other: usize,
}

impl CategoryCounts {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            passed: 0,
            failed: 0,
            xfailed: 0,
            other: 0,
        }
    }

    /// Total records seen in this category.
    pub fn records(&self) -> usize {
        self.passed + self.failed + self.xfailed + self.other
    }
}

/// One failed test, kept in input order for the failure table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedTest {
    /// Test identifier as reported by the runner
    pub identifier: String,

    /// Inferred category label
    pub category: String,

    /// Elapsed seconds (rounded to 2 decimals)
    pub duration: f64,
}

/// Aggregated view of one test run.
///
/// Built fresh from a slice of `TestRecord`s via `aggregate()`; never
/// mutated afterwards. Consumed by the console and HTML renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Total number of records, across every outcome
    pub total: usize,

    /// Number of passed tests
    pub passed: usize,

    /// Number of failed tests
    pub failed: usize,

    /// Number of expected failures
    pub xfailed: usize,

    /// Records whose outcome is none of the named three; counted in
    /// `total` but given no summary card
    pub other: usize,

    /// Per-category buckets in first-seen order
    pub categories: Vec<CategoryCounts>,

    /// Failed tests in input order
    pub failures: Vec<FailedTest>,
}

impl AggregateReport {
    /// Report for a run with no records (missing or empty artifact).
    pub fn empty() -> Self {
        Self {
            total: 0,
            passed: 0,
            failed: 0,
            xfailed: 0,
            other: 0,
            categories: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Whether the run had no failures.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Look up a category bucket by label.
    pub fn category(&self, label: &str) -> Option<&CategoryCounts> {
        self.categories.iter().find(|c| c.category == label)
    }
}
