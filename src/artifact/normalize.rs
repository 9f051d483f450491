use crate::artifact::artifact_model::{Outcome, RawTestEntry, TestRecord};

/// Outcome sentinel for entries the runner wrote without one.
const UNKNOWN_OUTCOME: &str = "unknown";

/// Normalize one raw artifact entry into a `TestRecord`.
///
/// Missing fields get safe sentinels instead of rejecting the entry, so
/// one bad record never aborts a run: no identifier becomes an empty
/// string, no outcome becomes `"unknown"`, no duration becomes 0.
pub fn normalize(raw: &RawTestEntry) -> TestRecord {
    let identifier = raw.nodeid.clone().unwrap_or_default();

    let outcome: Outcome = raw
        .outcome
        .clone()
        .unwrap_or_else(|| UNKNOWN_OUTCOME.to_string())
        .into();

    let duration = round_duration(raw.duration.unwrap_or(0.0));

    TestRecord {
        identifier,
        outcome,
        duration,
    }
}

/// Round a duration to 2 decimal places, clamping negatives to zero.
///
/// Rounding is for display; aggregation counts are unaffected by it.
pub fn round_duration(raw: f64) -> f64 {
    let clamped = raw.max(0.0);
    (clamped * 100.0).round() / 100.0
}
