use crate::aggregate::aggregate_model::{AggregateReport, CategoryCounts, FailedTest};
use crate::artifact::artifact_model::{Outcome, TestRecord};
use crate::category::rules::classify;

// ============================================================================
// Aggregation — single pass over normalized records
// ============================================================================

/// Aggregate normalized records into an `AggregateReport`.
///
/// Single pass: global counters by outcome, a per-category bucket
/// created on first sight (insertion order preserved), and the failure
/// list in input order. No sorting, no deduplication: a repeated
/// identifier (re-run) counts once per occurrence. Pure function of the
/// input slice, so concurrent invocations never interfere.
pub fn aggregate(records: &[TestRecord]) -> AggregateReport {
    let mut report = AggregateReport::empty();

    for record in records {
        let category = classify(&record.identifier);
        let bucket = bucket_for(&mut report.categories, &category);

        match &record.outcome {
            Outcome::Passed => {
                report.passed += 1;
                bucket.passed += 1;
            }
            Outcome::Failed => {
                report.failed += 1;
                bucket.failed += 1;
            }
            Outcome::XFailed => {
                report.xfailed += 1;
                bucket.xfailed += 1;
            }
            Outcome::Other(_) => {
                report.other += 1;
                bucket.other += 1;
            }
        }
        report.total += 1;

        if record.outcome == Outcome::Failed {
            report.failures.push(FailedTest {
                identifier: record.identifier.clone(),
                category,
                duration: record.duration,
            });
        }
    }

    report
}

/// Find the bucket for a category, creating it at the end on first sight.
fn bucket_for<'a>(
    buckets: &'a mut Vec<CategoryCounts>,
    category: &str,
) -> &'a mut CategoryCounts {
    match buckets.iter().position(|b| b.category == category) {
        Some(idx) => &mut buckets[idx],
        None => {
            buckets.push(CategoryCounts::new(category));
            let last = buckets.len() - 1;
            &mut buckets[last]
        }
    }
}
