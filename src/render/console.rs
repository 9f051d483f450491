use crate::aggregate::aggregate_model::AggregateReport;

// ============================================================================
// Console renderer — formatted terminal output
// ============================================================================

/// Format an aggregate report for terminal output.
///
/// Produces output like:
/// ```text
/// === QA Automation Dashboard ===
///
/// Backend Regression            1 passed, 0 failed, 0 xfailed
/// Frontend Smoke (Firefox)      0 passed, 1 failed, 0 xfailed
///
/// Failed tests:
///   ✗ frontend_smoke/test_b.py::t2 [Frontend Smoke (Firefox)] (1.23s)
///
/// === Results: 1 passed, 1 failed, 0 xfailed (2 total) ===
/// ```
pub fn render_console(report: &AggregateReport) -> String {
    let mut out = String::new();

    out.push_str("=== QA Automation Dashboard ===\n\n");

    if report.is_empty() {
        out.push_str("(no test results)\n\n");
    } else {
        let width = report
            .categories
            .iter()
            .map(|c| c.category.len())
            .max()
            .unwrap_or(0);

        for counts in &report.categories {
            out.push_str(&format!(
                "{:<width$}  {} passed, {} failed, {} xfailed\n",
                counts.category,
                counts.passed,
                counts.failed,
                counts.xfailed,
                width = width,
            ));
        }
        out.push('\n');
    }

    if !report.failures.is_empty() {
        out.push_str("Failed tests:\n");
        for failure in &report.failures {
            out.push_str(&format!(
                "  \u{2717} {} [{}] ({:.2}s)\n",
                failure.identifier, failure.category, failure.duration
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "=== Results: {} passed, {} failed, {} xfailed ({} total) ===\n",
        report.passed, report.failed, report.xfailed, report.total
    ));

    out
}
