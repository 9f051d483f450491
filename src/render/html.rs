use crate::aggregate::aggregate_model::{AggregateReport, CategoryCounts};

// ============================================================================
// HTML renderer — self-contained dashboard document
// ============================================================================

const PASS_COLOR: &str = "#00ffa6";
const FAIL_COLOR: &str = "#ff3b6a";
const XFAIL_COLOR: &str = "#ffc14d";

/// Generate a self-contained HTML dashboard.
///
/// Features:
/// - Summary cards for total / passed / failed / xfailed
/// - One bar chart per category, rendered as inline SVG
/// - Failed-test table (only when there are failures)
/// - Inline CSS, no external scripts or stylesheets
/// - "No test results" empty state instead of a blank page
pub fn render_html(report: &AggregateReport) -> String {
    let body = if report.is_empty() {
        "<p class=\"empty\">No test results found.</p>\n".to_string()
    } else {
        let mut charts = String::new();
        for counts in &report.categories {
            charts.push_str(&format!(
                "<div class=\"chart-wrap\"><h3>{}</h3>{}</div>\n",
                escape_html(&counts.category),
                category_chart(counts),
            ));
        }
        format!("<div class=\"grid\">\n{}</div>\n", charts)
    };

    let failures = failed_table(report);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>QA Automation Dashboard</title>
<style>
body {{ background: #050607; color: #e8e8e8; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 0; }}
.header {{ text-align: center; padding: 40px 0 20px; }}
.header h1 {{ margin: 0; font-size: 32px; letter-spacing: 3px; color: {pass_color}; }}
.cards {{ display: flex; justify-content: center; gap: 16px; margin: 25px auto 40px; max-width: 1100px; }}
.card {{ background: #0b0d10; border: 1px solid rgba(255,255,255,0.08); border-radius: 12px; text-align: center; padding: 18px 24px; min-width: 140px; }}
.card h2 {{ margin: 0; font-size: 26px; }}
.card p {{ color: #9a9a9a; font-size: 13px; margin: 6px 0 0; text-transform: uppercase; }}
.grid {{ max-width: 1150px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 20px; padding: 0 20px; }}
.chart-wrap {{ background: #0b0d10; border: 1px solid rgba(0,255,255,0.15); border-radius: 14px; padding: 12px 14px; }}
.chart-wrap h3 {{ margin: 0 0 8px 0; font-size: 15px; color: #cfcfcf; }}
.failed-section {{ max-width: 1100px; margin: 35px auto 60px; padding: 0 20px; }}
.failed-section h2 {{ color: {fail_color}; font-size: 20px; }}
.failed-table {{ width: 100%; border-collapse: collapse; font-size: 13px; }}
.failed-table th, .failed-table td {{ border-bottom: 1px solid rgba(255,255,255,0.08); padding: 8px 10px; text-align: left; }}
.failed-table th {{ color: #999; font-weight: 600; text-transform: uppercase; }}
.empty {{ text-align: center; color: #9a9a9a; font-size: 16px; margin: 60px 0; }}
</style>
</head>
<body>
<div class="header"><h1>QA AUTOMATION DASHBOARD</h1></div>
<div class="cards">
<div class="card"><h2>{total}</h2><p>Total</p></div>
<div class="card"><h2 style="color:{pass_color}">{passed}</h2><p>Passed</p></div>
<div class="card"><h2 style="color:{fail_color}">{failed}</h2><p>Failed</p></div>
<div class="card"><h2 style="color:{xfail_color}">{xfailed}</h2><p>XFailed</p></div>
</div>
{body}{failures}</body>
</html>"##,
        pass_color = PASS_COLOR,
        fail_color = FAIL_COLOR,
        xfail_color = XFAIL_COLOR,
        total = report.total,
        passed = report.passed,
        failed = report.failed,
        xfailed = report.xfailed,
        body = body,
        failures = failures,
    )
}

/// Render one category as an inline SVG bar chart.
///
/// Three bars (passed / failed / xfailed), scaled against the largest of
/// the three so a category with a single test still gets a full bar.
fn category_chart(counts: &CategoryCounts) -> String {
    let max = counts.passed.max(counts.failed).max(counts.xfailed).max(1);

    let bars = [
        (counts.passed, PASS_COLOR, "Passed", 25.0),
        (counts.failed, FAIL_COLOR, "Failed", 90.0),
        (counts.xfailed, XFAIL_COLOR, "XFailed", 155.0),
    ];

    let mut svg = String::from(
        "<svg class=\"chart\" viewBox=\"0 0 220 170\" width=\"100%\" height=\"170\" role=\"img\">\n",
    );

    for (count, color, label, x) in bars {
        let height = (count as f64 / max as f64) * 110.0;
        let top = 140.0 - height;

        svg.push_str(&format!(
            "<rect x=\"{x}\" y=\"{top:.1}\" width=\"40\" height=\"{height:.1}\" fill=\"{color}\" rx=\"3\" />\n"
        ));
        svg.push_str(&format!(
            "<text x=\"{mid}\" y=\"{count_y:.1}\" fill=\"#e8e8e8\" font-size=\"12\" text-anchor=\"middle\">{count}</text>\n",
            mid = x + 20.0,
            count_y = top - 5.0,
        ));
        svg.push_str(&format!(
            "<text x=\"{mid}\" y=\"158\" fill=\"#9a9a9a\" font-size=\"11\" text-anchor=\"middle\">{label}</text>\n",
            mid = x + 20.0,
        ));
    }

    svg.push_str("<line x1=\"10\" y1=\"140\" x2=\"210\" y2=\"140\" stroke=\"rgba(255,255,255,0.2)\" />\n");
    svg.push_str("</svg>");
    svg
}

/// Render the failed-test table, or nothing when the run had no failures.
fn failed_table(report: &AggregateReport) -> String {
    if report.failures.is_empty() {
        return String::new();
    }

    let mut rows = String::new();
    for failure in &report.failures {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{:.2}</td></tr>\n",
            escape_html(&failure.identifier),
            escape_html(&failure.category),
            failure.duration,
        ));
    }

    format!(
        "<div class=\"failed-section\">\n<h2>Failed Tests ({count})</h2>\n<table class=\"failed-table\">\n<thead><tr><th>Test</th><th>Category</th><th>Duration (s)</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>\n</div>\n",
        count = report.failures.len(),
        rows = rows,
    )
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
