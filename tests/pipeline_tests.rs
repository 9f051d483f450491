use qa_dashboard::build_report;
use qa_dashboard::cli::commands::cmd_generate;
use qa_dashboard::trace::logger::TraceLogger;

// ============================================================================
// Fixture helpers
// ============================================================================

fn fixture_path(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("qa-dashboard-pipe-{}-{}", std::process::id(), name))
        .to_string_lossy()
        .into_owned()
}

fn write_fixture(name: &str, content: &str) -> String {
    let path = fixture_path(name);
    std::fs::write(&path, content).unwrap();
    path
}

const SAMPLE_RUN: &str = r#"{"tests": [
    {"nodeid": "backend/test_a.py::t1", "outcome": "passed", "duration": 0.5},
    {"nodeid": "frontend_smoke/firefox/checkout/test_b.py::t2", "outcome": "failed", "duration": 1.2345},
    {"nodeid": "misc/test_c.py::t3", "outcome": "xfailed", "duration": 0.1}
]}"#;

// ============================================================================
// 1. End-to-end: load, normalize, classify, aggregate
// ============================================================================

#[test]
fn pipeline_end_to_end() {
    let path = write_fixture("run.json", SAMPLE_RUN);
    let report = build_report(&path, &TraceLogger::disabled()).unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.passed, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.xfailed, 1);

    let labels: Vec<&str> = report
        .categories
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(
        labels,
        vec!["Backend Regression", "Frontend Smoke (Firefox)", "Other"]
    );

    assert_eq!(report.failures.len(), 1);
    let failure = &report.failures[0];
    assert_eq!(
        failure.identifier,
        "frontend_smoke/firefox/checkout/test_b.py::t2"
    );
    assert_eq!(failure.category, "Frontend Smoke (Firefox)");
    // Duration rounded at normalization
    assert_eq!(failure.duration, 1.23);
}

// ============================================================================
// 2. Missing artifact — empty report, no error
// ============================================================================

#[test]
fn pipeline_missing_artifact_is_empty_report() {
    let report = build_report(&fixture_path("never-written.json"), &TraceLogger::disabled()).unwrap();
    assert!(report.is_empty());
    assert!(report.categories.is_empty());
    assert!(report.failures.is_empty());
}

// ============================================================================
// 3. Malformed artifact — error propagates
// ============================================================================

#[test]
fn pipeline_malformed_artifact_is_error() {
    let path = write_fixture("bad.json", "not json at all");
    assert!(build_report(&path, &TraceLogger::disabled()).is_err());
}

// ============================================================================
// 4. Idempotence across invocations
// ============================================================================

#[test]
fn pipeline_is_idempotent() {
    let path = write_fixture("idem.json", SAMPLE_RUN);
    let tracer = TraceLogger::disabled();
    let first = build_report(&path, &tracer).unwrap();
    let second = build_report(&path, &tracer).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// 5. Trace log — JSONL events for one run
// ============================================================================

#[test]
fn pipeline_writes_trace_events() {
    let artifact = write_fixture("traced.json", SAMPLE_RUN);
    let trace_path = fixture_path("trace.jsonl");
    let _ = std::fs::remove_file(&trace_path);

    let tracer = TraceLogger::new(&trace_path);
    build_report(&artifact, &tracer).unwrap();

    let content = std::fs::read_to_string(&trace_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let loaded: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(loaded["event"], "artifact_loaded");
    assert_eq!(loaded["entries"], 3);

    let aggregated: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(aggregated["event"], "report_aggregated");
    assert_eq!(aggregated["total"], 3);
    assert_eq!(aggregated["failed"], 1);
    assert_eq!(aggregated["categories"], 3);
}

#[test]
fn pipeline_traces_missing_artifact() {
    let trace_path = fixture_path("trace-missing.jsonl");
    let _ = std::fs::remove_file(&trace_path);

    let tracer = TraceLogger::new(&trace_path);
    build_report(&fixture_path("gone.json"), &tracer).unwrap();

    let content = std::fs::read_to_string(&trace_path).unwrap();
    let first: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(first["event"], "artifact_missing");
}

// ============================================================================
// 6. cmd_generate — writes rendered output to disk
// ============================================================================

#[test]
fn cmd_generate_writes_html_file() {
    let artifact = write_fixture("gen.json", SAMPLE_RUN);
    let output = fixture_path("dashboard.html");

    cmd_generate(&artifact, "html", Some(&output), 0, &TraceLogger::disabled()).unwrap();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Backend Regression"));
    assert!(html.contains("Failed Tests (1)"));
}

#[test]
fn cmd_generate_missing_artifact_writes_empty_dashboard() {
    let output = fixture_path("empty-dashboard.html");

    cmd_generate(
        &fixture_path("no-such-run.json"),
        "html",
        Some(&output),
        0,
        &TraceLogger::disabled(),
    )
    .unwrap();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("No test results found."));
}

#[test]
fn cmd_generate_malformed_artifact_is_error() {
    let artifact = write_fixture("gen-bad.json", "{{{{");
    let output = fixture_path("never.html");
    let result = cmd_generate(&artifact, "html", Some(&output), 0, &TraceLogger::disabled());
    assert!(result.is_err());
}
