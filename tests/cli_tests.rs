use clap::Parser;
use qa_dashboard::cli::config::{load_config, AppConfig, Cli, Commands};

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_generate_minimal() {
    let cli = Cli::parse_from(["qa-dashboard", "generate"]);
    match cli.command {
        Commands::Generate {
            results,
            format,
            output,
        } => {
            assert!(results.is_none());
            assert!(format.is_none());
            assert!(output.is_none());
        }
        _ => panic!("Expected Generate command"),
    }
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_parse_generate_all_args() {
    let cli = Cli::parse_from([
        "qa-dashboard",
        "generate",
        "--results",
        "results/run.json",
        "--format",
        "html",
        "--output",
        "dashboard.html",
        "-v",
    ]);
    match cli.command {
        Commands::Generate {
            results,
            format,
            output,
        } => {
            assert_eq!(results.as_deref(), Some("results/run.json"));
            assert_eq!(format.as_deref(), Some("html"));
            assert_eq!(output.as_deref(), Some("dashboard.html"));
        }
        _ => panic!("Expected Generate command"),
    }
    assert_eq!(cli.verbose, 1);
}

#[test]
fn cli_parse_serve() {
    let cli = Cli::parse_from([
        "qa-dashboard",
        "serve",
        "--results",
        "latest.json",
        "--host",
        "0.0.0.0",
        "--port",
        "9000",
    ]);
    match cli.command {
        Commands::Serve {
            results,
            host,
            port,
        } => {
            assert_eq!(results.as_deref(), Some("latest.json"));
            assert_eq!(host.as_deref(), Some("0.0.0.0"));
            assert_eq!(port, Some(9000));
        }
        _ => panic!("Expected Serve command"),
    }
}

#[test]
fn cli_parse_global_flags() {
    let cli = Cli::parse_from([
        "qa-dashboard",
        "generate",
        "--config",
        "custom.yaml",
        "--trace",
        "trace.jsonl",
        "-vv",
    ]);
    assert_eq!(cli.config.as_deref(), Some("custom.yaml"));
    assert_eq!(cli.trace.as_deref(), Some("trace.jsonl"));
    assert_eq!(cli.verbose, 2);
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.results.path, "results/latest.json");
    assert_eq!(config.report.format, "console");
    assert!(config.report.output.is_none());
    assert_eq!(config.serve.host, "127.0.0.1");
    assert_eq!(config.serve.port, 8080);
    assert!(config.trace.path.is_none());
}

#[test]
fn config_parse_partial_yaml() {
    let yaml = r#"
results:
  path: other/run.json
serve:
  port: 3000
"#;
    let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.results.path, "other/run.json");
    assert_eq!(config.serve.port, 3000);
    // Unspecified sections and fields keep their defaults
    assert_eq!(config.serve.host, "127.0.0.1");
    assert_eq!(config.report.format, "console");
}

#[test]
fn config_parse_full_yaml() {
    let yaml = r#"
results:
  path: results/latest.json
report:
  format: html
  output: dashboard.html
serve:
  host: 0.0.0.0
  port: 8000
trace:
  path: trace.jsonl
"#;
    let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.report.format, "html");
    assert_eq!(config.report.output.as_deref(), Some("dashboard.html"));
    assert_eq!(config.serve.host, "0.0.0.0");
    assert_eq!(config.trace.path.as_deref(), Some("trace.jsonl"));
}

#[test]
fn load_config_missing_file_gives_defaults() {
    let config = load_config(Some("/nonexistent/qa-dashboard.yaml"));
    assert_eq!(config.results.path, "results/latest.json");
    assert_eq!(config.serve.port, 8080);
}

#[test]
fn load_config_malformed_file_gives_defaults() {
    let path = std::env::temp_dir().join(format!(
        "qa-dashboard-cfg-{}-bad.yaml",
        std::process::id()
    ));
    std::fs::write(&path, ":: not yaml ::[").unwrap();

    let path_str = path.to_string_lossy().into_owned();
    let config = load_config(Some(&path_str));
    assert_eq!(config.results.path, "results/latest.json");
    assert_eq!(config.report.format, "console");
}
