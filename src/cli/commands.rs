use crate::build_report;
use crate::render::console::render_console;
use crate::render::html::render_html;
use crate::server::http::{serve, ServerConfig};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::PipelineEvent;

// ============================================================================
// generate subcommand
// ============================================================================

/// Render the dashboard once and write or print it.
///
/// A missing artifact renders the empty state; a malformed one aborts
/// with an error.
pub fn cmd_generate(
    results: &str,
    format: &str,
    output: Option<&str>,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    if verbose > 0 {
        eprintln!("Aggregating results from {}...", results);
    }

    let report = build_report(results, tracer)?;

    if verbose > 0 {
        eprintln!(
            "  {} records, {} categories, {} failures",
            report.total,
            report.categories.len(),
            report.failures.len()
        );
    }

    let content = match format {
        "html" => render_html(&report),
        _ => render_console(&report),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &content)?;
            tracer.log(&PipelineEvent::OutputWritten {
                path: path.to_string(),
                bytes: content.len(),
            });
            if verbose > 0 {
                eprintln!("Wrote: {}", path);
            }
        }
        None => print!("{}", content),
    }

    Ok(())
}

// ============================================================================
// serve subcommand
// ============================================================================

/// Run the single-route dashboard viewer until interrupted.
pub fn cmd_serve(
    results: &str,
    host: &str,
    port: u16,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig {
        host: host.to_string(),
        port,
        results_path: results.to_string(),
    };

    serve(&config, verbose, tracer)
}
