use clap::Parser;
use qa_dashboard::cli::commands::{cmd_generate, cmd_serve};
use qa_dashboard::cli::config::{Cli, Commands, load_config};
use qa_dashboard::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve trace path: CLI > config
    let trace_path = cli.trace.as_deref().or(config.trace.path.as_deref());
    let tracer = TraceLogger::from_path(trace_path);

    match cli.command {
        Commands::Generate {
            results,
            format,
            output,
        } => {
            let results = results.unwrap_or_else(|| config.results.path.clone());
            let format = format.unwrap_or_else(|| config.report.format.clone());
            let output = output.or_else(|| config.report.output.clone());

            cmd_generate(&results, &format, output.as_deref(), cli.verbose, &tracer)?;
        }
        Commands::Serve {
            results,
            host,
            port,
        } => {
            let results = results.unwrap_or_else(|| config.results.path.clone());
            let host = host.unwrap_or_else(|| config.serve.host.clone());
            let port = port.unwrap_or(config.serve.port);

            cmd_serve(&results, &host, port, cli.verbose, &tracer)?;
        }
    }

    Ok(())
}
