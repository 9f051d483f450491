use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};

use crate::aggregate::aggregate_model::AggregateReport;
use crate::build_report;
use crate::render::html::render_html;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::PipelineEvent;

// ============================================================================
// Dashboard viewer — minimal single-route HTTP server
// ============================================================================

/// Viewer configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Results artifact, re-read on every request
    pub results_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            results_path: "results/latest.json".to_string(),
        }
    }
}

/// One HTTP response, ready to serialize.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    fn html(body: String) -> Self {
        Self {
            status: 200,
            reason: "OK",
            content_type: "text/html; charset=utf-8",
            body,
        }
    }

    fn not_found() -> Self {
        Self {
            status: 404,
            reason: "Not Found",
            content_type: "text/plain; charset=utf-8",
            body: "not found\n".to_string(),
        }
    }

    fn method_not_allowed() -> Self {
        Self {
            status: 405,
            reason: "Method Not Allowed",
            content_type: "text/plain; charset=utf-8",
            body: "method not allowed\n".to_string(),
        }
    }

    /// Serialize into wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status,
            self.reason,
            self.content_type,
            self.body.len(),
            self.body,
        )
        .into_bytes()
    }
}

/// Run the accept loop.
///
/// Sequential: one request at a time, each re-running the whole pipeline
/// so no state survives between requests. A failed request is logged and
/// the loop keeps accepting.
pub fn serve(
    config: &ServerConfig,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)?;

    println!(
        "Serving dashboard on http://{}/ (results: {})",
        addr, config.results_path
    );

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                if let Err(e) = handle_connection(stream, config, verbose, tracer) {
                    eprintln!("Warning: request handling failed: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Warning: failed to accept connection: {}", e);
            }
        }
    }

    Ok(())
}

/// Answer one connection: read the request line, respond, close.
fn handle_connection(
    stream: TcpStream,
    config: &ServerConfig,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;

    let response = respond(&request_line, &config.results_path, tracer);

    if verbose > 0 {
        eprintln!("{} -> {}", request_line.trim_end(), response.status);
    }

    let mut stream = reader.into_inner();
    stream.write_all(&response.to_bytes())?;
    Ok(())
}

/// Route one request line to a response.
///
/// `GET /` renders the dashboard; a missing or malformed artifact
/// renders the empty dashboard rather than failing the request. Any
/// other path is 404, any other method 405. Socket-free so routing is
/// unit-testable.
pub fn respond(request_line: &str, results_path: &str, tracer: &TraceLogger) -> HttpResponse {
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");

    let response = if method != "GET" {
        HttpResponse::method_not_allowed()
    } else if path != "/" {
        HttpResponse::not_found()
    } else {
        let report = match build_report(results_path, tracer) {
            Ok(report) => report,
            Err(e) => {
                eprintln!(
                    "Warning: could not read results, serving empty dashboard: {}",
                    e
                );
                AggregateReport::empty()
            }
        };
        HttpResponse::html(render_html(&report))
    };

    tracer.log(&PipelineEvent::RequestServed {
        path: path.to_string(),
        status: response.status,
    });

    response
}
