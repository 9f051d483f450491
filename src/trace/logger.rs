use std::{fs::OpenOptions, io::Write, sync::Mutex};

use crate::trace::trace::PipelineEvent;

/// Append-only JSONL logger for pipeline events.
///
/// Best-effort: any failure to open, serialize, or write degrades to a
/// stderr warning so tracing can never fail the pipeline itself.
pub struct TraceLogger {
    file: Option<Mutex<std::fs::File>>,
}

impl TraceLogger {
    /// Logger that drops every event.
    pub fn disabled() -> Self {
        Self { file: None }
    }

    /// Open `path` for appending, degrading to a disabled logger on error.
    pub fn new(path: &str) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Self {
                file: Some(Mutex::new(f)),
            },
            Err(e) => {
                eprintln!("Warning: could not open trace file '{}': {}", path, e);
                Self { file: None }
            }
        }
    }

    /// Build from an optional CLI/config path.
    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::new(p),
            None => Self::disabled(),
        }
    }

    pub fn log(&self, event: &PipelineEvent) {
        let Some(file_mutex) = &self.file else {
            return; // tracing disabled
        };

        let json = match serde_json::to_string(event) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Warning: failed to serialize trace event: {}", e);
                return;
            }
        };

        let mut file = match file_mutex.lock() {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Warning: trace logger lock poisoned: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(file, "{}", json) {
            eprintln!("Warning: failed to write trace event: {}", e);
        }
    }
}
