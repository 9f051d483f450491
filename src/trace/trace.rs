use serde::Serialize;

/// One pipeline event, written as a JSONL line when tracing is enabled.
///
/// Events cover the full path of a run: artifact load, aggregation, and
/// whatever output surface consumed the report (file or HTTP request).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PipelineEvent {
    /// Artifact file was found and parsed
    ArtifactLoaded { path: String, entries: usize },

    /// Artifact file does not exist; the run is treated as empty
    ArtifactMissing { path: String },

    /// Aggregation finished
    ReportAggregated {
        total: usize,
        failed: usize,
        categories: usize,
    },

    /// Rendered output was written to disk
    OutputWritten { path: String, bytes: usize },

    /// One HTTP request was answered
    RequestServed { path: String, status: u16 },
}
