use std::path::Path;

use crate::aggregate::aggregate_model::AggregateReport;
use crate::aggregate::aggregator::aggregate;
use crate::artifact::loader::load;
use crate::artifact::normalize::normalize;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::PipelineEvent;

pub mod aggregate;
pub mod artifact;
pub mod category;
pub mod cli;
pub mod render;
pub mod server;
pub mod trace;

/// Run the full pipeline for one artifact: load, normalize, aggregate.
///
/// A missing artifact yields an empty report; a malformed one is an
/// error. Stateless and reentrant: every call re-reads the artifact from
/// scratch, so concurrent invocations on different artifacts never
/// interfere.
pub fn build_report(
    path: &str,
    tracer: &TraceLogger,
) -> Result<AggregateReport, Box<dyn std::error::Error>> {
    let raw = load(path)?;

    if Path::new(path).exists() {
        tracer.log(&PipelineEvent::ArtifactLoaded {
            path: path.to_string(),
            entries: raw.len(),
        });
    } else {
        tracer.log(&PipelineEvent::ArtifactMissing {
            path: path.to_string(),
        });
    }

    let records: Vec<_> = raw.iter().map(normalize).collect();
    let report = aggregate(&records);

    tracer.log(&PipelineEvent::ReportAggregated {
        total: report.total,
        failed: report.failed,
        categories: report.categories.len(),
    });

    Ok(report)
}
