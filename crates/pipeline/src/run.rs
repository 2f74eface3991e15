//! One post-processing run, start to finish.
//!
//! Stages run in order and the first fatal error stops the run. Its
//! diagnostic lines are appended to the report before the error is returned.

use crate::declarations::{load_declarations, EndpointTally};
use crate::path_report::write_path_report;
use crate::paths::load_paths;
use crate::report::{Report, ReportSink};
use pathmark_config::Config;
use pathmark_core::Result;
use pathmark_graph::{correlate, load_network, save_subset, CorrelationSummary};
use std::path::PathBuf;
use tracing::{error, info};

/// Per-invocation inputs that are not part of the configuration.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Path-limit token; names the path artifact through `files.paths_template`
    pub limit: String,
    pub network: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub nodes: usize,
    pub edges: usize,
    pub endpoints: EndpointTally,
    pub paths: usize,
    pub flagged_nodes: usize,
    pub flagged_edges: usize,
    pub correlation: CorrelationSummary,
}

/// Run against the configured report file.
pub fn run(config: &Config, request: &RunRequest) -> Result<RunSummary> {
    let mut report = ReportSink::new(&config.files.report);
    run_with_report(config, request, &mut report)
}

/// Run with report lines going to `report`.
pub fn run_with_report<P: Report>(
    config: &Config,
    request: &RunRequest,
    report: &mut P,
) -> Result<RunSummary> {
    match execute(config, request, report) {
        Ok(summary) => Ok(summary),
        Err(err) => {
            error!("run aborted: {}", err);
            for line in err.report_lines() {
                if let Err(sink_err) = report.line(&line) {
                    error!("could not record diagnostic: {}", sink_err);
                    break;
                }
            }
            Err(err)
        }
    }
}

fn execute<P: Report>(config: &Config, request: &RunRequest, report: &mut P) -> Result<RunSummary> {
    info!("loading network from '{}'", request.network.display());
    let mut store = load_network(&request.network, &config.network)?;

    info!(
        "checking declared sources and targets in '{}'",
        config.files.declarations.display()
    );
    let endpoints = load_declarations(&config.files.declarations, &store, report)?;

    let paths_file = config.files.paths_file(&request.limit);
    info!("loading detected paths from '{}'", paths_file.display());
    let mut paths = load_paths(&paths_file, &config.paths, config.network.order, &endpoints)?;

    info!("marking nodes and edges on detected paths");
    let correlation = correlate(&mut store, &mut paths);

    save_subset(&config.files.subset, &store, &config.subset)?;

    info!("writing path report to the report sink");
    write_path_report(report, &store, &paths, &config.report)?;

    let summary = RunSummary {
        nodes: store.nodes().len(),
        edges: store.edges().len(),
        endpoints,
        paths: paths.len(),
        flagged_nodes: store.flagged_nodes().count(),
        flagged_edges: store.flagged_edges().count(),
        correlation,
    };
    info!(
        "run complete; flagged_nodes={} flagged_edges={}",
        summary.flagged_nodes, summary.flagged_edges
    );
    Ok(summary)
}
