use pathmark_core::{Path, RecordStore};
use tracing::{debug, info};

/// Counts gathered while correlating paths against the network.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationSummary {
    pub resolved_steps: usize,
    pub unresolved_steps: usize,
    pub connected_hops: usize,
    pub missing_hops: usize,
}

/// Resolve every path token to a node and flag the nodes and edges the paths traverse.
///
/// Tokens naming no node stay unresolved and consecutive resolved steps with
/// no edge between them are skipped; neither is an error.
pub fn correlate(store: &mut RecordStore, paths: &mut [Path]) -> CorrelationSummary {
    let mut summary = CorrelationSummary::default();

    for path in paths.iter_mut() {
        for step in path.steps_mut() {
            step.node = store.mark_node(&step.token);
            match step.node {
                Some(_) => summary.resolved_steps += 1,
                None => {
                    debug!("path token '{}' names no node in the network", step.token);
                    summary.unresolved_steps += 1;
                }
            }
        }
    }

    for path in paths.iter() {
        for (from, to) in path.resolved_hops() {
            if store.mark_edge(from, to) {
                summary.connected_hops += 1;
            } else {
                debug!("no edge {} -> {} in the network", from, to);
                summary.missing_hops += 1;
            }
        }
    }

    info!(
        "flagged {} nodes and {} edges ({} unresolved tokens, {} missing edges)",
        store.flagged_nodes().count(),
        store.flagged_edges().count(),
        summary.unresolved_steps,
        summary.missing_hops
    );

    summary
}
