//! Text rendering of the detected paths.
//!
//! One line per step: name and category in fixed columns, then an arrow to
//! the next step labelled with the connecting edge's `interaction: time`.
//! Every arrow in a report has the same width.

use crate::report::Report;
use pathmark_config::ReportConfig;
use pathmark_core::{Edge, Path, PathStep, RecordStore, Result};

const LEAD_DASHES: usize = 3;
const ARROW_PAD: usize = 6;
const ARROW_HEAD: &str = ">>";
const UNRESOLVED: &str = "?";

fn label(edge: &Edge) -> String {
    format!("{}: {}", edge.interaction, edge.time)
}

fn next_edge<'a>(store: &'a RecordStore, step: &PathStep, next: Option<&PathStep>) -> Option<&'a Edge> {
    store.edge_between(step.node?, next?.node?)
}

/// Fixed-width arrow, optionally carrying an edge label after the lead dashes.
#[derive(Debug, Clone)]
struct Arrow {
    shaft: usize,
}

impl Arrow {
    fn fitting(store: &RecordStore, paths: &[Path]) -> Self {
        let widest = paths
            .iter()
            .flat_map(|path| path.resolved_hops())
            .filter_map(|(from, to)| store.edge_between(from, to))
            .map(|edge| edge.interaction.chars().count() + edge.time.chars().count())
            .max()
            .unwrap_or(0);

        // two more for the ": " between interaction and time
        Self {
            shaft: widest + 2 + ARROW_PAD,
        }
    }

    fn bare(&self) -> String {
        format!("{}{}", "-".repeat(self.shaft), ARROW_HEAD)
    }

    fn labelled(&self, text: &str) -> String {
        let tail = self
            .shaft
            .saturating_sub(LEAD_DASHES + text.chars().count());
        format!(
            "{}{}{}{}",
            "-".repeat(LEAD_DASHES),
            text,
            "-".repeat(tail),
            ARROW_HEAD
        )
    }
}

/// Render every path, each followed by an empty separator line.
pub fn render_path_report(
    store: &RecordStore,
    paths: &[Path],
    config: &ReportConfig,
) -> Vec<String> {
    let arrow = Arrow::fitting(store, paths);
    let width = config.column_width;
    let mut lines = Vec::new();

    for path in paths {
        let steps = path.steps();
        for (i, step) in steps.iter().enumerate() {
            let Some(node) = step.node.and_then(|id| store.node_by_id(id)) else {
                lines.push(format!(
                    "{:<width$} {:<width$} {}",
                    UNRESOLVED,
                    UNRESOLVED,
                    arrow.bare()
                ));
                continue;
            };

            let line = match next_edge(store, step, steps.get(i + 1)) {
                Some(edge) => format!(
                    "{:<width$} {:<width$} {}",
                    node.name,
                    node.layer,
                    arrow.labelled(&label(edge))
                ),
                None => format!("{:<width$} {:<width$}", node.name, node.layer),
            };
            lines.push(line);
        }
        lines.push(String::new());
    }

    lines
}

pub fn write_path_report<P: Report>(
    report: &mut P,
    store: &RecordStore,
    paths: &[Path],
    config: &ReportConfig,
) -> Result<()> {
    report.lines(render_path_report(store, paths, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathmark_core::Node;
    use pretty_assertions::assert_eq;

    fn node(id: i64, name: &str, layer: &str) -> Node {
        let mut node = Node::new(id);
        node.name = name.to_string();
        node.layer = layer.to_string();
        node
    }

    fn edge(id: i64, source: i64, target: i64, interaction: &str, time: &str) -> Edge {
        let mut edge = Edge::new(id);
        edge.source = source;
        edge.target = target;
        edge.interaction = interaction.to_string();
        edge.time = time.to_string();
        edge
    }

    fn resolved(store: &mut RecordStore, names: &[&str]) -> Path {
        let mut path = Path::new(names.iter().copied()).unwrap();
        for step in path.steps_mut() {
            step.node = store.mark_node(&step.token);
        }
        path
    }

    fn config(width: usize) -> ReportConfig {
        ReportConfig {
            column_width: width,
        }
    }

    #[test]
    fn test_three_step_path() {
        let mut store = RecordStore::new(
            vec![node(1, "A", "TF"), node(2, "B", "kinase"), node(3, "C", "")],
            vec![edge(10, 1, 2, "pp", "t1"), edge(11, 2, 3, "pd", "t12")],
        );
        let path = resolved(&mut store, &["A", "B", "C"]);

        let lines = render_path_report(&store, &[path], &config(3));
        // widest label is "pd" + "t12" = 5, shaft = 5 + 2 + 6 = 13
        assert_eq!(
            lines,
            vec![
                "A   TF  ---pp: t1---->>",
                "B   kinase ---pd: t12--->>",
                "C      ",
                "",
            ]
        );
    }

    #[test]
    fn test_missing_edge_drops_arrow() {
        let mut store = RecordStore::new(vec![node(1, "A", "x"), node(2, "B", "y")], Vec::new());
        let path = resolved(&mut store, &["A", "B"]);

        let lines = render_path_report(&store, &[path], &config(2));
        assert_eq!(lines, vec!["A  x ", "B  y ", ""]);
    }

    #[test]
    fn test_unresolved_step_placeholder() {
        let mut store = RecordStore::new(vec![node(1, "A", "x")], Vec::new());
        let path = resolved(&mut store, &["A", "Q"]);

        let lines = render_path_report(&store, &[path], &config(1));
        assert_eq!(lines, vec!["A x", "? ? -------->>", ""]);
    }

    #[test]
    fn test_arrow_width_shared_across_paths() {
        let mut store = RecordStore::new(
            vec![node(1, "A", ""), node(2, "B", ""), node(3, "C", "")],
            vec![edge(10, 1, 2, "a", "1"), edge(11, 2, 3, "long", "2000")],
        );
        let first = resolved(&mut store, &["A", "B"]);
        let second = resolved(&mut store, &["B", "C"]);

        let lines = render_path_report(&store, &[first, second], &config(1));
        let first_arrow = &lines[0][4..];
        let second_arrow = &lines[3][4..];
        assert_eq!(first_arrow.len(), second_arrow.len());
        assert!(second_arrow.starts_with("---long: 2000"));
    }

    #[test]
    fn test_empty_collection() {
        let store = RecordStore::new(Vec::new(), Vec::new());
        assert!(render_path_report(&store, &[], &config(15)).is_empty());
    }
}
