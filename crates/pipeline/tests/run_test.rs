use anyhow::Result;
use pathmark_config::{Config, NetworkConfig, RecordOrder};
use pathmark_core::PathmarkError;
use pathmark_graph::load_network;
use pathmark_pipeline::{run, run_with_report, RunRequest};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn node_block(id: i64, name: &str, layer: &str) -> String {
    format!(
        "      \"data\" : {{\n        \"id\" : \"{id}\",\n        \"shared_name\" : \"{name}\",\n        \"name\" : \"{name}\",\n        \"isInPath\" : false,\n        \"SUID\" : {id},\n        \"Layer\" : \"{layer}\",\n        \"selected\" : false\n      }},\n      \"position\" : {{\n        \"x\" : 1.5,\n        \"y\" : -2.0\n      }},\n      \"selected\" : false\n"
    )
}

fn edge_block(id: i64, source: i64, target: i64, interaction: &str, time: &str) -> String {
    format!(
        "      \"data\" : {{\n        \"id\" : \"{id}\",\n        \"source\" : \"{source}\",\n        \"target\" : \"{target}\",\n        \"interaction\" : \"{interaction}\",\n        \"SUID\" : {id},\n        \"Time\" : \"{time}\",\n        \"selected\" : false\n      }},\n      \"selected\" : false\n"
    )
}

fn network(nodes: &[String], edges: &[String]) -> String {
    format!(
        "{{\n  \"elements\" : {{\n    \"nodes\" : [ {{\n{}    }} ],\n    \"edges\" : [ {{\n{}    }} ]\n  }}\n}}\n",
        nodes.join("    }, {\n"),
        edges.join("    }, {\n")
    )
}

/// A(1) -> B(2) -> C(3)
fn abc_network() -> String {
    network(
        &[
            node_block(1, "A", "TF"),
            node_block(2, "B", "kinase"),
            node_block(3, "C", "target"),
        ],
        &[edge_block(10, 1, 2, "pp", "t1"), edge_block(11, 2, 3, "pd", "t2")],
    )
}

struct Workspace {
    dir: TempDir,
    config: Config,
    request: RunRequest,
}

impl Workspace {
    fn new(network_text: &str, declarations: &str, paths: Option<&str>) -> Result<Self> {
        let dir = TempDir::new()?;
        let root = dir.path();
        fs::write(root.join("network.cyjs"), network_text)?;
        fs::write(root.join("in.txt"), declarations)?;
        if let Some(paths) = paths {
            fs::write(root.join("10"), paths)?;
        }

        let mut config = Config::default();
        config.files.declarations = root.join("in.txt");
        config.files.report = root.join("run_py_out.txt");
        config.files.subset = root.join("run_py_out.cyjs");
        config.files.paths_template = root.join("{k}").to_string_lossy().into_owned();

        let request = RunRequest {
            limit: "10".to_string(),
            network: root.join("network.cyjs"),
        };
        Ok(Self {
            dir,
            config,
            request,
        })
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }
}

#[test]
fn test_abc_path_end_to_end() -> Result<()> {
    let ws = Workspace::new(&abc_network(), "A source\nC target\n", Some("1 0.9 A|B|C\n"))?;
    let mut report = Vec::new();

    let summary = run_with_report(&ws.config, &ws.request, &mut report)?;
    assert_eq!((summary.flagged_nodes, summary.flagged_edges), (3, 2));
    assert_eq!(summary.paths, 1);

    // widest label "pp"+"t1" = 4, so the arrow shaft is 4 + 2 + 6 = 12 dashes
    assert_eq!(
        report,
        vec![
            "1 source node and 1 target node were specified and found.".to_string(),
            format!("{:<15} {:<15} ---pp: t1--->>", "A", "TF"),
            format!("{:<15} {:<15} ---pd: t2--->>", "B", "kinase"),
            format!("{:<15} {:<15}", "C", "target"),
            String::new(),
        ]
    );

    let subset = load_network(&ws.config.files.subset, &NetworkConfig::default())?;
    let names: Vec<_> = subset.nodes().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    let hops: Vec<_> = subset.edges().iter().map(|e| (e.source, e.target)).collect();
    assert_eq!(hops, vec![(1, 2), (2, 3)]);
    Ok(())
}

#[test]
fn test_undeclared_node_is_reported() -> Result<()> {
    let ws = Workspace::new(&abc_network(), "Z source\n", Some("x y A|B|C\n"))?;
    let mut report = Vec::new();

    let summary = run_with_report(&ws.config, &ws.request, &mut report)?;
    assert_eq!(summary.endpoints.missing, vec!["Z"]);
    assert_eq!(
        &report[..2],
        &[
            "Node Z was not found in the network.".to_string(),
            "0 source nodes and 0 target nodes were specified and found.".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_bad_path_line_aborts_without_subset() -> Result<()> {
    let ws = Workspace::new(&abc_network(), "A source\n", Some("1 0.9 A|B|C\nbroken\n"))?;
    let mut report = Vec::new();

    let err = run_with_report(&ws.config, &ws.request, &mut report).unwrap_err();
    assert!(matches!(err, PathmarkError::PathLine { line: 2, .. }));
    assert_eq!(
        report.last().map(String::as_str),
        Some("Path analysis was not completed successfully.")
    );
    assert!(!ws.config.files.subset.exists());
    Ok(())
}

#[test]
fn test_missing_artifact_suggests_no_paths() -> Result<()> {
    let ws = Workspace::new(&abc_network(), "A source\nC target\n", None)?;
    let mut report = Vec::new();

    let err = run_with_report(&ws.config, &ws.request, &mut report).unwrap_err();
    assert!(matches!(
        err,
        PathmarkError::PathsUnavailable {
            endpoints_found: true,
            ..
        }
    ));
    assert_eq!(
        report,
        vec![
            "1 source node and 1 target node were specified and found.",
            "Path analysis was not completed successfully. Possibly there were",
            "no paths between the specified source(s) and target(s).",
        ]
    );
    Ok(())
}

#[test]
fn test_missing_network() -> Result<()> {
    let ws = Workspace::new(&abc_network(), "A source\n", Some("x y A\n"))?;
    let request = RunRequest {
        network: ws.root().join("absent.cyjs"),
        ..ws.request.clone()
    };
    let mut report = Vec::new();

    assert!(run_with_report(&ws.config, &request, &mut report).is_err());
    assert_eq!(report, vec!["Unable to open the network file."]);
    Ok(())
}

#[test]
fn test_report_file_is_appended() -> Result<()> {
    let ws = Workspace::new(&abc_network(), "B target\n", Some("x y B|C\n"))?;
    fs::write(&ws.config.files.report, "from an earlier stage\n")?;

    run(&ws.config, &ws.request)?;

    let text = fs::read_to_string(&ws.config.files.report)?;
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "from an earlier stage");
    assert_eq!(lines[1], "0 source nodes and 1 target node were specified and found.");
    assert!(lines[2].starts_with("B "));
    assert_eq!(lines.len(), 5);
    Ok(())
}

#[test]
fn test_record_order_picks_duplicate_name() -> Result<()> {
    let text = network(
        &[node_block(1, "A", "first"), node_block(9, "A", "second")],
        &[edge_block(10, 1, 9, "pp", "t1")],
    );

    let mut flagged = Vec::new();
    for order in [RecordOrder::File, RecordOrder::Reversed] {
        let mut ws = Workspace::new(&text, "A source\n", Some("x y A\n"))?;
        ws.config.network.order = order;
        run_with_report(&ws.config, &ws.request, &mut Vec::new())?;

        let subset = load_network(&ws.config.files.subset, &NetworkConfig::default())?;
        flagged.push(subset.nodes().iter().map(|n| n.id).collect::<Vec<_>>());
    }

    assert_eq!(flagged, vec![vec![1], vec![9]]);
    Ok(())
}
