use super::Cli;
use anyhow::{anyhow, Context, Result};
use pathmark_config::{Config, ErrorFormatter};
use pathmark_pipeline::{run, RunRequest};
use tracing::info;

fn load_config(cli: &Cli) -> Result<Config> {
    let loaded = match &cli.config {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    };
    loaded.map_err(|err| anyhow!("{}", ErrorFormatter::new(err)))
}

pub fn handle_run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let request = RunRequest {
        limit: cli.limit.clone(),
        network: cli.network.clone(),
    };

    let summary = run(&config, &request)
        .with_context(|| format!("post-run failed for '{}'", cli.network.display()))?;

    info!(
        "{} of {} nodes and {} of {} edges written to '{}'",
        summary.flagged_nodes,
        summary.nodes,
        summary.flagged_edges,
        summary.edges,
        config.files.subset.display()
    );
    Ok(())
}
