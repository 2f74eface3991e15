pub mod run;

pub use run::handle_run;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "post-run")]
#[command(about = "flag detected shortest paths in a network and write the reduced network")]
pub struct Cli {
    /// Path-limit token; selects the detected-paths file
    pub limit: String,

    /// Network description (cytoscape.js export)
    pub network: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug logging unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}
