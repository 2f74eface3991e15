//! Post-processing run: validate declared endpoints, load the detected paths,
//! flag them in the network, and write the reduced network and text report.

pub mod declarations;
pub mod path_report;
pub mod paths;
pub mod report;
pub mod run;

pub use declarations::{load_declarations, EndpointTally, Role};
pub use path_report::{render_path_report, write_path_report};
pub use paths::load_paths;
pub use report::{Report, ReportSink};
pub use run::{run, run_with_report, RunRequest, RunSummary};
