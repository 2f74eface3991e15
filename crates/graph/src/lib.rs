//! Network model plumbing: reading the network description, correlating
//! detected paths against it, and writing the reduced network.

pub mod correlate;
pub mod parser;
pub mod subset;

pub use correlate::{correlate, CorrelationSummary};
pub use parser::{load_network, parse_network};
pub use subset::{save_subset, write_subset};
