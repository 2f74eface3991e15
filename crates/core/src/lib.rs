pub mod error;
pub mod models;
pub mod store;
pub mod text;

pub use error::{FileRole, FormatIssue, PathmarkError, Result};
pub use models::{Edge, EdgeId, Node, NodeId, Path, PathStep, Position};
pub use store::RecordStore;
