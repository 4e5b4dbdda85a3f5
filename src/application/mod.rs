//! Application layer: use cases over the domain plus file I/O

pub mod error;
pub mod pipeline;
pub mod report;

pub use error::{ApplicationError, ApplicationResult};
pub use pipeline::{analyze_text, load_text, run, Analysis, RunSummary, DEPTH_QUERY_TITLE};
