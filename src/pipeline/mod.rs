mod diff_config;
mod diff_summary;
mod run;

pub use diff_config::*;
pub use diff_summary::DiffSummary;
pub use run::{run, PipelineOutput};
