//! ecr-deploy - interactive ECR image selector for make-driven deployments
//!
//! A one-shot, single-threaded pipeline: build the registry query, run it,
//! parse the results, filter by tag substring, present a numbered listing,
//! prompt for a selection, and dispatch `make <target>` with `VERSION` set to
//! the chosen tag.

pub mod app;
pub mod candidates;
pub mod context;
pub mod error;
pub mod exec;
pub mod registry;
pub mod select;
pub mod ui;

// Re-exports for convenience
pub use candidates::{
    filter_candidates, normalize_timestamp, parse_candidates, ImageCandidate, ParsedCandidates,
};
pub use context::Context;
pub use error::{DeployError, DeployResult};
pub use exec::{CommandRunner, ShellRunner};
pub use select::SelectionOutcome;
pub use ui::Ui;
