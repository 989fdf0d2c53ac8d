//! Error types for ecr-deploy
//!
//! Uses `thiserror` for library errors. Components return `DeployResult`
//! instead of terminating; message formatting and process exit happen only
//! at the top level in `main`.

use thiserror::Error;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// External command ran but exited non-zero
    #[error("Command exited with '{code}: {output}'")]
    CommandFailed { code: i32, output: String },

    /// External command could not be started
    #[error("Exception when executing command: {0}")]
    CommandSpawn(std::io::Error),

    /// Registry output was not valid JSON
    #[error("Unable to decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No images matched, before or after tag filtering
    #[error("{}", no_images_message(.repo, .filter))]
    NoImages {
        repo: String,
        filter: Option<String>,
    },

    /// Operator cancelled at a blocking prompt
    #[error("Caught CTRL-C. Exiting ...")]
    Interrupted,

    /// Terminal IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// Warning-class failures are expected operator-facing exits (rendered in
    /// yellow), not crashes.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            DeployError::NoImages { .. } | DeployError::Interrupted
        )
    }
}

fn no_images_message(repo: &str, filter: &Option<String>) -> String {
    match filter {
        Some(f) => format!("No images found for '{}' (filter: '{}')", repo, f),
        None => format!("No images found for '{}'", repo),
    }
}
