//! External command execution.
//!
//! Commands run synchronously through `sh -c` with stdout and stderr
//! captured separately. The `CommandRunner` trait is the seam that keeps the
//! pipeline testable without spawning processes.

use std::process::Command;

use crate::error::{DeployError, DeployResult};

/// Runs a shell command to completion and returns its stdout.
pub trait CommandRunner {
    fn run(&self, command: &str) -> DeployResult<String>;
}

/// Production runner: `sh -c <command>` with captured output.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> DeployResult<String> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .output()
            .map_err(DeployError::CommandSpawn)?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            // Prefer stdout when the failing tool wrote there.
            let message = if stdout.is_empty() { stderr } else { stdout };
            return Err(DeployError::CommandFailed {
                code: output.status.code().unwrap_or(-1),
                output: message,
            });
        }

        Ok(stdout)
    }
}
