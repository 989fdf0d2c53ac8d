//! Shared helpers for end-to-end tests.
//!
//! The binary shells out to `aws`, `jq`, and `make`; tests stub all three
//! with scripts on a private PATH so no real registry call ever happens.
//! The stub `aws` emits pre-transformed JSON and the stub `jq` passes stdin
//! through, which keeps the pipeline shape intact.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    /// Stub `aws` to emit `registry_json`, `jq` to pass stdin through, and
    /// `make` to echo its invocation.
    pub fn new(registry_json: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let sandbox = Self { dir };
        sandbox.stub(
            "aws",
            &format!("#!/bin/sh\ncat <<'REGISTRY_EOF'\n{}\nREGISTRY_EOF\n", registry_json),
        );
        sandbox.stub("jq", "#!/bin/sh\ncat\n");
        sandbox.stub("make", "#!/bin/sh\necho \"make invoked: $*\"\n");
        sandbox
    }

    /// Replace one of the stub scripts with a custom body.
    pub fn stub(&self, name: &str, body: &str) {
        write_script(self.dir.path(), name, body);
    }

    /// Command for the binary under test with the stub PATH prepended.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ecr-deploy"));
        let path = format!(
            "{}:{}",
            self.dir.path().display(),
            std::env::var("PATH").unwrap_or_default()
        );
        cmd.env("PATH", path);
        cmd.env("NO_COLOR", "1");
        cmd
    }
}

fn write_script(dir: &Path, name: &str, body: &str) {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}
