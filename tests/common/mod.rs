//! Shared testing utilities for taskdown CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `taskdown` binary within the
    /// default workspace.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("taskdown").expect("Failed to locate taskdown binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write a file below the work directory, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        fs::create_dir_all(path.parent().expect("file path needs a parent"))
            .expect("Failed to create parent directories");
        fs::write(path, content).expect("Failed to write test file");
    }

    /// Write a profile config file under `.taskdown/config/`.
    pub fn write_config(&self, file_name: &str, content: &str) {
        self.write_file(&format!(".taskdown/config/{file_name}"), content);
    }

    /// Write the default-profile app config pointing prompt/schema bases at
    /// plain `prompts/` and `schema/` directories.
    pub fn write_default_config(&self) {
        self.write_config(
            "default-app.yml",
            "app_prompt:\n  base_dir: prompts\napp_schema:\n  base_dir: schema\n",
        );
    }
}
