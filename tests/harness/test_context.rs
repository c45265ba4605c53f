//! Shared testing harness for `nuget-auth` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) const FEED_URL: &str = "https://example.com/feed";
pub(crate) const TOKEN: &str = "ghp_integration_token";

/// Ambient variables cleared from every spawned command.
const AMBIENT_VARS: &[&str] = &[
    "NUGET_AUTH_TOKEN",
    "INPUT_OWNER",
    "GITHUB_REPOSITORY_OWNER",
    "GITHUB_REPOSITORY",
    "GITHUB_OUTPUT",
];

/// Testing harness providing an isolated environment for CLI exercises.
///
/// Layout: `<tmp>/work` is the root passed to the tool, so the generated
/// config lands at `<tmp>/nuget.config`.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working root used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Where the tool writes its output.
    pub(crate) fn output_path(&self) -> PathBuf {
        self.root.path().join("nuget.config")
    }

    /// Build a command with no ambient inputs set.
    pub(crate) fn bare_cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("nuget-auth").expect("Failed to locate nuget-auth binary");
        cmd.current_dir(&self.work_dir);
        for var in AMBIENT_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Build a command with a token and repository owner, as a workflow run would have.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = self.bare_cli();
        cmd.env("NUGET_AUTH_TOKEN", TOKEN).env("GITHUB_REPOSITORY", "repo-owner/widgets");
        cmd
    }

    /// Write an existing config into the working root.
    pub(crate) fn write_existing_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write existing config");
        path
    }

    /// Read the generated config.
    pub(crate) fn read_output(&self) -> String {
        fs::read_to_string(self.output_path()).expect("generated nuget.config should exist")
    }

    /// Assert that no config was generated.
    pub(crate) fn assert_no_output(&self) {
        assert!(!self.output_path().exists(), "nuget.config should not be written");
    }
}

/// Existing config holding the given `packageSources` entries.
pub(crate) fn config_with_sources(entries: &[(&str, &str)]) -> String {
    let adds: String = entries
        .iter()
        .map(|(key, value)| format!("    <add key=\"{}\" value=\"{}\" />\n", key, value))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<configuration>\n  <packageSources>\n{}  </packageSources>\n</configuration>\n",
        adds
    )
}
