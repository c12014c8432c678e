//! Shared integration test helpers for spectre.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::TestContext;
//! ```

#![allow(dead_code)]

use clap::Parser;
use spectre::cli::{self, Cli};
use spectre_config::{ConfigStore, FileStorage};
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary state directory with a file-backed store pointing into it.
///
/// The directory is removed when the context is dropped.
pub struct TestContext {
    /// Temporary directory, kept alive for the lifetime of the context.
    pub dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Path of the state file inside the temp dir.
    pub fn state_path(&self) -> PathBuf {
        self.dir.path().join("spectre").join("state.yaml")
    }

    /// A freshly rehydrated store backed by the state file.
    pub fn store(&self) -> ConfigStore {
        let mut store = ConfigStore::new(Box::new(FileStorage::new(self.state_path())));
        store.rehydrate().expect("rehydrate store");
        store
    }

    /// Write `content` to `name` inside the temp dir and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Run the CLI with `args` against this context's state file.
    pub fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let state = self.state_path();
        let mut argv = vec!["spectre".to_string(), "--state".to_string()];
        argv.push(state.to_string_lossy().into_owned());
        argv.extend(args.iter().map(|a| a.to_string()));

        let cli = Cli::try_parse_from(argv)?;
        let mut out = Vec::new();
        cli::run(cli, &mut out)?;
        Ok(String::from_utf8(out).expect("CLI output is UTF-8"))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
