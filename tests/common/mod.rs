//! Common test utilities for configure-myst integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A well-formed article.yml
pub const INTRO_ARTICLE: &str = r#"title: "Intro"
subtitle: "Getting Started"
abstract: "A primer."
date: "2024-01-01"
banner: "img.png"
"#;

/// A temporary article directory for integration tests
pub struct TestArticle {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the article directory
    pub path: PathBuf,
}

impl TestArticle {
    /// Create an empty article directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create an article directory with the given article.yml
    pub fn with_manifest(content: &str) -> Self {
        let article = Self::new();
        article.write_file("article.yml", content);
        article
    }

    /// Write a file in the article directory
    pub fn write_file(&self, path: &str, content: &str) {
        std::fs::write(self.path.join(path), content).expect("Failed to write file");
    }

    /// Read a file from the article directory
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the article directory
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Parse the generated myst.yml
    pub fn site_manifest(&self) -> serde_yaml::Value {
        serde_yaml::from_str(&self.read_file("myst.yml")).expect("Failed to parse myst.yml")
    }
}

impl Default for TestArticle {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a command for the configure-myst binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn configure_cmd() -> Command {
    let mut cmd = Command::cargo_bin("configure-myst").expect("Failed to find configure-myst binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Build a command that configures the given article directory
pub fn configure_cmd_for(article_path: &Path) -> Command {
    let mut cmd = configure_cmd();
    cmd.arg(article_path);
    cmd
}
