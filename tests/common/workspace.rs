//! Temporary workspace with image helpers and a CLI runner.

use std::path::{Path, PathBuf};
use std::process::Command;

use atlas_mask::RgbaImage;
use atlas_recolor::rendering::png_io;
use tempfile::TempDir;

/// A temp directory that holds the images of one test
pub struct TestWorkspace {
    dir: TempDir,
}

/// Captured result of one CLI invocation
pub struct CliOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {}", self.stdout))
    }
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Absolute path of `name` inside the workspace
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    /// Write `image` as PNG under `name`
    pub fn write_image(&self, name: &str, image: &RgbaImage) -> PathBuf {
        let path = self.path(name);
        png_io::write_png(&path, image, false).expect("Failed to write test image");
        path
    }

    /// Read back a PNG written by the code under test
    pub fn read_image(&self, name: &str) -> RgbaImage {
        png_io::read_png(&self.path(name))
            .unwrap_or_else(|e| panic!("Failed to read {name}: {e}"))
    }

    /// Write a text file (e.g. a YAML config)
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Run the `atlas-recolor` binary with `args`, inside the workspace
    pub fn run_cli(&self, args: &[&str]) -> CliOutput {
        let output = Command::new(env!("CARGO_BIN_EXE_atlas-recolor"))
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("ATLAS_RECOLOR_CONFIG")
            .env("RUST_LOG", "atlas_recolor=warn")
            .output()
            .expect("Failed to run atlas-recolor");

        CliOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}
