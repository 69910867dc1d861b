//! Test fixtures: a temp directory laid out with folders and files that
//! share names, with and without a `.txt` suffix.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Directories created by [`CaptureFixture::new`].
pub const FOLDERS: [&str; 3] = ["folder", "folder.txt", "same_name"];

/// Empty regular files created by [`CaptureFixture::new`].
pub const FILES: [&str; 3] = ["file", "file.txt", "same_name.txt"];

/// Owns the temp directory; everything is removed on drop.
pub struct CaptureFixture {
    dir: TempDir,
}

impl CaptureFixture {
    /// Creates the fixture layout:
    ///
    /// ```text
    /// folder/          file
    /// folder.txt/      file.txt
    /// same_name/       same_name.txt
    /// ```
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        for folder in FOLDERS {
            fs::create_dir(dir.path().join(folder))?;
        }
        for file in FILES {
            fs::File::create(dir.path().join(file))?;
        }
        Ok(Self { dir })
    }

    /// Absolute path of `name` inside the fixture.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Installs a test-writer subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
