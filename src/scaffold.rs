//! Filesystem side of the installer: directory creation plus literal and
//! placeholder file writes, all rooted at one target directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ui;

pub struct Scaffold {
    root: PathBuf,
}

impl Scaffold {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Create every listed directory (with ancestors) under the root.
    /// Already-existing directories are left alone.
    pub fn ensure_directories(&self, dirs: &[&str]) -> Result<()> {
        for dir in dirs {
            let path = self.root.join(dir);
            fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }
        Ok(())
    }

    /// Write `content` verbatim to `rel` under the root, creating the parent
    /// directory if needed and overwriting any existing file.
    pub fn write_file(&self, rel: &str, content: &str) -> Result<()> {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        ui::success(&format!("Created {}", rel));
        Ok(())
    }

    /// Write an instructional stand-in at `rel` telling the user which
    /// artifact to paste in by hand.
    pub fn write_placeholder(&self, rel: &str, description: &str) -> Result<()> {
        self.write_file(rel, &render_placeholder(description))
    }
}

/// Render the placeholder body: the description serves as the document
/// title, the artifact name to copy from, and the file-purpose paragraph.
pub fn render_placeholder(description: &str) -> String {
    format!(
        r#"# {description}

## ⚠️ IMPORTANT: Copy Content from Artifacts

This file needs content from the project artifacts. Please copy the corresponding content:

1. Find the artifact titled: "{description}"
2. Copy the entire content
3. Paste it into this file

## File Purpose

{description}

## What to do after copying:

1. Save this file
2. Continue with the next file in docs/SETUP_INSTRUCTIONS.md
3. Once all files are copied, run: ./scripts/quick-start.sh

---
Generated by AI Infrastructure Installer
"#
    )
}
