//! Multi-file output.
//!
//! Rendering produces text only; a [`FileSet`] pairs rendered text with
//! relative paths so a host can preview or write a whole generation run.
//!
//! # Example
//!
//! ```ignore
//! let mut files = FileSet::new();
//! files.push(RenderedFile::new("com/example/User.java", user_java));
//! files.push(RenderedFile::new("com/example/UserImpl.java", impl_java).if_missing());
//!
//! let stats = files.write_all(&output_dir)?;
//! ```

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tracing::debug;

/// When an existing file may be replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always write.
    #[default]
    Always,
    /// Only write if the file does not exist yet.
    IfMissing,
}

/// Result of a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written.
    Written,
    /// File was skipped (already exists).
    Skipped,
}

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the output directory.
    pub path: String,
    pub content: String,
    pub overwrite: Overwrite,
}

impl RenderedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// Keep an existing file instead of replacing it.
    pub fn if_missing(mut self) -> Self {
        self.overwrite = Overwrite::IfMissing;
        self
    }

    /// Get the full path for this file.
    pub fn full_path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    /// Write this file below `base`.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.full_path(base);

        if self.overwrite == Overwrite::IfMissing && path.exists() {
            return Ok(WriteResult::Skipped);
        }
        write_file(&path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

/// An ordered collection of rendered files.
///
/// [`push`](Self::push) replaces a file whose path is already present,
/// so each path is written at most once; [`try_push`](Self::try_push)
/// refuses it instead.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    files: Vec<RenderedFile>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, file: RenderedFile) {
        match self.files.iter_mut().find(|f| f.path == file.path) {
            Some(existing) => *existing = file,
            None => self.files.push(file),
        }
    }

    /// Add `file` only if its path is not present yet.
    ///
    /// Returns the rejected file when the path is already taken.
    pub fn try_push(&mut self, file: RenderedFile) -> std::result::Result<(), RenderedFile> {
        if self.contains(&file.path) {
            return Err(file);
        }
        self.files.push(file);
        Ok(())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn get(&self, path: &str) -> Option<&RenderedFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Iterate over files in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &RenderedFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Write all files below `base`.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for file in &self.files {
            match file.write(base)? {
                WriteResult::Written => {
                    stats.written += 1;
                    stats.written_paths.push(file.path.clone());
                }
                WriteResult::Skipped => {
                    stats.skipped += 1;
                    stats.skipped_paths.push(file.path.clone());
                }
            }
        }

        debug!(
            written = stats.written,
            skipped = stats.skipped,
            dir = %base.display(),
            "wrote rendered files"
        );
        Ok(stats)
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = &'a RenderedFile;
    type IntoIter = std::slice::Iter<'a, RenderedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Number of files written.
    pub written: usize,
    /// Number of files skipped (already existed).
    pub skipped: usize,
    /// Paths of written files.
    pub written_paths: Vec<String>,
    /// Paths of skipped files.
    pub skipped_paths: Vec<String>,
}

impl WriteStats {
    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written + self.skipped
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}
