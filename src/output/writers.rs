//! Report writing
//!
//! This module provides writers for error report destinations.

use crate::error::{Result, TrailError};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Trait for report writers
pub trait ReportWriter {
    /// Write one report, followed by a newline
    fn write(&self, report: &str) -> Result<()>;
}

/// Writer for stderr output
#[derive(Debug)]
pub struct StderrWriter;

impl ReportWriter for StderrWriter {
    fn write(&self, report: &str) -> Result<()> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{}", report)
            .and_then(|_| stderr.flush())
            .map_err(|e| TrailError::StderrWrite { source: e })
    }
}

/// Writer that appends reports to a file
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    /// Create a new file writer
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportWriter for FileWriter {
    fn write(&self, report: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| TrailError::OutputWrite {
                path: self.path.clone(),
                source: e,
            })?;

        writeln!(file, "{}", report).map_err(|e| TrailError::OutputWrite {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Create a report writer: a file when a path is given, stderr otherwise
pub fn create_writer(output_file: Option<impl AsRef<Path>>) -> Box<dyn ReportWriter> {
    match output_file {
        Some(path) => Box::new(FileWriter::new(path)),
        None => Box::new(StderrWriter),
    }
}
