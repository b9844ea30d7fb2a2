//! JSON file writer
//!
//! Provides utilities for writing programs to JSON files.

use crate::error::{Error, Result};
use crate::types::Program;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Indentation of one nesting level in the output file
const INDENT: &[u8] = b"    ";

/// JSON file writer
#[derive(Debug, Clone)]
pub struct JsonWriter {
    path: PathBuf,
}

impl JsonWriter {
    /// Create a writer for the given path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Write programs as a JSON array, overwriting the file
    ///
    /// Non-ASCII text is written as UTF-8, not as `\u` escapes. Returns the
    /// number of programs written.
    pub fn write(&self, programs: &[Program]) -> Result<usize> {
        let file = File::create(&self.path).map_err(|e| {
            Error::output(format!(
                "Failed to create file {}: {e}",
                self.path.display()
            ))
        })?;

        let mut out = BufWriter::new(file);
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);

        programs.serialize(&mut serializer).map_err(|e| {
            Error::output(format!("Failed to serialize programs: {e}"))
        })?;

        out.flush().map_err(|e| {
            Error::output(format!(
                "Failed to write file {}: {e}",
                self.path.display()
            ))
        })?;

        Ok(programs.len())
    }
}

/// What happened to the output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was (over)written with this many programs
    Written(usize),
    /// Nothing to write; the file was left untouched
    Skipped,
}

/// Write programs to `path` unless the set is empty
pub fn write_programs(path: impl AsRef<Path>, programs: &[Program]) -> Result<WriteOutcome> {
    if programs.is_empty() {
        return Ok(WriteOutcome::Skipped);
    }

    let written = JsonWriter::new(path).write(programs)?;
    Ok(WriteOutcome::Written(written))
}
