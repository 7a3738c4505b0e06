//! Files flowing through the pipeline: entry-point inputs and produced
//! artifacts.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// One incoming entry-point file: a relative path plus its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

impl InputFile {
    /// Creates an input file, cleaning redundant `.` / `..` path segments.
    pub fn new(path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.as_ref().to_path_buf().clean(),
            contents: contents.into(),
        }
    }

    /// Entry name derived from the source name: the file stem with the
    /// source suffix stripped.
    pub fn entry_name(&self) -> String {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("index")
            .to_string()
    }
}

/// One produced output file: a relative filename plus its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub contents: Vec<u8>,
}

impl Artifact {
    pub fn new(filename: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            contents: contents.into(),
        }
    }
}
