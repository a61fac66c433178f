use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between reading the input file and writing
/// the Markdown output. Empty input is not an error; see `convert::Outcome`.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Resolved input path does not exist as a regular file.
    #[error("input file not found: {0}")]
    FileNotFound(PathBuf),

    /// The input could not be read after it was found.
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// Neither UTF-8 nor Shift-JIS could decode the file.
    #[error("{0} is not valid UTF-8 or Shift-JIS text")]
    Encoding(PathBuf),

    /// The sniffing heuristic found no delimiter it was confident in.
    #[error("could not detect a field delimiter in {0}")]
    DelimiterDetection(PathBuf),

    /// The csv reader rejected the decoded content.
    #[error("failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: csv::Error },

    /// Output directory creation or the file write failed.
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}
