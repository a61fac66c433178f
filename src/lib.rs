//! Convert a delimited text file (CSV with auto-detected delimiter, UTF-8 or
//! Shift-JIS encoded) into a Markdown pipe-table.

pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod load;
pub mod write;
