//! Orchestration of the Loader → Formatter → Writer pipeline.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::Config;
use crate::error::ConvertError;
use crate::{format, load, write};

/// What a successful run produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Markdown was written to this path.
    Written(PathBuf),
    /// The input parsed to zero rows; no file was produced.
    EmptyInput,
}

/// Convert one input file to a Markdown table file.
///
/// When `output_name` is `None` it is derived from the input filename's base
/// name with a `.md` extension.
pub fn convert(
    config: &Config,
    input_name: &str,
    output_name: Option<&str>,
) -> Result<Outcome, ConvertError> {
    info!(file = input_name, "reading input");
    let table = load::load_table(&config.input_dir, input_name)?;

    if table.is_empty() {
        warn!(file = input_name, "input has no rows; nothing to convert");
        return Ok(Outcome::EmptyInput);
    }
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "input loaded"
    );

    let markdown = format::to_markdown(&table);

    let derived;
    let output_name = match output_name {
        Some(name) => name,
        None => {
            derived = derive_output_name(input_name);
            &derived
        }
    };

    let path = write::write_markdown(&config.output_dir, output_name, &markdown)?;
    info!(path = %path.display(), "conversion complete");
    Ok(Outcome::Written(path))
}

/// `reports/data.csv` → `data.md`: directory components and the extension
/// are dropped from the input name.
fn derive_output_name(input_name: &str) -> String {
    let stem = Path::new(input_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_name.to_string());
    format!("{stem}.md")
}
