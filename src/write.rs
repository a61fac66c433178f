use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConvertError;

/// Persist `content` as `file_name` under `output_dir`, creating the
/// directory tree as needed. The file is written in one call, fully
/// replacing any previous content. Returns the resolved path.
pub fn write_markdown(
    output_dir: &Path,
    file_name: &str,
    content: &str,
) -> Result<PathBuf, ConvertError> {
    fs::create_dir_all(output_dir).map_err(|source| ConvertError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(file_name);
    fs::write(&path, content).map_err(|source| ConvertError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "markdown written");

    Ok(path)
}
