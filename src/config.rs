use std::env;
use std::path::PathBuf;

/// Environment override for the directory input filenames are resolved in.
pub const INPUT_DIR_VAR: &str = "CSV2MD_INPUT_DIR";
/// Environment override for the directory output files are written to.
pub const OUTPUT_DIR_VAR: &str = "CSV2MD_OUTPUT_DIR";

/// Where the converter looks for input files and places output files.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Config {
    /// Build a config from `CSV2MD_INPUT_DIR` / `CSV2MD_OUTPUT_DIR`,
    /// falling back to the current directory for either that is unset.
    pub fn from_env() -> Self {
        Self {
            input_dir: dir_from_env(INPUT_DIR_VAR),
            output_dir: dir_from_env(OUTPUT_DIR_VAR),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
        }
    }
}

fn dir_from_env(var: &str) -> PathBuf {
    env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}
