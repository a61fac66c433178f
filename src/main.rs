use std::env;
use std::process::ExitCode;

use csv2md::config::Config;
use csv2md::convert::{self, Outcome};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(input_name) = args.first() else {
        print_usage();
        return ExitCode::from(1);
    };
    let output_name = args.get(1).map(String::as_str);

    let config = Config::from_env();
    match convert::convert(&config, input_name, output_name) {
        Ok(Outcome::Written(path)) => {
            info!(path = %path.display(), "done");
            ExitCode::SUCCESS
        }
        // Empty input is reported as a warning but is not a failure.
        Ok(Outcome::EmptyInput) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!("usage: csv2md <input-file> [output-file]");
    println!();
    println!("examples:");
    println!("  csv2md data.csv");
    println!("  csv2md data.csv notes.md");
    println!();
    println!("input and output directories default to the current directory;");
    println!("override with CSV2MD_INPUT_DIR and CSV2MD_OUTPUT_DIR.");
}
