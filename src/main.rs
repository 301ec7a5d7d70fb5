mod cli;
mod complexity;
mod config;
mod language;
mod session;
mod tree;
mod walk;

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands};
use config::Config;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            common,
            json,
            per_function,
            top,
            min_score,
            sort_by,
        } => {
            let target = common.path.clone().unwrap_or_else(|| PathBuf::from("."));
            let result = load_config(&target, common.low, common.high).and_then(|config| {
                let filter = walk::ExcludeFilter::new(&common.exclude)?;
                complexity::run(
                    &target,
                    &config,
                    &filter,
                    json,
                    common.include_tests,
                    per_function,
                    top,
                    min_score,
                    &sort_by,
                )
            });
            exit_on_error(result);
        }
        Commands::At {
            file,
            line,
            column,
            low,
            high,
        } => {
            let dir = file.parent().map(Path::to_path_buf).unwrap_or_default();
            let result = load_config(&dir, low, high)
                .and_then(|config| complexity::run_at(&file, line, column, &config));
            exit_on_error(result);
        }
        Commands::Diagnostics { common } => {
            let target = common.path.clone().unwrap_or_else(|| PathBuf::from("."));
            let result = load_config(&target, common.low, common.high).and_then(|config| {
                let filter = walk::ExcludeFilter::new(&common.exclude)?;
                complexity::run_diagnostics(&target, &config, common.include_tests, &filter)
            });
            exit_on_error(result);
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "rk", &mut std::io::stdout());
        }
    }
}

/// Load the project config and apply CLI threshold overrides.
fn load_config(
    dir: &Path,
    low: Option<f64>,
    high: Option<f64>,
) -> Result<Config, Box<dyn Error>> {
    Ok(Config::load(dir)?.with_thresholds(low, high)?)
}

fn exit_on_error(result: Result<(), Box<dyn Error>>) {
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
