//! sidegen CLI: convert Selenium IDE recordings from the command line.
//!
//! ## Usage
//!
//! ```bash
//! sidegen login.side                    # writes ./LoginSuite.java
//! sidegen -o gen/ *.side                # all recordings into gen/
//! sidegen --keep-going a.side b.side    # report failures, keep converting
//! ```

use clap::Parser;
use std::process::ExitCode;

use sidegen_cli::{convert_file, Cli, CliConfig, CliError, CliResult, Reporter, Verbosity};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    init_tracing(config.verbosity);

    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());

    std::fs::create_dir_all(&cli.out_dir)?;

    let mut failed = 0usize;
    for file in &cli.files {
        match convert_file(file, &cli.out_dir) {
            Ok(path) => {
                reporter.success(&format!("{} -> {}", file.display(), path.display()));
            }
            Err(e) if cli.keep_going => {
                failed += 1;
                reporter.error(&e.to_string());
            }
            Err(e) => return Err(e),
        }
    }

    if failed > 0 {
        return Err(CliError::PartialFailure {
            failed,
            total: cli.files.len(),
        });
    }
    Ok(())
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(cli.color.into())
}

fn init_tracing(verbosity: Verbosity) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.tracing_filter()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
