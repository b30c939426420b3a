use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use std::env;
use std::io::{BufWriter, Write};
use std::time::Instant;

use sweep_unused_files::Config;

#[derive(Parser)]
#[command(name = "sweep")]
#[command(about = "A collection of tools for tidying TypeScript source trees", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report source files unreachable from the application entry points
    UnusedFiles(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::UnusedFiles(cfg) => {
            let num_threads = rayon::current_num_threads();
            info!("Running unused-files check (using {} threads)", num_threads);
            debug!("Config: root={:?}, src_dir={:?}", cfg.root, cfg.src_dir);

            let result = sweep_unused_files::run_unused_files_check(cfg.clone())?;
            let cwd = env::current_dir()?;

            if cfg.json {
                sweep_unused_files::print_json_report(&mut stdout, &result, &cwd)?;
            } else {
                sweep_unused_files::print_report(&mut stdout, &result, &cwd)?;
            }

            sweep_unused_files::write_report_file(&cfg.report, &result.unused, &cwd)?;

            let elapsed_ms = start.elapsed().as_millis();
            if !cfg.json {
                writeln!(
                    stdout,
                    "\n{} Report written to {}. Finished in {}ms on {} files (using {} threads).",
                    "●".bright_blue(),
                    cfg.report.display(),
                    elapsed_ms.to_string().cyan(),
                    result.files_scanned.to_string().cyan(),
                    num_threads.to_string().cyan()
                )?;
            }
            stdout.flush()?;

            // Finding unused files is the expected outcome, not a failure;
            // the exit status only reflects whether the scan completed.
            Ok(())
        }
    }
}
