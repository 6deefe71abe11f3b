//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::io::{self, Write};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use env_logger::Builder;
use log::{debug, info};

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::core::report::analyze_file;
use chatlens::format::{OutputFormat, to_format_string, write_to_format};

fn main() {
    let args = <Args as ClapParser>::parse();

    // Logging setup; RUST_LOG overrides -v
    Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let start = Instant::now();
    let config = args.analysis_config()?;
    let format: OutputFormat = args.format.into();

    info!("chatlens v{}", env!("CARGO_PKG_VERSION"));
    info!("input: {}", args.input.display());
    debug!("config: {:?}", config);

    let report = analyze_file(&args.input, &config)?;

    match args.output {
        Some(ref path) => {
            write_to_format(&report, path, format)?;
            println!(
                "✅ {} report for {} messages saved to {}",
                format,
                report.total_messages,
                path.display()
            );
        }
        None => {
            let rendered = to_format_string(&report, format)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }

    info!("done in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}
