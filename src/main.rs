// LoadSleuth - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading (before logging, warnings replayed after)
// 3. Logging initialisation (debug mode support)
// 4. Running the extraction and writing the report to stdout

pub use loadsleuth::app;
pub use loadsleuth::platform;
pub use loadsleuth::util;

use clap::Parser;
use loadsleuth::core::model::OutputFormat;
use std::io::Write;
use std::path::PathBuf;

/// LoadSleuth - model-load event extractor for llama.cpp / Ollama logs.
///
/// Reads server logs (files or stdin) and reports one row per model load:
/// model name, size label, and how many layers were offloaded to the GPU.
#[derive(Parser, Debug)]
#[command(name = "loadsleuth", version, about)]
struct Cli {
    /// Log files to read in order ("-" or none for stdin).
    files: Vec<PathBuf>,

    /// Output format: table, csv, json, jsonl (overrides config.toml).
    #[arg(short = 'f', long = "format", value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Path to config.toml (defaults to the platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print extraction counters to stderr after the report.
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_label(s).ok_or_else(|| {
        let valid: Vec<_> = OutputFormat::all().iter().map(|f| f.label()).collect();
        format!("unknown format '{s}' (expected one of: {})", valid.join(", "))
    })
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging exists, so warnings are collected and
    // replayed once the subscriber is live.
    let explicit_config = cli.config.is_some();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (config, config_warnings) =
        platform::config::load_config(&config_path, explicit_config);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "LoadSleuth starting"
    );
    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    let options = app::run::RunOptions {
        inputs: cli.files.clone(),
        format: cli.format.unwrap_or(config.output_format),
        warn_on_dropped_triggers: config.warn_on_dropped_triggers,
    };

    let stdout = std::io::stdout();
    let result = app::run::run(&options, stdout.lock());

    match result {
        Ok(report) => {
            if cli.summary {
                let stderr = std::io::stderr();
                let mut handle = stderr.lock();
                if let Err(e) = app::run::write_summary(&report, &mut handle) {
                    tracing::warn!(error = %e, "Failed to write summary");
                }
                let _ = handle.flush();
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Extraction failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
