/*!
 * Command-line interface for Monofile
 */

use std::fs;
use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::ThreadPoolBuilder;

use monofile::config::{Args, Config};
use monofile::context::build_context_input;
use monofile::error::Result;
use monofile::filter::PatternFilter;
use monofile::flatten::flatten;
use monofile::ingest::Ingestor;
use monofile::input::collect_handles;
use monofile::report::{IngestReport, ReportFormat, Reporter};
use monofile::session::{SessionBundle, SessionStore};
use monofile::stats::compute_stats;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Shell completions short-circuit everything else
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let restore = args.restore;

    // Create configuration
    let config = Config::from_args(args);

    // Re-presenting a saved session touches no inputs
    if restore {
        return restore_session(&config);
    }

    // Validate configuration
    config.validate()?;

    // Configure thread pool
    if let Err(e) = ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .build_global()
    {
        eprintln!("Warning: Failed to set thread pool size: {}", e);
    }

    // Create progress bar with advanced Unicode styling
    let progress = ProgressBar::new(0);
    progress.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}  Remaining: {eta_precise}  Speed: {per_sec}/s")
        .unwrap());
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Setup");
    progress.set_message("📂 Collecting inputs");

    // Expand directories into handles for progress tracking
    let handles = collect_handles(&config)?;
    progress.set_message(format!("🔎 Found {} candidate files", handles.len()));

    progress.set_length(handles.len() as u64);
    progress.set_prefix("📊 Processing");
    progress.set_message("Starting ingest...");

    // Start timing both ingest and write operations
    let start_time = Instant::now();

    let ingestor = Ingestor::new()
        .with_filter(PatternFilter::new(
            config.ignore_patterns.clone(),
            config.include_patterns.clone(),
        ))
        .with_progress(Arc::new(progress.clone()));
    let snapshot = ingestor.ingest(&handles)?;

    let stats = compute_stats(&snapshot);
    let flattened = flatten(&snapshot);
    fs::write(&config.output_file, &flattened)?;

    // Optional AI context payload next to the main document
    if let Some(context_file) = &config.context_file {
        let payload = build_context_input(&snapshot, &flattened, config.max_context_chars);
        fs::write(context_file, payload)?;
    }

    // Calculate total duration (ingest + write)
    let total_duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // Prepare the ingest report
    let report = IngestReport {
        output_file: config.output_file.display().to_string(),
        duration: Some(total_duration),
        saved_at: None,
        stats: stats.clone(),
    };

    if config.emit_json {
        println!("{}", serde_json::to_string_pretty(&report.stats)?);
    } else {
        let reporter = Reporter::new(ReportFormat::ConsoleTable);
        reporter.print_report(&report);
    }

    // Persist the session bundle; failure to save never fails the run
    if config.save_session {
        match SessionStore::default_location() {
            Ok(store) => {
                let bundle = SessionBundle::new(stats, flattened);
                if let Err(e) = store.save(&bundle) {
                    eprintln!("Warning: failed to save session: {}", e);
                }
            }
            Err(e) => eprintln!("Warning: failed to save session: {}", e),
        }
    }

    Ok(())
}

/// Present the previously saved session without touching any inputs
fn restore_session(config: &Config) -> Result<()> {
    let store = SessionStore::default_location()?;
    let bundle = store.load()?;

    if config.emit_json {
        println!("{}", serde_json::to_string_pretty(&bundle.stats)?);
        return Ok(());
    }

    let report = IngestReport {
        output_file: store.bundle_path().display().to_string(),
        duration: None,
        saved_at: bundle.saved_at(),
        stats: bundle.stats,
    };
    Reporter::new(ReportFormat::ConsoleTable).print_report(&report);
    Ok(())
}
