//! onefile - reproducible single-file bundler for the launcher
//!
//! This is the CLI application that runs the five-step build pipeline:
//! environment provisioning, activation, dependency installation,
//! packaging, and descriptor cleanup.

mod cli;
mod error;
mod events;

use crate::cli::Cli;
use crate::error::CliError;
use crate::events::EventHandler;
use clap::Parser;
use onefile_config::{constants, Config};
use onefile_events::EventReceiver;
use onefile_pipeline::{BuildContext, BuildReport, Pipeline};
use std::process;
use tokio::select;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    if let Err(e) = run(&cli).await {
        error!("build failed: {}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Main application logic
async fn run(cli: &Cli) -> Result<(), CliError> {
    info!("starting onefile v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load_or_default().await?;
    let working_dir = std::env::current_dir()?;

    let (event_sender, event_receiver) = onefile_events::channel();
    let context = BuildContext::new(config, working_dir).with_event_sender(event_sender);

    let colors_enabled = console::Term::stdout().features().colors_supported();
    let mut event_handler = EventHandler::new(colors_enabled, cli.debug);

    let report = run_pipeline_with_events(context, event_receiver, &mut event_handler).await?;

    info!(
        "artifact {} produced in {:?}",
        report.artifact.display(),
        report.duration
    );
    Ok(())
}

/// Run the pipeline with concurrent event rendering
async fn run_pipeline_with_events(
    context: BuildContext,
    mut event_receiver: EventReceiver,
    event_handler: &mut EventHandler,
) -> Result<BuildReport, CliError> {
    let pipeline = Pipeline::new(context);
    let mut pipeline_future = Box::pin(pipeline.run());

    loop {
        select! {
            // Pipeline completed
            result = &mut pipeline_future => {
                // Drain any remaining events
                while let Ok(event) = event_receiver.try_recv() {
                    event_handler.handle_event(event);
                }
                return result.map_err(Into::into);
            }

            // Event received
            event = event_receiver.recv() => {
                match event {
                    Some(event) => event_handler.handle_event(event),
                    None => { /* Channel closed: keep waiting for the pipeline to finish */ }
                }
            }
        }
    }
}

/// Initialize tracing/logging
fn init_tracing(debug_enabled_flag: bool) {
    let debug_enabled = std::env::var("RUST_LOG").is_ok() || debug_enabled_flag;

    if debug_enabled {
        // Debug mode: structured JSON logs to a timestamped file
        let log_dir = std::path::Path::new(constants::LOGS_DIR);
        if let Err(e) = std::fs::create_dir_all(log_dir) {
            eprintln!("Warning: Failed to create log directory: {e}");
        }

        let log_file = log_dir.join(format!(
            "onefile-{}.log",
            chrono::Utc::now().format("%Y%m%d-%H%M%S")
        ));

        match std::fs::File::create(&log_file) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(file)
                    .with_env_filter(
                        tracing_subscriber::EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| {
                                tracing_subscriber::EnvFilter::new("info,onefile=debug")
                            }),
                    )
                    .init();

                eprintln!("Debug logging enabled: {}", log_file.display());
            }
            Err(e) => {
                eprintln!("Warning: Failed to create log file: {e}");
                // Fallback to stderr
                tracing_subscriber::fmt()
                    .with_env_filter(
                        tracing_subscriber::EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                    )
                    .init();
            }
        }
    } else {
        // Normal mode: minimal logging to stderr; progress comes from events
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .init();
    }
}
