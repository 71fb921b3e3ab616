use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{info, warn, Subscriber};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::formatter::LineFormatter;

const QUIET_CRATES: &[&str] = &["winit", "log", "egui", "eframe", "wgpu", "naga"];

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Keep our app at trace level, but suppress verbose third-party logs
        QUIET_CRATES.iter().fold(EnvFilter::new("trace"), |filter, krate| {
            match format!("{}=warn", krate).parse() {
                Ok(directive) => filter.add_directive(directive),
                Err(_) => filter,
            }
        })
    })
}

fn open_log_file() -> std::io::Result<(PathBuf, fs::File)> {
    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("kontext_captioner_{}.log", timestamp));
    let file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;
    Ok((log_path, file))
}

/// Stdout always, plus the log file when one is given
fn build_subscriber(log_file: Option<fs::File>) -> impl Subscriber + Send + Sync + 'static {
    let file_layer = log_file.map(|file| {
        fmt::layer()
            .event_format(LineFormatter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(default_filter())
        .with(file_layer)
        .with(
            fmt::layer()
                .event_format(LineFormatter)
                .with_writer(std::io::stdout),
        )
}

/// Install the global subscriber: log file under `./logs` plus stdout.
///
/// Falls back to stdout only when the log file cannot be created. Returns
/// the log file path when there is one.
pub fn setup_logging() -> Option<PathBuf> {
    let (log_path, log_file, open_error) = match open_log_file() {
        Ok((path, file)) => (Some(path), Some(file), None),
        Err(e) => (None, None, Some(e)),
    };

    build_subscriber(log_file).init();

    info!("Starting Kontext manual captioner");
    match (&log_path, open_error) {
        (Some(path), _) => info!("Log file created at: {:?}", path),
        (None, Some(e)) => warn!("Could not create log file, logging to stdout only: {}", e),
        (None, None) => {}
    }
    log_path
}
