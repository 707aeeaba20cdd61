//! `ifwatch` — live view of kernel network interface counters.
//!
//! Samples `/proc/net/dev` once a second and shows `rx_bytes`,
//! `rx_packets`, `tx_bytes` and `tx_packets` for every interface whose name
//! starts with a match of the filter pattern. Values that changed since the
//! previous sample are drawn in reverse video.
//!
//! Logs are written to a file (default `$TMPDIR/ifwatch.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, config, tracing setup, panic hooks,
//! and app launch.

mod app;
mod event;
mod render;
mod theme;
mod tui;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use ifwatch_core::{Config, InterfaceFilter, StatsReader};
use tracing::info;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;

/// Watch network interface counters and highlight the ones that change.
#[derive(Parser, Debug)]
#[command(name = "ifwatch", version, about)]
struct Cli {
    /// Regular expression matched against the start of interface names
    /// [default: vnic|portEpic, or `filter` from config / IFWATCH_FILTER]
    pattern: Option<String>,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
///
/// Fails if the log file cannot be created or opened.
fn setup_tracing(config: &Config) -> Result<WorkerGuard> {
    let level = &config.log_level;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ifwatch={level},ifwatch_core={level}")));

    let log_dir = config
        .log_file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(std::path::Path::new("."));
    let log_filename = config
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("ifwatch.log"));

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(log_filename.to_string_lossy())
        .build(log_dir)
        .wrap_err_with(|| format!("cannot open log file {}", config.log_file.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    Ok(guard)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    let cli = Cli::parse();

    // Priority: CLI pattern > IFWATCH_* env > config file > defaults
    let mut config = Config::load()?;
    if let Some(pattern) = cli.pattern {
        config.filter = pattern;
    }

    // Reject a bad pattern before the terminal is touched
    let filter = InterfaceFilter::new(&config.filter)?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&config)?;

    info!(
        filter = %config.filter,
        source = %config.source.display(),
        "starting ifwatch"
    );

    let reader = StatsReader::new(config.source);
    let mut app = App::new(reader, filter);
    app.run().await?;

    Ok(())
}
