//! Logging initialization: stdout is reserved for reports, so logs go to `LOG_FILE`,
//! to stderr with `--verbose`, or nowhere.
//!
//! - **RUST_LOG**: level filter, e.g. `info`, `mapleleap=debug`. Default: `info`.
//! - **LOG_FILE**: when set, logs are appended to this file (plain text, no ANSI), each line
//!   tagged with the command name and run id
//!   through a non-blocking `tracing-appender` writer.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,hyper_util=off"))
}

/// Installs the global subscriber. Keep the returned guard alive until exit so buffered
/// file lines are flushed.
pub fn init(verbose: bool) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let path = Path::new(&path);
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| format!("LOG_FILE has no file name: {}", path.display()))?;
        std::fs::create_dir_all(dir)?;
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let file_layer = tracing_subscriber::fmt::layer()
            .event_format(crate::log_format::CommandLineFormat::new())
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(env_filter());
        tracing_subscriber::registry().with(file_layer).try_init()?;
        tracing::info!(path = %path.display(), "mapleleap logging to file");
        return Ok(Some(guard));
    }

    if verbose {
        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(env_filter());
        tracing_subscriber::registry().with(stderr_layer).try_init()?;
    } else {
        let sink_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::sink)
            .with_filter(env_filter());
        tracing_subscriber::registry().with(sink_layer).try_init()?;
    }
    Ok(None)
}
