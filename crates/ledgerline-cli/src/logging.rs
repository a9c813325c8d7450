//! Logging setup for the ledgerline binary
//!
//! Console output goes to stderr so that JSON written to stdout stays
//! machine-readable. A JSON file layer with daily rotation can be enabled for
//! bug reports.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory where log files are written
    pub log_dir: PathBuf,

    /// Write JSON logs to a daily rolling file
    pub enable_json_logs: bool,

    pub enable_console_logs: bool,

    /// Include file/line information in console logs
    pub include_location: bool,

    /// Log span open/close events
    pub enable_spans: bool,

    /// Used when RUST_LOG is not set
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: log_directory(),
            enable_json_logs: false,
            enable_console_logs: true,
            include_location: cfg!(debug_assertions),
            enable_spans: false,
            default_filter: "warn,ledgerline_cli=info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Map the `-v` count onto a default filter
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        self.default_filter = match verbose {
            0 => "warn,ledgerline_cli=info",
            1 => "info,ledgerline_import=debug,ledgerline_settings=debug",
            _ => "debug",
        }
        .to_string();
        self.enable_spans = verbose > 1;
        self
    }
}

/// Initialize the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the program.
/// The log directory must already exist when JSON logs are enabled.
pub fn init(config: LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let span_events = if config.enable_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let mut layers = Vec::new();
    let mut guard = None;

    if config.enable_console_logs {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_span_events(span_events.clone())
            .with_ansi(true)
            .pretty()
            .with_filter(env_filter.clone())
            .boxed();

        layers.push(console_layer);
    }

    if config.enable_json_logs {
        let file_appender = tracing_appender::rolling::daily(&config.log_dir, "ledgerline.log");
        let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(file_guard);

        let json_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_span_events(span_events)
            .with_ansi(false)
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(non_blocking)
            .with_filter(env_filter)
            .boxed();

        layers.push(json_layer);
    }

    tracing_subscriber::registry().with(layers).try_init()?;

    tracing::debug!(
        log_dir = %config.log_dir.display(),
        json_enabled = config.enable_json_logs,
        console_enabled = config.enable_console_logs,
        "Logging initialized"
    );

    Ok(guard)
}

pub fn log_directory() -> PathBuf {
    ledgerline_settings::logs_dir().unwrap_or_else(|_| PathBuf::from(".").join("logs"))
}
