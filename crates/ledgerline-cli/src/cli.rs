//! ledgerline: drive the bank statement import flow from a terminal

mod logging;
mod output;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ledgerline_core::{Notification, NotificationQueue};
use ledgerline_import::{
    CandidateFile, HandoffPayload, ImportPageView, ImportSession, MappingStage, StatementFormat,
};
use ledgerline_settings::ImportSettings;
use parking_lot::Mutex;

#[derive(Parser)]
#[command(name = "ledgerline", about = "Bank statement import")]
struct Cli {
    /// Import settings file (defaults to the user config directory)
    #[arg(long, global = true, env = "LEDGERLINE_SETTINGS")]
    settings: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also write JSON logs to the log directory
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select statement files, in order, as the import page would
    Import {
        /// Files to submit; each one replaces the previous selection
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Character encoding for the parse step (utf8, utf16)
        #[arg(long, short)]
        encoding: Option<String>,

        /// Submit through drag and drop instead of the file picker
        #[arg(long)]
        drop: bool,

        /// Press Next after the files are submitted
        #[arg(long)]
        advance: bool,
    },
    /// List accepted statement formats
    Formats,
    /// Print the effective import settings
    Settings {
        /// Write the effective settings back to the settings file
        #[arg(long)]
        save: bool,
    },
}

/// Mapping stage that keeps the hand-off for printing
#[derive(Default)]
struct CapturedHandoff {
    payloads: Mutex<Vec<HandoffPayload>>,
}

impl MappingStage for CapturedHandoff {
    fn begin_mapping(&self, payload: HandoffPayload) {
        self.payloads.lock().push(payload);
    }
}

/// Everything one `import` run produced
struct ImportReport {
    notifications: Vec<Notification>,
    view: ImportPageView,
    handoffs: Vec<HandoffPayload>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log_file {
        ledgerline_settings::ensure_directories()?;
    }
    let config = logging::LoggingConfig {
        enable_json_logs: cli.log_file,
        ..logging::LoggingConfig::default()
    }
    .with_verbosity(cli.verbose);
    let _guard = logging::init(config)?;

    let settings = load_settings(cli.settings.as_deref())?;

    match cli.command {
        Commands::Import {
            files,
            encoding,
            drop,
            advance,
        } => {
            let report = run_import(&settings, &files, encoding.as_deref(), drop, advance);
            print_report(&report)
        }
        Commands::Formats => {
            println!("{}", output::formats_table());
            println!("{}", ledgerline_import::ADVISORY_SIZE_NOTICE);
            Ok(())
        }
        Commands::Settings { save } => {
            if save {
                save_settings(&settings, cli.settings.as_deref())?;
            }
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(())
        }
    }
}

fn load_settings(path: Option<&Path>) -> Result<ImportSettings> {
    match path {
        Some(path) => ImportSettings::load_from(path),
        None => ImportSettings::load(),
    }
}

fn save_settings(settings: &ImportSettings, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => settings.save_to(path),
        None => settings.save(),
    }?;
    tracing::info!("Import settings saved");
    Ok(())
}

/// Turn a command-line path into a candidate for the page.
///
/// Names with an unsupported extension are passed through untouched so the
/// page rejects them with its usual toast, whether or not they exist.
/// Supported names that are not regular files are skipped.
fn candidate_for(path: &Path) -> Option<CandidateFile> {
    let Some(name) = path.file_name().map(|name| name.to_string_lossy().to_string()) else {
        tracing::warn!(path = %path.display(), "Path does not name a file, skipping");
        return None;
    };

    if StatementFormat::detect(&name).is_none() {
        return Some(CandidateFile::new(name, 0).with_location(path));
    }

    if !path.is_file() {
        tracing::warn!(path = %path.display(), "Not a regular file, skipping");
        return None;
    }

    match CandidateFile::from_path(path) {
        Ok(candidate) => Some(candidate),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read file, skipping");
            None
        }
    }
}

fn run_import(
    settings: &ImportSettings,
    files: &[PathBuf],
    encoding: Option<&str>,
    drop: bool,
    advance: bool,
) -> ImportReport {
    let toasts = Arc::new(NotificationQueue::new());
    let mapping = Arc::new(CapturedHandoff::default());
    let mut session = ImportSession::builder(toasts.clone())
        .mapping_stage(mapping.clone())
        .encodings(settings.encoding_domain())
        .build();

    tracing::info!(session = %session.id(), files = files.len(), "Import started");

    if let Some(value) = encoding
        && let Err(e) = session.set_encoding(value)
    {
        tracing::debug!(error = %e, "Encoding not applied");
    }

    for path in files {
        let Some(candidate) = candidate_for(path) else {
            continue;
        };

        let outcome = if drop {
            session.begin_drag();
            session.drop_files([candidate]).map(|_| ())
        } else {
            session.open_picker();
            session.picker_changed([candidate]).map(|_| ())
        };
        if let Err(e) = outcome {
            tracing::debug!(error = %e, path = %path.display(), "File not selected");
        }
    }

    if advance && let Err(e) = session.advance() {
        tracing::debug!(error = %e, "Wizard did not advance");
    }

    let handoffs = std::mem::take(&mut *mapping.payloads.lock());
    ImportReport {
        notifications: toasts.drain(),
        view: ImportPageView::derive(&session, &settings.page_context()),
        handoffs,
    }
}

fn print_report(report: &ImportReport) -> Result<()> {
    for notification in &report.notifications {
        println!("{}", output::notification_line(notification));
    }

    println!();
    println!("{}", output::page_summary(&report.view));

    for payload in &report.handoffs {
        println!();
        println!("{}", serde_json::to_string_pretty(payload)?);
    }

    Ok(())
}
