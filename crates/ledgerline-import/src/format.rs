//! Supported statement formats
//!
//! The allow-list is closed: a file is importable only if its trailing
//! extension (case-insensitive) names one of these formats.

use serde::{Deserialize, Serialize};

const MEGABYTE: u64 = 1024 * 1024;

/// Size ceilings as shown under the drop zone.
///
/// Advisory only. CAMT.053/054 appear here although they are not on the
/// allow-list; the copy is kept as published.
pub const ADVISORY_SIZE_NOTICE: &str = "Maximum File Size: 1 MB for CSV, TSV, XLS, OFX, QIF, CAMT.053 and CAMT.054 • 5 MB for PDF files.";

/// A bank statement format accepted by the import page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementFormat {
    Csv,
    Tsv,
    Xls,
    Xlsx,
    Ofx,
    Qif,
    Pdf,
}

impl StatementFormat {
    pub fn all() -> &'static [Self] {
        &[
            Self::Csv,
            Self::Tsv,
            Self::Xls,
            Self::Xlsx,
            Self::Ofx,
            Self::Qif,
            Self::Pdf,
        ]
    }

    /// Normalized extension, including the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => ".csv",
            Self::Tsv => ".tsv",
            Self::Xls => ".xls",
            Self::Xlsx => ".xlsx",
            Self::Ofx => ".ofx",
            Self::Qif => ".qif",
            Self::Pdf => ".pdf",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Csv => "CSV (Comma-Separated Values)",
            Self::Tsv => "TSV (Tab-Separated Values)",
            Self::Xls => "Excel 97-2003 Workbook",
            Self::Xlsx => "Excel Workbook",
            Self::Ofx => "Open Financial Exchange",
            Self::Qif => "Quicken Interchange Format",
            Self::Pdf => "PDF Statement",
        }
    }

    /// Declared maximum size in bytes.
    ///
    /// Intake never rejects on size; the parse step downstream owns enforcement.
    pub fn declared_size_limit(&self) -> u64 {
        match self {
            Self::Pdf => 5 * MEGABYTE,
            _ => MEGABYTE,
        }
    }

    /// Look up a normalized extension (lowercase, leading dot)
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|format| format.extension() == extension)
    }

    /// Detect the format of a file from its name
    pub fn detect(file_name: &str) -> Option<Self> {
        file_extension(file_name).and_then(|ext| Self::from_extension(&ext))
    }

    /// Value for the picker's `accept` filter, e.g. `.csv,.tsv,...`
    pub fn accept_filter() -> String {
        Self::all()
            .iter()
            .map(|format| format.extension())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Everything from the last `.` of `file_name`, lowercased.
///
/// Returns `None` when the name has no `.` at all.
pub fn file_extension(file_name: &str) -> Option<String> {
    file_name
        .rfind('.')
        .map(|dot| file_name[dot..].to_lowercase())
}
