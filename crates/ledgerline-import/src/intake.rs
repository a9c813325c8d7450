//! Statement file intake
//!
//! Owns the canonical selected file, the drag-over state and the hidden file
//! picker input. Picker changes and drops are both normalized into a
//! [`CandidateFile`] and go through [`IntakeController::submit_candidate`],
//! the only validation path.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ledgerline_core::{ImportError, ImportResult, Notification, Notifier};
use serde::Serialize;

use crate::format::StatementFormat;


/// A file offered for import, regardless of whether it was picked or dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    pub size_bytes: u64,
    /// Where the bytes live, when the host knows
    pub location: Option<PathBuf>,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Build a candidate from a file on disk
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("{} does not name a file", path.display()),
                )
            })?;
        let size_bytes = std::fs::metadata(path)?.len();

        Ok(Self::new(name, size_bytes).with_location(path))
    }
}

/// The file currently chosen for import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedFile {
    name: String,
    size_bytes: u64,
    format: StatementFormat,
    location: Option<PathBuf>,
}

impl SelectedFile {
    fn new(candidate: CandidateFile, format: StatementFormat) -> Self {
        Self {
            name: candidate.name,
            size_bytes: candidate.size_bytes,
            format,
            location: candidate.location,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Normalized extension, including the leading dot
    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }

    pub fn format(&self) -> StatementFormat {
        self.format
    }

    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// Whether the file is larger than the advisory ceiling for its format
    pub fn exceeds_declared_limit(&self) -> bool {
        self.size_bytes > self.format.declared_size_limit()
    }
}

/// State of the hidden `<input type="file">` behind the picker button.
///
/// Acquired when the user clicks the button, released on change or cancel.
/// The input never keeps a value after release, so picking the same file
/// again after a rejection fires a new change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePickerInput {
    open: bool,
    changes: u64,
}

impl FilePickerInput {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Number of change events the input has delivered
    pub fn changes(&self) -> u64 {
        self.changes
    }

    fn acquire(&mut self) {
        self.open = true;
    }

    fn release(&mut self) {
        self.open = false;
    }
}

pub struct IntakeController {
    selection: Option<SelectedFile>,
    dragging: bool,
    picker: FilePickerInput,
    notifier: Arc<dyn Notifier>,
}

impl IntakeController {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            selection: None,
            dragging: false,
            picker: FilePickerInput::default(),
            notifier,
        }
    }

    /// Validate `candidate` and, if its format is allowed, make it the selection.
    ///
    /// A rejected candidate leaves any previous selection in place. An accepted
    /// one replaces it outright.
    pub fn submit_candidate(&mut self, candidate: CandidateFile) -> ImportResult<&SelectedFile> {
        let Some(format) = StatementFormat::detect(&candidate.name) else {
            tracing::warn!(
                file_name = %candidate.name,
                kept_selection = self.selection.is_some(),
                "Rejected statement file with unsupported extension"
            );
            let err = ImportError::UnsupportedFormat {
                file_name: candidate.name,
            };
            self.notifier.notify(err.notification());
            return Err(err);
        };

        let selected = SelectedFile::new(candidate, format);
        if selected.exceeds_declared_limit() {
            // Advisory ceiling only; the parse step enforces it.
            tracing::warn!(
                file_name = %selected.name,
                size_bytes = selected.size_bytes,
                limit_bytes = format.declared_size_limit(),
                "Selected statement exceeds the declared size limit"
            );
        }

        tracing::debug!(
            file_name = %selected.name,
            format = ?format,
            replaced = self.selection.is_some(),
            "Statement file selected"
        );
        self.notifier.notify(Notification::success(
            "File selected",
            format!("{} is ready for import.", selected.name),
        ));

        Ok(&*self.selection.insert(selected))
    }

    pub fn current_selection(&self) -> Option<&SelectedFile> {
        self.selection.as_ref()
    }

    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    pub fn begin_drag(&mut self) {
        if !self.dragging {
            tracing::trace!("Drag entered drop zone");
        }
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Handle a drop on the drop zone.
    ///
    /// The drag highlight is cleared first, whatever the outcome. Only the
    /// first dropped file is considered; a drop without files changes nothing
    /// else and emits no notification.
    pub fn drop_files(
        &mut self,
        files: impl IntoIterator<Item = CandidateFile>,
    ) -> ImportResult<Option<&SelectedFile>> {
        self.end_drag();
        let Some(candidate) = files.into_iter().next() else {
            tracing::debug!("Drop carried no files");
            return Ok(None);
        };
        self.submit_candidate(candidate).map(Some)
    }

    pub fn picker(&self) -> &FilePickerInput {
        &self.picker
    }

    /// The picker button was clicked and the native dialog is showing
    pub fn open_picker(&mut self) {
        self.picker.acquire();
    }

    /// The native dialog was dismissed without choosing a file
    pub fn cancel_picker(&mut self) {
        self.picker.release();
    }

    /// Handle a change event from the picker input.
    ///
    /// The input is released before validation so no stale value survives a
    /// rejection. An empty change is a no-op.
    pub fn picker_changed(
        &mut self,
        files: impl IntoIterator<Item = CandidateFile>,
    ) -> ImportResult<Option<&SelectedFile>> {
        let candidate = files.into_iter().next();
        self.picker.changes += 1;
        self.picker.release();

        match candidate {
            Some(candidate) => self.submit_candidate(candidate).map(Some),
            None => Ok(None),
        }
    }
}
