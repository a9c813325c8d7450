//! Derived description of the import page
//!
//! Everything here is computed from an [`ImportSession`] and a [`PageContext`].
//! Nothing is stored, so the stepper, drop zone and Next button cannot drift
//! from the state they describe.

use chrono::NaiveDate;
use serde::Serialize;

use crate::encoding::EncodingOption;
use crate::format::{ADVISORY_SIZE_NOTICE, StatementFormat};
use crate::session::ImportSession;
use crate::wizard::WizardStage;

#[cfg(test)]
mod tests;

pub const DEFAULT_PAGE_TIP: &str = "If you have files in other formats, you can convert it to an accepted file format using any online/offline converter.";

pub const SAMPLE_FILE_PROMPT: &str =
    "Ensure that the import file is in the correct format by comparing it with our sample file.";

/// Static page inputs that do not come from the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// Bank or account shown in the header, e.g. "HDFC"
    pub account_name: String,
    /// Date up to which statements were already imported
    pub statements_imported_through: Option<NaiveDate>,
    pub tips: Vec<String>,
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            account_name: "HDFC".to_string(),
            statements_imported_through: NaiveDate::from_ymd_opt(2024, 1, 28),
            tips: vec![DEFAULT_PAGE_TIP.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepperItem {
    pub ordinal: usize,
    pub label: &'static str,
    pub is_current: bool,
    pub is_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropZoneView {
    /// Selected file name, or the drag-and-drop prompt
    pub headline: String,
    pub picker_label: &'static str,
    pub drag_active: bool,
    pub has_selection: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportPageView {
    pub title: String,
    pub stepper: Vec<StepperItem>,
    pub drop_zone: DropZoneView,
    pub import_notice: Option<String>,
    pub size_notice: &'static str,
    pub accept_filter: String,
    pub sample_file_prompt: &'static str,
    pub encoding_options: Vec<EncodingOption>,
    pub next_enabled: bool,
    pub tips: Vec<String>,
}

impl ImportPageView {
    pub fn derive(session: &ImportSession, context: &PageContext) -> Self {
        let current = session.current_stage();
        let stepper = WizardStage::all()
            .iter()
            .map(|stage| StepperItem {
                ordinal: stage.ordinal(),
                label: stage.label(),
                is_current: *stage == current,
                is_complete: stage.index() < current.index(),
            })
            .collect();

        let selection = session.current_selection();
        let drop_zone = DropZoneView {
            headline: selection
                .map(|file| file.name().to_string())
                .unwrap_or_else(|| "Drag and drop file to import".to_string()),
            picker_label: if selection.is_some() {
                "Change File"
            } else {
                "Choose File"
            },
            drag_active: session.intake().is_dragging(),
            has_selection: selection.is_some(),
        };

        Self {
            title: format!("Import Statements for {}", context.account_name),
            stepper,
            drop_zone,
            import_notice: context.statements_imported_through.map(|date| {
                format!("Bank statement imported till {}", date.format("%d/%m/%Y"))
            }),
            size_notice: ADVISORY_SIZE_NOTICE,
            accept_filter: StatementFormat::accept_filter(),
            sample_file_prompt: SAMPLE_FILE_PROMPT,
            encoding_options: session.encoding().options(),
            next_enabled: session.can_advance(),
            tips: context.tips.clone(),
        }
    }

    pub fn current_step(&self) -> Option<&StepperItem> {
        self.stepper.iter().find(|item| item.is_current)
    }
}
