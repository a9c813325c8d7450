//! Import session
//!
//! Ties the intake, the wizard and the encoding choice to the collaborators of
//! one import page. Leaving stage 1 hands the selected file and encoding to
//! the mapping stage.

use std::sync::Arc;

use ledgerline_core::{ImportResult, NavigationTarget, Navigator, Notifier, SampleFileSource};
use serde::Serialize;
use uuid::Uuid;

use crate::encoding::{EncodingSelector, StatementEncoding};
use crate::intake::{CandidateFile, IntakeController, SelectedFile};
use crate::wizard::{OpenGate, StageGate, WizardNavigator, WizardStage};

/// What the mapping stage receives when the wizard leaves Configure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandoffPayload {
    pub file: SelectedFile,
    pub encoding: StatementEncoding,
}

/// The Map Fields stage.
///
/// Owns parsing, size-limit enforcement and field mapping of the handed-off file.
pub trait MappingStage: Send + Sync {
    fn begin_mapping(&self, payload: HandoffPayload);
}

/// Stand-in for collaborators the host did not attach
struct Unattached;

impl MappingStage for Unattached {
    fn begin_mapping(&self, payload: HandoffPayload) {
        tracing::debug!(file_name = %payload.file.name(), "No mapping stage attached");
    }
}

impl Navigator for Unattached {
    fn navigate(&self, target: NavigationTarget) {
        tracing::debug!(target = target.id(), "No navigator attached");
    }
}

impl SampleFileSource for Unattached {
    fn request_sample_file(&self) {
        tracing::debug!("No sample file source attached");
    }
}

pub struct ImportSessionBuilder {
    notifier: Arc<dyn Notifier>,
    mapping: Option<Arc<dyn MappingStage>>,
    navigator: Option<Arc<dyn Navigator>>,
    samples: Option<Arc<dyn SampleFileSource>>,
    gate: Option<Arc<dyn StageGate>>,
    encodings: Vec<StatementEncoding>,
}

impl ImportSessionBuilder {
    pub fn mapping_stage(mut self, mapping: Arc<dyn MappingStage>) -> Self {
        self.mapping = Some(mapping);
        self
    }

    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn sample_files(mut self, samples: Arc<dyn SampleFileSource>) -> Self {
        self.samples = Some(samples);
        self
    }

    pub fn stage_gate(mut self, gate: Arc<dyn StageGate>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Encodings offered in the dropdown; the first is the default
    pub fn encodings(mut self, encodings: Vec<StatementEncoding>) -> Self {
        self.encodings = encodings;
        self
    }

    pub fn build(self) -> ImportSession {
        let id = Uuid::new_v4();
        let gate = self.gate.unwrap_or_else(|| Arc::new(OpenGate));
        tracing::debug!(session = %id, "Import session started");

        ImportSession {
            id,
            intake: IntakeController::new(self.notifier.clone()),
            wizard: WizardNavigator::with_gate(gate, self.notifier.clone()),
            encoding: EncodingSelector::with_domain(self.encodings, self.notifier),
            mapping: self.mapping.unwrap_or_else(|| Arc::new(Unattached)),
            navigator: self.navigator.unwrap_or_else(|| Arc::new(Unattached)),
            samples: self.samples.unwrap_or_else(|| Arc::new(Unattached)),
        }
    }
}

/// One visit to the import page
pub struct ImportSession {
    id: Uuid,
    intake: IntakeController,
    wizard: WizardNavigator,
    encoding: EncodingSelector,
    mapping: Arc<dyn MappingStage>,
    navigator: Arc<dyn Navigator>,
    samples: Arc<dyn SampleFileSource>,
}

impl ImportSession {
    pub fn builder(notifier: Arc<dyn Notifier>) -> ImportSessionBuilder {
        ImportSessionBuilder {
            notifier,
            mapping: None,
            navigator: None,
            samples: None,
            gate: None,
            encodings: StatementEncoding::all().to_vec(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn intake(&self) -> &IntakeController {
        &self.intake
    }

    pub fn wizard(&self) -> &WizardNavigator {
        &self.wizard
    }

    pub fn encoding(&self) -> &EncodingSelector {
        &self.encoding
    }

    pub fn submit_candidate(&mut self, candidate: CandidateFile) -> ImportResult<&SelectedFile> {
        self.intake.submit_candidate(candidate)
    }

    pub fn open_picker(&mut self) {
        self.intake.open_picker();
    }

    pub fn cancel_picker(&mut self) {
        self.intake.cancel_picker();
    }

    pub fn picker_changed(
        &mut self,
        files: impl IntoIterator<Item = CandidateFile>,
    ) -> ImportResult<Option<&SelectedFile>> {
        self.intake.picker_changed(files)
    }

    pub fn begin_drag(&mut self) {
        self.intake.begin_drag();
    }

    pub fn end_drag(&mut self) {
        self.intake.end_drag();
    }

    pub fn drop_files(
        &mut self,
        files: impl IntoIterator<Item = CandidateFile>,
    ) -> ImportResult<Option<&SelectedFile>> {
        self.intake.drop_files(files)
    }

    pub fn current_selection(&self) -> Option<&SelectedFile> {
        self.intake.current_selection()
    }

    pub fn set_encoding(&mut self, value: &str) -> ImportResult<StatementEncoding> {
        self.encoding.set_encoding(value)
    }

    pub fn current_encoding(&self) -> StatementEncoding {
        self.encoding.current_encoding()
    }

    pub fn current_stage(&self) -> WizardStage {
        self.wizard.current_stage()
    }

    pub fn can_advance(&self) -> bool {
        self.wizard.can_advance(self.intake.current_selection())
    }

    /// Advance the wizard, handing the file off when leaving Configure
    pub fn advance(&mut self) -> ImportResult<WizardStage> {
        let _span = tracing::info_span!("advance", session = %self.id).entered();

        let from = self.wizard.current_stage();
        let to = self.wizard.advance(self.intake.current_selection())?;

        if from == WizardStage::Configure
            && let Some(file) = self.intake.current_selection()
        {
            let payload = HandoffPayload {
                file: file.clone(),
                encoding: self.encoding.current_encoding(),
            };
            tracing::info!(
                file_name = %payload.file.name(),
                encoding = %payload.encoding,
                "Handing statement to mapping stage"
            );
            self.mapping.begin_mapping(payload);
        }

        Ok(to)
    }

    /// Back arrow in the page header
    pub fn navigate_back(&self) {
        self.navigator.navigate(NavigationTarget::BankingOverview);
    }

    /// "Download sample file" link
    pub fn request_sample_file(&self) {
        self.samples.request_sample_file();
    }
}
