//! Import wizard stages and navigation
//!
//! Configure → Map Fields → Preview. Only the Configure gate is decided here;
//! later gates belong to the mapping and preview stages and are consulted
//! through [`StageGate`].

use std::sync::Arc;

use ledgerline_core::{ImportError, ImportResult, Notification, Notifier};
use serde::{Deserialize, Serialize};

use crate::intake::SelectedFile;


/// Current step in the import wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WizardStage {
    #[default]
    Configure,
    MapFields,
    Preview,
}

impl WizardStage {
    pub fn all() -> &'static [Self] {
        &[Self::Configure, Self::MapFields, Self::Preview]
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Configure => 0,
            Self::MapFields => 1,
            Self::Preview => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Configure),
            1 => Some(Self::MapFields),
            2 => Some(Self::Preview),
            _ => None,
        }
    }

    /// 1-based position shown in the stepper
    pub fn ordinal(&self) -> usize {
        self.index() + 1
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Configure => "Configure",
            Self::MapFields => "Map Fields",
            Self::Preview => "Preview",
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    /// Toast description shown when the wizard enters this stage
    fn entry_message(&self) -> &'static str {
        match self {
            Self::Configure => "Configuring import...",
            Self::MapFields => "Mapping fields...",
            Self::Preview => "Preparing preview...",
        }
    }
}

/// Completion check for stages owned outside the intake (Map Fields, Preview)
pub trait StageGate: Send + Sync {
    fn is_open(&self, stage: WizardStage) -> bool;
}

/// Gate that never blocks. Used until a mapping stage installs its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenGate;

impl StageGate for OpenGate {
    fn is_open(&self, _stage: WizardStage) -> bool {
        true
    }
}

pub struct WizardNavigator {
    current: WizardStage,
    gate: Arc<dyn StageGate>,
    notifier: Arc<dyn Notifier>,
}

impl WizardNavigator {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self::with_gate(Arc::new(OpenGate), notifier)
    }

    pub fn with_gate(gate: Arc<dyn StageGate>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            current: WizardStage::default(),
            gate,
            notifier,
        }
    }

    pub fn current_stage(&self) -> WizardStage {
        self.current
    }

    /// Whether the Next action is available for the current stage.
    ///
    /// Configure requires a selected file. Later stages ask the gate. The last
    /// stage never advances.
    pub fn can_advance(&self, selection: Option<&SelectedFile>) -> bool {
        if self.current.is_terminal() {
            return false;
        }
        match self.current {
            WizardStage::Configure => selection.is_some(),
            stage => self.gate.is_open(stage),
        }
    }

    /// Move to the next stage
    pub fn advance(&mut self, selection: Option<&SelectedFile>) -> ImportResult<WizardStage> {
        let Some(next) = self.current.next() else {
            return Err(self.fail(ImportError::NoFurtherStage {
                stage: self.current.label().to_string(),
            }));
        };

        if !self.can_advance(selection) {
            let reason = match self.current {
                WizardStage::Configure => {
                    "Select a supported bank statement file first.".to_string()
                }
                stage => format!("Complete the {} step first.", stage.label()),
            };
            return Err(self.fail(ImportError::StageLocked {
                stage: self.current.label().to_string(),
                reason,
            }));
        }

        tracing::info!(from = ?self.current, to = ?next, "Import wizard advanced");
        self.current = next;
        self.notifier.notify(Notification::success(
            "Moving to next step",
            next.entry_message(),
        ));

        Ok(next)
    }

    fn fail(&self, err: ImportError) -> ImportError {
        tracing::warn!(stage = ?self.current, error = %err, "Import wizard cannot advance");
        self.notifier.notify(err.notification());
        err
    }
}
