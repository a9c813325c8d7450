//! Ledgerline Statement Import
//!
//! The first stage of the bank statement import wizard: picking or dropping a
//! statement file, validating its format, choosing a character encoding and
//! handing both to the field-mapping stage.
//!
//! # Architecture
//!
//! ```text
//! picker change ─┐
//!                ├→ IntakeController ─┐
//! drop ──────────┘                    ├→ WizardNavigator ─→ MappingStage (hand-off)
//! encoding select → EncodingSelector ─┘
//!                         ↓
//!                  ImportPageView (derived)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let toasts = Arc::new(NotificationQueue::new());
//! let mut session = ImportSession::builder(toasts.clone())
//!     .mapping_stage(mapper)
//!     .build();
//!
//! session.drop_files([CandidateFile::new("statement.csv", 2_048)])?;
//! session.set_encoding("utf16")?;
//! session.advance()?;
//! ```

mod encoding;
mod format;
mod intake;
mod session;
mod view;
mod wizard;

pub use encoding::{EncodingOption, EncodingSelector, StatementEncoding};
pub use format::{ADVISORY_SIZE_NOTICE, StatementFormat, file_extension};
pub use intake::{CandidateFile, FilePickerInput, IntakeController, SelectedFile};
pub use session::{HandoffPayload, ImportSession, ImportSessionBuilder, MappingStage};
pub use view::{
    DEFAULT_PAGE_TIP, DropZoneView, ImportPageView, PageContext, SAMPLE_FILE_PROMPT, StepperItem,
};
pub use wizard::{OpenGate, StageGate, WizardNavigator, WizardStage};
