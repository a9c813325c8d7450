//! Common test utilities and recording collaborators

#![allow(dead_code)]

use std::sync::Arc;

use ledgerline_core::{NavigationTarget, Navigator, NotificationQueue, SampleFileSource};
use ledgerline_import::{HandoffPayload, ImportSession, MappingStage, StageGate, WizardStage};
use parking_lot::Mutex;

/// Mapping stage that records every hand-off it receives
#[derive(Default)]
pub struct RecordingMapper {
    pub payloads: Mutex<Vec<HandoffPayload>>,
}

impl RecordingMapper {
    pub fn payloads(&self) -> Vec<HandoffPayload> {
        self.payloads.lock().clone()
    }
}

impl MappingStage for RecordingMapper {
    fn begin_mapping(&self, payload: HandoffPayload) {
        self.payloads.lock().push(payload);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub targets: Mutex<Vec<NavigationTarget>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: NavigationTarget) {
        self.targets.lock().push(target);
    }
}

#[derive(Default)]
pub struct CountingSampleSource {
    pub requests: Mutex<usize>,
}

impl SampleFileSource for CountingSampleSource {
    fn request_sample_file(&self) {
        *self.requests.lock() += 1;
    }
}

/// Gate whose answer the test flips at will
#[derive(Default)]
pub struct ToggleGate {
    pub open: Mutex<bool>,
}

impl StageGate for ToggleGate {
    fn is_open(&self, _stage: WizardStage) -> bool {
        *self.open.lock()
    }
}

/// A session wired to recording collaborators
pub struct Harness {
    pub session: ImportSession,
    pub toasts: Arc<NotificationQueue>,
    pub mapper: Arc<RecordingMapper>,
    pub navigator: Arc<RecordingNavigator>,
    pub samples: Arc<CountingSampleSource>,
    pub gate: Arc<ToggleGate>,
}

pub fn harness() -> Harness {
    let toasts = Arc::new(NotificationQueue::new());
    let mapper = Arc::new(RecordingMapper::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let samples = Arc::new(CountingSampleSource::default());
    let gate = Arc::new(ToggleGate::default());

    let session = ImportSession::builder(toasts.clone())
        .mapping_stage(mapper.clone())
        .navigator(navigator.clone())
        .sample_files(samples.clone())
        .stage_gate(gate.clone())
        .build();

    Harness {
        session,
        toasts,
        mapper,
        navigator,
        samples,
        gate,
    }
}
