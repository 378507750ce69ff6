use std::sync::Mutex;

use tracing::{debug, info, warn};

use crate::core::{Rejection, Time, TokenId};

/// A lifecycle or validation event worth surfacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    Created { id: TokenId, time: Time },
    ResetOk { id: TokenId, time: Time },
    Retired { id: TokenId },
    Rejected(Rejection),
}

/// Reporting capability injected into both the store and the executor, so the
/// core carries no process-wide logging state.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, event: &DiagnosticEvent);
}

/// Default sink: forwards events to `tracing` records.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, event: &DiagnosticEvent) {
        match event {
            DiagnosticEvent::Created { id, time } => {
                info!(id = *id, time = *time, "token created");
            }
            DiagnosticEvent::ResetOk { id, time } => {
                info!(id = *id, time = *time, "token reset");
            }
            DiagnosticEvent::Retired { id } => {
                debug!(id = *id, "token retired");
            }
            DiagnosticEvent::Rejected(rejection) => {
                warn!(%rejection, "command rejected");
            }
        }
    }
}

/// Sink that records every event, for assertions in tests.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }

    pub fn rejections(&self) -> Vec<Rejection> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                DiagnosticEvent::Rejected(rejection) => Some(rejection),
                _ => None,
            })
            .collect()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, event: &DiagnosticEvent) {
        self.events
            .lock()
            .expect("sink mutex poisoned")
            .push(event.clone());
    }
}
