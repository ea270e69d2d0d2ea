use dw_core::{DomainEvent, EventSink};

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

/// Per-operation re-entrancy flags.
///
/// A second call of an operation that is still running is dropped, not queued.
#[derive(Clone)]
pub struct InFlight {
    active: Arc<Mutex<HashSet<&'static str>>>,
    sink: Arc<dyn EventSink>,
}

impl InFlight {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            active: Arc::new(Mutex::new(HashSet::new())),
            sink,
        }
    }

    /// Claim `operation`. `None` (and a `LoadSkipped` event) when it is already running.
    pub fn try_begin(&self, operation: &'static str) -> Option<InFlightToken> {
        if !lock(&self.active).insert(operation) {
            self.sink.emit(DomainEvent::LoadSkipped { operation });
            return None;
        }
        Some(InFlightToken {
            active: Arc::clone(&self.active),
            operation,
        })
    }

    pub fn is_active(&self, operation: &'static str) -> bool {
        lock(&self.active).contains(operation)
    }
}

/// Releases its operation when dropped, including on abort.
pub struct InFlightToken {
    active: Arc<Mutex<HashSet<&'static str>>>,
    operation: &'static str,
}

impl Drop for InFlightToken {
    fn drop(&mut self) {
        lock(&self.active).remove(self.operation);
    }
}

fn lock<'a>(active: &'a Mutex<HashSet<&'static str>>) -> MutexGuard<'a, HashSet<&'static str>> {
    match active.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
