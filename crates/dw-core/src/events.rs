//! Structured domain events.
//!
//! Services receive an [`EventSink`] at construction time. The sink decides whether
//! events go to the log, to the in-app diagnostic viewer, or to an analytics pipeline.

use crate::{ActionId, Currency};

use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

const DEFAULT_MEMORY_CAPACITY: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left, carousel advanced to the next balance
    Next,
    /// Finger moved right, carousel went back to the previous balance
    Previous,
}

impl SwipeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    /// Analytics: committed carousel swipe
    BalanceSwiped {
        from: Currency,
        to: Currency,
        direction: SwipeDirection,
    },
    /// Diagnostic: expansion panel changed level
    ExpansionChanged {
        from: &'static str,
        to: &'static str,
        action: Option<ActionId>,
    },
    /// Diagnostic: a remote call failed and a fallback was used
    Degraded {
        operation: &'static str,
        reason: String,
    },
    /// Diagnostic: a screen-level load was dropped because one was already running
    LoadSkipped { operation: &'static str },
}

impl DomainEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BalanceSwiped { .. } => "balance_swiped",
            Self::ExpansionChanged { .. } => "expansion_changed",
            Self::Degraded { .. } => "degraded",
            Self::LoadSkipped { .. } => "load_skipped",
        }
    }

    pub fn is_analytics(&self) -> bool {
        matches!(self, Self::BalanceSwiped { .. })
    }
}

impl fmt::Display for DomainEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BalanceSwiped {
                from,
                to,
                direction,
            } => write!(
                f,
                "balance_swiped from={from} to={to} direction={}",
                direction.as_str()
            ),
            Self::ExpansionChanged { from, to, action } => write!(
                f,
                "expansion_changed from={from} to={to} action={}",
                action.map(|a| a.as_str()).unwrap_or("none")
            ),
            Self::Degraded { operation, reason } => {
                write!(f, "degraded operation={operation} reason={reason}")
            }
            Self::LoadSkipped { operation } => {
                write!(f, "load_skipped operation={operation} (already in flight)")
            }
        }
    }
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);
}

/// Forwards every event to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn emit(&self, event: DomainEvent) {
        match event {
            DomainEvent::Degraded { .. } => log::warn!("{event}"),
            DomainEvent::LoadSkipped { .. } => log::debug!("{event}"),
            _ => log::info!("{event}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedEvent {
    pub at: DateTime<Utc>,
    pub event: DomainEvent,
}

/// Bounded in-memory buffer backing the in-app diagnostic log viewer.
#[derive(Debug)]
pub struct MemoryEventSink {
    capacity: usize,
    events: Mutex<VecDeque<RecordedEvent>>,
}

impl MemoryEventSink {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            events: Mutex::new(VecDeque::new()),
        }
    }

    pub fn snapshot(&self) -> Vec<RecordedEvent> {
        match self.events.lock() {
            Ok(events) => events.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.snapshot().into_iter().map(|r| r.event).collect()
    }

    pub fn clear(&self) {
        match self.events.lock() {
            Ok(mut events) => events.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl Default for MemoryEventSink {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_CAPACITY)
    }
}

impl EventSink for MemoryEventSink {
    fn emit(&self, event: DomainEvent) {
        let recorded = RecordedEvent {
            at: Utc::now(),
            event,
        };
        let mut events = match self.events.lock() {
            Ok(events) => events,
            Err(poisoned) => poisoned.into_inner(),
        };
        if events.len() == self.capacity {
            events.pop_front();
        }
        events.push_back(recorded);
    }
}

/// Fans one event out to several sinks.
pub struct FanOutEventSink {
    sinks: Vec<std::sync::Arc<dyn EventSink>>,
}

impl FanOutEventSink {
    pub fn new(sinks: Vec<std::sync::Arc<dyn EventSink>>) -> Self {
        Self { sinks }
    }
}

impl EventSink for FanOutEventSink {
    fn emit(&self, event: DomainEvent) {
        for sink in &self.sinks {
            sink.emit(event.clone());
        }
    }
}
