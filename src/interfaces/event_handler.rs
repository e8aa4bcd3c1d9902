// ============================================================================
// Event Handler Interface
// Defines the contract for observing a spigot computation as it runs
// ============================================================================

use crate::numeric::Word;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the spigot engine
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpigotEvent {
    /// Column sweep and carry extraction finished for one output step
    SweepCompleted {
        run_id: Uuid,
        sweep: usize,
        /// Reduced carry after extraction (0..=10)
        carry: Word,
        timestamp: DateTime<Utc>,
    },

    /// A provisional nine was held back
    NineBuffered {
        run_id: Uuid,
        sweep: usize,
        pending_nines: Word,
        timestamp: DateTime<Utc>,
    },

    /// Digits released to the consumer
    DigitsEmitted {
        run_id: Uuid,
        sweep: usize,
        digits: String,
        timestamp: DateTime<Utc>,
    },

    /// All sweeps done and the final pending digit flushed
    Finished {
        run_id: Uuid,
        sweeps: usize,
        digits_emitted: usize,
        timestamp: DateTime<Utc>,
    },
}

impl SpigotEvent {
    /// Run the event belongs to
    pub fn run_id(&self) -> Uuid {
        match self {
            SpigotEvent::SweepCompleted { run_id, .. }
            | SpigotEvent::NineBuffered { run_id, .. }
            | SpigotEvent::DigitsEmitted { run_id, .. }
            | SpigotEvent::Finished { run_id, .. } => *run_id,
        }
    }
}

/// Event handler trait for processing spigot engine events
/// Implementations can handle logging, tracing of intermediate state, tests, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a spigot event
    fn on_event(&self, event: SpigotEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<SpigotEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: SpigotEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: SpigotEvent) {
        tracing::debug!("Spigot engine event: {:?}", event);
    }
}
