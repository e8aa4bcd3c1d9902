// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod arithmetic;
mod event_handler;

pub use arithmetic::Arithmetic;
pub use event_handler::{EventHandler, LoggingEventHandler, NoOpEventHandler, SpigotEvent};
