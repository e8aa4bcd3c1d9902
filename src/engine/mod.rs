// ============================================================================
// Engine Module
// Contains the digit spigot state machine and its reference counterpart
// ============================================================================

mod carry;
mod spigot;

pub mod factory;
pub mod reference;

pub use carry::{CarryState, Classification};
pub use factory::{create_from_config, SpigotBuilder};
pub use reference::reference_digits;
pub use spigot::SpigotComputation;
