// ============================================================================
// Domain Models Module
// Contains the value objects and configuration of a pi computation
// ============================================================================

pub mod columns;
pub mod config;
pub mod digit;
pub mod expansion;

pub use columns::DigitColumns;
pub use config::{ArithmeticType, CarryResetPolicy, SpigotConfig};
pub use digit::{Digit, DigitBuffer};
pub use expansion::PiExpansion;
