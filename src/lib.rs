// ============================================================================
// Pi Spigot Library
// Streaming digits of pi on a machine that only knows how to count
// ============================================================================

//! # Pi Spigot
//!
//! A Rabinowitz–Wagon spigot that streams the decimal digits of π, running
//! on an integer machine whose only primitives are increment, decrement,
//! negate, and a positivity test.
//!
//! ## Features
//!
//! - **Primitive-only arithmetic**: add, compare, multiply, divide and
//!   modulus are derived from four machine primitives
//! - **Pluggable backends**: the same spigot runs on the emulation or on
//!   native integer operators
//! - **Startup self-test** validating a backend against native semantics
//! - **Lazy digit stream**: a computation is an iterator over digits
//! - **Sweep events** for observing carries and buffered nines
//!
//! ## Example
//!
//! ```rust
//! use pi_spigot::prelude::*;
//! use std::sync::Arc;
//!
//! // Validate the machine before trusting it
//! let arithmetic = EmulatedArithmetic::new();
//! run_self_test(&arithmetic).unwrap();
//!
//! let computation = SpigotComputation::new(
//!     10,
//!     Box::new(arithmetic),
//!     Arc::new(NoOpEventHandler),
//! );
//!
//! let digits: String = computation.map(|d| d.as_char()).collect();
//! assert_eq!(digits, "3141592653");
//! assert_eq!(digits, reference_digits(10, CarryResetPolicy::ResetBoth));
//! ```

mod contracts;

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ArithmeticType, CarryResetPolicy, Digit, DigitBuffer, DigitColumns, PiExpansion,
        SpigotConfig,
    };
    pub use crate::engine::{
        create_from_config, reference_digits, CarryState, Classification, SpigotBuilder,
        SpigotComputation,
    };
    pub use crate::interfaces::{
        Arithmetic, EventHandler, LoggingEventHandler, NoOpEventHandler, SpigotEvent,
    };
    pub use crate::numeric::{
        run_self_test, EmulatedArithmetic, NativeArithmetic, NumericError, NumericResult, Word,
    };
}
