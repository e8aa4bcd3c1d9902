// ============================================================================
// Numeric Module
// Primitive-only integer arithmetic for the emulated spigot machine
// ============================================================================
//
// This module provides:
// - primitive: increment/decrement/negate/is_positive and everything derived
//   from them (add, compare, multiply, divide, modulus)
// - EmulatedArithmetic / NativeArithmetic: `Arithmetic` backends
// - self_test: startup validation of a backend against native semantics
// - NumericError: Error types for the layer
//
// Design principles:
// - Derived operations never use native operators
// - Native integer semantics (truncating division) are the contract
// - Overflow wraps silently, matching the unchecked machine

mod arithmetic;
mod errors;
pub mod primitive;

pub use arithmetic::{EmulatedArithmetic, NativeArithmetic};
pub use errors::{NumericError, NumericResult};
pub use primitive::Word;
pub use self_test::{run_self_test, Operation, SelfTestReport};
