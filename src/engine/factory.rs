// ============================================================================
// Spigot Factory
// Creates spigot computations with proper configuration
// ============================================================================

use crate::domain::config::{ArithmeticType, CarryResetPolicy, SpigotConfig};
use crate::engine::SpigotComputation;
use crate::interfaces::{Arithmetic, EventHandler};
use crate::numeric::{EmulatedArithmetic, NativeArithmetic};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a spigot computation from configuration
///
/// # Arguments
/// * `config` - Spigot configuration
/// * `event_handler` - Event handler for sweep and digit events
///
/// # Returns
/// * `Result<SpigotComputation, String>` - Configured computation or error
///
/// # Example
/// ```
/// use pi_spigot::prelude::*;
/// use std::sync::Arc;
///
/// let config = SpigotConfig::native(20);
/// let computation = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(computation.digit_count(), 20);
/// ```
pub fn create_from_config(
    config: SpigotConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<SpigotComputation, String> {
    // Validate configuration first
    config.validate()?;

    let arithmetic = create_arithmetic(config.arithmetic);

    Ok(
        SpigotComputation::new(config.digit_count, arithmetic, event_handler)
            .with_carry_reset(config.carry_reset),
    )
}

/// Creates the arithmetic backend from configuration
pub fn create_arithmetic(arithmetic_type: ArithmeticType) -> Box<dyn Arithmetic> {
    match arithmetic_type {
        ArithmeticType::Emulated => Box::new(EmulatedArithmetic::new()),
        ArithmeticType::Native => Box::new(NativeArithmetic::new()),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating spigot computations with fluent API
///
/// # Example
/// ```
/// use pi_spigot::prelude::*;
/// use std::sync::Arc;
///
/// let digits: String = SpigotBuilder::new(5)
///     .emulated_arithmetic()
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap()
///     .map(|d| d.as_char())
///     .collect();
/// assert_eq!(digits, "31415");
/// ```
pub struct SpigotBuilder {
    config: SpigotConfig,
}

impl SpigotBuilder {
    /// Create a new builder for the given number of digits
    pub fn new(digit_count: usize) -> Self {
        Self {
            config: SpigotConfig::emulated(digit_count),
        }
    }

    // ========================================================================
    // Arithmetic Configuration
    // ========================================================================

    /// Run on the primitive-only emulation (default)
    pub fn emulated_arithmetic(mut self) -> Self {
        self.config.arithmetic = ArithmeticType::Emulated;
        self
    }

    /// Run on native integer operators
    pub fn native_arithmetic(mut self) -> Self {
        self.config.arithmetic = ArithmeticType::Native;
        self
    }

    // ========================================================================
    // Carry Configuration
    // ========================================================================

    /// Reset the predigit after a carry of ten (default)
    pub fn reset_predigit_on_carry(mut self) -> Self {
        self.config.carry_reset = CarryResetPolicy::ResetBoth;
        self
    }

    /// Keep the stale predigit after a carry of ten
    pub fn keep_predigit_on_carry(mut self) -> Self {
        self.config.carry_reset = CarryResetPolicy::KeepPredigit;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply the historical reference configuration
    pub fn legacy_reference(digit_count: usize) -> Self {
        Self {
            config: SpigotConfig::legacy_reference(digit_count),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the spigot computation
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<SpigotComputation, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &SpigotConfig {
        &self.config
    }
}
