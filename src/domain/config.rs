// ============================================================================
// Spigot Configuration
// Digit count, arithmetic backend and carry handling for one computation
// ============================================================================

use crate::numeric::Word;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Arithmetic Type
// ============================================================================

/// Defines which arithmetic backend the engine runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArithmeticType {
    /// Increment/decrement-only emulation of the minimal machine
    /// - Cost of every operation grows with its operands
    /// - Use case: faithful reproduction of the esoteric program
    #[default]
    Emulated,

    /// Native integer operators
    /// - Constant cost per operation
    /// - Use case: cross-checking, large digit counts
    Native,
}

// ============================================================================
// Carry Reset Policy
// ============================================================================

/// What happens to the pending predigit after a carry of ten settles a run
/// of buffered nines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CarryResetPolicy {
    /// Reset both the predigit and the nines count to zero
    #[default]
    ResetBoth,

    /// Reset only the nines count and keep the stale predigit.
    /// Reproduces the historical C reference program digit for digit.
    KeepPredigit,
}

// ============================================================================
// Complete Spigot Configuration
// ============================================================================

/// Configuration for one pi digit computation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpigotConfig {
    /// Number of output steps (one sweep per digit); fixed for the run
    pub digit_count: usize,

    /// Arithmetic backend
    #[cfg_attr(feature = "serde", serde(default))]
    pub arithmetic: ArithmeticType,

    /// Predigit handling after a carry of ten
    #[cfg_attr(feature = "serde", serde(default))]
    pub carry_reset: CarryResetPolicy,
}

impl SpigotConfig {
    /// Create a new configuration with required parameters
    pub fn new(digit_count: usize, arithmetic: ArithmeticType) -> Self {
        Self {
            digit_count,
            arithmetic,
            carry_reset: CarryResetPolicy::default(),
        }
    }

    /// Builder method: Set the carry reset policy
    pub fn with_carry_reset(mut self, policy: CarryResetPolicy) -> Self {
        self.carry_reset = policy;
        self
    }

    /// Builder method: Set the arithmetic backend
    pub fn with_arithmetic(mut self, arithmetic: ArithmeticType) -> Self {
        self.arithmetic = arithmetic;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.digit_count == 0 {
            return Err("Digit count must be positive".to_string());
        }

        // The engine derives the column count as 10 * n / 3 + 1 in machine words
        let fits = Word::try_from(self.digit_count)
            .ok()
            .and_then(|n| n.checked_mul(10))
            .is_some();
        if !fits {
            return Err(format!(
                "Digit count {} is too large for the machine word",
                self.digit_count
            ));
        }

        Ok(())
    }

    /// Parse a configuration from JSON
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl SpigotConfig {
    /// Emulated arithmetic, corrected carry reset
    pub fn emulated(digit_count: usize) -> Self {
        Self::new(digit_count, ArithmeticType::Emulated)
    }

    /// Native arithmetic, corrected carry reset
    pub fn native(digit_count: usize) -> Self {
        Self::new(digit_count, ArithmeticType::Native)
    }

    /// Native arithmetic with the historical predigit omission
    pub fn legacy_reference(digit_count: usize) -> Self {
        Self::native(digit_count).with_carry_reset(CarryResetPolicy::KeepPredigit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = SpigotConfig::new(10, ArithmeticType::Emulated);

        assert_eq!(config.digit_count, 10);
        assert_eq!(config.carry_reset, CarryResetPolicy::ResetBoth);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SpigotConfig::emulated(50)
            .with_arithmetic(ArithmeticType::Native)
            .with_carry_reset(CarryResetPolicy::KeepPredigit);

        assert_eq!(config.arithmetic, ArithmeticType::Native);
        assert_eq!(config.carry_reset, CarryResetPolicy::KeepPredigit);
    }

    #[test]
    fn test_validation() {
        assert!(SpigotConfig::emulated(0).validate().is_err());
        assert!(SpigotConfig::native(usize::MAX).validate().is_err());
        assert!(SpigotConfig::native(1).validate().is_ok());
    }

    #[test]
    fn test_preset_configs() {
        let legacy = SpigotConfig::legacy_reference(100);
        assert!(matches!(legacy.arithmetic, ArithmeticType::Native));
        assert!(matches!(legacy.carry_reset, CarryResetPolicy::KeepPredigit));

        let emulated = SpigotConfig::emulated(100);
        assert!(matches!(emulated.arithmetic, ArithmeticType::Emulated));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let config = SpigotConfig::from_json(r#"{"digit_count": 25, "arithmetic": "Native"}"#)
            .unwrap();
        assert_eq!(config, SpigotConfig::native(25));

        assert!(SpigotConfig::from_json(r#"{"digit_count": 0}"#).is_err());
    }
}
