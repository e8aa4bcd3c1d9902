//! Runtime contracts for the spigot state machine.
//!
//! Debug-mode assertions over state the engine must keep well formed. They
//! cost nothing in release builds.
//!
//! | Contract                 | Holds                                        |
//! |--------------------------|----------------------------------------------|
//! | `check_columns_bounded`  | after every column sweep, before extraction  |
//! | `check_column_count`     | when a computation allocates its columns     |

use crate::domain::DigitColumns;

/// Every entry at 1-indexed position `i` lies in `[0, 2i-1)`.
#[inline]
pub fn check_columns_bounded(columns: &DigitColumns) {
    debug_assert!(
        columns.is_bounded(),
        "column {:?} left unreduced after sweep",
        columns.first_unbounded()
    );
}

/// The machine-computed column count agrees with `10n/3 + 1`.
#[inline]
pub fn check_column_count(digit_count: usize, columns: &DigitColumns) {
    debug_assert_eq!(
        columns.len(),
        DigitColumns::column_count(digit_count),
        "column count disagrees with the digit count"
    );
}
