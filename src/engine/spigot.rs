// ============================================================================
// Spigot Computation
// Streams the decimal digits of pi from a mixed-radix column array
// ============================================================================

use crate::contracts;
use crate::domain::{CarryResetPolicy, Digit, DigitBuffer, DigitColumns, PiExpansion};
use crate::engine::carry::{CarryState, Classification};
use crate::interfaces::{Arithmetic, EventHandler, SpigotEvent};
use crate::numeric::{primitive, NumericError, NumericResult, Word};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::sync::Arc;
use uuid::Uuid;

/// One pi digit computation.
///
/// Owns its column array and carry state; nothing is shared between
/// computations. Each output step runs a column sweep, extracts the carry,
/// and classifies it. Every arithmetic operation, loop bound included, goes
/// through the configured [`Arithmetic`] backend.
///
/// The computation is an [`Iterator`] over [`Digit`]s: lazy, finite, and not
/// restartable. `digit_count` sweeps produce `digit_count` digits starting
/// with `3`, except that nines still buffered after the last sweep are never
/// released, so the final one or two digits are not guaranteed stable.
///
/// # Example
/// ```
/// use pi_spigot::prelude::*;
/// use std::sync::Arc;
///
/// let computation = SpigotComputation::new(
///     10,
///     Box::new(EmulatedArithmetic::new()),
///     Arc::new(NoOpEventHandler),
/// );
/// let digits: String = computation.map(|d| d.as_char()).collect();
/// assert_eq!(digits, "3141592653");
/// ```
pub struct SpigotComputation {
    /// Identifier attached to events and log records
    run_id: Uuid,

    /// Number of sweeps to run
    digit_count: Word,

    carry_reset: CarryResetPolicy,

    /// Pluggable arithmetic backend
    arithmetic: Box<dyn Arithmetic>,

    columns: DigitColumns,

    carry: CarryState,

    /// 1-based number of the next sweep
    next_sweep: Word,

    /// Set once the final predigit has been released
    flushed: bool,

    /// Digits produced by `step` but not yet handed out by the iterator
    pending: VecDeque<Digit>,

    digits_released: usize,

    fault: Option<NumericError>,

    event_handler: Arc<dyn EventHandler>,

    started_at: DateTime<Utc>,
}

impl SpigotComputation {
    /// Create a new computation.
    ///
    /// `digit_count` must be positive and small enough for `10 * digit_count`
    /// to fit a [`Word`]; [`crate::domain::SpigotConfig::validate`] checks
    /// both. Zero yields an empty sequence.
    pub fn new(
        digit_count: usize,
        arithmetic: Box<dyn Arithmetic>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        let n = digit_count as Word;

        // len = 10 * n / 3 + 1, on the machine
        let len = arithmetic.increment(arithmetic.divide(arithmetic.multiply(10, n), 3));
        let columns = DigitColumns::new(len as usize);
        contracts::check_column_count(digit_count, &columns);

        let run_id = Uuid::new_v4();
        tracing::debug!(
            %run_id,
            digit_count,
            columns = columns.len(),
            backend = arithmetic.name(),
            "created spigot computation"
        );

        Self {
            run_id,
            digit_count: n,
            carry_reset: CarryResetPolicy::default(),
            arithmetic,
            columns,
            carry: CarryState::new(),
            next_sweep: primitive::ONE,
            flushed: false,
            pending: VecDeque::new(),
            digits_released: 0,
            fault: None,
            event_handler,
            started_at: Utc::now(),
        }
    }

    /// Set the predigit handling after a carry of ten
    pub fn with_carry_reset(mut self, policy: CarryResetPolicy) -> Self {
        self.carry_reset = policy;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn digit_count(&self) -> usize {
        self.digit_count as usize
    }

    pub fn carry_reset(&self) -> CarryResetPolicy {
        self.carry_reset
    }

    pub fn arithmetic_name(&self) -> &str {
        self.arithmetic.name()
    }

    pub fn columns(&self) -> &DigitColumns {
        &self.columns
    }

    pub fn carry_state(&self) -> &CarryState {
        &self.carry
    }

    pub fn sweeps_completed(&self) -> usize {
        (self.next_sweep - 1) as usize
    }

    /// Digits released by completed steps so far
    pub fn digits_released(&self) -> usize {
        self.digits_released
    }

    /// Whether every sweep has run and the last digit has been released
    pub fn is_finished(&self) -> bool {
        self.flushed
    }

    /// The error that stopped the digit sequence early, if any
    pub fn fault(&self) -> Option<NumericError> {
        self.fault
    }

    // ========================================================================
    // Stepping
    // ========================================================================

    /// Run one output step and return the digits it releases.
    ///
    /// The first `digit_count` calls each run a full sweep (possibly
    /// releasing nothing while nines are buffered). The next call releases
    /// the final predigit. After that, returns `Ok(None)`.
    ///
    /// # Errors
    /// `DigitOutOfRange` if the backend produced a carry outside `0..=10`.
    pub fn step(&mut self) -> NumericResult<Option<DigitBuffer>> {
        if self.flushed {
            return Ok(None);
        }

        let a = &*self.arithmetic;
        let loop_bound = a.increment(self.digit_count);
        if !a.holds(a.less_than(self.next_sweep, loop_bound)) {
            return self.finish().map(Some);
        }

        let sweep = self.next_sweep as usize;
        let q = self.column_sweep();
        contracts::check_columns_bounded(&self.columns);
        let q = self.extract_carry(q);

        let mut released = DigitBuffer::new();
        let class = self.carry.classify(
            q,
            &*self.arithmetic,
            self.carry_reset,
            &mut released,
        )?;
        self.next_sweep = self.arithmetic.increment(self.next_sweep);
        self.digits_released += released.len();

        tracing::trace!(run_id = %self.run_id, sweep, carry = q, ?class, "sweep completed");
        self.publish(sweep, q, class, &released);

        Ok(Some(released))
    }

    /// Traverse the columns from the last to the first, threading the carry
    /// `q` through every position. Returns the carry out of the first column.
    fn column_sweep(&mut self) -> Word {
        let a = &*self.arithmetic;
        let mut q = primitive::ZERO;
        let mut i = self.columns.len() as Word;

        while a.is_positive(i) {
            let index = a.decrement(i);
            let entry = self.columns.get(index);

            let x = a.add(a.multiply(10, entry), a.multiply(q, i));
            let divisor = a.decrement(a.multiply(2, i));

            self.columns.set(index, a.modulus(x, divisor));
            q = a.divide(x, divisor);

            i = index;
        }

        q
    }

    /// Keep the units digit of the carry in the first column and return the
    /// reduced carry (0..=10 for a correct backend).
    fn extract_carry(&mut self, q: Word) -> Word {
        let a = &*self.arithmetic;
        self.columns.set(primitive::ZERO, a.modulus(q, 10));
        a.divide(q, 10)
    }

    fn finish(&mut self) -> NumericResult<DigitBuffer> {
        let mut released = DigitBuffer::new();
        self.carry.flush(&mut released)?;
        self.flushed = true;
        self.digits_released += released.len();

        let sweeps = self.sweeps_completed();
        let total = self.digits_released;
        let elapsed = Utc::now() - self.started_at;

        if self.carry.nines() > 0 {
            tracing::warn!(
                run_id = %self.run_id,
                nines = self.carry.nines(),
                "buffered nines left unresolved at the end of the run"
            );
        }
        tracing::info!(
            run_id = %self.run_id,
            sweeps,
            digits = total,
            elapsed_ms = elapsed.num_milliseconds(),
            backend = self.arithmetic.name(),
            "spigot computation finished"
        );

        let timestamp = Utc::now();
        let mut events = Vec::with_capacity(2);
        if !released.is_empty() {
            events.push(SpigotEvent::DigitsEmitted {
                run_id: self.run_id,
                sweep: sweeps,
                digits: render(&released),
                timestamp,
            });
        }
        events.push(SpigotEvent::Finished {
            run_id: self.run_id,
            sweeps,
            digits_emitted: total,
            timestamp,
        });
        self.event_handler.on_events(events);

        Ok(released)
    }

    fn publish(&self, sweep: usize, q: Word, class: Classification, released: &DigitBuffer) {
        let timestamp = Utc::now();
        let mut events = vec![SpigotEvent::SweepCompleted {
            run_id: self.run_id,
            sweep,
            carry: q,
            timestamp,
        }];

        if class == Classification::BufferNine {
            events.push(SpigotEvent::NineBuffered {
                run_id: self.run_id,
                sweep,
                pending_nines: self.carry.nines(),
                timestamp,
            });
        }
        if !released.is_empty() {
            events.push(SpigotEvent::DigitsEmitted {
                run_id: self.run_id,
                sweep,
                digits: render(released),
                timestamp,
            });
        }

        self.event_handler.on_events(events);
    }

    // ========================================================================
    // Collection
    // ========================================================================

    /// Drain the remaining digits into an expansion.
    ///
    /// # Errors
    /// The fault that stopped the sequence, if one occurred.
    pub fn collect_expansion(mut self) -> NumericResult<PiExpansion> {
        let expansion: PiExpansion = self.by_ref().collect();
        match self.fault {
            Some(err) => Err(err),
            None => Ok(expansion),
        }
    }
}

impl Iterator for SpigotComputation {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        loop {
            if let Some(digit) = self.pending.pop_front() {
                return Some(digit);
            }
            if self.fault.is_some() {
                return None;
            }

            match self.step() {
                Ok(Some(released)) => self.pending.extend(released),
                Ok(None) => return None,
                Err(err) => {
                    tracing::error!(run_id = %self.run_id, "digit sequence aborted: {}", err);
                    self.fault = Some(err);
                    return None;
                },
            }
        }
    }
}

impl FusedIterator for SpigotComputation {}

fn render(digits: &DigitBuffer) -> String {
    digits.iter().map(|d| d.as_char()).collect()
}
