//! Count-up animation for the dashboard counters.
//!
//! The stepping is pure so its end state can be tested without timers; the
//! `AnimatedCounter` component drives it from a scheduled task.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::consts::COUNTER_STEPS;

/// Displayed value climbing from zero to a fixed target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    target: usize,
    current: usize,
    step: usize,
}

impl CounterAnimation {
    /// Start at zero with `step = ceil(target / COUNTER_STEPS)`.
    #[must_use]
    pub fn new(target: usize) -> Self {
        Self { target, current: 0, step: target.div_ceil(COUNTER_STEPS) }
    }

    #[must_use]
    pub fn value(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    /// A zero target is finished before the first tick.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current >= self.target
    }

    /// Advance one tick, clamped to the target, and return the new value.
    pub fn tick(&mut self) -> usize {
        if !self.is_finished() {
            self.current = (self.current + self.step).min(self.target);
        }
        self.current
    }
}
