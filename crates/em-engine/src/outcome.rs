//! Aggregate game outcome, recomputed from trial state.
//!
//! The outcome is never stored; it is derived fresh from the world each
//! time it is asked for, so it can never drift out of sync with the
//! individual trials.

use em_core::World;

/// The aggregate standing of the player across all trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    /// How many trials exist in the world.
    pub chambers_total: usize,
    /// How many trials have completed with a passing verdict.
    pub chambers_passed: usize,
    /// How many trials have reached any verdict.
    pub chambers_completed: usize,
}

impl GameStatus {
    /// Derive the current status from the world's trials.
    pub fn compute(world: &World) -> Self {
        let mut total = 0;
        let mut passed = 0;
        let mut completed = 0;
        for trial in world.trials() {
            total += 1;
            if trial.is_completed() {
                completed += 1;
            }
            if trial.is_passed() {
                passed += 1;
            }
        }
        Self {
            chambers_total: total,
            chambers_passed: passed,
            chambers_completed: completed,
        }
    }

    /// Whether every trial completed with a passing verdict.
    pub fn did_win(&self) -> bool {
        self.chambers_total > 0 && self.chambers_passed == self.chambers_total
    }

    /// Whether any trial completed without passing. A single rejection
    /// makes winning impossible, so the loss is declared immediately.
    pub fn did_lose(&self) -> bool {
        self.chambers_completed > self.chambers_passed
    }

    /// Whether the session has reached a terminal outcome.
    pub fn is_over(&self) -> bool {
        self.did_win() || self.did_lose()
    }
}
