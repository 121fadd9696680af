//! Period detection for deterministic state machines.
//!
//! Step indices count applied transitions: the initial state is index 0 and
//! the state after the first step is index 1.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::tilt::spin_cycle;

/// Spin cycles simulated before giving up on finding a repeat.
pub const CYCLE_CEILING: usize = 10_000;

/// States repeat every `period` steps from index `start` on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    pub start: usize,
    pub period: usize,
}

impl Cycle {
    /// Index at which the first repeat was observed.
    pub fn end(&self) -> usize {
        self.start + self.period
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Smallest index whose state equals the state at `step`.
    pub fn equivalent(&self, step: usize) -> usize {
        if step < self.start {
            return step;
        }
        self.start + (step - self.start) % self.period
    }

    /// Steps left to replay from the point of detection to land on `target`.
    ///
    /// Detection stops at [`Cycle::end`], whose state equals the one at
    /// `start`, so `target` must not be smaller than `start`.
    pub fn remaining(&self, target: usize) -> usize {
        (target - self.start) % self.period
    }
}

impl From<Cycle> for Range<usize> {
    fn from(cycle: Cycle) -> Self {
        cycle.range()
    }
}

enum Stop {
    Repeated(Cycle),
    Limit,
}

/// Steps `state` until a state repeats or `limit` steps were applied.
fn run_until<S, K, F, G>(state: &mut S, step: &mut F, key: &G, limit: usize) -> Result<Stop>
where
    K: Hash + Eq,
    F: FnMut(&mut S) -> Result<()>,
    G: Fn(&S) -> K,
{
    let mut seen = HashMap::new();
    seen.insert(key(state), 0);

    for index in 1..=limit {
        step(state)?;
        let state_key = key(state);
        if let Some(&start) = seen.get(&state_key) {
            return Ok(Stop::Repeated(Cycle {
                start,
                period: index - start,
            }));
        }
        seen.insert(state_key, index);
    }

    Ok(Stop::Limit)
}

/// Steps `state` until a previously seen state comes back.
///
/// On return `state` sits at index [`Cycle::end`].
#[tracing::instrument(skip_all, fields(ceiling = ceiling))]
pub fn detect_cycle<S, K, F, G>(state: &mut S, mut step: F, key: G, ceiling: usize) -> Result<Cycle>
where
    K: Hash + Eq,
    F: FnMut(&mut S) -> Result<()>,
    G: Fn(&S) -> K,
{
    match run_until(state, &mut step, &key, ceiling)? {
        Stop::Repeated(cycle) => {
            tracing::debug!(start = cycle.start, period = cycle.period, "state repeated");
            Ok(cycle)
        }
        Stop::Limit => Err(Error::NoCycleFound { ceiling }),
    }
}

/// Brings `state` to index `target` without simulating every step.
///
/// Returns the detected cycle, or `None` when `target` was reached before
/// any state repeated.
#[tracing::instrument(skip_all, fields(target = target, ceiling = ceiling))]
pub fn fast_forward<S, K, F, G>(
    state: &mut S,
    mut step: F,
    key: G,
    target: usize,
    ceiling: usize,
) -> Result<Option<Cycle>>
where
    K: Hash + Eq,
    F: FnMut(&mut S) -> Result<()>,
    G: Fn(&S) -> K,
{
    match run_until(state, &mut step, &key, target.min(ceiling))? {
        Stop::Repeated(cycle) => {
            let remaining = cycle.remaining(target);
            tracing::debug!(
                start = cycle.start,
                period = cycle.period,
                remaining,
                "replaying to target"
            );
            for _ in 0..remaining {
                step(state)?;
            }
            Ok(Some(cycle))
        }
        Stop::Limit if target <= ceiling => Ok(None),
        Stop::Limit => Err(Error::NoCycleFound { ceiling }),
    }
}

/// Spin cycles the grid until a layout repeats.
pub fn detect_spin_cycle(grid: &mut Grid) -> Result<Cycle> {
    detect_cycle(grid, spin_cycle, Grid::to_string, CYCLE_CEILING)
}

/// Leaves the grid as it would be after `target` spin cycles.
pub fn fast_forward_spins(grid: &mut Grid, target: usize) -> Result<Option<Cycle>> {
    fast_forward(grid, spin_cycle, Grid::to_string, target, CYCLE_CEILING)
}
