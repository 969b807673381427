//! Counted state flags for the controller.
//!
//! The original design tracked overlapping busy/interacting conditions
//! with ad-hoc counters keyed by name; here the set is closed. Flags
//! are counted rather than boolean because nested enter/leave pairs
//! occur (a refresh inside a resize, for example), and the aggregate
//! `busy` and `interacting` conditions are derived instead of stored.

use tracing::warn;

/// A named controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFlag {
    /// Constructing, before the first content arrives.
    Initializing,
    /// A timed translation is in flight.
    Animating,
    /// A pointer gesture has claimed the strip.
    Dragging,
    /// Inside the resize protocol.
    Resizing,
    /// Inside a settings re-evaluation and full update.
    Refreshing,
    /// Geometry and position are consistent with all inputs.
    Valid,
}

const FLAG_COUNT: usize = 6;

fn slot(flag: StateFlag) -> usize {
    match flag {
        StateFlag::Initializing => 0,
        StateFlag::Animating => 1,
        StateFlag::Dragging => 2,
        StateFlag::Resizing => 3,
        StateFlag::Refreshing => 4,
        StateFlag::Valid => 5,
    }
}

/// Counted state flags with paired enter/leave.
#[derive(Debug, Clone, Default)]
pub struct States {
    counts: [u32; FLAG_COUNT],
}

impl States {
    /// Enter a state, incrementing its counter.
    pub fn enter(&mut self, flag: StateFlag) {
        self.counts[slot(flag)] += 1;
    }

    /// Leave a state, decrementing its counter.
    ///
    /// An unpaired leave saturates at zero; the counter never goes
    /// negative.
    pub fn leave(&mut self, flag: StateFlag) {
        let count = &mut self.counts[slot(flag)];
        if *count == 0 {
            warn!(?flag, "leave without matching enter");
            return;
        }
        *count -= 1;
    }

    /// Whether the controller is currently in the given state.
    pub fn is(&self, flag: StateFlag) -> bool {
        self.counts[slot(flag)] > 0
    }

    /// Busy: initializing or animating.
    pub fn busy(&self) -> bool {
        self.is(StateFlag::Initializing) || self.is(StateFlag::Animating)
    }

    /// Interacting: a pointer gesture owns the strip.
    pub fn interacting(&self) -> bool {
        self.is(StateFlag::Dragging)
    }
}
