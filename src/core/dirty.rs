//! Dirty categories gating the update pipeline.

/// A reason why cached geometry or position must be recomputed.
///
/// The closed set replaces the original design's open string map: every
/// recompute step declares which of these it reads, and external
/// mutations mark the categories they touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// The measured viewport width changed.
    Width,
    /// The item sequence changed (replace/add/remove).
    Items,
    /// The resolved settings changed (breakpoint, re-setup).
    Settings,
    /// The current position changed.
    Position,
}

/// The set of currently dirty categories.
///
/// Cleared after each pipeline pass. `mark_all` forces every step to
/// run regardless of its filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirtySet {
    width: bool,
    items: bool,
    settings: bool,
    position: bool,
    all: bool,
}

impl DirtySet {
    /// Mark a single category dirty.
    pub fn mark(&mut self, part: Part) {
        match part {
            Part::Width => self.width = true,
            Part::Items => self.items = true,
            Part::Settings => self.settings = true,
            Part::Position => self.position = true,
        }
    }

    /// Mark everything dirty; every step will run on the next pass.
    pub fn mark_all(&mut self) {
        self.all = true;
    }

    /// Whether the global all-dirty flag is set.
    pub fn all(&self) -> bool {
        self.all
    }

    /// Whether a specific category is dirty.
    pub fn contains(&self, part: Part) -> bool {
        match part {
            Part::Width => self.width,
            Part::Items => self.items,
            Part::Settings => self.settings,
            Part::Position => self.position,
        }
    }

    /// Whether any of the given categories is dirty (or all is set).
    pub fn intersects(&self, parts: &[Part]) -> bool {
        self.all || parts.iter().any(|part| self.contains(*part))
    }

    /// Whether nothing is dirty.
    pub fn is_clean(&self) -> bool {
        !(self.all || self.width || self.items || self.settings || self.position)
    }

    /// Clear all categories after a pipeline pass.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
