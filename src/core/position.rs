//! Position normalization, boundaries, coordinates and navigation.

use tracing::trace;

use super::{Carousel, Event, Part};
use crate::config::HalfTurnBias;

impl Carousel {
    /// Normalize an absolute position.
    ///
    /// With looping enabled, out-of-range positions wrap into the
    /// canonical window `[clones/2, clones/2 + n)`; in-range positions
    /// (clone slots included) pass through unchanged. Without looping
    /// the position clamps to the reachable `[minimum, maximum]`
    /// range. Returns `None` when there is no content.
    pub fn normalize(&self, position: isize) -> Option<usize> {
        let n = self.items.len() as isize;
        if n < 1 {
            return None;
        }

        if self.settings.looping {
            let m = self.clones.len() as isize;
            if (0..n + m).contains(&position) {
                return Some(position as usize);
            }
            let half = m / 2;
            Some(((position - half).rem_euclid(n) + half) as usize)
        } else {
            let minimum = self.minimum() as isize;
            let maximum = self.maximum() as isize;
            Some(position.clamp(minimum, maximum) as usize)
        }
    }

    /// Normalize a relative position into `[0, n)`.
    pub fn normalize_relative(&self, position: isize) -> Option<usize> {
        let n = self.items.len() as isize;
        if n < 1 {
            return None;
        }
        Some(position.rem_euclid(n) as usize)
    }

    /// Map an absolute slot to its original item index.
    pub fn relative(&self, position: usize) -> Option<usize> {
        let half = (self.clones.len() / 2) as isize;
        self.normalize_relative(position as isize - half)
    }

    /// Smallest reachable absolute position.
    pub fn minimum(&self) -> usize {
        self.clones.len() / 2
    }

    /// Largest reachable absolute position.
    ///
    /// With looping this is the last item slot inside the canonical
    /// window. In auto-width or merge mode it is the first position
    /// from which the remaining items still overflow the viewport,
    /// found by accumulating widths from the end. Centering makes
    /// every item reachable; plain grids stop `items` short of the
    /// end.
    pub fn maximum(&self) -> usize {
        let settings = &self.settings;
        let n = self.items.len() as isize;

        let raw = if settings.looping {
            (self.clones.len() / 2) as isize + n - 1
        } else if settings.auto_width || settings.merge {
            self.overflow_maximum()
                .unwrap_or(n - settings.items as isize)
        } else if settings.center {
            n - 1
        } else {
            n - settings.items as isize
        };

        raw.max(0) as usize
    }

    /// Largest reachable relative position.
    pub fn maximum_relative(&self) -> usize {
        (self.maximum() as isize - (self.clones.len() / 2) as isize).max(0) as usize
    }

    /// Maximum for measured widths: walk back from the last item until
    /// the accumulated span overflows the viewport. `None` when the
    /// width cache is stale with respect to the items.
    fn overflow_maximum(&self) -> Option<isize> {
        let n = self.items.len();
        if n == 0 || self.widths.len() != n {
            return None;
        }

        let mut iterator = n - 1;
        let mut accumulated = self.widths[iterator];
        while iterator > 0 {
            iterator -= 1;
            accumulated += self.widths[iterator] + self.settings.margin;
            if accumulated > self.element_width {
                return Some(iterator as isize + 1);
            }
        }
        Some(0)
    }

    /// Stage coordinate that brings `position` into view.
    ///
    /// This is the leading edge of the slot, or the centered offset
    /// when centering is enabled. Rounded up to whole pixels.
    pub fn coordinate(&self, position: usize) -> f64 {
        if self.coordinates.is_empty() {
            return 0.0;
        }

        let trailing = |index: usize| self.coordinates.get(index).copied().unwrap_or(0.0);
        let leading = |index: usize| {
            if index == 0 {
                0.0
            } else {
                trailing(index - 1)
            }
        };

        let value = if self.settings.center {
            let current = trailing(position);
            if self.settings.rtl {
                let next = trailing(position + 1);
                current + (self.width() + current - next) / 2.0
            } else {
                let previous = leading(position);
                current - (self.width() + current - previous) / 2.0
            }
        } else {
            leading(position)
        };

        value.ceil()
    }

    /// Animation duration for a move between two absolute positions.
    ///
    /// Distance is clamped to `[1, 6]` index units, each worth one
    /// `factor` (or the configured smart speed) in milliseconds. An
    /// explicit zero factor disables animation entirely.
    pub fn duration(&self, from: usize, to: usize, factor: Option<u64>) -> u64 {
        if factor == Some(0) {
            return 0;
        }
        let distance = (to as i64 - from as i64).unsigned_abs().clamp(1, 6);
        distance * factor.unwrap_or(self.settings.smart_speed)
    }

    /// Set the current position, normalizing first.
    ///
    /// Emits a position change and invalidates position only when the
    /// normalized value actually differs.
    pub(crate) fn set_current(&mut self, position: isize) {
        let Some(position) = self.normalize(position) else {
            return;
        };
        if self.current != position {
            self.current = position;
            self.invalidate(Part::Position);
            self.emit(Event::PositionChanged { position });
        }
    }

    /// Jump to an absolute position without animating.
    ///
    /// Sets the position directly and emits a zero-duration translate,
    /// bypassing the change notification. Used for clone-space reverts
    /// and content resets, where the move must not read as navigation.
    pub(crate) fn reset(&mut self, position: isize) {
        let Some(position) = self.normalize(position) else {
            return;
        };
        self.speed = 0;
        self.current = position;
        let coordinate = self.coordinate(position);
        self.animate(coordinate);
    }

    /// Slide to the item at a relative position.
    ///
    /// With looping the shorter way around is taken whenever the
    /// requested distance exceeds half the strip, and moves that land
    /// outside the canonical window first jump (unanimated) to the
    /// equivalent clone slot so the animation stays continuous. With
    /// rewind the target wraps modulo the reachable range; otherwise
    /// it clamps to it.
    pub fn to(&mut self, position: isize, speed: Option<u64>) {
        let Some(relative) = self.relative(self.current) else {
            return;
        };
        let mut current = self.current as isize;
        let mut distance = position - relative as isize;
        let direction = distance.signum();
        let n = self.items.len() as isize;
        let minimum = self.minimum() as isize;
        let maximum = self.maximum() as isize;

        let target = if self.settings.looping {
            if !self.settings.rewind {
                let beyond = match self.settings.half_turn_bias {
                    HalfTurnBias::Long => 2 * distance.abs() > n,
                    HalfTurnBias::Short => distance != 0 && 2 * distance.abs() >= n,
                };
                if beyond {
                    distance -= direction * n;
                }
            }

            let mut target = current + distance;
            let revert = (target - minimum).rem_euclid(n) + minimum;
            if revert != target && revert - distance <= maximum && revert - distance > 0 {
                current = revert - distance;
                target = revert;
                trace!(current, "revert through clone space");
                self.reset(current);
            }
            target
        } else if self.settings.rewind {
            position.rem_euclid(maximum + 1)
        } else {
            position.clamp(minimum, maximum)
        };

        self.speed = self.duration(current.max(0) as usize, target.max(0) as usize, speed);
        self.set_current(target);
        if self.is_visible() {
            self.update();
        }
    }

    /// Slide to the next item.
    pub fn next(&mut self, speed: Option<u64>) {
        if let Some(relative) = self.relative(self.current) {
            self.to(relative as isize + 1, speed);
        }
    }

    /// Slide to the previous item.
    pub fn prev(&mut self, speed: Option<u64>) {
        if let Some(relative) = self.relative(self.current) {
            self.to(relative as isize - 1, speed);
        }
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod tests;
