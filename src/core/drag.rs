//! Pointer drag: gesture claiming, stage tracking and release snapping.

use std::time::Instant;

use super::{Carousel, Event, Part, StateFlag};
use crate::model::{Direction, DragOutcome, Pointer};

/// State of a pointer gesture between press and release.
#[derive(Debug, Clone)]
pub(crate) struct DragSession {
    started: Instant,
    origin: Pointer,
    stage_start: f64,
    stage_current: f64,
    /// `None` until the first move decides whether the gesture is
    /// horizontal (claimed) or belongs to the surrounding page.
    claimed: Option<bool>,
}

/// Release window half-width in pixels around each snap point.
const SNAP_PULL: f64 = 30.0;

/// Pixel threshold past which a release counts as a move, not a click.
const CLICK_SLOP: f64 = 3.0;

/// A press held longer than this is never a click.
const CLICK_TIMEOUT_MS: u128 = 300;

/// Wrap an offset into the half-open range covered by `span`.
///
/// Mirrors double-remainder wrapping in both sign conventions: a
/// positive span yields `[0, span)`, a negative one `(span, 0]`.
fn wrap_offset(offset: f64, span: f64) -> f64 {
    if span == 0.0 {
        0.0
    } else if span > 0.0 {
        offset.rem_euclid(span)
    } else {
        -(-offset).rem_euclid(-span)
    }
}

impl Carousel {
    /// Begin a pointer gesture at the given stage offset.
    ///
    /// Freezes any translation in flight at the offset the shell
    /// reports, so the gesture picks up mid-animation without a jump.
    /// Ignored when mouse dragging is disabled or the pointer is not
    /// finite.
    pub fn pointer_down(&mut self, pointer: Pointer, stage_offset: f64) {
        if !self.settings.mouse_drag || !pointer.is_finite() {
            return;
        }

        // A press while a session is still open means its release was
        // lost; close the stale gesture before starting over.
        if let Some(stale) = self.drag.take() {
            if stale.claimed == Some(true) && self.states.is(StateFlag::Dragging) {
                self.states.leave(StateFlag::Dragging);
                self.emit(Event::Dragged);
            }
        }

        if self.states.is(StateFlag::Animating) {
            self.speed = 0;
            self.animate(stage_offset);
            self.invalidate(Part::Position);
        }

        self.speed = 0;
        self.drag = Some(DragSession {
            started: Instant::now(),
            origin: pointer,
            stage_start: stage_offset,
            stage_current: stage_offset,
            claimed: None,
        });
    }

    /// Track a pointer move.
    ///
    /// The first move decides ownership: a predominantly vertical
    /// delta over a valid strip abandons the gesture. A claimed
    /// gesture maps the pointer delta onto the stage offset, wrapping
    /// it through clone space when looping or clamping it (with
    /// rubber-band overshoot) against the reachable range otherwise.
    pub fn pointer_move(&mut self, pointer: Pointer) {
        let Some(session) = &self.drag else {
            return;
        };
        if !pointer.is_finite() {
            return;
        }

        let origin = session.origin;
        let delta_x = origin.x - pointer.x;
        let delta_y = origin.y - pointer.y;

        match session.claimed {
            Some(false) => return,
            None => {
                if delta_x.abs() < delta_y.abs() && self.states.is(StateFlag::Valid) {
                    if let Some(session) = &mut self.drag {
                        session.claimed = Some(false);
                    }
                    return;
                }
                if let Some(session) = &mut self.drag {
                    session.claimed = Some(true);
                }
                self.states.enter(StateFlag::Dragging);
                self.emit(Event::Drag);
            }
            Some(true) => {}
        }

        let stage_start = self.drag.as_ref().map(|s| s.stage_start).unwrap_or(0.0);
        let mut stage = stage_start + delta_x;

        if self.settings.looping {
            let minimum = self.coordinate(self.minimum());
            let span = self.coordinate(self.maximum() + 1) - minimum;
            stage = wrap_offset(stage - minimum, span) + minimum;
        } else {
            let first = self.coordinate(self.minimum());
            let last = self.coordinate(self.maximum());
            let pull = if self.settings.pull_drag {
                delta_x / 5.0
            } else {
                0.0
            };
            let low = first.min(last) + pull;
            let high = first.max(last) + pull;
            stage = stage.clamp(low, high);
        }

        if let Some(session) = &mut self.drag {
            session.stage_current = stage;
        }
        self.animate(stage);
    }

    /// End the pointer gesture.
    ///
    /// A gesture that moved the strip (or released over an invalid
    /// strip) snaps to the closest position in the drag direction and
    /// animates there at the drag-end speed. The outcome tells the
    /// shell whether to treat the release as a click.
    pub fn pointer_up(&mut self, pointer: Pointer) -> DragOutcome {
        let Some(session) = self.drag.take() else {
            return DragOutcome::Click;
        };

        let delta_x = if pointer.is_finite() {
            session.origin.x - pointer.x
        } else {
            0.0
        };
        let direction = if (delta_x > 0.0) != self.settings.rtl {
            Direction::Forward
        } else {
            Direction::Backward
        };

        let dragging = self.states.is(StateFlag::Dragging);
        let mut outcome = DragOutcome::Click;

        if delta_x != 0.0 && dragging || !self.states.is(StateFlag::Valid) {
            let hint = if delta_x != 0.0 {
                Some(direction)
            } else {
                self.last_direction
            };

            self.speed = self
                .settings
                .drag_end_speed
                .unwrap_or(self.settings.smart_speed);
            if let Some(position) = self.closest(session.stage_current, hint) {
                self.set_current(position as isize);
                self.invalidate(Part::Position);
                self.update();
            }
            self.last_direction = Some(direction);

            if delta_x.abs() > CLICK_SLOP
                || session.started.elapsed().as_millis() > CLICK_TIMEOUT_MS
            {
                outcome = DragOutcome::Moved;
            }
        }

        if dragging {
            self.states.leave(StateFlag::Dragging);
            self.emit(Event::Dragged);
        }

        outcome
    }

    /// Absolute position closest to a stage offset.
    ///
    /// Scans every slot in ascending coordinate space: within the pull
    /// window around a snap point the slot in the drag direction wins;
    /// between snap points the tie breaks toward the direction of
    /// travel. Outside the reachable range (non-loop) the nearest
    /// boundary wins. Free drag never snaps.
    pub(crate) fn closest(&self, offset: f64, direction: Option<Direction>) -> Option<usize> {
        let ascending = if self.settings.rtl { -1.0 } else { 1.0 };
        let offset = offset * ascending;
        let width = self.width();
        let slots = self.coordinates.len();
        let mut position = None;

        if !self.settings.free_drag {
            for index in 0..slots {
                let value = self.coordinate(index) * ascending;
                let next = if index + 1 < slots {
                    self.coordinate(index + 1) * ascending
                } else {
                    value + width
                };

                if direction == Some(Direction::Forward)
                    && offset > value - SNAP_PULL
                    && offset < value + SNAP_PULL
                {
                    position = Some(index);
                } else if direction == Some(Direction::Backward)
                    && offset > value + width - SNAP_PULL
                    && offset < value + width + SNAP_PULL
                {
                    position = Some(index + 1);
                } else if offset > value && offset < next {
                    position = Some(match direction {
                        Some(Direction::Forward) => index + 1,
                        _ => index,
                    });
                }

                if position.is_some() {
                    break;
                }
            }
        }

        if !self.settings.looping {
            if offset < self.coordinate(self.minimum()) * ascending {
                position = Some(self.minimum());
            } else if offset > self.coordinate(self.maximum()) * ascending {
                position = Some(self.maximum());
            }
        }

        position
    }
}
