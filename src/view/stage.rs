//! Stage animation driver.
//!
//! The controller emits target coordinates with durations; this tracks
//! the interpolated stage offset between frames so dragging can pick
//! up mid-animation and releases glide instead of jumping.

use std::time::{Duration, Instant};

/// A translation in flight.
#[derive(Debug, Clone)]
struct Animation {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

/// Interpolated stage offset.
#[derive(Debug, Default)]
pub struct Stage {
    offset: f64,
    animation: Option<Animation>,
}

/// Sinusoidal ease-in-out over normalized time.
fn swing(t: f64) -> f64 {
    0.5 - (t * std::f64::consts::PI).cos() / 2.0
}

impl Stage {
    /// Current stage offset in pixels.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether a timed translation is in flight.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Apply a translate command from the controller.
    ///
    /// Zero duration jumps immediately, cancelling any animation in
    /// flight; otherwise an eased glide starts from the current offset.
    pub fn apply(&mut self, coordinate: f64, duration: Duration) {
        if duration.is_zero() {
            self.animation = None;
            self.offset = coordinate;
        } else {
            self.animation = Some(Animation {
                from: self.offset,
                to: coordinate,
                started: Instant::now(),
                duration,
            });
        }
    }

    /// Advance the animation to the current time.
    ///
    /// Returns `true` exactly once, on the frame a timed translation
    /// completes, so the caller can report the transition end.
    pub fn tick(&mut self) -> bool {
        let Some(animation) = &self.animation else {
            return false;
        };

        let elapsed = animation.started.elapsed().as_secs_f64();
        let total = animation.duration.as_secs_f64();
        let t = if total > 0.0 { elapsed / total } else { 1.0 };

        if t >= 1.0 {
            self.offset = animation.to;
            self.animation = None;
            true
        } else {
            self.offset = animation.from + (animation.to - animation.from) * swing(t);
            false
        }
    }
}
