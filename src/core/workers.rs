//! The ordered update pipeline.
//!
//! Each step declares the dirty categories it depends on and runs only
//! when one of them is marked (or everything is). Order matters: clone
//! regeneration feeds the coordinate table, which feeds the stage
//! measurement and the position restore. `Scratch` carries values
//! between steps within a single pass.

use super::geometry;
use super::{Carousel, Part};

/// Per-pass scratch shared by pipeline steps.
#[derive(Debug, Default)]
pub(crate) struct Scratch {
    /// Relative index of the item that was current when the pass
    /// started, used to restore it after geometry moves underneath.
    current: Option<usize>,
}

/// One pipeline step.
pub(crate) struct Worker {
    /// Dirty categories that trigger this step.
    pub(crate) filter: &'static [Part],
    pub(crate) run: fn(&mut Carousel, &mut Scratch),
}

/// The update pipeline in execution order.
pub(crate) const PIPELINE: &[Worker] = &[
    Worker {
        filter: &[Part::Width, Part::Items, Part::Settings],
        run: snapshot_current,
    },
    Worker {
        filter: &[Part::Items, Part::Settings],
        run: clear_clones,
    },
    Worker {
        filter: &[Part::Width, Part::Items, Part::Settings],
        run: compute_widths,
    },
    Worker {
        filter: &[Part::Items, Part::Settings],
        run: generate_clones,
    },
    Worker {
        filter: &[Part::Width, Part::Items, Part::Settings],
        run: compute_coordinates,
    },
    Worker {
        filter: &[Part::Width, Part::Items, Part::Settings],
        run: measure_stage,
    },
    Worker {
        filter: &[Part::Items],
        run: clear_stage_when_empty,
    },
    Worker {
        filter: &[Part::Width, Part::Items, Part::Settings],
        run: restore_current,
    },
    Worker {
        filter: &[Part::Position],
        run: translate_current,
    },
    Worker {
        filter: &[Part::Width, Part::Position, Part::Items, Part::Settings],
        run: compute_visible,
    },
];

fn snapshot_current(carousel: &mut Carousel, scratch: &mut Scratch) {
    scratch.current = carousel.relative(carousel.current);
}

fn clear_clones(carousel: &mut Carousel, _scratch: &mut Scratch) {
    carousel.clones.clear();
}

fn compute_widths(carousel: &mut Carousel, _scratch: &mut Scratch) {
    carousel.widths = geometry::item_widths(
        &carousel.settings,
        carousel.element_width,
        &carousel.items,
    );
}

/// Rebuild the clone list for seamless looping.
///
/// The clone budget covers at least two views (and never less than
/// four slots); without rewind it also covers half the strip rounded
/// to an even count, so a full revolution stays seamless. Clones are
/// recorded pairwise, one appended from the strip's head, one
/// prepended from its tail.
fn generate_clones(carousel: &mut Carousel, _scratch: &mut Scratch) {
    let settings = &carousel.settings;
    let n = carousel.items.len();
    let view = (settings.items * 2).max(4);
    let size = n.div_ceil(2) * 2;

    let mut repeat = if settings.looping && n > 0 {
        if settings.rewind {
            view
        } else {
            view.max(size)
        }
    } else {
        0
    } / 2;

    let mut clones = Vec::with_capacity(repeat * 2);
    while repeat > 0 {
        let appended = (clones.len() / 2) as isize;
        if let Some(index) = carousel.normalize_relative(appended) {
            clones.push(index);
        }
        let prepended = n as isize - 1 - (clones.len() as isize - 1) / 2;
        if let Some(index) = carousel.normalize_relative(prepended) {
            clones.push(index);
        }
        repeat -= 1;
    }
    carousel.clones = clones;
}

fn compute_coordinates(carousel: &mut Carousel, _scratch: &mut Scratch) {
    carousel.coordinates = geometry::coordinate_table(
        &carousel.widths,
        carousel.clones.len(),
        carousel.settings.margin,
        carousel.settings.rtl,
    );
}

fn measure_stage(carousel: &mut Carousel, _scratch: &mut Scratch) {
    let span = carousel
        .coordinates
        .last()
        .map(|edge| edge.abs().ceil())
        .unwrap_or(0.0);
    carousel.stage_width = span + carousel.settings.stage_padding * 2.0;
}

fn clear_stage_when_empty(carousel: &mut Carousel, _scratch: &mut Scratch) {
    if carousel.coordinates.is_empty() {
        carousel.stage_width = 0.0;
        carousel.visible.clear();
    }
}

/// Put the snapshotted item back in view, clamped to the reachable
/// range under the fresh geometry.
fn restore_current(carousel: &mut Carousel, scratch: &mut Scratch) {
    let half = carousel.clones.len() / 2;
    let position = scratch
        .current
        .filter(|relative| *relative < carousel.items.len())
        .map(|relative| relative + half)
        .unwrap_or(0);
    let position = position.clamp(carousel.minimum(), carousel.maximum());
    carousel.reset(position as isize);
}

fn translate_current(carousel: &mut Carousel, _scratch: &mut Scratch) {
    let coordinate = carousel.coordinate(carousel.current);
    carousel.animate(coordinate);
}

/// Slots whose leading edge lies inside the view window.
fn compute_visible(carousel: &mut Carousel, _scratch: &mut Scratch) {
    let ascending = if carousel.settings.rtl { -1.0 } else { 1.0 };
    let begin = carousel.coordinate(carousel.current) * ascending
        - carousel.settings.stage_padding * 2.0;
    let end = begin + carousel.width();

    let mut visible = Vec::new();
    for index in 0..carousel.coordinates.len() {
        let edge = if index == 0 {
            0.0
        } else {
            carousel.coordinates[index - 1] * ascending
        };
        if edge >= begin && edge < end {
            visible.push(index);
        }
    }
    carousel.visible = visible;
}
