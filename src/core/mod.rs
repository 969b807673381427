//! The view position controller.
//!
//! [`Carousel`] owns the item sequence, the derived geometry caches
//! (slot widths, clone list, coordinate table) and the current
//! position, and keeps them consistent through a dirty-gated update
//! pipeline. It performs no rendering of its own: every visual effect
//! is surfaced as an [`Event`], and the embedding shell drains those
//! with [`Carousel::take_events`] after each call.

mod dirty;
mod drag;
mod geometry;
mod items;
mod position;
mod states;
mod workers;

pub use dirty::{DirtySet, Part};
pub use states::{StateFlag, States};

use std::collections::VecDeque;
use std::time::Duration;

use tracing::debug;

use crate::config::{Options, Settings};
use crate::model::{Direction, Item};
use drag::DragSession;

/// A notification drained by the embedding shell.
///
/// `Translate` doubles as the render command: it carries the target
/// stage coordinate and the duration over which to reach it. A zero
/// duration means jump without animating.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Construction finished; content and geometry are in place.
    Initialized,
    /// Settings were re-resolved (possibly across a breakpoint).
    SettingsChanged,
    /// The current position changed.
    PositionChanged {
        /// The new absolute position.
        position: usize,
    },
    /// The resize protocol started.
    Resize,
    /// The resize protocol finished.
    Resized,
    /// A settings re-evaluation and full update started.
    Refresh,
    /// A settings re-evaluation and full update finished.
    Refreshed,
    /// A pointer gesture claimed the strip.
    Drag,
    /// The pointer gesture ended.
    Dragged,
    /// Move the stage to `coordinate` over `duration`.
    Translate {
        /// Target stage offset in pixels.
        coordinate: f64,
        /// Animation duration; zero means jump.
        duration: Duration,
    },
    /// A timed translation completed (or was force-stopped).
    Translated,
    /// The whole item sequence was replaced.
    ItemsReplaced,
    /// An item was inserted.
    ItemAdded {
        /// Relative insertion index.
        position: usize,
    },
    /// An item was removed.
    ItemRemoved {
        /// Relative index of the removed item.
        position: usize,
    },
}

/// Headless position controller for a horizontal item strip.
pub struct Carousel {
    options: Options,
    settings: Settings,
    breakpoint: Option<u32>,
    element_width: f64,
    items: Vec<Item>,
    widths: Vec<f64>,
    /// Relative item indices backing each clone, interleaved
    /// append/prepend in creation order.
    clones: Vec<usize>,
    /// Trailing-edge coordinate of every slot, clones included.
    coordinates: Vec<f64>,
    stage_width: f64,
    visible: Vec<usize>,
    current: usize,
    speed: u64,
    invalidated: DirtySet,
    states: States,
    drag: Option<DragSession>,
    last_direction: Option<Direction>,
    events: VecDeque<Event>,
}

impl Carousel {
    /// Build a controller over `items` at the given viewport width.
    ///
    /// Resolves settings, installs the content and, when the viewport
    /// has a measurable width, runs a full refresh so geometry is
    /// ready before the first event is drained.
    pub fn new(options: Options, items: Vec<Item>, element_width: f64) -> Self {
        let mut carousel = Self {
            settings: options.base.clone(),
            options,
            breakpoint: None,
            element_width,
            items: Vec::new(),
            widths: Vec::new(),
            clones: Vec::new(),
            coordinates: Vec::new(),
            stage_width: 0.0,
            visible: Vec::new(),
            current: 0,
            speed: 0,
            invalidated: DirtySet::default(),
            states: States::default(),
            drag: None,
            last_direction: None,
            events: VecDeque::new(),
        };

        carousel.states.enter(StateFlag::Initializing);
        carousel.setup();
        carousel.replace(items);
        if carousel.is_visible() {
            carousel.refresh();
        } else {
            carousel.invalidate(Part::Width);
        }
        carousel.states.leave(StateFlag::Initializing);
        carousel.emit(Event::Initialized);
        carousel
    }

    /// Re-resolve settings for the current viewport width.
    ///
    /// Always reassigns and invalidates, even when the breakpoint did
    /// not move, so a changed base configuration takes effect on the
    /// next update.
    pub(crate) fn setup(&mut self) {
        let (settings, breakpoint) = self.options.resolve(self.element_width);
        if breakpoint != self.breakpoint {
            debug!(?breakpoint, "breakpoint changed");
        }
        self.breakpoint = breakpoint;
        self.settings = settings;
        self.invalidate(Part::Settings);
        self.emit(Event::SettingsChanged);
    }

    /// Re-evaluate settings and run a full update.
    pub fn refresh(&mut self) {
        self.states.enter(StateFlag::Refreshing);
        self.emit(Event::Refresh);
        self.setup();
        self.settings.options_logic();
        self.update();
        self.states.leave(StateFlag::Refreshing);
        self.emit(Event::Refreshed);
    }

    /// Handle a viewport width change.
    ///
    /// Returns whether a refresh actually ran. A controller without
    /// content, an unchanged width, or a collapsed (zero or negative
    /// width) viewport leaves all caches untouched.
    pub fn on_resize(&mut self, width: f64) -> bool {
        if self.items.is_empty() {
            return false;
        }
        if width == self.element_width {
            return false;
        }
        if width <= 0.0 {
            return false;
        }

        self.states.enter(StateFlag::Resizing);
        self.emit(Event::Resize);
        self.element_width = width;
        self.invalidate(Part::Width);
        self.refresh();
        self.states.leave(StateFlag::Resizing);
        self.emit(Event::Resized);
        true
    }

    /// Run the update pipeline over whatever is currently dirty.
    ///
    /// Each step runs only when its filter intersects the dirty set;
    /// afterwards the set is cleared and the controller enters the
    /// valid state. While the viewport has no measurable width the
    /// pass is skipped outright and the dirty set stays pending.
    pub fn update(&mut self) {
        if !self.is_visible() {
            return;
        }
        let mut scratch = workers::Scratch::default();
        let all = self.invalidated.all();
        for worker in workers::PIPELINE {
            if all || self.invalidated.intersects(worker.filter) {
                (worker.run)(self, &mut scratch);
            }
        }
        self.invalidated.clear();
        if !self.states.is(StateFlag::Valid) {
            self.states.enter(StateFlag::Valid);
        }
    }

    /// Mark a category dirty and drop out of the valid state.
    pub fn invalidate(&mut self, part: Part) {
        self.invalidated.mark(part);
        if self.states.is(StateFlag::Valid) {
            self.states.leave(StateFlag::Valid);
        }
    }

    /// Emit a translation to the given stage coordinate.
    ///
    /// A translation already in flight is force-completed first so the
    /// animating state never double-counts.
    pub(crate) fn animate(&mut self, coordinate: f64) {
        if self.states.is(StateFlag::Animating) {
            self.on_transition_end();
        }
        let duration = Duration::from_millis(self.speed);
        if self.speed > 0 {
            self.states.enter(StateFlag::Animating);
        }
        self.emit(Event::Translate { coordinate, duration });
    }

    /// Complete the translation in flight, if any.
    ///
    /// Called by the shell when a timed translation finishes, and
    /// internally to force-stop one that is being superseded.
    pub fn on_transition_end(&mut self) {
        if self.states.is(StateFlag::Animating) {
            self.states.leave(StateFlag::Animating);
            self.emit(Event::Translated);
        }
    }

    /// Inner strip width available for slots.
    pub fn width(&self) -> f64 {
        geometry::inner_width(&self.settings, self.element_width)
    }

    /// Whether the viewport has a measurable width.
    pub fn is_visible(&self) -> bool {
        self.element_width > 0.0
    }

    /// Drain all pending events in emission order.
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.drain(..).collect()
    }

    pub(crate) fn emit(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Current absolute position.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Active resolved settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The item sequence.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The item shown in a slot, clones resolved to their originals.
    pub fn slot_item(&self, slot: usize) -> Option<&Item> {
        self.relative(slot).and_then(|index| self.items.get(index))
    }

    /// Trailing-edge coordinates of every slot, clones included.
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Number of clone slots (half prepended, half appended).
    pub fn clone_count(&self) -> usize {
        self.clones.len()
    }

    /// Total stage width in pixels.
    pub fn stage_width(&self) -> f64 {
        self.stage_width
    }

    /// Measured viewport width.
    pub fn element_width(&self) -> f64 {
        self.element_width
    }

    /// The matched responsive breakpoint, if any.
    pub fn breakpoint(&self) -> Option<u32> {
        self.breakpoint
    }

    /// Slots whose leading edge currently lies inside the view.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Whether the controller is in the given state.
    pub fn is(&self, flag: StateFlag) -> bool {
        self.states.is(flag)
    }

    /// Whether a position change would currently be ill-advised.
    pub fn busy(&self) -> bool {
        self.states.busy()
    }

    /// Whether a pointer gesture owns the strip.
    pub fn interacting(&self) -> bool {
        self.states.interacting()
    }
}
