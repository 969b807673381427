//! Configuration: controller options and the demo's config file loader.

pub mod loader;

pub use loader::{ConfigError, ConfigFile, ResolvedConfig};

use serde::Deserialize;
use std::collections::BTreeMap;

/// Tie-break for the loop shortest-path heuristic.
///
/// When looping, `to()` takes the shorter way around the strip whenever
/// the requested distance exceeds half the item count. At exactly half
/// the distance the two ways are equally long; the observed behavior of
/// the original logic at that tie was ambiguous, so it is configurable
/// rather than guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HalfTurnBias {
    /// Travel the requested way (the strict-inequality reading).
    #[default]
    Long,
    /// Treat the tie like an overshoot and reverse.
    Short,
}

/// Resolved controller settings for the current breakpoint.
///
/// This is the single source of truth the controller reads on every
/// pass. It is rebuilt by `setup()` from [`Options`] whenever the
/// viewport crosses a responsive breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Items shown per view in grid mode.
    pub items: usize,
    /// Seamless circular wraparound via clone padding.
    pub looping: bool,
    /// Center the current item in the view.
    pub center: bool,
    /// Animate back to the start instead of looping through clones.
    pub rewind: bool,
    /// Whether pointer dragging moves the strip at all.
    pub mouse_drag: bool,
    /// Rubber-band damping beyond the edges while dragging (non-loop).
    pub pull_drag: bool,
    /// Leave the strip wherever it is dropped instead of snapping.
    pub free_drag: bool,
    /// Gap between items in pixels.
    pub margin: f64,
    /// Horizontal padding inside the stage in pixels.
    pub stage_padding: f64,
    /// Honor per-item merge spans in grid mode.
    pub merge: bool,
    /// Clamp merge spans to the items-per-view count.
    pub merge_fit: bool,
    /// Size items by their measured intrinsic widths.
    pub auto_width: bool,
    /// Position to reset to when content is replaced.
    pub start_position: isize,
    /// Right-to-left direction; mirrors the coordinate table.
    pub rtl: bool,
    /// Per-index-unit animation duration in milliseconds.
    pub smart_speed: u64,
    /// Duration override for drag-release animations.
    pub drag_end_speed: Option<u64>,
    /// Tie-break at exactly half-strip loop distances.
    pub half_turn_bias: HalfTurnBias,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            items: 3,
            looping: false,
            center: false,
            rewind: false,
            mouse_drag: true,
            pull_drag: true,
            free_drag: false,
            margin: 0.0,
            stage_padding: 0.0,
            merge: false,
            merge_fit: true,
            auto_width: false,
            start_position: 0,
            rtl: false,
            smart_speed: 250,
            drag_end_speed: None,
            half_turn_bias: HalfTurnBias::Long,
        }
    }
}

impl Settings {
    /// Reconcile option combinations that cannot coexist.
    ///
    /// Auto-width sizes items from measurement, so grid-only features
    /// are force-disabled: stage padding and merge spans. Mixing merge
    /// with auto-width is a documented caller constraint, not something
    /// that is silently reconciled item-by-item.
    pub fn options_logic(&mut self) {
        if self.auto_width {
            self.stage_padding = 0.0;
            self.merge = false;
        }
    }
}

/// Per-breakpoint overrides applied on top of the base settings.
///
/// Only geometry-affecting fields are overridable; behavioral flags
/// (drag, rewind, direction) stay constant across breakpoints.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResponsiveOverrides {
    /// Items per view at this breakpoint.
    #[serde(default)]
    pub items: Option<usize>,
    /// Margin at this breakpoint.
    #[serde(default)]
    pub margin: Option<f64>,
    /// Stage padding at this breakpoint.
    #[serde(default)]
    pub stage_padding: Option<f64>,
    /// Centering at this breakpoint.
    #[serde(default)]
    pub center: Option<bool>,
    /// Merge handling at this breakpoint.
    #[serde(default)]
    pub merge: Option<bool>,
    /// Auto-width at this breakpoint.
    #[serde(default)]
    pub auto_width: Option<bool>,
}

impl ResponsiveOverrides {
    /// Apply the overrides to a settings value in place.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(items) = self.items {
            settings.items = items;
        }
        if let Some(margin) = self.margin {
            settings.margin = margin;
        }
        if let Some(stage_padding) = self.stage_padding {
            settings.stage_padding = stage_padding;
        }
        if let Some(center) = self.center {
            settings.center = center;
        }
        if let Some(merge) = self.merge {
            settings.merge = merge;
        }
        if let Some(auto_width) = self.auto_width {
            settings.auto_width = auto_width;
        }
    }
}

/// Construction-time options for the controller.
///
/// An explicit value passed once at construction; there is no shared
/// defaults object and no process-wide mutable state. Runtime option
/// changes go through the controller's `setup()` re-evaluation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    /// Base settings, active when no breakpoint matches.
    pub base: Settings,
    /// Viewport-width breakpoints mapping to overrides. The largest
    /// breakpoint not exceeding the viewport width wins.
    pub responsive: BTreeMap<u32, ResponsiveOverrides>,
}

impl Options {
    /// Resolve the active settings for a viewport width.
    ///
    /// Returns the resolved settings and the matched breakpoint, if
    /// any. With no responsive table the base settings are returned
    /// unchanged.
    pub fn resolve(&self, viewport_width: f64) -> (Settings, Option<u32>) {
        let mut settings = self.base.clone();

        let matched = self
            .responsive
            .range(..=(viewport_width.max(0.0) as u32))
            .next_back()
            .map(|(breakpoint, overrides)| {
                overrides.apply(&mut settings);
                *breakpoint
            });

        (settings, matched)
    }
}
