//! Core domain newtypes for the strip controller.

pub mod error;

pub use error::{AppError, StripError};

use serde::Deserialize;

/// Intrinsic pixel width of an item. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "f64")]
pub struct ItemWidth(f64);

/// Error returned when attempting to create an [`ItemWidth`] from a
/// non-finite or negative value.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("item width must be finite and >= 0 (got {0})")]
pub struct InvalidItemWidth(pub f64);

impl ItemWidth {
    /// Smart constructor validating the width is finite and non-negative.
    pub fn new(width: f64) -> Result<Self, InvalidItemWidth> {
        if width.is_finite() && width >= 0.0 {
            Ok(Self(width))
        } else {
            Err(InvalidItemWidth(width))
        }
    }

    /// Get the raw pixel value.
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for ItemWidth {
    fn default() -> Self {
        Self(0.0)
    }
}

impl TryFrom<f64> for ItemWidth {
    type Error = InvalidItemWidth;

    fn try_from(width: f64) -> Result<Self, Self::Error> {
        Self::new(width)
    }
}

/// Number of grid slots an item occupies. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "u64")]
pub struct MergeSpan(usize);

/// Error returned when attempting to create a [`MergeSpan`] of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("merge span must be >= 1")]
pub struct InvalidMergeSpan;

impl MergeSpan {
    /// A single slot, the default for unmerged items.
    pub const ONE: Self = Self(1);

    /// Smart constructor validating the span is at least one slot.
    pub fn new(span: usize) -> Result<Self, InvalidMergeSpan> {
        if span == 0 {
            Err(InvalidMergeSpan)
        } else {
            Ok(Self(span))
        }
    }

    /// Get the raw slot count.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for MergeSpan {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u64> for MergeSpan {
    type Error = InvalidMergeSpan;

    fn try_from(span: u64) -> Result<Self, Self::Error> {
        Self::new(span as usize)
    }
}

/// A displayable unit in the strip.
///
/// The intrinsic `width` is only consulted in auto-width mode; in grid
/// mode every item derives its width from the viewport and its merge
/// span. Mixing merge spans with auto-width is undefined and resolved
/// by force-disabling merge (see `Settings::options_logic`); callers
/// should not rely on both at once.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    /// Display label, rendered by the shell.
    pub label: String,

    /// Measured intrinsic width in pixels (auto-width mode only).
    #[serde(default)]
    pub width: ItemWidth,

    /// How many grid slots this item occupies.
    #[serde(default)]
    pub merge: MergeSpan,
}

impl Item {
    /// Create an item with the given label and intrinsic width, spanning
    /// a single slot.
    pub fn new(label: impl Into<String>, width: f64) -> Result<Self, InvalidItemWidth> {
        Ok(Self {
            label: label.into(),
            width: ItemWidth::new(width)?,
            merge: MergeSpan::ONE,
        })
    }

    /// Set the merge span, consuming and returning the item.
    pub fn with_merge(mut self, merge: MergeSpan) -> Self {
        self.merge = merge;
        self
    }
}

/// Pointer coordinates in pixels, as reported by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Pointer {
    /// Create a pointer position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite numbers. Malformed pointer
    /// data (NaN, infinities) must no-op in the drag controller.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Direction of travel along the strip, independent of text direction.
///
/// `Forward` moves toward higher relative indices; under RTL settings
/// the shell-visible motion is mirrored but the index math is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward higher relative indices.
    Forward,
    /// Toward lower relative indices.
    Backward,
}

/// What a completed pointer gesture amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The gesture was effectively stationary; the shell should let the
    /// click propagate to whatever is under the pointer.
    Click,
    /// The gesture moved the strip (or was held long enough to count as
    /// a drag); the shell should swallow the click.
    Moved,
}
