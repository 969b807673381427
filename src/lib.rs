//! whirl
//!
//! Headless position controller for a horizontally scrolling item strip.
//!
//! The core ([`core::Carousel`]) owns the strip's geometry cache, its
//! current position, and a drag/animation state machine. It performs no
//! layout or rendering itself: the embedding shell supplies measured
//! widths and pointer coordinates, and executes the `Translate` commands
//! the controller emits. The `whirl` binary is a terminal demo shell
//! built on ratatui/crossterm.

pub mod config;
pub mod core;
pub mod logging;
pub mod model;
pub mod source;
pub mod view;
