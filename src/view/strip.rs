//! Strip widget: renders the slot band at the current stage offset.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::Carousel;

/// One band of slots, positioned by the interpolated stage offset.
///
/// Coordinates are in virtual pixels; `px_per_cell` maps them onto
/// terminal columns. Clones render dimmed, slots outside the view
/// render gray, and the current slot is highlighted.
pub struct StripView<'a> {
    carousel: &'a Carousel,
    stage_offset: f64,
    px_per_cell: f64,
}

impl<'a> StripView<'a> {
    /// Build the widget for one frame.
    pub fn new(carousel: &'a Carousel, stage_offset: f64, px_per_cell: f64) -> Self {
        Self {
            carousel,
            stage_offset,
            px_per_cell,
        }
    }
}

/// Truncate a label to a display width, ellipsizing when it is cut.
fn truncate_label(label: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if label.width() <= max_width {
        return label.to_string();
    }

    let mut truncated = String::new();
    let mut used = 0;
    for ch in label.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        used += ch_width;
    }
    truncated.push('…');
    truncated
}

impl Widget for StripView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let carousel = self.carousel;
        let settings = carousel.settings();
        let coordinates = carousel.coordinates();
        let rtl = settings.rtl;
        let ascending = if rtl { -1.0 } else { 1.0 };
        let offset = self.stage_offset * ascending;
        let view_px = carousel.element_width();
        let row = area.y + area.height / 2;
        let half = carousel.clone_count() / 2;
        let item_count = carousel.items().len();

        for slot in 0..coordinates.len() {
            let leading = if slot == 0 {
                0.0
            } else {
                coordinates[slot - 1] * ascending
            };
            let trailing = coordinates[slot] * ascending;
            let width_px = (trailing - leading - settings.margin).max(0.0);

            let from_view_start = leading - offset;
            let (start_px, end_px) = if rtl {
                (
                    view_px - from_view_start - width_px,
                    view_px - from_view_start,
                )
            } else {
                (from_view_start, from_view_start + width_px)
            };

            let start = (start_px / self.px_per_cell).round() as isize;
            let end = (end_px / self.px_per_cell).round() as isize;
            let start = start.max(0).min(area.width as isize) as u16;
            let end = end.max(0).min(area.width as isize) as u16;
            if end <= start {
                continue;
            }

            let is_clone = slot < half || slot >= half + item_count;
            let is_current = slot == carousel.current();
            let is_visible = carousel.visible().contains(&slot);

            let style = if is_current {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if is_clone {
                Style::default().fg(Color::DarkGray).bg(Color::Black)
            } else if is_visible {
                Style::default().fg(Color::White).bg(Color::Blue)
            } else {
                Style::default().fg(Color::Gray).bg(Color::Black)
            };

            let cells = (end - start) as usize;
            let label = self
                .carousel
                .slot_item(slot)
                .map(|item| item.label.as_str())
                .unwrap_or("");
            let text = truncate_label(label, cells.saturating_sub(2));
            let padded = format!(" {:width$}", text, width = cells.saturating_sub(1));

            buf.set_stringn(area.x + start, row, &padded, cells, style);
            if row > area.y {
                buf.set_stringn(area.x + start, row - 1, &"▄".repeat(cells), cells, style);
            }
            if row + 1 < area.y + area.height {
                buf.set_stringn(area.x + start, row + 1, &"▀".repeat(cells), cells, style);
            }
        }

        // center marker
        if settings.center && area.height > 0 {
            let mid = area.x + area.width / 2;
            buf.set_string(mid, area.y, "▼", Style::default().fg(Color::Red));
        }
    }
}
