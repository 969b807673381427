//! Pure geometry: slot widths and the cumulative coordinate table.

use crate::config::Settings;
use crate::model::Item;

/// Inner strip width available for slots.
///
/// The stage padding is reserved on both edges; one margin is added
/// back because every slot carries a trailing margin, including the
/// last one.
pub fn inner_width(settings: &Settings, element_width: f64) -> f64 {
    element_width - 2.0 * settings.stage_padding + settings.margin
}

/// Per-item slot widths, indexed by original item position.
///
/// In grid mode every slot gets an equal share of the inner width less
/// its margin; merged items span a multiple of that share. In
/// auto-width mode the item's own measured width is used instead.
pub fn item_widths(settings: &Settings, element_width: f64, items: &[Item]) -> Vec<f64> {
    let base = inner_width(settings, element_width) / settings.items as f64 - settings.margin;
    items
        .iter()
        .map(|item| {
            let span = if settings.merge {
                let span = item.merge.get();
                if settings.merge_fit {
                    span.min(settings.items)
                } else {
                    span
                }
            } else {
                1
            };
            if settings.auto_width {
                item.width.get() * span as f64
            } else {
                base * span as f64
            }
        })
        .collect()
}

/// Cumulative slot coordinates over clones and items.
///
/// Slot `i` maps to original item `(i - clones/2) mod n`, so the table
/// covers the prepended clone block, the items, and the appended clone
/// block in one ascending (or, under `rtl`, descending) run. Each
/// entry is the trailing edge of its slot; the leading edge of slot
/// `i` is `table[i - 1]` (or zero for the first).
pub fn coordinate_table(widths: &[f64], clones: usize, margin: f64, rtl: bool) -> Vec<f64> {
    let n = widths.len();
    if n == 0 {
        return Vec::new();
    }
    let multiplier = if rtl { -1.0 } else { 1.0 };
    let half = (clones / 2) as isize;
    let mut table = Vec::with_capacity(n + clones);
    let mut previous = 0.0;
    for i in 0..(n + clones) {
        let original = (i as isize - half).rem_euclid(n as isize) as usize;
        previous += (widths[original] + margin) * multiplier;
        table.push(previous);
    }
    table
}
