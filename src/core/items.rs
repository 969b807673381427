//! Content mutation: replace, add and remove items.

use super::{Carousel, Event, Part};
use crate::model::Item;

impl Carousel {
    /// Replace the whole item sequence.
    ///
    /// Jumps to the configured start position and invalidates items;
    /// geometry is rebuilt on the next update.
    pub fn replace(&mut self, items: Vec<Item>) {
        self.items = items;
        self.reset(self.settings.start_position);
        self.invalidate(Part::Items);
        self.emit(Event::ItemsReplaced);
    }

    /// Insert an item at a relative position.
    ///
    /// `None` appends. The previously current item stays current: its
    /// relative slot is re-resolved against the grown sequence after
    /// the insert.
    pub fn add(&mut self, item: Item, position: Option<isize>) {
        let current = self.relative(self.current);

        let index = match position {
            None => self.items.len(),
            Some(position) => self
                .normalize_relative(position)
                .unwrap_or(self.items.len()),
        };

        self.items.insert(index, item);

        if let Some(current) = current {
            let half = self.clones.len() / 2;
            self.reset((current + half) as isize);
        }

        self.invalidate(Part::Items);
        self.emit(Event::ItemAdded { position: index });
    }

    /// Remove the item at a relative position.
    ///
    /// Out-of-range positions wrap; an empty sequence is a no-op.
    pub fn remove(&mut self, position: isize) {
        let Some(index) = self.normalize_relative(position) else {
            return;
        };

        self.items.remove(index);
        self.invalidate(Part::Items);
        self.emit(Event::ItemRemoved { position: index });
    }
}
