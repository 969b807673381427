//! Property tests for the position normalizer and coordinate geometry.

use proptest::prelude::*;

use whirl::config::{Options, Settings};
use whirl::core::Carousel;
use whirl::model::Item;

fn build(settings: Settings, count: usize, width: f64) -> Carousel {
    let items = (0..count)
        .map(|i| Item::new(format!("item {i}"), 60.0 + (i % 5) as f64 * 20.0).unwrap())
        .collect();
    let options = Options {
        base: settings,
        responsive: Default::default(),
    };
    Carousel::new(options, items, width)
}

fn relative_of(carousel: &Carousel, position: isize) -> usize {
    let normalized = carousel.normalize(position).unwrap();
    carousel.relative(normalized).unwrap()
}

proptest! {
    /// Looping: positions a whole strip apart resolve to the same item.
    #[test]
    fn loop_normalize_is_periodic_in_the_item_count(
        count in 1usize..12,
        position in -40isize..40,
        turns in 1isize..4,
    ) {
        let settings = Settings { looping: true, ..Settings::default() };
        let carousel = build(settings, count, 300.0);
        let n = count as isize;
        prop_assert_eq!(
            relative_of(&carousel, position),
            relative_of(&carousel, position + turns * n)
        );
    }

    /// Looping: normalize always lands on a valid slot.
    #[test]
    fn loop_normalize_stays_in_slot_range(
        count in 1usize..12,
        position in -100isize..100,
    ) {
        let settings = Settings { looping: true, ..Settings::default() };
        let carousel = build(settings, count, 300.0);
        let normalized = carousel.normalize(position).unwrap();
        prop_assert!(normalized < count + carousel.clone_count());
    }

    /// Without looping, normalize clamps into the reachable range and
    /// is idempotent.
    #[test]
    fn non_loop_normalize_clamps_and_is_idempotent(
        count in 1usize..12,
        position in -100isize..100,
        center in any::<bool>(),
    ) {
        let settings = Settings { center, ..Settings::default() };
        let carousel = build(settings, count, 300.0);
        let normalized = carousel.normalize(position).unwrap();
        prop_assert!(normalized >= carousel.minimum());
        prop_assert!(normalized <= carousel.maximum());
        prop_assert_eq!(carousel.normalize(normalized as isize), Some(normalized));
    }

    /// Relative positions of reachable slots always index an item.
    #[test]
    fn relative_indexes_an_item_for_every_slot(
        count in 1usize..12,
        looping in any::<bool>(),
    ) {
        let settings = Settings { looping, ..Settings::default() };
        let carousel = build(settings, count, 300.0);
        let slots = count + carousel.clone_count();
        for slot in 0..slots {
            let relative = carousel.relative(slot).unwrap();
            prop_assert!(relative < count);
        }
    }

    /// The coordinate table ascends left-to-right and descends
    /// right-to-left.
    #[test]
    fn coordinates_are_monotonic(
        count in 2usize..12,
        rtl in any::<bool>(),
        margin in 0.0f64..20.0,
    ) {
        let settings = Settings { rtl, margin, ..Settings::default() };
        let carousel = build(settings, count, 300.0);
        let table = carousel.coordinates();
        for pair in table.windows(2) {
            if rtl {
                prop_assert!(pair[1] < pair[0]);
            } else {
                prop_assert!(pair[1] > pair[0]);
            }
        }
    }

    /// Navigating to any relative position lands on it (loop) or on
    /// its clamp into the reachable range (no loop).
    #[test]
    fn to_lands_on_the_requested_item(
        count in 1usize..12,
        target in 0isize..12,
        looping in any::<bool>(),
    ) {
        let settings = Settings { looping, ..Settings::default() };
        let mut carousel = build(settings, count, 300.0);
        carousel.to(target, None);
        let landed = carousel.relative(carousel.current()).unwrap() as isize;
        if looping {
            prop_assert_eq!(landed, target.rem_euclid(count as isize));
        } else {
            let maximum = carousel.maximum() as isize;
            prop_assert_eq!(landed, target.clamp(0, maximum));
        }
    }

    /// Durations scale within the clamped distance window.
    #[test]
    fn duration_is_bounded_by_the_distance_clamp(
        from in 0usize..30,
        to in 0usize..30,
        factor in 1u64..1000,
    ) {
        let carousel = build(Settings::default(), 5, 300.0);
        let duration = carousel.duration(from, to, Some(factor));
        prop_assert!(duration >= factor);
        prop_assert!(duration <= 6 * factor);
    }
}
