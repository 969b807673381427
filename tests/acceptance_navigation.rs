//! Navigation journeys: sliding, wrapping, rewinding and resizing
//! observed through the emitted event stream.

use std::time::Duration;

use whirl::config::{Options, Settings};
use whirl::core::{Carousel, Event, StateFlag};
use whirl::model::Item;

fn strip(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item::new(format!("item {i}"), 100.0).unwrap())
        .collect()
}

fn build(settings: Settings, count: usize) -> Carousel {
    let options = Options {
        base: settings,
        responsive: Default::default(),
    };
    let mut carousel = Carousel::new(options, strip(count), 300.0);
    carousel.take_events();
    carousel
}

fn translates(events: &[Event]) -> Vec<(f64, Duration)> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Translate { coordinate, duration } => Some((*coordinate, *duration)),
            _ => None,
        })
        .collect()
}

#[test]
fn sliding_forward_announces_the_position_once() {
    let mut carousel = build(Settings::default(), 5);

    carousel.to(2, Some(0));

    let events = carousel.take_events();
    let changes: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, Event::PositionChanged { .. }))
        .collect();
    assert_eq!(changes.len(), 1);
    assert!(matches!(changes[0], Event::PositionChanged { position: 2 }));
    assert_eq!(translates(&events), vec![(200.0, Duration::ZERO)]);
}

#[test]
fn sliding_to_the_current_position_is_silent() {
    let mut carousel = build(Settings::default(), 5);
    carousel.to(2, Some(0));
    carousel.take_events();

    carousel.to(2, Some(0));

    assert!(carousel.take_events().is_empty());
}

#[test]
fn default_speed_scales_with_the_distance() {
    let settings = Settings {
        smart_speed: 300,
        ..Settings::default()
    };
    let mut carousel = build(settings, 5);

    carousel.to(2, None);

    assert!(carousel.is(StateFlag::Animating));
    let events = carousel.take_events();
    assert_eq!(
        translates(&events),
        vec![(200.0, Duration::from_millis(600))]
    );

    carousel.on_transition_end();
    assert!(!carousel.is(StateFlag::Animating));
    assert!(carousel
        .take_events()
        .iter()
        .any(|e| matches!(e, Event::Translated)));
}

#[test]
fn explicit_speed_wins_over_the_smart_speed() {
    let mut carousel = build(Settings::default(), 5);
    carousel.to(1, Some(100));
    let events = carousel.take_events();
    assert_eq!(
        translates(&events),
        vec![(100.0, Duration::from_millis(100))]
    );
}

#[test]
fn edges_stop_navigation_without_rewind() {
    let mut carousel = build(Settings::default(), 5);

    carousel.prev(Some(0));
    assert_eq!(carousel.current(), 0);

    carousel.to(99, Some(0));
    assert_eq!(carousel.current(), 2);

    carousel.next(Some(0));
    assert_eq!(carousel.current(), 2);
}

#[test]
fn rewind_wraps_past_either_edge() {
    let settings = Settings {
        rewind: true,
        ..Settings::default()
    };
    let mut carousel = build(settings, 5);

    carousel.to(2, Some(0));
    carousel.next(Some(0));
    assert_eq!(carousel.current(), 0);

    carousel.prev(Some(0));
    assert_eq!(carousel.current(), 2);
}

#[test]
fn loop_revolution_returns_to_the_first_item() {
    let settings = Settings {
        looping: true,
        ..Settings::default()
    };
    let mut carousel = build(settings, 6);
    assert_eq!(carousel.relative(carousel.current()), Some(0));

    let mut seen = Vec::new();
    for _ in 0..6 {
        carousel.next(Some(0));
        seen.push(carousel.relative(carousel.current()).unwrap());
    }

    assert_eq!(seen, vec![1, 2, 3, 4, 5, 0]);
}

#[test]
fn loop_overflow_reverts_through_clone_space_before_sliding() {
    let settings = Settings {
        looping: true,
        ..Settings::default()
    };
    let mut carousel = build(settings, 6);

    for _ in 0..5 {
        carousel.next(Some(0));
    }
    assert_eq!(carousel.current(), 8);
    carousel.take_events();

    carousel.next(Some(500));

    assert_eq!(carousel.current(), 3);
    assert_eq!(carousel.relative(carousel.current()), Some(0));

    // the jump to the equivalent clone slot is instant, the slide is not
    let events = carousel.take_events();
    assert_eq!(
        translates(&events),
        vec![
            (200.0, Duration::ZERO),
            (300.0, Duration::from_millis(500)),
        ]
    );
}

#[test]
fn loop_takes_the_shorter_way_around() {
    let settings = Settings {
        looping: true,
        ..Settings::default()
    };
    let mut carousel = build(settings, 6);
    assert_eq!(carousel.current(), 3);

    // five forward is one backward
    carousel.to(5, Some(0));

    assert_eq!(carousel.relative(carousel.current()), Some(5));
    assert_eq!(carousel.current(), 2);
}

#[test]
fn centered_slide_lands_on_the_centering_offset() {
    let settings = Settings {
        center: true,
        ..Settings::default()
    };
    let mut carousel = build(settings, 5);

    carousel.to(4, Some(0));

    assert_eq!(carousel.current(), 4);
    let events = carousel.take_events();
    assert_eq!(translates(&events), vec![(400.0, Duration::ZERO)]);
}

#[test]
fn resizing_mid_animation_stops_it_and_reprojects() {
    let mut carousel = build(Settings::default(), 5);

    carousel.to(2, None);
    assert!(carousel.is(StateFlag::Animating));
    carousel.take_events();

    assert!(carousel.on_resize(600.0));

    assert!(!carousel.is(StateFlag::Animating));
    assert_eq!(carousel.current(), 2);

    let events = carousel.take_events();
    assert!(events.iter().any(|e| matches!(e, Event::Translated)));
    // the wider grid doubles every slot width, so the stage jumps
    assert!(events.iter().any(|e| matches!(
        e,
        Event::Translate { coordinate, duration }
            if *coordinate == 400.0 && duration.is_zero()
    )));
}
