// Host-side tests for the testimonial carousel.

use mascot_core::*;

#[test]
fn show_is_a_no_op_for_current_or_out_of_range() {
    let mut c = Carousel::new(3);
    assert!(c.show(0, 0.0).is_none());
    assert!(c.show(3, 0.0).is_none());
    assert_eq!(c.current(), 0);
    assert!(!c.is_transitioning());
}

#[test]
fn show_is_ignored_while_transitioning() {
    let mut c = Carousel::new(3);
    assert_eq!(c.show(1, 0.0), Some(SlideChange { from: 0, to: 1 }));
    assert!(c.show(2, 100.0).is_none());
    assert_eq!(c.current(), 1);

    let tick = c.tick(SLIDE_TRANSITION_MS);
    assert_eq!(tick.finished_exit, Some(0));
    assert!(!c.is_transitioning());
    assert!(c.show(2, SLIDE_TRANSITION_MS).is_some());
}

#[test]
fn next_and_prev_wrap() {
    let mut c = Carousel::new(3);
    assert_eq!(c.prev(0.0).map(|s| s.to), Some(2));
    c.tick(1000.0);
    assert_eq!(c.next(1000.0).map(|s| s.to), Some(0));
    c.tick(2000.0);
    assert_eq!(c.next(2000.0).map(|s| s.to), Some(1));
}

#[test]
fn dots_jump_directly() {
    let mut c = Carousel::new(4);
    assert_eq!(c.manual_go(3, 0.0), Some(SlideChange { from: 0, to: 3 }));
}

#[test]
fn autoplay_advances_every_interval() {
    let mut c = Carousel::new(3);
    c.start_autoplay(0.0);
    assert!(c.tick(AUTOPLAY_INTERVAL_MS - 1.0).advanced.is_none());
    let tick = c.tick(AUTOPLAY_INTERVAL_MS);
    assert_eq!(tick.advanced, Some(SlideChange { from: 0, to: 1 }));
    c.tick(AUTOPLAY_INTERVAL_MS + SLIDE_TRANSITION_MS);
    assert_eq!(c.tick(2.0 * AUTOPLAY_INTERVAL_MS).advanced.map(|s| s.to), Some(2));
}

#[test]
fn manual_navigation_restarts_autoplay_interval() {
    let mut c = Carousel::new(3);
    c.start_autoplay(0.0);
    c.manual_next(4000.0);
    c.tick(4000.0 + SLIDE_TRANSITION_MS);
    // the earlier deadline at 5000 no longer applies
    assert!(c.tick(5000.0).advanced.is_none());
    assert!(c.autoplay().is_running());
    assert_eq!(c.tick(9000.0).advanced.map(|s| s.to), Some(2));
}

#[test]
fn single_slide_never_autoplays() {
    let mut c = Carousel::new(1);
    c.start_autoplay(0.0);
    assert!(!c.autoplay().is_running());
    assert!(c.next(0.0).is_none());
}

#[test]
fn arrow_keys_drive_slides() {
    let mut c = Carousel::new(3);
    assert_eq!(c.on_key("ArrowRight", 0.0).map(|s| s.to), Some(1));
    c.tick(SLIDE_TRANSITION_MS);
    assert_eq!(c.on_key("ArrowLeft", 1000.0).map(|s| s.to), Some(0));
    assert!(c.on_key("Enter", 2000.0).is_none());
}

#[test]
fn swipe_requires_distance_direction_and_speed() {
    let mut s = SwipeTracker::default();
    s.begin(300.0, 100.0, 0.0);
    assert_eq!(s.end(200.0, 110.0, 200.0), Some(SwipeDirection::Next));

    s.begin(100.0, 100.0, 0.0);
    assert_eq!(s.end(200.0, 100.0, 200.0), Some(SwipeDirection::Prev));

    // too short
    s.begin(100.0, 100.0, 0.0);
    assert_eq!(s.end(140.0, 100.0, 100.0), None);
    // mostly vertical
    s.begin(100.0, 100.0, 0.0);
    assert_eq!(s.end(180.0, 200.0, 100.0), None);
    // too slow
    s.begin(100.0, 100.0, 0.0);
    assert_eq!(s.end(300.0, 100.0, SWIPE_MAX_DURATION_MS + 1.0), None);
    // end without begin
    assert_eq!(s.end(300.0, 100.0, 0.0), None);
}

#[test]
fn swipe_moves_carousel() {
    let mut c = Carousel::new(3);
    assert_eq!(c.on_swipe(SwipeDirection::Prev, 0.0).map(|s| s.to), Some(2));
}
