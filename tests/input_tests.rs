// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn ndc_corners_and_center() {
    assert_eq!(client_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(client_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(client_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
}

#[test]
fn ndc_with_empty_viewport_is_origin() {
    assert_eq!(client_to_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
    assert_eq!(client_to_ndc(10.0, 10.0, 800.0, -1.0), Vec2::ZERO);
}

#[test]
fn wheel_modes_normalize_to_pixels() {
    assert_eq!(wheel_delta_px(120.0, DOM_DELTA_PIXEL, 900.0), 120.0);
    assert_eq!(wheel_delta_px(3.0, DOM_DELTA_LINE, 900.0), 3.0 * WHEEL_LINE_HEIGHT_PX);
    assert_eq!(wheel_delta_px(-1.0, DOM_DELTA_PAGE, 900.0), -900.0);
    // unknown modes pass through
    assert_eq!(wheel_delta_px(7.0, 9, 900.0), 7.0);
}

#[test]
fn a_three_line_notch_clears_the_jump_threshold() {
    let px = wheel_delta_px(3.0, DOM_DELTA_LINE, 900.0);
    assert!(px > mascot_core::WHEEL_DELTA_THRESHOLD);
}

#[test]
fn text_entry_tags() {
    assert!(is_text_entry_tag("INPUT"));
    assert!(is_text_entry_tag("textarea"));
    assert!(is_text_entry_tag("Select"));
    assert!(!is_text_entry_tag("BUTTON"));
    assert!(!is_text_entry_tag("DIV"));
}
