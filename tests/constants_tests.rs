// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod dom_constants {
    include!("../src/constants.rs");
}

use dom_constants::*;
use mascot_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive_and_ordered() {
    assert!(MASCOT_TWEEN_MS > 0.0);
    assert!(FOLLOW_UP_CLIP_DELAY_MS > MASCOT_TWEEN_MS);
    assert!(SLIDE_TRANSITION_MS < AUTOPLAY_INTERVAL_MS);
    assert!(TOUCH_DEBOUNCE_MS <= WHEEL_DEBOUNCE_MS);
    assert!(SWIPE_MAX_DURATION_MS > 0.0);
    assert!(MESSAGING_LINK_DELAY_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_fractions_are_fractions() {
    for f in [HEAD_YAW_SMOOTHING, HEAD_PITCH_SMOOTHING] {
        assert!(f > 0.0 && f <= 1.0);
    }
    assert!(HEAD_DEBUG_SAMPLE_RATE > 0.0 && HEAD_DEBUG_SAMPLE_RATE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn breakpoints_increase() {
    assert!(EXTRA_SMALL_MAX_WIDTH < SMALL_MAX_WIDTH);
    assert!(SMALL_MAX_WIDTH < MOBILE_MAX_WIDTH);
    assert!(MOBILE_MAX_WIDTH < TABLET_MAX_WIDTH);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn font_bounds_are_reachable_in_steps() {
    assert!(FONT_SIZE_MIN_PX <= FONT_SIZE_DEFAULT_PX);
    assert!(FONT_SIZE_DEFAULT_PX <= FONT_SIZE_MAX_PX);
    assert_eq!((FONT_SIZE_MAX_PX - FONT_SIZE_DEFAULT_PX) % FONT_SIZE_STEP_PX, 0);
    assert_eq!((FONT_SIZE_DEFAULT_PX - FONT_SIZE_MIN_PX) % FONT_SIZE_STEP_PX, 0);
}

#[test]
fn every_section_has_a_clip() {
    assert_eq!(SECTION_CLIPS.len(), SECTION_COUNT);
    for clip in SECTION_CLIPS {
        assert!(REQUIRED_CLIPS.contains(&clip));
    }
    assert!(SERVICES_SECTION < SECTION_COUNT);
    assert!(FINAL_CTA_SECTION < SECTION_COUNT);
}

#[test]
fn dom_hooks_are_distinct() {
    let ids = [
        CANVAS_ID,
        SECTIONS_CONTAINER_ID,
        NAV_DOTS_ID,
        CAROUSEL_ID,
        CAROUSEL_PREV_ID,
        CAROUSEL_NEXT_ID,
        CONTACT_FORM_ID,
        FORM_STATUS_ID,
        WHATSAPP_LINK_ID,
        A11Y_BUTTON_ID,
        A11Y_PANEL_ID,
        A11Y_CLOSE_ID,
        CONTRAST_TOGGLE_ID,
        FONT_INCREASE_ID,
        FONT_DECREASE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty() && !a.starts_with('#'));
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn config_overrides() {
    let mut config = SiteConfig::default();
    assert!(config.apply_override("locale", "en-US"));
    assert_eq!(config.locale, Locale::En);
    assert!(!config.apply_override("locale", "xx"));
    assert!(config.apply_override("video-section", "2"));
    assert_eq!(config.one_shot_video_section, Some(2));
    assert!(!config.apply_override("video-section", "two"));
    assert!(!config.apply_override("form-endpoint", "   "));
    assert!(!config.apply_override("unknown", "x"));
    assert!(config.apply_override("whatsapp", "+972 52 000 0000"));
    assert_eq!(config.whatsapp_number, "+972 52 000 0000");
    for key in OVERRIDE_KEYS {
        assert!(!key.is_empty());
    }
}
