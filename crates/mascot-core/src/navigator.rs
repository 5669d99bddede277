//! Full-page section navigation.
//!
//! Wheel, touch and keyboard adapters reduce raw input to a [`NavTarget`];
//! [`SectionNavigator::go_to`] is the single place `current` changes.

use crate::constants::{
    SECTION_HEIGHT_VH, TOUCH_DEBOUNCE_MS, TOUCH_SWIPE_THRESHOLD, WHEEL_DEBOUNCE_MS,
    WHEEL_DELTA_THRESHOLD,
};
use smallvec::SmallVec;

/// Drops triggers that arrive while a previous one is still cooling down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebounceGate {
    window_ms: f64,
    closed_until_ms: Option<f64>,
}

impl DebounceGate {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            closed_until_ms: None,
        }
    }

    #[inline]
    pub fn is_open(&self, now_ms: f64) -> bool {
        self.closed_until_ms.map_or(true, |until| now_ms >= until)
    }

    /// Claim the gate; `false` means the trigger must be dropped.
    pub fn try_pass(&mut self, now_ms: f64) -> bool {
        if !self.is_open(now_ms) {
            return false;
        }
        self.closed_until_ms = Some(now_ms + self.window_ms);
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Relative(i32),
    First,
    Last,
}

/// Keys the page reserves for section navigation.
pub fn nav_target_for_key(key: &str) -> Option<NavTarget> {
    match key {
        "ArrowDown" | "PageDown" => Some(NavTarget::Relative(1)),
        "ArrowUp" | "PageUp" => Some(NavTarget::Relative(-1)),
        "Home" => Some(NavTarget::First),
        "End" => Some(NavTarget::Last),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavChange {
    pub from: usize,
    pub to: usize,
    /// Upward translation of the section container, in `vh`.
    pub scroll_offset_vh: f64,
}

/// Presentation phase of a section relative to the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionPhase {
    Upcoming,
    Active,
    ScrolledOut,
}

impl SectionPhase {
    /// Classes this phase adds; the others are removed.
    pub fn classes(self) -> &'static [&'static str] {
        match self {
            SectionPhase::Upcoming => &[],
            SectionPhase::Active => &["active"],
            SectionPhase::ScrolledOut => &["scroll-out"],
        }
    }
}

pub const PHASE_CLASSES: [&str; 2] = ["active", "scroll-out"];

pub fn section_phase(section: usize, current: usize) -> SectionPhase {
    use std::cmp::Ordering::*;
    match section.cmp(&current) {
        Less => SectionPhase::ScrolledOut,
        Equal => SectionPhase::Active,
        Greater => SectionPhase::Upcoming,
    }
}

#[derive(Clone, Debug)]
pub struct SectionNavigator {
    current: usize,
    total: usize,
    wheel: DebounceGate,
    touch: DebounceGate,
    touch_start_y: Option<f64>,
}

impl SectionNavigator {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total,
            wheel: DebounceGate::new(WHEEL_DEBOUNCE_MS),
            touch: DebounceGate::new(TOUCH_DEBOUNCE_MS),
            touch_start_y: None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }
    pub fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn scroll_offset_vh(index: usize) -> f64 {
        index as f64 * SECTION_HEIGHT_VH
    }

    /// Move to `index`. Out-of-range indices are ignored without touching
    /// state. Re-selecting the current index is allowed so callers can
    /// re-apply presentation after a resize.
    pub fn go_to(&mut self, index: usize) -> Option<NavChange> {
        if index >= self.total {
            return None;
        }
        let from = self.current;
        self.current = index;
        if from != index {
            log::info!("[nav] section {} -> {}", from, index);
        }
        Some(NavChange {
            from,
            to: index,
            scroll_offset_vh: Self::scroll_offset_vh(index),
        })
    }

    /// Resolve a target against `current`; `None` when it leaves the range.
    pub fn resolve(&self, target: NavTarget) -> Option<usize> {
        match target {
            NavTarget::First => (self.total > 0).then_some(0),
            NavTarget::Last => self.total.checked_sub(1),
            NavTarget::Relative(delta) => {
                let next = self.current as i64 + delta as i64;
                (next >= 0 && (next as usize) < self.total).then_some(next as usize)
            }
        }
    }

    pub fn navigate(&mut self, target: NavTarget) -> Option<NavChange> {
        let index = self.resolve(target)?;
        self.go_to(index)
    }

    /// Wheel adapter. Small deltas and deltas inside the debounce window are
    /// dropped. A large delta at either end still claims the gate.
    pub fn on_wheel(&mut self, delta_y: f64, now_ms: f64) -> Option<NavChange> {
        if !self.wheel.is_open(now_ms) || delta_y.abs() <= WHEEL_DELTA_THRESHOLD {
            return None;
        }
        self.wheel.try_pass(now_ms);
        let direction = if delta_y > 0.0 { 1 } else { -1 };
        self.navigate(NavTarget::Relative(direction))
    }

    pub fn on_touch_start(&mut self, screen_y: f64) {
        self.touch_start_y = Some(screen_y);
    }

    /// Touch adapter: an upward swipe (finger moving up) advances.
    pub fn on_touch_end(&mut self, screen_y: f64, now_ms: f64) -> Option<NavChange> {
        let start = self.touch_start_y.take()?;
        if !self.touch.is_open(now_ms) {
            return None;
        }
        let diff = start - screen_y;
        if diff.abs() <= TOUCH_SWIPE_THRESHOLD {
            return None;
        }
        self.touch.try_pass(now_ms);
        let direction = if diff > 0.0 { 1 } else { -1 };
        self.navigate(NavTarget::Relative(direction))
    }

    pub fn on_key(&mut self, key: &str) -> Option<NavChange> {
        self.navigate(nav_target_for_key(key)?)
    }

    /// Highlight flag per nav dot.
    pub fn dot_states(&self) -> SmallVec<[bool; 8]> {
        (0..self.total).map(|i| i == self.current).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoCommand {
    PlayFromStart,
    PauseAndRewind,
}

/// A section video that plays once per entry and rewinds on exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OneShotVideo {
    pub section: usize,
}

impl OneShotVideo {
    pub fn on_section_change(&self, from: usize, to: usize) -> Option<VideoCommand> {
        match (from == self.section, to == self.section) {
            (false, true) => Some(VideoCommand::PlayFromStart),
            (true, false) => Some(VideoCommand::PauseAndRewind),
            _ => None,
        }
    }
}
