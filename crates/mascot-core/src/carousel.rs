//! Testimonial carousel: slide index, exit animation window and autoplay.
//!
//! Everything is polled with an explicit clock; the web layer calls
//! [`Carousel::tick`] from the frame loop and applies the returned changes.

use crate::constants::{
    AUTOPLAY_INTERVAL_MS, SLIDE_TRANSITION_MS, SWIPE_MAX_DURATION_MS, SWIPE_MIN_DISTANCE_PX,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselPhase {
    Idle,
    Transitioning { exiting: usize, ends_at_ms: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
}

/// Result of one [`Carousel::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselTick {
    /// Slide whose exit marker should be cleared.
    pub finished_exit: Option<usize>,
    /// Autoplay advanced to a new slide.
    pub advanced: Option<SlideChange>,
}

/// Repeating autoplay timer; `None` while paused.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Autoplay {
    interval_ms: f64,
    next_due_ms: Option<f64>,
}

impl Autoplay {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            next_due_ms: None,
        }
    }

    pub fn start(&mut self, now_ms: f64) {
        self.next_due_ms = Some(now_ms + self.interval_ms);
    }

    pub fn pause(&mut self) {
        self.next_due_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// `true` once per elapsed interval; reschedules itself.
    fn fire(&mut self, now_ms: f64) -> bool {
        match self.next_due_ms {
            Some(due) if now_ms >= due => {
                self.next_due_ms = Some(now_ms + self.interval_ms);
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Carousel {
    count: usize,
    current: usize,
    phase: CarouselPhase,
    autoplay: Autoplay,
}

impl Carousel {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            current: 0,
            phase: CarouselPhase::Idle,
            autoplay: Autoplay::new(AUTOPLAY_INTERVAL_MS),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }
    pub fn current(&self) -> usize {
        self.current
    }
    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, CarouselPhase::Transitioning { .. })
    }
    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    pub fn start_autoplay(&mut self, now_ms: f64) {
        if self.count > 1 {
            self.autoplay.start(now_ms);
        }
    }

    /// Show slide `index`. No-op while transitioning, for the current slide,
    /// or for an index past the end.
    pub fn show(&mut self, index: usize, now_ms: f64) -> Option<SlideChange> {
        if self.is_transitioning() || index == self.current || index >= self.count {
            return None;
        }
        let from = self.current;
        self.current = index;
        self.phase = CarouselPhase::Transitioning {
            exiting: from,
            ends_at_ms: now_ms + SLIDE_TRANSITION_MS,
        };
        Some(SlideChange { from, to: index })
    }

    pub fn next(&mut self, now_ms: f64) -> Option<SlideChange> {
        if self.count == 0 {
            return None;
        }
        self.show((self.current + 1) % self.count, now_ms)
    }

    pub fn prev(&mut self, now_ms: f64) -> Option<SlideChange> {
        if self.count == 0 {
            return None;
        }
        self.show((self.current + self.count - 1) % self.count, now_ms)
    }

    // Manual controls pause autoplay around the action so the user gets a
    // full interval on the slide they picked.
    fn manual(
        &mut self,
        now_ms: f64,
        action: impl FnOnce(&mut Self) -> Option<SlideChange>,
    ) -> Option<SlideChange> {
        let was_running = self.autoplay.is_running();
        self.autoplay.pause();
        let change = action(self);
        if was_running {
            self.autoplay.start(now_ms);
        }
        change
    }

    pub fn manual_next(&mut self, now_ms: f64) -> Option<SlideChange> {
        self.manual(now_ms, |c| c.next(now_ms))
    }

    pub fn manual_prev(&mut self, now_ms: f64) -> Option<SlideChange> {
        self.manual(now_ms, |c| c.prev(now_ms))
    }

    pub fn manual_go(&mut self, index: usize, now_ms: f64) -> Option<SlideChange> {
        self.manual(now_ms, |c| c.show(index, now_ms))
    }

    pub fn on_key(&mut self, key: &str, now_ms: f64) -> Option<SlideChange> {
        match key {
            "ArrowLeft" => self.manual_prev(now_ms),
            "ArrowRight" => self.manual_next(now_ms),
            _ => None,
        }
    }

    pub fn tick(&mut self, now_ms: f64) -> CarouselTick {
        let mut out = CarouselTick::default();
        if let CarouselPhase::Transitioning { exiting, ends_at_ms } = self.phase {
            if now_ms >= ends_at_ms {
                self.phase = CarouselPhase::Idle;
                out.finished_exit = Some(exiting);
            }
        }
        if self.autoplay.fire(now_ms) && !self.is_transitioning() {
            out.advanced = self.next(now_ms);
        }
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next slide.
    Next,
    Prev,
}

/// Horizontal swipe recognizer for the carousel track.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<(f64, f64, f64)>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64, y: f64, now_ms: f64) {
        self.start = Some((x, y, now_ms));
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn end(&mut self, x: f64, y: f64, now_ms: f64) -> Option<SwipeDirection> {
        let (sx, sy, t0) = self.start.take()?;
        let dx = x - sx;
        let dy = y - sy;
        if now_ms - t0 > SWIPE_MAX_DURATION_MS {
            return None;
        }
        if dx.abs() <= SWIPE_MIN_DISTANCE_PX || dx.abs() <= dy.abs() {
            return None;
        }
        Some(if dx < 0.0 {
            SwipeDirection::Next
        } else {
            SwipeDirection::Prev
        })
    }
}

impl Carousel {
    pub fn on_swipe(&mut self, direction: SwipeDirection, now_ms: f64) -> Option<SlideChange> {
        match direction {
            SwipeDirection::Next => self.manual_next(now_ms),
            SwipeDirection::Prev => self.manual_prev(now_ms),
        }
    }
}
