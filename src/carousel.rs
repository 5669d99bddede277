use crate::constants::{
    CAROUSEL_DOT_SELECTOR, CAROUSEL_ID, CAROUSEL_NEXT_ID, CAROUSEL_PREV_ID, SLIDE_ACTIVE_CLASS,
    SLIDE_EXIT_CLASS, SLIDE_SELECTOR,
};
use crate::dom::{self, Clock};
use mascot_core::{Carousel, SlideChange, SwipeTracker};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct CarouselDom {
    root: web::Element,
    slides: Vec<web::Element>,
    dots: Vec<web::Element>,
}

impl CarouselDom {
    fn mark(&self, current: usize) {
        for (i, slide) in self.slides.iter().enumerate() {
            dom::set_class(slide, SLIDE_ACTIVE_CLASS, i == current);
        }
        for (i, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, SLIDE_ACTIVE_CLASS, i == current);
            _ = dot.set_attribute("aria-selected", if i == current { "true" } else { "false" });
        }
    }

    fn apply(&self, change: SlideChange) {
        if let Some(out) = self.slides.get(change.from) {
            dom::set_class(out, SLIDE_EXIT_CLASS, true);
        }
        self.mark(change.to);
    }

    fn clear_exit(&self, index: usize) {
        if let Some(slide) = self.slides.get(index) {
            dom::set_class(slide, SLIDE_EXIT_CLASS, false);
        }
    }
}

#[derive(Clone)]
pub struct CarouselWiring {
    carousel: Rc<RefCell<Carousel>>,
    dom: Rc<CarouselDom>,
    swipe: Rc<RefCell<SwipeTracker>>,
    clock: Clock,
}

impl CarouselWiring {
    fn run(&self, action: impl FnOnce(&mut Carousel, f64) -> Option<SlideChange>) {
        let change = action(&mut self.carousel.borrow_mut(), self.clock.now_ms());
        if let Some(change) = change {
            self.dom.apply(change);
        }
    }

    /// Called once per animation frame: finish exit animations and run
    /// autoplay.
    pub fn tick(&self) {
        let tick = self.carousel.borrow_mut().tick(self.clock.now_ms());
        if let Some(exited) = tick.finished_exit {
            self.dom.clear_exit(exited);
        }
        if let Some(change) = tick.advanced {
            self.dom.apply(change);
        }
    }
}

fn first_touch(ev: &web::TouchEvent) -> Option<(f64, f64)> {
    ev.changed_touches()
        .get(0)
        .map(|t| (t.client_x() as f64, t.client_y() as f64))
}

/// Find the carousel, show the first slide, wire its controls and start
/// autoplay. `None` when the page has no carousel.
pub fn wire_carousel(document: &web::Document, clock: Clock) -> Option<CarouselWiring> {
    let root = document.get_element_by_id(CAROUSEL_ID)?;
    let slides = dom::query_all_in(&root, SLIDE_SELECTOR);
    if slides.is_empty() {
        log::warn!("[carousel] #{} has no slides", CAROUSEL_ID);
        return None;
    }
    let dots = dom::query_all_in(&root, CAROUSEL_DOT_SELECTOR);
    let carousel_dom = CarouselDom { root, slides, dots };
    carousel_dom.mark(0);

    let mut carousel = Carousel::new(carousel_dom.slides.len());
    carousel.start_autoplay(clock.now_ms());
    log::info!("[carousel] {} slides, autoplay on", carousel.count());

    let w = CarouselWiring {
        carousel: Rc::new(RefCell::new(carousel)),
        dom: Rc::new(carousel_dom),
        swipe: Rc::new(RefCell::new(SwipeTracker::default())),
        clock,
    };

    let prev = w.clone();
    dom::add_click_listener(document, CAROUSEL_PREV_ID, move |_ev| {
        prev.run(|c, now| c.manual_prev(now));
    });
    let next = w.clone();
    dom::add_click_listener(document, CAROUSEL_NEXT_ID, move |_ev| {
        next.run(|c, now| c.manual_next(now));
    });

    for (i, dot) in w.dom.dots.iter().enumerate() {
        let dw = w.clone();
        dom::listen(dot, "click", move |_ev: web::MouseEvent| {
            dw.run(|c, now| c.manual_go(i, now));
        });
    }

    let kw = w.clone();
    dom::listen(&w.dom.root, "keydown", move |ev: web::KeyboardEvent| {
        let key = ev.key();
        if key == "ArrowLeft" || key == "ArrowRight" {
            ev.prevent_default();
            kw.run(|c, now| c.on_key(&key, now));
        }
    });

    let ts = w.clone();
    dom::listen(&w.dom.root, "touchstart", move |ev: web::TouchEvent| {
        if let Some((x, y)) = first_touch(&ev) {
            ts.swipe.borrow_mut().begin(x, y, ts.clock.now_ms());
        }
    });
    let te = w.clone();
    dom::listen(&w.dom.root, "touchend", move |ev: web::TouchEvent| {
        let Some((x, y)) = first_touch(&ev) else {
            te.swipe.borrow_mut().cancel();
            return;
        };
        let direction = te.swipe.borrow_mut().end(x, y, te.clock.now_ms());
        if let Some(direction) = direction {
            te.run(|c, now| c.on_swipe(direction, now));
        }
    });
    let tc = w.clone();
    dom::listen(&w.dom.root, "touchcancel", move |_ev: web::TouchEvent| {
        tc.swipe.borrow_mut().cancel();
    });

    Some(w)
}
