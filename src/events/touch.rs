use crate::dom;
use crate::nav::{self, NavWiring};
use web_sys as web;

fn first_changed_screen_y(ev: &web::TouchEvent) -> Option<f64> {
    ev.changed_touches().get(0).map(|t| t.screen_y() as f64)
}

pub fn wire_touch(w: &NavWiring) {
    let Some(window) = web::window() else {
        return;
    };

    let start = w.clone();
    dom::listen(&window, "touchstart", move |ev: web::TouchEvent| {
        if let Some(y) = first_changed_screen_y(&ev) {
            start.navigator.borrow_mut().on_touch_start(y);
        }
    });

    let end = w.clone();
    dom::listen(&window, "touchend", move |ev: web::TouchEvent| {
        let Some(y) = first_changed_screen_y(&ev) else {
            return;
        };
        let change = end.navigator.borrow_mut().on_touch_end(y, end.clock.now_ms());
        if let Some(change) = change {
            nav::apply_nav_change(&end, change);
        }
    });
}
