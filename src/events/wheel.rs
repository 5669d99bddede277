use crate::dom;
use crate::input;
use crate::nav::{self, NavWiring};
use web_sys as web;

/// Wheel jumps one section per gesture. The listener is non-passive so the
/// native scroll never runs.
pub fn wire_wheel(w: &NavWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    dom::listen_active(&window, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        let (_, page_height) = dom::viewport_size();
        let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), page_height);
        let change = w.navigator.borrow_mut().on_wheel(delta, w.clock.now_ms());
        if let Some(change) = change {
            log::debug!("[nav] wheel {:.0}px -> section {}", delta, change.to);
            nav::apply_nav_change(&w, change);
        }
    });
}
