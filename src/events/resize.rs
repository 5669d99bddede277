use crate::dom;
use crate::nav::{self, NavWiring};
use crate::scene;
use mascot_core::{layout_for_width, Camera};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct ResizeWiring {
    pub nav: NavWiring,
    pub camera: Rc<RefCell<Camera>>,
}

/// Resize the scene and camera; when the width crosses a tier boundary,
/// snap the mascot onto the new tier's pose (and clip) for the current
/// section.
pub fn apply_viewport(w: &ResizeWiring) {
    let (width, height) = dom::viewport_size();
    w.camera.borrow_mut().set_viewport(width, height);

    let layout = layout_for_width(width);
    if scene::host_available() {
        let dpr = web::window().map(|win| win.device_pixel_ratio()).unwrap_or(1.0);
        scene::resize(width, height, layout.tier.pixel_ratio(dpr));
    }

    let section = w.nav.navigator.borrow().current();
    let now_ms = w.nav.clock.now_ms();
    let changed = {
        let mut rig = w.nav.rig.borrow_mut();
        w.nav
            .mascot
            .borrow_mut()
            .apply_layout(layout, section, now_ms, &mut *rig)
    };
    if changed {
        nav::refresh_presentation(&w.nav);
    }
}

pub fn wire_resize(w: ResizeWiring) {
    let Some(window) = web::window() else {
        return;
    };
    dom::listen(&window, "resize", move |_ev: web::Event| apply_viewport(&w));
}
