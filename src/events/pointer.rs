use crate::dom;
use crate::input;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keep `pointer` at the latest cursor position in NDC; the frame loop
/// reads it for head tracking.
pub fn wire_pointer_tracking(pointer: Rc<RefCell<Vec2>>) {
    let Some(window) = web::window() else {
        return;
    };
    dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
        let (width, height) = dom::viewport_size();
        *pointer.borrow_mut() =
            input::client_to_ndc(ev.client_x() as f64, ev.client_y() as f64, width, height);
    });
}
