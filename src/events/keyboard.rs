use crate::dom;
use crate::input;
use crate::nav::{self, NavWiring};
use mascot_core::nav_target_for_key;
use wasm_bindgen::JsCast;
use web_sys as web;

fn typing_into_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| input::is_text_entry_tag(&el.tag_name()))
        .unwrap_or(false)
}

/// Arrow/Page/Home/End move between sections, except while typing.
pub fn wire_nav_keys(w: &NavWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    dom::listen(&window, "keydown", move |ev: web::KeyboardEvent| {
        let key = ev.key();
        if nav_target_for_key(&key).is_none() || typing_into_field(&ev) {
            return;
        }
        ev.prevent_default();
        let change = w.navigator.borrow_mut().on_key(&key);
        if let Some(change) = change {
            nav::apply_nav_change(&w, change);
        }
    });
}
