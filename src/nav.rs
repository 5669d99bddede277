use crate::constants::{
    BESPOKE_SECTION_ATTR, NAV_DOTS_ID, NAV_DOT_ACTIVE_CLASS, SECTIONS_CONTAINER_ID,
    SECTION_SELECTOR,
};
use crate::dom::{self, Clock};
use crate::scene::SceneRig;
use crate::video;
use mascot_core::{
    section_phase, MascotController, NavChange, OneShotVideo, SectionNavigator, PHASE_CLASSES,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Section elements, their container and the generated nav dots.
pub struct SectionDom {
    container: Option<web::HtmlElement>,
    pub sections: Vec<web::Element>,
    bespoke: Vec<bool>,
    pub dots: Vec<web::Element>,
}

impl SectionDom {
    /// Collect sections and create one dot button per section.
    pub fn build(document: &web::Document) -> Self {
        let container = document
            .get_element_by_id(SECTIONS_CONTAINER_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        let sections = dom::query_all(document, SECTION_SELECTOR);
        let bespoke = sections
            .iter()
            .map(|s| s.has_attribute(BESPOKE_SECTION_ATTR))
            .collect();

        let mut dots = Vec::with_capacity(sections.len());
        if let Some(holder) = document.get_element_by_id(NAV_DOTS_ID) {
            for i in 0..sections.len() {
                let Ok(dot) = document.create_element("button") else {
                    continue;
                };
                _ = dot.set_attribute("aria-label", &format!("Go to section {}", i + 1));
                _ = dot.set_attribute("type", "button");
                if holder.append_child(&dot).is_ok() {
                    dots.push(dot);
                }
            }
        } else {
            log::warn!("[nav] missing #{}; dots disabled", NAV_DOTS_ID);
        }

        Self {
            container,
            sections,
            bespoke,
            dots,
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    fn apply_scroll(&self, scroll_offset_vh: f64) {
        if let Some(c) = &self.container {
            _ = c
                .style()
                .set_property("transform", &format!("translateY(-{}vh)", scroll_offset_vh));
        }
    }

    fn apply_dots(&self, highlighted: &[bool]) {
        for (dot, &on) in self.dots.iter().zip(highlighted) {
            dom::set_class(dot, NAV_DOT_ACTIVE_CLASS, on);
            _ = dot.set_attribute("aria-current", if on { "true" } else { "false" });
        }
    }

    fn apply_phases(&self, current: usize) {
        for (i, section) in self.sections.iter().enumerate() {
            if !self.bespoke[i] {
                continue;
            }
            let phase = section_phase(i, current);
            for class in PHASE_CLASSES {
                dom::set_class(section, class, phase.classes().contains(&class));
            }
        }
    }
}

#[derive(Clone)]
pub struct NavWiring {
    pub navigator: Rc<RefCell<SectionNavigator>>,
    pub mascot: Rc<RefCell<MascotController>>,
    pub rig: Rc<RefCell<SceneRig>>,
    pub sections: Rc<SectionDom>,
    pub one_shot: Option<OneShotVideo>,
    pub clock: Clock,
}

/// Apply an accepted section change: scroll, dots, section video, mascot,
/// then section classes.
pub fn apply_nav_change(w: &NavWiring, change: NavChange) {
    w.sections.apply_scroll(change.scroll_offset_vh);
    let dots = w.navigator.borrow().dot_states();
    w.sections.apply_dots(&dots);

    if let Some(one_shot) = w.one_shot {
        if let Some(cmd) = one_shot.on_section_change(change.from, change.to) {
            video::apply_one_shot(&w.sections.sections, one_shot.section, cmd);
        }
    }

    {
        let now = w.clock.now_ms();
        let mut mascot = w.mascot.borrow_mut();
        let pose_index = mascot.layout().pose_index_for_section(change.to);
        let mut rig = w.rig.borrow_mut();
        mascot.move_to_section(pose_index, now, &mut *rig);
    }

    w.sections.apply_phases(change.to);
}

/// Re-apply scroll, dots and classes for the current section without
/// retargeting the mascot.
pub fn refresh_presentation(w: &NavWiring) {
    let (current, dots) = {
        let nav = w.navigator.borrow();
        (nav.current(), nav.dot_states())
    };
    w.sections.apply_scroll(SectionNavigator::scroll_offset_vh(current));
    w.sections.apply_dots(&dots);
    w.sections.apply_phases(current);
}

pub fn wire_nav_dots(w: &NavWiring) {
    for (i, dot) in w.sections.dots.iter().enumerate() {
        let w = w.clone();
        dom::listen(dot, "click", move |_ev: web::MouseEvent| {
            let change = w.navigator.borrow_mut().go_to(i);
            if let Some(change) = change {
                apply_nav_change(&w, change);
            }
        });
    }
}
