#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, SCENE_HOST_GLOBAL};
use crate::dom::Clock;
use crate::events::ResizeWiring;
use crate::nav::NavWiring;
use crate::scene::SceneRig;
use glam::Vec2;
use instant::Instant;
use mascot_core::{
    layout_for_width, Camera, Locale, MascotController, OneShotVideo, SectionNavigator,
    SiteConfig, OVERRIDE_KEYS,
};
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod a11y;
mod carousel;
mod constants;
mod contact;
mod dom;
mod events;
mod frame;
mod input;
mod nav;
mod scene;
mod video;

/// Shipped defaults, then `<html lang>`, then `data-*` on `<body>`.
fn site_config(document: &web::Document) -> SiteConfig {
    let mut config = SiteConfig::default();
    if let Some(locale) = document
        .document_element()
        .and_then(|el| el.get_attribute("lang"))
        .and_then(|lang| Locale::from_tag(&lang))
    {
        config.locale = locale;
    }
    for key in OVERRIDE_KEYS {
        if let Some(value) = dom::body_data(document, key) {
            if config.apply_override(key, &value) {
                log::info!("[config] {} = {}", key, value);
            }
        }
    }
    config
}

/// Load the mascot in the background; the page is fully usable meanwhile.
fn spawn_mascot_load(url: String, w: ResizeWiring) {
    spawn_local(async move {
        let report = match scene::load_mascot(&url).await {
            Ok(r) => r,
            Err(e) => {
                log::error!("[scene] failed to load {}: {:?}", url, e);
                return;
            }
        };
        {
            let mut mascot = w.nav.mascot.borrow_mut();
            let mut rig = w.nav.rig.borrow_mut();
            mascot.attach(&report, &mut *rig);
            if let Some(head) = mascot.head_target() {
                scene::bind_head(head);
            }
            // the visitor may have scrolled before the asset arrived
            let current = w.nav.navigator.borrow().current();
            if current != 0 {
                let pose = mascot.layout().pose_index_for_section(current);
                mascot.move_to_section(pose, w.nav.clock.now_ms(), &mut *rig);
            }
        }
        events::apply_viewport(&w);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mascot-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = site_config(&document);
    let clock = Clock::start();
    let (width, height) = dom::viewport_size();
    let layout = layout_for_width(width);
    log::info!("[init] viewport {}x{} -> {:?}", width, height, layout.tier);

    // ---------------- Shared state ----------------
    let sections = Rc::new(nav::SectionDom::build(&document));
    let navigator = Rc::new(RefCell::new(SectionNavigator::new(sections.len())));
    let mascot = Rc::new(RefCell::new(MascotController::new(layout)));
    let rig = Rc::new(RefCell::new(SceneRig));
    let mut camera = Camera::page(1.0);
    camera.set_viewport(width, height);
    let camera = Rc::new(RefCell::new(camera));
    let pointer = Rc::new(RefCell::new(Vec2::ZERO));

    let nav_w = NavWiring {
        navigator,
        mascot: mascot.clone(),
        rig: rig.clone(),
        sections,
        one_shot: config
            .one_shot_video_section
            .map(|section| OneShotVideo { section }),
        clock,
    };
    let resize_w = ResizeWiring {
        nav: nav_w.clone(),
        camera: camera.clone(),
    };

    // ---------------- Sections and input ----------------
    nav::refresh_presentation(&nav_w);
    nav::wire_nav_dots(&nav_w);
    events::wire_wheel(&nav_w);
    events::wire_touch(&nav_w);
    events::wire_nav_keys(&nav_w);
    events::wire_pointer_tracking(pointer.clone());
    events::wire_resize(resize_w.clone());

    // ---------------- Page widgets ----------------
    video::swap_handheld_hero(&document, layout.tier, &config.handheld_hero_video);
    video::wire_click_toggle(&document);
    let carousel = carousel::wire_carousel(&document, clock);
    contact::wire_contact_form(&document, &config, clock);
    a11y::wire_preferences(&document);
    a11y::wire_panel(&document);

    // ---------------- Mascot ----------------
    if document.get_element_by_id(CANVAS_ID).is_none() {
        log::warn!("[scene] missing #{}", CANVAS_ID);
    }
    if scene::host_available() {
        spawn_mascot_load(config.mascot_url.clone(), resize_w);
    } else {
        log::warn!(
            "[scene] window.{} not found; running without the mascot",
            SCENE_HOST_GLOBAL
        );
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        mascot,
        rig,
        camera,
        pointer,
        carousel,
        clock,
        last_instant: Instant::now(),
        rng: StdRng::from_entropy(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
