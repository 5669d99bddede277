use crate::constants::HERO_VIDEO_SOURCE_SELECTOR;
use crate::dom;
use mascot_core::{DeviceTier, VideoCommand};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Phones get the portrait hero clip. Chosen once at load.
pub fn swap_handheld_hero(document: &web::Document, tier: DeviceTier, src: &str) {
    if !tier.is_handheld() {
        return;
    }
    let Ok(Some(source)) = document.query_selector(HERO_VIDEO_SOURCE_SELECTOR) else {
        return;
    };
    _ = source.set_attribute("src", src);
    if let Some(video) = source
        .parent_element()
        .and_then(|p| p.dyn_into::<web::HtmlMediaElement>().ok())
    {
        video.load();
        log::info!("[video] loaded handheld hero video {}", src);
    }
}

fn section_video(sections: &[web::Element], section: usize) -> Option<web::HtmlMediaElement> {
    sections
        .get(section)?
        .query_selector("video")
        .ok()
        .flatten()?
        .dyn_into::<web::HtmlMediaElement>()
        .ok()
}

pub fn apply_one_shot(sections: &[web::Element], section: usize, cmd: VideoCommand) {
    let Some(video) = section_video(sections, section) else {
        return;
    };
    match cmd {
        VideoCommand::PlayFromStart => {
            video.set_loop(false);
            video.set_current_time(0.0);
            // autoplay policies may reject; the poster frame stays up
            _ = video.play();
            log::info!("[video] section {} video started", section);
        }
        VideoCommand::PauseAndRewind => {
            _ = video.pause();
            video.set_current_time(0.0);
        }
    }
}

/// Clicking any video toggles play/pause.
pub fn wire_click_toggle(document: &web::Document) {
    for el in dom::query_all(document, "video") {
        let Ok(video) = el.dyn_into::<web::HtmlMediaElement>() else {
            continue;
        };
        let target = video.clone();
        dom::listen(&video, "click", move |_ev: web::MouseEvent| {
            if target.paused() {
                _ = target.play();
            } else {
                _ = target.pause();
            }
        });
    }
}
