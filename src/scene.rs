//! Bridge to the three.js scene host (`window.mascotScene`, see
//! `web/scene-host.js`). The host draws; everything it draws is decided here.

use crate::constants::SCENE_HOST_GLOBAL;
use crate::dom::js_err;
use mascot_core::{HeadTarget, MascotRig, MascotTransform, RigReport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mascotScene, js_name = loadMascot, catch)]
    fn host_load_mascot(url: &str) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_namespace = mascotScene, js_name = bindHead)]
    fn host_bind_head(from_skeleton: bool, index: u32);

    #[wasm_bindgen(js_namespace = mascotScene, js_name = playClip)]
    fn host_play_clip(name: &str);

    #[wasm_bindgen(js_namespace = mascotScene, js_name = stopClip)]
    fn host_stop_clip(name: &str);

    #[wasm_bindgen(js_namespace = mascotScene, js_name = updateMixer)]
    fn host_update_mixer(dt_sec: f32);

    #[wasm_bindgen(js_namespace = mascotScene, js_name = setTransform)]
    fn host_set_transform(values: &[f32]);

    #[wasm_bindgen(js_namespace = mascotScene, js_name = setHeadRotation)]
    fn host_set_head_rotation(pitch: f32, yaw: f32);

    #[wasm_bindgen(js_namespace = mascotScene, js_name = resize)]
    fn host_resize(width: f64, height: f64, pixel_ratio: f64);

    #[wasm_bindgen(js_namespace = mascotScene, js_name = render)]
    fn host_render();
}

/// `true` when the page loaded the scene host script.
pub fn host_available() -> bool {
    web::window()
        .map(|w| {
            js_sys::Reflect::get(&w, &JsValue::from_str(SCENE_HOST_GLOBAL))
                .map(|v| v.is_object())
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

fn string_list(obj: &JsValue, key: &str) -> Vec<String> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.dyn_into::<js_sys::Array>().ok())
        .map(|arr| arr.iter().filter_map(|v| v.as_string()).collect())
        .unwrap_or_default()
}

/// Load the mascot asset and describe what it contains.
pub async fn load_mascot(url: &str) -> anyhow::Result<RigReport> {
    let promise = host_load_mascot(url).map_err(js_err)?;
    let value = JsFuture::from(promise).await.map_err(js_err)?;
    let report = RigReport {
        clips: string_list(&value, "clips"),
        nodes: string_list(&value, "nodes"),
        skeleton_bones: string_list(&value, "bones"),
    };
    log::info!(
        "[scene] mascot loaded: {} clips, {} nodes, {} bones",
        report.clips.len(),
        report.nodes.len(),
        report.skeleton_bones.len()
    );
    log::debug!("[scene] available animations: {:?}", report.clips);
    Ok(report)
}

/// Point the host's head rotation at the object [`HeadTarget`] resolved to.
pub fn bind_head(head: &HeadTarget) {
    let Ok(index) = u32::try_from(head.index) else {
        log::warn!("[scene] head index {} out of range", head.index);
        return;
    };
    log::debug!("[scene] binding head {} ({:?})", head.name, head.source);
    host_bind_head(head.in_skeleton(), index);
}

pub fn resize(width: f64, height: f64, pixel_ratio: f64) {
    host_resize(width, height, pixel_ratio);
}

pub fn render() {
    host_render();
}

/// [`MascotRig`] backed by the scene host.
#[derive(Default)]
pub struct SceneRig;

impl MascotRig for SceneRig {
    fn play_clip(&mut self, clip: &str) {
        host_play_clip(clip);
    }

    fn stop_clip(&mut self, clip: &str) {
        host_stop_clip(clip);
    }

    fn advance_mixer(&mut self, dt_sec: f32) {
        host_update_mixer(dt_sec);
    }

    fn set_transform(&mut self, transform: &MascotTransform) {
        host_set_transform(transform.as_floats());
    }

    fn set_head_rotation(&mut self, pitch: f32, yaw: f32) {
        host_set_head_rotation(pitch, yaw);
    }
}
