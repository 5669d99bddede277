use crate::carousel::CarouselWiring;
use crate::dom::Clock;
use crate::scene::{self, SceneRig};
use glam::Vec2;
use instant::Instant;
use mascot_core::{Camera, MascotController, HEAD_DEBUG_SAMPLE_RATE};
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub mascot: Rc<RefCell<MascotController>>,
    pub rig: Rc<RefCell<SceneRig>>,
    pub camera: Rc<RefCell<Camera>>,
    pub pointer: Rc<RefCell<Vec2>>,
    pub carousel: Option<CarouselWiring>,
    pub clock: Clock,
    pub last_instant: Instant,
    pub rng: StdRng,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let now_ms = self.clock.now_ms();

        if let Some(carousel) = &self.carousel {
            carousel.tick();
        }

        let pointer = *self.pointer.borrow();
        let loaded = {
            let mut mascot = self.mascot.borrow_mut();
            let mut rig = self.rig.borrow_mut();
            mascot.frame(now_ms, dt_sec, pointer, &self.camera.borrow(), &mut *rig);
            mascot.is_loaded()
        };
        if !loaded {
            return;
        }

        if self.rng.gen_bool(HEAD_DEBUG_SAMPLE_RATE) {
            let mascot = self.mascot.borrow();
            let head = mascot.head();
            log::debug!(
                "[mascot] head pitch={:.3} yaw={:.3} pos=({:.2},{:.2},{:.2}) tween={}",
                head.pitch,
                head.yaw,
                mascot.position().x,
                mascot.position().y,
                mascot.position().z,
                mascot.tween_in_flight()
            );
        }
        scene::render();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
