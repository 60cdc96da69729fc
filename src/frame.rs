use crate::audio::WebAnalyser;
use crate::render::CanvasSurface;
use instant::Instant;
use portfolio_core::{AnalysisBridge, FrameInput, LoopHandle, PlaybackController, RippleEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: RippleEngine,
    pub surface: CanvasSurface,
    pub controller: Rc<RefCell<PlaybackController>>,
    pub bridge: Rc<RefCell<AnalysisBridge<WebAnalyser>>>,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let playback = self.controller.borrow().state();
        let mut bridge = self.bridge.borrow_mut();
        // sample at most once per frame, and only when it can matter
        let spectrum = if playback.audible() {
            bridge.sample()
        } else {
            None
        };
        self.engine.frame(
            FrameInput { playback, spectrum },
            now_ms,
            &mut self.surface,
        );
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` until `handle` is cancelled.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, handle: LoopHandle) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if handle.is_cancelled() {
            log::info!("[frame] loop stopped");
            // dropping the closure ends the loop
            _ = tick_clone.borrow_mut().take();
            return;
        }
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
