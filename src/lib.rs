#![cfg(target_arch = "wasm32")]
use glam::Vec2;
use instant::Instant;
use portfolio_core::{LoopHandle, RippleEngine, VisualizerParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod ambient;
mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod sounds;

use constants::{PARAM_ATTRS, PROFILE_CONTAINER};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    dom::on_dom_ready(|| {
        let Some(document) = dom::window_document() else {
            log::error!("init error: no document");
            return;
        };
        let sounds = Rc::new(RefCell::new(sounds::UiSoundPlayer::new()));
        if let Err(e) = init_visualizer(&document, sounds.clone()) {
            log::error!("visualizer init error: {:?}", e);
        }
        if let Err(e) = events::init_page(&document, &sounds) {
            log::error!("page init error: {:?}", e);
        }
    });
    Ok(())
}

/// Defaults, overridden by `data-audio-*` attributes on the profile container.
fn read_params(container: Option<&web::HtmlElement>) -> VisualizerParams {
    let mut params = VisualizerParams::default();
    let Some(container) = container else {
        return params;
    };
    for key in PARAM_ATTRS {
        if let Some(value) = container.get_attribute(&format!("data-{}", key)) {
            if let Err(e) = params.apply_override(key, &value) {
                log::warn!("[params] ignoring override: {}", e);
            }
        }
    }
    params
}

fn init_visualizer(
    document: &web::Document,
    sounds: Rc<RefCell<sounds::UiSoundPlayer>>,
) -> anyhow::Result<()> {
    let container = dom::query(document, PROFILE_CONTAINER);
    let params = read_params(container.as_ref());

    let audio = audio::create_ambient_audio(&params)?;
    let canvas = render::create_canvas(document, &params)?;
    let mute_control = overlay::MuteControl::create(document)?;
    let notice = overlay::NoticeBanner::create(document)?;

    let ambient =
        ambient::Ambient::new(audio, canvas.clone(), params, sounds, notice, mute_control);
    ambient.wire_media_events();
    ambient.wire_controls();
    ambient.with_controller(|c, out| c.start(out));

    // Without an attach point nothing is drawn, but audio still plays.
    match render::attach_canvas(container.as_ref(), &canvas) {
        Ok(()) => {
            let half = ambient.params.canvas_size_px as f32 / 2.0;
            let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
                engine: RippleEngine::with_rng(Vec2::splat(half), StdRng::from_entropy()),
                surface: render::CanvasSurface::new(&canvas)?,
                controller: ambient.controller.clone(),
                bridge: ambient.bridge.clone(),
                started: Instant::now(),
            }));
            frame::start_loop(frame_ctx, LoopHandle::new());
        }
        Err(e) => log::error!("[visualizer] {}", e),
    }
    Ok(())
}
