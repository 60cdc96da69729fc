//! Executes the playback controller's commands against the page.

use crate::audio::{self, WebAnalyser};
use crate::constants::PLAYING_CLASS;
use crate::dom;
use crate::overlay::{MuteControl, NoticeBanner};
use crate::sounds::UiSoundPlayer;
use portfolio_core::{
    AnalysisBridge, MuteSync, PlayAttempt, PlaybackCommand, PlaybackController, VisualizerError,
    VisualizerParams,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct Ambient {
    pub audio: web::HtmlAudioElement,
    pub canvas: web::HtmlCanvasElement,
    pub params: VisualizerParams,
    pub controller: Rc<RefCell<PlaybackController>>,
    pub bridge: Rc<RefCell<AnalysisBridge<WebAnalyser>>>,
    pub sounds: Rc<RefCell<UiSoundPlayer>>,
    pub notice: NoticeBanner,
    pub mute_control: MuteControl,
    gesture: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Ambient {
    pub fn new(
        audio: web::HtmlAudioElement,
        canvas: web::HtmlCanvasElement,
        params: VisualizerParams,
        sounds: Rc<RefCell<UiSoundPlayer>>,
        notice: NoticeBanner,
        mute_control: MuteControl,
    ) -> Rc<Self> {
        Rc::new(Self {
            audio,
            canvas,
            params,
            controller: Rc::new(RefCell::new(PlaybackController::new())),
            bridge: Rc::new(RefCell::new(AnalysisBridge::new())),
            sounds,
            notice,
            mute_control,
            gesture: RefCell::new(None),
        })
    }

    /// Run `f` against the controller, then execute whatever it emitted.
    pub fn with_controller(
        self: &Rc<Self>,
        f: impl FnOnce(&mut PlaybackController, &mut Vec<PlaybackCommand>),
    ) {
        let mut out = Vec::new();
        f(&mut self.controller.borrow_mut(), &mut out);
        for cmd in out {
            self.execute(cmd);
        }
    }

    fn execute(self: &Rc<Self>, cmd: PlaybackCommand) {
        match cmd {
            PlaybackCommand::Play(attempt) => self.play(attempt),
            PlaybackCommand::Pause => {
                _ = self.audio.pause();
            }
            PlaybackCommand::Reload => self.audio.load(),
            PlaybackCommand::SetCanvasOpacity(o) => {
                dom::set_style(&self.canvas, "opacity", &o.to_string())
            }
            PlaybackCommand::SetMuteIcon(muted) => self.mute_control.set_muted(muted),
            PlaybackCommand::SyncUiMute(muted) => self.sounds.borrow_mut().sync_mute_state(muted),
            PlaybackCommand::ShowNotice(n) => self.notice.show(n.message()),
            PlaybackCommand::HideNotice => self.notice.hide(),
            PlaybackCommand::ArmGestureRetry => self.arm_gesture(),
            PlaybackCommand::DisarmGestureRetry => self.disarm_gesture(),
            PlaybackCommand::ScheduleAnalysis { delay_ms } => {
                let this = self.clone();
                dom::set_timeout(delay_ms, move || this.build_analysis());
            }
        }
    }

    fn play(self: &Rc<Self>, attempt: PlayAttempt) {
        let this = self.clone();
        spawn_local(async move {
            match audio::play(&this.audio).await {
                Ok(()) => this.with_controller(|c, out| c.on_play_resolved(attempt, out)),
                Err(e) => {
                    let err = VisualizerError::Playback(format!("{:?}", e));
                    log::warn!("[playback] {:?}: {}", attempt, err);
                    this.with_controller(|c, out| c.on_play_rejected(attempt, out));
                }
            }
        });
    }

    /// One-shot document click that retries playback.
    fn arm_gesture(self: &Rc<Self>) {
        let Some(document) = dom::window_document() else {
            return;
        };
        let weak = Rc::downgrade(self);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(this) = weak.upgrade() {
                this.with_controller(|c, out| c.on_gesture(out));
            }
        }) as Box<dyn FnMut()>);
        _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        // any previous closure was already detached by disarm_gesture
        *self.gesture.borrow_mut() = Some(closure);
    }

    fn disarm_gesture(&self) {
        let Some(document) = dom::window_document() else {
            return;
        };
        if let Some(closure) = self.gesture.borrow().as_ref() {
            _ = document
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }

    fn build_analysis(self: &Rc<Self>) {
        if self.audio.paused() {
            self.controller.borrow_mut().analysis_deferred();
            return;
        }
        let attached = self
            .bridge
            .borrow_mut()
            .attach_with(|| audio::create_analyser(&self.audio, &self.params));
        if attached {
            _ = self.canvas.class_list().add_1(PLAYING_CLASS);
        }
    }

    /// Media element events feeding the controller. The listeners live for
    /// the whole page and keep the player alive.
    pub fn wire_media_events(self: &Rc<Self>) {
        let target: &web::EventTarget = self.audio.as_ref();

        let this = self.clone();
        dom::add_listener(target, "play", move || {
            log::info!("[playback] ambient track playing");
            this.with_controller(|c, out| c.on_playing(out));
        });

        let this = self.clone();
        dom::add_listener(target, "pause", move || {
            log::info!("[playback] ambient track paused");
            this.controller.borrow_mut().on_paused();
        });

        let this = self.clone();
        dom::add_listener(target, "error", move || {
            this.with_controller(|c, out| c.on_load_error(out));
        });

        dom::add_listener(target, "canplaythrough", || {
            log::info!("[playback] ambient track loaded");
        });
    }

    /// Mute icon and notice banner clicks.
    pub fn wire_controls(self: &Rc<Self>) {
        let this = self.clone();
        dom::add_listener(self.mute_control.element().as_ref(), "click", move || {
            this.with_controller(|c, out| c.toggle_mute(out));
        });

        let this = self.clone();
        dom::add_listener(self.notice.element().as_ref(), "click", move || {
            this.with_controller(|c, out| c.on_notice_clicked(out));
        });
    }
}
