use fnv::FnvHashMap;
use portfolio_core::constants::UI_SOUND_VOLUME;
use portfolio_core::{MuteSync, SoundKind, UiSounds};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Plays UI clips picked by [`UiSounds`], one at a time.
pub struct UiSoundPlayer {
    bank: UiSounds,
    clips: FnvHashMap<&'static str, web::HtmlAudioElement>,
    current: Option<web::HtmlAudioElement>,
}

impl UiSoundPlayer {
    pub fn new() -> Self {
        let mut clips = FnvHashMap::default();
        for path in UiSounds::all_clips() {
            match web::HtmlAudioElement::new_with_src(path) {
                Ok(a) => {
                    a.set_volume(UI_SOUND_VOLUME);
                    a.set_preload("auto");
                    clips.insert(path, a);
                }
                Err(e) => log::error!("[sounds] {} Audio error: {:?}", path, e),
            }
        }
        log::info!("[sounds] {} UI clips loaded", clips.len());
        Self {
            bank: UiSounds::new(),
            clips,
            current: None,
        }
    }

    pub fn play(&mut self, kind: SoundKind) {
        let Some(path) = self.bank.next_clip(kind) else {
            return;
        };
        if let Some(prev) = self.current.take() {
            _ = prev.pause();
            prev.set_current_time(0.0);
        }
        let Some(clip) = self
            .clips
            .get(path)
            .and_then(|a| a.clone_node().ok())
            .and_then(|n| n.dyn_into::<web::HtmlAudioElement>().ok())
        else {
            return;
        };
        // clones do not inherit the volume property
        clip.set_volume(UI_SOUND_VOLUME);
        let media: web::HtmlMediaElement = clip.clone().into();
        spawn_local(async move {
            if let Err(e) = crate::audio::play(&media).await {
                log::info!("[sounds] play prevented ({:?}): {:?}", kind, e);
            }
        });
        self.current = Some(clip);
    }
}

impl MuteSync for UiSoundPlayer {
    fn sync_mute_state(&mut self, muted: bool) {
        self.bank.sync_mute_state(muted);
    }
}
