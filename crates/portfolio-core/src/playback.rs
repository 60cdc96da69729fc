//! Ambient-track playback policy.
//!
//! The controller never touches the audio element directly. Each operation
//! appends [`PlaybackCommand`]s to an output vector; the web frontend executes
//! them and reports asynchronous outcomes (the `play()` promise, media
//! events, clicks) back through the `on_*` methods.

use crate::constants::{
    ANALYSIS_DELAY_MS, MUTED_CANVAS_OPACITY, NOTICE_ENABLE_AUDIO, NOTICE_LOAD_ERROR,
};
use crate::engine::PlaybackState;

/// Why a `play()` call was issued; echoed back with its outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayAttempt {
    Autoplay,
    GestureRetry,
    Unmute,
    LoadRetry,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    EnableAudio,
    LoadError,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::EnableAudio => NOTICE_ENABLE_AUDIO,
            Notice::LoadError => NOTICE_LOAD_ERROR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackCommand {
    Play(PlayAttempt),
    Pause,
    Reload,
    SetCanvasOpacity(f32),
    SetMuteIcon(bool),
    SyncUiMute(bool),
    ShowNotice(Notice),
    HideNotice,
    /// Register the one-shot document click listener.
    ArmGestureRetry,
    DisarmGestureRetry,
    ScheduleAnalysis { delay_ms: u32 },
}

/// Receives mute changes from the ambient controller.
pub trait MuteSync {
    fn sync_mute_state(&mut self, muted: bool);
}

#[derive(Clone, Debug, Default)]
pub struct PlaybackController {
    state: PlaybackState,
    gesture_armed: bool,
    notice: Option<Notice>,
    analysis_requested: bool,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    #[inline]
    pub fn gesture_armed(&self) -> bool {
        self.gesture_armed
    }

    pub fn start(&mut self, out: &mut Vec<PlaybackCommand>) {
        out.push(PlaybackCommand::Play(PlayAttempt::Autoplay));
    }

    pub fn on_play_resolved(&mut self, attempt: PlayAttempt, out: &mut Vec<PlaybackCommand>) {
        log::info!("[playback] playing ({:?})", attempt);
        self.state.is_playing = true;
        let user_started = matches!(attempt, PlayAttempt::GestureRetry | PlayAttempt::Unmute);
        if user_started && self.notice == Some(Notice::EnableAudio) {
            self.hide_notice(out);
        }
    }

    pub fn on_play_rejected(&mut self, attempt: PlayAttempt, out: &mut Vec<PlaybackCommand>) {
        match attempt {
            PlayAttempt::Autoplay | PlayAttempt::LoadRetry => {
                log::warn!("[playback] {:?} blocked; waiting for a user gesture", attempt);
                self.show_notice(Notice::EnableAudio, out);
                if !self.gesture_armed {
                    self.gesture_armed = true;
                    out.push(PlaybackCommand::ArmGestureRetry);
                }
            }
            PlayAttempt::GestureRetry | PlayAttempt::Unmute => {
                log::error!("[playback] {:?} still could not start audio", attempt);
            }
        }
    }

    /// Any click on the page. Only the first one after a blocked start does
    /// anything; the listener is dropped whatever the retry's outcome.
    ///
    /// A click that muted the track (the mute icon) still disarms the retry
    /// but does not play; unmuting starts playback instead.
    pub fn on_gesture(&mut self, out: &mut Vec<PlaybackCommand>) {
        if !self.gesture_armed {
            return;
        }
        self.gesture_armed = false;
        out.push(PlaybackCommand::DisarmGestureRetry);
        if self.state.is_muted {
            log::info!("[playback] muted; skipping gesture retry");
            return;
        }
        out.push(PlaybackCommand::Play(PlayAttempt::GestureRetry));
    }

    pub fn toggle_mute(&mut self, out: &mut Vec<PlaybackCommand>) {
        let muted = !self.state.is_muted;
        self.state.is_muted = muted;
        if muted {
            out.push(PlaybackCommand::Pause);
            out.push(PlaybackCommand::SetCanvasOpacity(MUTED_CANVAS_OPACITY));
        } else {
            out.push(PlaybackCommand::Play(PlayAttempt::Unmute));
            out.push(PlaybackCommand::SetCanvasOpacity(1.0));
        }
        out.push(PlaybackCommand::SetMuteIcon(muted));
        out.push(PlaybackCommand::SyncUiMute(muted));
    }

    /// Media element `play` event.
    pub fn on_playing(&mut self, out: &mut Vec<PlaybackCommand>) {
        self.state.is_playing = true;
        if !self.analysis_requested {
            self.analysis_requested = true;
            out.push(PlaybackCommand::ScheduleAnalysis {
                delay_ms: ANALYSIS_DELAY_MS,
            });
        }
    }

    /// Media element `pause` event.
    pub fn on_paused(&mut self) {
        self.state.is_playing = false;
    }

    /// The delayed analyser construction found the audio paused; the next
    /// `play` event schedules it again.
    pub fn analysis_deferred(&mut self) {
        log::info!("[analysis] audio still paused; deferring");
        self.analysis_requested = false;
    }

    /// Media element `error` event.
    pub fn on_load_error(&mut self, out: &mut Vec<PlaybackCommand>) {
        log::error!("[playback] error loading ambient track");
        self.show_notice(Notice::LoadError, out);
    }

    pub fn on_notice_clicked(&mut self, out: &mut Vec<PlaybackCommand>) {
        if self.notice != Some(Notice::LoadError) {
            return;
        }
        out.push(PlaybackCommand::Reload);
        out.push(PlaybackCommand::Play(PlayAttempt::LoadRetry));
        self.hide_notice(out);
    }

    fn show_notice(&mut self, notice: Notice, out: &mut Vec<PlaybackCommand>) {
        self.notice = Some(notice);
        out.push(PlaybackCommand::ShowNotice(notice));
    }

    fn hide_notice(&mut self, out: &mut Vec<PlaybackCommand>) {
        self.notice = None;
        out.push(PlaybackCommand::HideNotice);
    }
}
