// Host-side tests for the playback controller and the analysis bridge.

use portfolio_core::constants::{ANALYSIS_DELAY_MS, NOTICE_ENABLE_AUDIO, NOTICE_LOAD_ERROR};
use portfolio_core::PlaybackCommand::*;
use portfolio_core::*;
use std::cell::Cell;
use std::rc::Rc;

fn run(f: impl FnOnce(&mut Vec<PlaybackCommand>)) -> Vec<PlaybackCommand> {
    let mut out = Vec::new();
    f(&mut out);
    out
}

#[test]
fn blocked_autoplay_waits_for_a_single_gesture() {
    let mut c = PlaybackController::new();
    assert_eq!(run(|o| c.start(o)), vec![Play(PlayAttempt::Autoplay)]);

    let cmds = run(|o| c.on_play_rejected(PlayAttempt::Autoplay, o));
    assert_eq!(cmds, vec![ShowNotice(Notice::EnableAudio), ArmGestureRetry]);
    assert_eq!(c.notice(), Some(Notice::EnableAudio));
    assert_eq!(Notice::EnableAudio.message(), NOTICE_ENABLE_AUDIO);
    assert!(c.gesture_armed());
    assert!(!c.state().is_playing);

    let cmds = run(|o| c.on_gesture(o));
    assert_eq!(cmds, vec![DisarmGestureRetry, Play(PlayAttempt::GestureRetry)]);
    assert!(!c.gesture_armed());

    // A second click on the page does nothing.
    assert!(run(|o| c.on_gesture(o)).is_empty());

    let cmds = run(|o| c.on_play_resolved(PlayAttempt::GestureRetry, o));
    assert_eq!(cmds, vec![HideNotice]);
    assert_eq!(c.notice(), None);
    assert!(c.state().is_playing);

    // The notice is hidden exactly once.
    assert!(run(|o| c.on_play_resolved(PlayAttempt::GestureRetry, o)).is_empty());
}

#[test]
fn gestures_before_a_blocked_start_are_ignored() {
    let mut c = PlaybackController::new();
    assert!(run(|o| c.on_gesture(o)).is_empty());
    run(|o| c.start(o));
    assert!(run(|o| c.on_play_resolved(PlayAttempt::Autoplay, o)).is_empty());
    assert!(run(|o| c.on_gesture(o)).is_empty());
    assert!(c.state().is_playing);
}

#[test]
fn failed_gesture_retry_is_not_rearmed() {
    let mut c = PlaybackController::new();
    run(|o| c.on_play_rejected(PlayAttempt::Autoplay, o));
    run(|o| c.on_gesture(o));
    let cmds = run(|o| c.on_play_rejected(PlayAttempt::GestureRetry, o));
    assert!(cmds.is_empty());
    assert!(!c.gesture_armed());
    assert_eq!(c.notice(), Some(Notice::EnableAudio));
}

#[test]
fn muting_click_during_blocked_start_does_not_play() {
    let mut c = PlaybackController::new();
    run(|o| c.on_play_rejected(PlayAttempt::Autoplay, o));

    // The mute icon click toggles first, then bubbles to the document.
    let mut cmds = run(|o| c.toggle_mute(o));
    cmds.extend(run(|o| c.on_gesture(o)));
    assert_eq!(
        cmds,
        vec![
            Pause,
            SetCanvasOpacity(0.2),
            SetMuteIcon(true),
            SyncUiMute(true),
            DisarmGestureRetry,
        ]
    );
    assert!(c.state().is_muted);
    assert!(!c.gesture_armed());
    assert_eq!(c.notice(), Some(Notice::EnableAudio));

    // Unmuting starts playback and clears the notice once it resolves.
    let cmds = run(|o| c.toggle_mute(o));
    assert_eq!(cmds[0], Play(PlayAttempt::Unmute));
    assert_eq!(
        run(|o| c.on_play_resolved(PlayAttempt::Unmute, o)),
        vec![HideNotice]
    );
    assert_eq!(c.notice(), None);
    assert!(c.state().audible());
}

#[test]
fn repeated_rejection_arms_the_listener_once() {
    let mut c = PlaybackController::new();
    run(|o| c.on_play_rejected(PlayAttempt::Autoplay, o));
    let cmds = run(|o| c.on_play_rejected(PlayAttempt::LoadRetry, o));
    assert_eq!(cmds, vec![ShowNotice(Notice::EnableAudio)]);
}

#[test]
fn mute_pauses_and_dims_then_unmute_restores() {
    let mut c = PlaybackController::new();
    run(|o| c.on_playing(o));

    let cmds = run(|o| c.toggle_mute(o));
    assert_eq!(
        cmds,
        vec![Pause, SetCanvasOpacity(0.2), SetMuteIcon(true), SyncUiMute(true)]
    );
    assert!(c.state().is_muted);
    assert!(!c.state().audible());

    c.on_paused();
    assert!(!c.state().is_playing);

    let cmds = run(|o| c.toggle_mute(o));
    assert_eq!(
        cmds,
        vec![
            Play(PlayAttempt::Unmute),
            SetCanvasOpacity(1.0),
            SetMuteIcon(false),
            SyncUiMute(false),
        ]
    );
    assert!(!c.state().is_muted);
}

#[test]
fn failed_unmute_only_logs() {
    let mut c = PlaybackController::new();
    run(|o| c.toggle_mute(o));
    run(|o| c.toggle_mute(o));
    assert!(run(|o| c.on_play_rejected(PlayAttempt::Unmute, o)).is_empty());
    assert_eq!(c.notice(), None);
    assert!(!c.gesture_armed());
}

#[test]
fn analysis_is_scheduled_on_first_play_only() {
    let mut c = PlaybackController::new();
    let cmds = run(|o| c.on_playing(o));
    assert_eq!(
        cmds,
        vec![ScheduleAnalysis {
            delay_ms: ANALYSIS_DELAY_MS
        }]
    );
    assert_eq!(ANALYSIS_DELAY_MS, 100);

    c.on_paused();
    assert!(run(|o| c.on_playing(o)).is_empty());
}

#[test]
fn deferred_analysis_is_rescheduled_on_next_play() {
    let mut c = PlaybackController::new();
    run(|o| c.on_playing(o));
    c.on_paused();
    c.analysis_deferred();
    assert_eq!(
        run(|o| c.on_playing(o)),
        vec![ScheduleAnalysis {
            delay_ms: ANALYSIS_DELAY_MS
        }]
    );
}

#[test]
fn load_error_notice_retries_on_click() {
    let mut c = PlaybackController::new();
    assert_eq!(
        run(|o| c.on_load_error(o)),
        vec![ShowNotice(Notice::LoadError)]
    );
    assert_eq!(Notice::LoadError.message(), NOTICE_LOAD_ERROR);

    let cmds = run(|o| c.on_notice_clicked(o));
    assert_eq!(cmds, vec![Reload, Play(PlayAttempt::LoadRetry), HideNotice]);
    assert_eq!(c.notice(), None);

    // Clicking a hidden notice does nothing.
    assert!(run(|o| c.on_notice_clicked(o)).is_empty());
}

#[test]
fn enable_audio_notice_ignores_clicks() {
    let mut c = PlaybackController::new();
    run(|o| c.on_play_rejected(PlayAttempt::Autoplay, o));
    assert!(run(|o| c.on_notice_clicked(o)).is_empty());
    assert_eq!(c.notice(), Some(Notice::EnableAudio));
}

#[test]
fn mute_state_reaches_ui_sounds() {
    let mut c = PlaybackController::new();
    let mut sounds = UiSounds::new();
    for cmd in run(|o| c.toggle_mute(o)) {
        if let SyncUiMute(m) = cmd {
            sounds.sync_mute_state(m);
        }
    }
    assert!(sounds.is_muted());
    assert_eq!(sounds.next_clip(SoundKind::Click), None);
}

struct FakeSource {
    level: Rc<Cell<u8>>,
    bins: usize,
}

impl SpectrumSource for FakeSource {
    fn bin_count(&self) -> usize {
        self.bins
    }
    fn read_bytes(&self, out: &mut [u8]) {
        out.fill(self.level.get());
    }
}

#[test]
fn bridge_attaches_once_and_samples_live_data() {
    let level = Rc::new(Cell::new(10));
    let builds = Cell::new(0);
    let mut bridge = AnalysisBridge::new();
    assert_eq!(bridge.sample(), None);

    let build = || {
        builds.set(builds.get() + 1);
        Ok(FakeSource {
            level: level.clone(),
            bins: 128,
        })
    };
    assert!(bridge.attach_with(build));
    assert!(!bridge.attach_with(build));
    assert_eq!(builds.get(), 1);
    assert!(bridge.is_attached());

    assert_eq!(bridge.sample().map(|s| s.to_vec()), Some(vec![10; 128]));
    level.set(90);
    assert_eq!(bridge.sample().map(|s| s[0]), Some(90));
}

#[test]
fn failed_attach_is_permanent() {
    let mut bridge: AnalysisBridge<FakeSource> = AnalysisBridge::new();
    let attached = bridge.attach_with(|| {
        Err(VisualizerError::AnalysisUnavailable(
            "no audio context".into(),
        ))
    });
    assert!(!attached);
    assert!(bridge.is_unavailable());
    assert!(!bridge.is_attached());

    let retried = Cell::new(false);
    bridge.attach_with(|| {
        retried.set(true);
        Ok(FakeSource {
            level: Rc::new(Cell::new(0)),
            bins: 128,
        })
    });
    assert!(!retried.get());
    assert_eq!(bridge.sample(), None);
}
