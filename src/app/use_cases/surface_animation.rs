//! Flächen-Tweens: Zufallsform, Idle-Drift, Wiederherstellen.
//!
//! Jeder Start hält eine laufende Animation zuerst an. Der Controller merkt
//! sich, welchen Tween er gestartet hat, und reagiert auf die Meldungen aus
//! `Surface::advance`.

use super::{auto_fit, view};
use crate::app::state::{ActiveTween, TweenKind};
use crate::app::AppState;
use crate::core::easing::{ease_in_out_cubic, eased_increment};
use crate::core::TweenEvent;
use std::time::Duration;

/// Hält die laufende Flächen-Animation an.
pub fn stop(state: &mut AppState) {
    state.surface.stop();
    state.animation.tween = None;
}

/// Startet eine Zufallsform; nach Abschluss folgt ein zügiger Auto-Fit.
pub fn start_randomize(state: &mut AppState) {
    stop(state);
    state.surface.randomize(state.options.randomize_duration());
    state.animation.tween = Some(ActiveTween::new(
        TweenKind::Randomize,
        Some(state.options.randomize_fit_speed),
    ));
    log::debug!("Zufallsform gestartet");
}

/// Startet die Idle-Drift zurück in Richtung Originalform.
///
/// Pro Frame dreht sich die Kamera um den Zuwachs der Easing-Kurve, nach
/// Abschluss folgt ein sanfter Auto-Fit.
pub fn start_drift(state: &mut AppState) {
    stop(state);
    state
        .surface
        .randomize_close_to_original(state.options.idle_drift_duration());
    state.animation.tween = Some(ActiveTween::new(
        TweenKind::Drift,
        Some(state.options.idle_fit_speed),
    ));
    log::debug!("Idle-Drift gestartet");
}

/// Stellt die Originalform wieder her.
pub fn restore(state: &mut AppState) {
    stop(state);
    state.surface.restore(state.options.restore_duration());
    state.animation.tween = Some(ActiveTween::new(TweenKind::Restore, None));
    log::debug!("Originalform wird wiederhergestellt");
}

/// Wechselt die Darstellungsvariante der Fläche.
pub fn cycle_display(state: &mut AppState) {
    state.surface.next_display();
}

/// Schreitet die Flächen-Animation um `dt` voran und verarbeitet die Meldung.
pub fn advance(state: &mut AppState, dt: Duration) {
    let Some(event) = state.surface.advance(dt) else {
        state.animation.tween = None;
        return;
    };

    match event {
        TweenEvent::Frame { progress } => {
            if let Some(tween) = state.animation.tween.as_mut() {
                let previous = tween.last_progress;
                tween.last_progress = progress;
                if tween.kind == TweenKind::Drift {
                    drift_camera(state, previous, progress);
                }
            }
        }
        TweenEvent::Completed => {
            if let Some(tween) = state.animation.tween.take() {
                if tween.kind == TweenKind::Drift {
                    drift_camera(state, tween.last_progress, 1.0);
                }
                if let Some(speed) = tween.follow_up_fit {
                    auto_fit::start(state, speed);
                }
            }
        }
    }
    view::request_redraw(state);
}

fn drift_camera(state: &mut AppState, previous: f64, current: f64) {
    let increment = eased_increment(ease_in_out_cubic, previous, current);
    let rotation = state.options.idle_drift_rotation;
    state.view.camera.rotate_horizontal(increment, rotation);
}
