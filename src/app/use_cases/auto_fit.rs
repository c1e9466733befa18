//! Auto-Fit: iteratives Zoomen, bis die Fläche das Zielband ausfüllt.

use super::view;
use crate::app::state::AutoFitJob;
use crate::app::AppState;
use crate::core::auto_fit::clamp_speed;
use crate::core::{FitDecision, FitProbe};

/// Startet eine Auto-Fit-Schleife und führt die erste Iteration sofort aus.
///
/// Eine bereits laufende Schleife wird ersetzt.
pub fn start(state: &mut AppState, speed: f64) {
    state.animation.auto_fit = Some(AutoFitJob {
        speed: clamp_speed(speed),
        steps: 0,
    });
    log::debug!("Auto-Fit gestartet (speed {})", speed);
    step(state);
}

/// Führt eine Iteration aus. Ohne laufende Schleife passiert nichts.
///
/// Konvergiert die Messung, endet die Schleife. Sonst wird gezoomt und die
/// Schleife bleibt für den nächsten Frame bestehen, bis die Iterationsgrenze
/// erreicht ist.
pub fn step(state: &mut AppState) {
    let Some(mut job) = state.animation.auto_fit.take() else {
        return;
    };

    let surface = &state.surface;
    let probe = FitProbe::measure(&state.view.camera, |u, v| surface.patch(u, v));

    match probe.decision(job.speed) {
        FitDecision::Converged => {
            log::debug!("Auto-Fit konvergiert nach {} Schritten", job.steps);
        }
        FitDecision::Zoom(factor) => {
            state.view.camera.scale_zoom(factor);
            job.steps += 1;
            view::request_redraw(state);

            let max_steps = state.options.auto_fit_max_steps;
            if max_steps > 0 && job.steps >= max_steps {
                log::warn!(
                    "Auto-Fit nach {} Schritten ohne Konvergenz abgebrochen",
                    job.steps
                );
            } else {
                state.animation.auto_fit = Some(job);
            }
        }
    }
}
