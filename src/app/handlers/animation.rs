//! Handler für Flächen-Animationen und Auto-Fit.

use crate::app::use_cases;
use crate::app::AppState;
use std::time::Duration;

/// Startet eine Zufallsform mit anschließendem Auto-Fit.
pub fn start_randomize(state: &mut AppState) {
    use_cases::surface_animation::start_randomize(state);
}

/// Stellt die Originalform wieder her.
pub fn restore_surface(state: &mut AppState) {
    use_cases::surface_animation::restore(state);
}

/// Wechselt die Darstellungsvariante.
pub fn cycle_display(state: &mut AppState) {
    use_cases::surface_animation::cycle_display(state);
}

/// Schreitet die Flächen-Animation voran.
pub fn advance_surface(state: &mut AppState, dt: Duration) {
    use_cases::surface_animation::advance(state, dt);
}

/// Startet eine Auto-Fit-Schleife.
pub fn start_auto_fit(state: &mut AppState, speed: f64) {
    use_cases::auto_fit::start(state, speed);
}

/// Führt eine Auto-Fit-Iteration aus.
pub fn step_auto_fit(state: &mut AppState) {
    use_cases::auto_fit::step(state);
}
