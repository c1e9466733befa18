//! Kompletter Sitzungs-Reset (Reload-Aktion und Idle-Schwelle).

use super::{camera, view};
use crate::app::state::{AnimationState, InteractionState};
use crate::app::AppState;
use std::time::Instant;

/// Setzt Fläche, Kamera, Interaktion und Animationen auf den Startzustand.
///
/// Viewport, Label-Messung und ein laufender Idle-Monitor bleiben erhalten;
/// der Monitor beginnt eine neue Periode.
pub fn reset(state: &mut AppState, now: Instant) {
    state.surface.stop();
    state.surface.deactivate_controls();
    state.surface.init();
    camera::reset_camera(state);
    state.view.coordinates_visible = false;
    state.interaction = InteractionState::new(now);
    state.animation = AnimationState::default();
    if state.idle_monitor.is_running() {
        state.idle_monitor.start(now);
    }
    state.session_resets += 1;
    log::info!("Sitzung zurückgesetzt ({}. Reset)", state.session_resets);
    view::request_redraw(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::test_state;
    use crate::app::Action;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_8;

    #[test]
    fn reset_restores_start_state() {
        let mut state = test_state();
        let start = Instant::now();
        state.view.camera.rotate_horizontal(10.0, 1.0);
        state.view.camera.scale_zoom(3.0);
        state.interaction.current_action = Some(Action::Zoom);
        state.interaction.idle_count = 10;
        state.view.coordinates_visible = true;

        reset(&mut state, start);

        assert_relative_eq!(state.view.camera.azimuth(), FRAC_PI_8);
        assert_relative_eq!(state.view.camera.zoom(), 1.0);
        assert_eq!(state.interaction.current_action, None);
        assert_eq!(state.interaction.idle_count, 0);
        assert!(!state.view.coordinates_visible);
        assert!(!state.surface.has_controls());
        assert_eq!(state.session_resets, 1);
    }

    #[test]
    fn running_monitor_starts_new_period() {
        let mut state = test_state();
        let start = Instant::now();
        state.idle_monitor.start(start);
        let later = start + state.idle_monitor.period() * 4;

        reset(&mut state, later);

        assert_eq!(
            state.idle_monitor.next_due(),
            Some(later + state.idle_monitor.period())
        );
    }
}
