//! Idle-Monitor: erkennt fehlende Eingaben und startet die Drift-Animation.

use super::{session, surface_animation};
use crate::app::AppState;
use std::time::Instant;

/// Startet die wiederkehrende Prüfung (erste Fälligkeit nach einer Periode).
pub fn start_monitor(state: &mut AppState, now: Instant) {
    state.idle_monitor.start(now);
    log::debug!(
        "Idle-Monitor gestartet (Periode {:?})",
        state.idle_monitor.period()
    );
}

/// Bricht die wiederkehrende Prüfung ab.
pub fn stop_monitor(state: &mut AppState) {
    state.idle_monitor.cancel();
}

/// Führt die Prüfung aus, wenn sie fällig ist. Die Aufgabe plant sich dabei neu.
pub fn poll(state: &mut AppState, now: Instant) {
    if state.idle_monitor.poll(now) {
        check(state, now);
    }
}

/// Eine Idle-Prüfung.
///
/// Liegt die letzte Eingabe länger als eine Periode zurück und läuft kein
/// Tutorial, wird der Idle-Zähler erhöht. Über der Schwelle folgt ein
/// kompletter Sitzungs-Reset, sonst die Drift-Animation.
pub fn check(state: &mut AppState, now: Instant) {
    let elapsed = now.saturating_duration_since(state.interaction.last_interaction);
    if elapsed <= state.idle_monitor.period() || state.interaction.tutorial_active() {
        return;
    }

    state.interaction.idle_count += 1;
    if state.interaction.idle_count > state.options.idle_reset_threshold {
        log::info!(
            "{} Idle-Zyklen ohne Eingabe, Sitzung wird zurückgesetzt",
            state.interaction.idle_count
        );
        session::reset(state, now);
    } else {
        log::debug!("Idle-Zyklus {}", state.interaction.idle_count);
        surface_animation::start_drift(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{test_state, TweenKind};
    use std::time::Duration;

    fn idle_since(state: &mut AppState, start: Instant) -> Instant {
        state.interaction.last_interaction = start;
        start + state.idle_monitor.period() + Duration::from_secs(1)
    }

    #[test]
    fn count_above_threshold_resets_session() {
        let mut state = test_state();
        let start = Instant::now();
        let now = idle_since(&mut state, start);
        state.interaction.idle_count = 9;

        check(&mut state, now);

        assert_eq!(state.session_resets, 1);
        assert_eq!(state.interaction.idle_count, 0);
        assert_eq!(state.interaction.last_interaction, now);
    }

    #[test]
    fn count_at_threshold_only_drifts() {
        let mut state = test_state();
        let start = Instant::now();
        let now = idle_since(&mut state, start);
        state.interaction.idle_count = 8;

        check(&mut state, now);

        assert_eq!(state.session_resets, 0);
        assert_eq!(state.interaction.idle_count, 9);
        assert_eq!(
            state.animation.tween.map(|tween| tween.kind),
            Some(TweenKind::Drift)
        );
    }

    #[test]
    fn recent_input_is_not_idle() {
        let mut state = test_state();
        let start = Instant::now();
        state.interaction.last_interaction = start;

        let now = start + state.idle_monitor.period();
        check(&mut state, now);

        assert_eq!(state.interaction.idle_count, 0);
        assert!(state.animation.tween.is_none());
    }

    #[test]
    fn active_tutorial_suppresses_idle() {
        let mut state = test_state();
        let start = Instant::now();
        let now = idle_since(&mut state, start);
        state.interaction.tutorial_stage = 1;

        check(&mut state, now);

        assert_eq!(state.interaction.idle_count, 0);
    }

    #[test]
    fn poll_only_checks_when_due() {
        let mut state = test_state();
        let start = Instant::now();
        state.interaction.last_interaction = start;
        let period = state.idle_monitor.period();

        poll(&mut state, start + period * 3);
        assert_eq!(state.interaction.idle_count, 0, "Monitor nicht gestartet");

        start_monitor(&mut state, start);
        poll(&mut state, start + period + Duration::from_millis(1));
        assert_eq!(state.interaction.idle_count, 1);
        assert!(state.idle_monitor.is_running());

        stop_monitor(&mut state);
        poll(&mut state, start + period * 10);
        assert_eq!(state.interaction.idle_count, 1);
    }
}
