//! Handler für Aktionsauswahl, Tutorial, Idle-Monitor und Sitzungs-Reset.

use crate::app::use_cases;
use crate::app::{Action, AppState};
use std::time::Instant;

/// Merkt eine Nutzereingabe.
pub fn register(state: &mut AppState, now: Instant) {
    use_cases::interaction::register(state, now);
}

/// Setzt oder löscht die gewählte Aktion.
pub fn set_current_action(state: &mut AppState, action: Option<Action>) {
    use_cases::interaction::set_current_action(state, action);
}

/// Reicht ein Mausrad-Delta an den Handler der Aktion weiter.
pub fn apply_action_delta(state: &mut AppState, action: Action, delta: f64) {
    use_cases::interaction::apply_action_delta(state, action, delta);
}

/// Zeigt die nächste Tutorial-Stufe.
pub fn advance_tutorial(state: &mut AppState) {
    use_cases::tutorial::advance(state);
}

/// Unterbricht das Tutorial.
pub fn suspend_tutorial(state: &mut AppState) {
    use_cases::tutorial::suspend(state);
}

/// Setzt die Sitzung zurück.
pub fn reload_session(state: &mut AppState, now: Instant) {
    use_cases::session::reset(state, now);
}

/// Startet den Idle-Monitor.
pub fn start_idle_monitor(state: &mut AppState, now: Instant) {
    use_cases::idle::start_monitor(state, now);
}

/// Stoppt den Idle-Monitor.
pub fn stop_idle_monitor(state: &mut AppState) {
    use_cases::idle::stop_monitor(state);
}

/// Prüft den Idle-Monitor auf Fälligkeit.
pub fn poll_idle_monitor(state: &mut AppState, now: Instant) {
    use_cases::idle::poll(state, now);
}
