//! Use-Cases für Aktionsauswahl und Eingabe-Registrierung.

use crate::app::{Action, AppState};
use std::time::Instant;

/// Merkt eine Nutzereingabe.
pub fn register(state: &mut AppState, now: Instant) {
    state.interaction.register_interaction(now);
}

/// Setzt die gewählte Aktion (`None` = abwählen).
pub fn set_current_action(state: &mut AppState, action: Option<Action>) {
    match action {
        Some(action) => log::debug!("Aktion gewählt: {}", action.label()),
        None => log::debug!("Aktion abgewählt"),
    }
    state.interaction.current_action = action;
}

/// Wendet ein Mausrad-Delta über den Handler der Aktion an.
///
/// Diskrete Aktionen ohne Handler ignorieren das Delta.
pub fn apply_action_delta(state: &mut AppState, action: Action, delta: f64) {
    if let Some(handler) = action.continuous_handler() {
        handler(state, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::test_state;
    use approx::assert_relative_eq;

    #[test]
    fn zoom_delta_goes_through_registry() {
        let mut state = test_state();
        apply_action_delta(&mut state, Action::Zoom, 3.0);
        assert_relative_eq!(state.view.camera.zoom(), 1.1);
    }

    #[test]
    fn discrete_action_ignores_delta() {
        let mut state = test_state();
        apply_action_delta(&mut state, Action::Morph, 3.0);
        assert_relative_eq!(state.view.camera.zoom(), 1.0);
        assert!(state.animation.tween.is_none());
    }
}
