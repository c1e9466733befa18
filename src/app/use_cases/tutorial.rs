//! Tutorial-Fortschritt über die schmale `Tutorial`-Schnittstelle.

use crate::app::AppState;
use crate::core::TutorialOutcome;

/// Zeigt die nächste Stufe an.
///
/// Ist gerade keine Stufe aktiv, wird nach der zuletzt gezeigten fortgesetzt.
/// Ein deaktiviertes Tutorial (`steps() <= 0`) ignoriert den Aufruf.
pub fn advance(state: &mut AppState) {
    if state.tutorial.steps() <= 0 {
        return;
    }

    let interaction = &mut state.interaction;
    let base = if interaction.tutorial_stage < 0 {
        interaction.last_tutorial_stage
    } else {
        interaction.tutorial_stage
    };
    let next = base + 1;

    match state.tutorial.advance(next) {
        TutorialOutcome::Shown { lock_input } => {
            interaction.tutorial_stage = next;
            interaction.last_tutorial_stage = next;
            interaction.input_locked = lock_input;
        }
        TutorialOutcome::Finished => {
            interaction.tutorial_stage = -1;
            interaction.last_tutorial_stage = -1;
            interaction.input_locked = false;
            log::info!("Tutorial beendet");
        }
    }
}

/// Unterbricht das Tutorial und merkt sich die Stufe für die Wiederaufnahme.
pub fn suspend(state: &mut AppState) {
    let interaction = &mut state.interaction;
    if interaction.tutorial_stage >= 0 {
        interaction.last_tutorial_stage = interaction.tutorial_stage;
        interaction.tutorial_stage = -1;
    }
    interaction.input_locked = false;
}
