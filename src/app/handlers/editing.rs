//! Handler für den Kontrollpunkt-Editor.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Axis;

/// Aktiviert die Punkt-Editier-Controls.
pub fn activate_point_controls(state: &mut AppState, axis: Option<Axis>) {
    use_cases::control_point::activate(state, axis);
}

/// Deaktiviert die Punkt-Editier-Controls.
pub fn deactivate_point_controls(state: &mut AppState) {
    use_cases::control_point::deactivate(state);
}

/// Blendet das Koordinaten-Label aus.
pub fn hide_coordinates(state: &mut AppState) {
    use_cases::control_point::hide_coordinates(state);
}
