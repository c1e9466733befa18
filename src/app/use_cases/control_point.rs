//! Use-Cases für den Kontrollpunkt-Editor.

use super::{label, view};
use crate::app::AppState;
use crate::core::Axis;

/// Wechselt den aktiven Kontrollpunkt um ±1, sobald `|delta|` die Totzone überschreitet.
pub fn select_step(state: &mut AppState, delta: f64) {
    if delta.abs() <= state.options.control_point_select_dead_zone {
        return;
    }
    let step = if delta > 0.0 { 1 } else { -1 };
    state.surface.set_active_control_point_index(step);
    log::debug!("Kontrollpunkt-Index {:+}", step);
}

/// Verschiebt den aktiven Punkt entlang `axis` um `k_m · delta`.
///
/// Ohne aktiven Punkt passiert nichts.
pub fn move_along_axis(state: &mut AppState, axis: Axis, delta: f64) {
    let Some(point) = state.surface.active_control_point() else {
        return;
    };
    let moved = axis.offset(point, state.options.control_point_move_factor * delta);
    state.surface.set_active_control_point(moved, axis);
    state.surface.update();
    label::place_label(state);
    view::mark_dirty(state);
}

/// Kontinuierlicher Handler für die X-Verschiebung.
pub fn move_x(state: &mut AppState, delta: f64) {
    move_along_axis(state, Axis::X, delta);
}

/// Kontinuierlicher Handler für die Y-Verschiebung.
pub fn move_y(state: &mut AppState, delta: f64) {
    move_along_axis(state, Axis::Y, delta);
}

/// Kontinuierlicher Handler für die Z-Verschiebung.
pub fn move_z(state: &mut AppState, delta: f64) {
    move_along_axis(state, Axis::Z, delta);
}

/// Aktiviert die Punkt-Editier-Controls und blendet die Koordinaten ein.
///
/// Mit Achse wird achsbeschränktes Editieren scharf geschaltet und die
/// Fläche neu berechnet.
pub fn activate(state: &mut AppState, axis: Option<Axis>) {
    state.surface.activate_controls();
    state.surface.set_axis(axis);
    state.interaction.editing_axis = axis;
    if axis.is_some() {
        state.surface.update();
    }
    state.view.coordinates_visible = true;
}

/// Deaktiviert die Punkt-Editier-Controls.
pub fn deactivate(state: &mut AppState) {
    state.surface.set_axis(None);
    state.surface.deactivate_controls();
    state.interaction.editing_axis = None;
}

/// Blendet das Koordinaten-Label aus.
pub fn hide_coordinates(state: &mut AppState) {
    state.view.coordinates_visible = false;
}
