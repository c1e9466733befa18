//! Positionierung des Koordinaten-Labels neben dem aktiven Kontrollpunkt.

use crate::app::AppState;
use crate::core::label::{logical_viewport, resolve_anchor};
use crate::core::LabelLayout;
use glam::DVec2;

/// Berechnet den Label-Anker neu.
///
/// Gibt `false` zurück und behält den letzten Anker, wenn keine Controls aktiv
/// sind, kein Punkt aktiv ist, das Label noch nicht vermessen wurde, der
/// Viewport unbekannt ist oder der Punkt hinter der Kamera liegt.
pub fn place_label(state: &mut AppState) -> bool {
    if !state.surface.has_controls() || !state.view.has_viewport() {
        return false;
    }
    let Some(point) = state.surface.active_control_point() else {
        return false;
    };
    let Some([width, height]) = state.view.label_size else {
        return false;
    };
    let Some(ndc) = state.view.camera.project(point) else {
        return false;
    };

    let layout = LabelLayout {
        viewport: logical_viewport(state.view.viewport_size, state.view.pixels_per_point),
        label_size: DVec2::new(width as f64, height as f64),
        margin: state.options.label_margin_px,
    };
    state.view.coordinate_anchor = resolve_anchor(ndc.truncate(), &layout);
    true
}

/// Übernimmt die gemessene Label-Größe und positioniert neu.
pub fn set_label_size(state: &mut AppState, size: [f32; 2]) {
    state.view.label_size = Some(size);
    if state.view.coordinates_visible {
        place_label(state);
    }
}
