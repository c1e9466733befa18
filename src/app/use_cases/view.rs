//! Redraw-Anforderungen an den Host.

use super::label;
use crate::app::AppState;

/// Fordert einen neuen Frame an und positioniert ein sichtbares Label neu.
pub fn request_redraw(state: &mut AppState) {
    if state.view.coordinates_visible {
        label::place_label(state);
    }
    mark_dirty(state);
}

/// Setzt nur das Redraw-Flag.
pub fn mark_dirty(state: &mut AppState) {
    state.view.redraw_requested = true;
}
