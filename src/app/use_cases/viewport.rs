//! Use-Case-Funktionen für Viewport-Größe und Seitenverhältnis.

use super::view;
use crate::app::AppState;
use std::time::Instant;

/// Merkt einen Resize vor. Der erste Resize wird sofort angewendet.
pub fn queue_resize(state: &mut AppState, size: [f32; 2], pixels_per_point: f32, now: Instant) {
    if !state.view.has_viewport() {
        apply_resize(state, size, pixels_per_point);
        return;
    }
    state.resize.push((size, pixels_per_point), now);
}

/// Wendet den letzten Resize eines Bursts nach der Ruhezeit an.
pub fn flush_resize(state: &mut AppState, now: Instant) {
    if let Some((size, pixels_per_point)) = state.resize.flush(now) {
        apply_resize(state, size, pixels_per_point);
    }
}

/// Übernimmt Größe und Pixeldichte, aktualisiert das Seitenverhältnis und zeichnet neu.
pub fn apply_resize(state: &mut AppState, size: [f32; 2], pixels_per_point: f32) {
    state.view.viewport_size = size;
    if pixels_per_point > 0.0 {
        state.view.pixels_per_point = pixels_per_point;
    }
    if size[0] > 0.0 && size[1] > 0.0 {
        state
            .view
            .camera
            .set_aspect(size[0] as f64 / size[1] as f64);
    }
    log::debug!("Viewport {}×{} @ {}", size[0], size[1], pixels_per_point);
    view::request_redraw(state);
}
