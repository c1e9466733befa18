//! Handler für Redraw, Viewport und Label.

use crate::app::use_cases;
use crate::app::AppState;
use std::time::Instant;

/// Fordert einen neuen Frame an.
pub fn request_redraw(state: &mut AppState) {
    use_cases::view::request_redraw(state);
}

/// Merkt einen Resize vor.
pub fn queue_resize(state: &mut AppState, size: [f32; 2], pixels_per_point: f32, now: Instant) {
    use_cases::viewport::queue_resize(state, size, pixels_per_point, now);
}

/// Wendet einen ruhenden Resize an.
pub fn flush_resize(state: &mut AppState, now: Instant) {
    use_cases::viewport::flush_resize(state, now);
}

/// Übernimmt die gemessene Label-Größe.
pub fn set_label_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::label::set_label_size(state, size);
}
