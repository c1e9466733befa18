//! Zeichnet die Fläche mit dem egui-Painter.

use crate::app::AppState;
use crate::core::label::ndc_to_screen;
use glam::{DVec2, DVec3};

const SURFACE_STROKE: f32 = 1.2;
const ACTIVE_POINT_RADIUS: f32 = 5.0;

/// Zeichnet Gitter bzw. Kontrollnetz und den aktiven Kontrollpunkt in `rect`.
///
/// Segmente mit einem Endpunkt hinter der Kamera werden ausgelassen.
pub fn paint_surface(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    let camera = &state.view.camera;
    let viewport = DVec2::new(rect.width() as f64, rect.height() as f64);
    let to_screen = |point: DVec3| -> Option<egui::Pos2> {
        let ndc = camera.project(point)?;
        let screen = ndc_to_screen(ndc.truncate(), viewport);
        Some(rect.min + egui::vec2(screen.x as f32, screen.y as f32))
    };

    let stroke = egui::Stroke::new(SURFACE_STROKE, egui::Color32::from_gray(200));
    for line in state.surface.polylines() {
        let projected: Vec<Option<egui::Pos2>> = line.iter().map(|p| to_screen(*p)).collect();
        for pair in projected.windows(2) {
            if let [Some(a), Some(b)] = pair {
                painter.line_segment([*a, *b], stroke);
            }
        }
    }

    if let Some(center) = state.surface.active_control_point().and_then(to_screen) {
        painter.circle_filled(center, ACTIVE_POINT_RADIUS, egui::Color32::from_rgb(255, 140, 0));
    }
}
