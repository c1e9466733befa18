//! Koordinaten-Label und Tutorial-Overlay.

use crate::app::{AppIntent, AppState};

/// Zeigt das Koordinaten-Label am berechneten Anker.
///
/// Gibt ein `LabelMeasured`-Intent zurück, sobald sich die gemessene Größe
/// ändert. Der Anker ist der Label-Mittelpunkt relativ zu `viewport_rect`.
pub fn show_coordinate_label(
    ctx: &egui::Context,
    viewport_rect: egui::Rect,
    state: &AppState,
) -> Option<AppIntent> {
    if !state.view.coordinates_visible {
        return None;
    }
    let point = state.surface.active_control_point()?;

    let anchor = state.view.coordinate_anchor;
    let pos = viewport_rect.min + egui::vec2(anchor.x as f32, anchor.y as f32);
    let response = egui::Area::new(egui::Id::new("coordinate_label"))
        .fixed_pos(pos)
        .pivot(egui::Align2::CENTER_CENTER)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.monospace(format!(
                    "x {:+.3}\ny {:+.3}\nz {:+.3}",
                    point.x, point.y, point.z
                ));
            });
        })
        .response;

    let size = [response.rect.width(), response.rect.height()];
    (state.view.label_size != Some(size)).then_some(AppIntent::LabelMeasured { size })
}

/// Zeigt den Text der aktiven Tutorial-Stufe.
pub fn show_tutorial(ctx: &egui::Context, state: &AppState) {
    let Some(text) = state.tutorial_text() else {
        return;
    };

    egui::Window::new("Tutorial")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 16.0))
        .show(ctx, |ui| {
            ui.label(text);
            let hint = match state.bindings.key_for(crate::app::Action::AdvanceTutorial) {
                Some(key) => format!("{key}: weiter"),
                None => String::new(),
            };
            if !hint.is_empty() {
                ui.weak(hint);
            }
        });
}
