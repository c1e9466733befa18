//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::DisplayMode;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.interaction.current_action {
                Some(action) => ui.label(format!("Action: {}", action.label())),
                None => ui.label("Action: –"),
            };

            ui.separator();

            let camera = &state.view.camera;
            ui.label(format!(
                "Zoom: {:.2}x | Azimuth: {:.2} | Altitude: {:.2}",
                camera.zoom(),
                camera.azimuth(),
                camera.altitude()
            ));

            ui.separator();

            let display = match state.surface.display_mode() {
                DisplayMode::Wireframe => "Wireframe",
                DisplayMode::ControlNet => "Control net",
                DisplayMode::Combined => "Combined",
            };
            ui.label(format!("Display: {}", display));

            if let Some(axis) = state.interaction.editing_axis {
                ui.separator();
                match state.surface.active_control_point() {
                    Some(point) => ui.label(format!("{:?} = {:+.3}", axis, axis.component(point))),
                    None => ui.label(format!("Axis: {:?}", axis)),
                };
            }

            if state.animation.auto_fit.is_some() {
                ui.separator();
                ui.label("Fitting…");
            }

            if state.interaction.idle_count > 0 {
                ui.separator();
                ui.label(format!("Idle: {}", state.interaction.idle_count));
            }

            if let Some(command) = state.command_log.last_significant() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("{:?}", command))
                        .on_hover_text(format!("{} Commands im Log", state.command_log.len()));
                });
            }
        });
    });
}
