//! Viewport-Input-Handling: Tasten, Mausrad, Klick, Resize → AppIntent.

use super::keyboard;
use crate::app::AppIntent;
use std::time::Instant;

/// Merkt sich die zuletzt gemeldete Viewport-Geometrie.
#[derive(Debug, Default)]
pub struct InputState {
    last_viewport: Option<([f32; 2], f32)>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            last_viewport: None,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// `response` gehört zur Viewport-Fläche. Das Mausrad zählt nur über dem
    /// Viewport; der egui-Wert wird ins DOM-Vorzeichen (positiv = nach unten)
    /// umgerechnet.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        now: Instant,
    ) -> Vec<AppIntent> {
        let mut events = keyboard::collect_keyboard_intents(ui, now);

        let pixels_per_point = ui.ctx().pixels_per_point();
        let size = response.rect.size() * pixels_per_point;
        let viewport = ([size.x, size.y], pixels_per_point);
        if self.last_viewport != Some(viewport) {
            self.last_viewport = Some(viewport);
            events.push(AppIntent::ViewportResized {
                size: viewport.0,
                pixels_per_point,
                now,
            });
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                events.push(AppIntent::WheelScrolled {
                    delta_y: -(scroll as f64),
                    now,
                });
            }
        }

        if response.clicked() {
            events.push(AppIntent::ViewportClicked { now });
        }

        events
    }
}
