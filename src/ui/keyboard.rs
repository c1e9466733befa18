//! Tastatur-Events für den Viewport.
//!
//! Reicht gedrückte Tasten als Tastennamen an die Aktions-Registry weiter.
//! Die Zuordnung zur Aktion passiert im App-Layer.

use crate::app::AppIntent;
use std::time::Instant;

/// Sammelt gedrückte Tasten (ohne Wiederholungen und ohne Cmd/Ctrl) als Intents.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, now: Instant) -> Vec<AppIntent> {
    ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } if !modifiers.command => Some(AppIntent::KeyPressed {
                    key: key.name().to_string(),
                    now,
                }),
                _ => None,
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_with_key_event(event: egui::Event) -> Vec<AppIntent> {
        let ctx = egui::Context::default();
        let mut raw_input = egui::RawInput::default();
        raw_input.events.push(event);

        let now = Instant::now();
        let mut events = Vec::new();
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                events = collect_keyboard_intents(ui, now);
            });
        });

        events
    }

    fn key_event(key: egui::Key, pressed: bool, repeat: bool, modifiers: egui::Modifiers) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat,
            modifiers,
        }
    }

    #[test]
    fn pressed_key_emits_key_name() {
        let events = collect_with_key_event(key_event(
            egui::Key::H,
            true,
            false,
            egui::Modifiers::default(),
        ));

        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], AppIntent::KeyPressed { key, .. } if key == "H"));
    }

    #[test]
    fn space_uses_egui_name() {
        let events = collect_with_key_event(key_event(
            egui::Key::Space,
            true,
            false,
            egui::Modifiers::default(),
        ));

        assert!(matches!(&events[0], AppIntent::KeyPressed { key, .. } if key == "Space"));
    }

    #[test]
    fn release_and_repeat_are_ignored() {
        let released = collect_with_key_event(key_event(
            egui::Key::Z,
            false,
            false,
            egui::Modifiers::default(),
        ));
        let repeated = collect_with_key_event(key_event(
            egui::Key::Z,
            true,
            true,
            egui::Modifiers::default(),
        ));

        assert!(released.is_empty());
        assert!(repeated.is_empty());
    }

    #[test]
    fn command_shortcuts_are_ignored() {
        let events = collect_with_key_event(key_event(
            egui::Key::R,
            true,
            false,
            egui::Modifiers::COMMAND,
        ));

        assert!(events.is_empty());
    }
}
