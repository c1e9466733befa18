//! Aktions-Registry: Tastenname → Aktion, Aktion → kontinuierlicher Handler.

use super::use_cases;
use super::AppState;
use crate::core::Axis;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Signatur eines kontinuierlichen Handlers (Mausrad-Delta, Vorzeichen bereits invertiert).
pub type ContinuousHandler = fn(&mut AppState, f64);

/// Symbolische Viewport-Aktion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    /// Kamera horizontal drehen (Mausrad)
    RotateHorizontal,
    /// Kamera vertikal drehen (Mausrad)
    RotateVertical,
    /// Zoomen (Mausrad)
    Zoom,
    /// Kontrollpunkt-Editiermodus; Mausrad wechselt den aktiven Punkt
    SelectPoint,
    /// Aktiven Punkt entlang X verschieben
    MoveX,
    /// Aktiven Punkt entlang Y verschieben
    MoveY,
    /// Aktiven Punkt entlang Z verschieben
    MoveZ,
    /// Neue Zufallsform mit anschließendem Auto-Fit
    Morph,
    /// Auto-Fit sofort starten
    ZoomToFit,
    /// Originalform wiederherstellen
    Restore,
    /// Darstellungsvariante wechseln
    CycleDisplay,
    /// Nächste Tutorial-Stufe
    AdvanceTutorial,
    /// Sitzung komplett zurücksetzen
    Reload,
}

impl Action {
    /// Alle Aktionen in Deklarationsreihenfolge.
    pub const ALL: [Action; 13] = [
        Action::RotateHorizontal,
        Action::RotateVertical,
        Action::Zoom,
        Action::SelectPoint,
        Action::MoveX,
        Action::MoveY,
        Action::MoveZ,
        Action::Morph,
        Action::ZoomToFit,
        Action::Restore,
        Action::CycleDisplay,
        Action::AdvanceTutorial,
        Action::Reload,
    ];

    /// Handler für Mausrad-Deltas; `None` für diskrete Aktionen.
    pub fn continuous_handler(self) -> Option<ContinuousHandler> {
        match self {
            Action::RotateHorizontal => Some(use_cases::camera::rotate_horizontal),
            Action::RotateVertical => Some(use_cases::camera::rotate_vertical),
            Action::Zoom => Some(use_cases::camera::zoom),
            Action::SelectPoint => Some(use_cases::control_point::select_step),
            Action::MoveX => Some(use_cases::control_point::move_x),
            Action::MoveY => Some(use_cases::control_point::move_y),
            Action::MoveZ => Some(use_cases::control_point::move_z),
            Action::Morph
            | Action::ZoomToFit
            | Action::Restore
            | Action::CycleDisplay
            | Action::AdvanceTutorial
            | Action::Reload => None,
        }
    }

    /// Editier-Achse der Verschiebe-Aktionen.
    pub fn axis(self) -> Option<Axis> {
        match self {
            Action::MoveX => Some(Axis::X),
            Action::MoveY => Some(Axis::Y),
            Action::MoveZ => Some(Axis::Z),
            _ => None,
        }
    }

    /// Anzeigename für Status-Bar und Overlay.
    pub fn label(self) -> &'static str {
        match self {
            Action::RotateHorizontal => "Rotate horizontal",
            Action::RotateVertical => "Rotate vertical",
            Action::Zoom => "Zoom",
            Action::SelectPoint => "Select point",
            Action::MoveX => "Move X",
            Action::MoveY => "Move Y",
            Action::MoveZ => "Move Z",
            Action::Morph => "Morph",
            Action::ZoomToFit => "Zoom to fit",
            Action::Restore => "Restore",
            Action::CycleDisplay => "Display",
            Action::AdvanceTutorial => "Tutorial",
            Action::Reload => "Reload",
        }
    }
}

/// Unveränderliche Zuordnung Tastenname → Aktion.
///
/// Wird einmal beim Start aus den Optionen aufgebaut und danach nur gelesen.
#[derive(Debug, Clone, Default)]
pub struct ActionBindings {
    keys: HashMap<String, Action>,
}

impl ActionBindings {
    /// Baut die Registry aus der Options-Tabelle.
    pub fn from_table(table: &BTreeMap<String, Action>) -> Self {
        Self {
            keys: table
                .iter()
                .map(|(key, action)| (key.clone(), *action))
                .collect(),
        }
    }

    /// Löst einen Tastennamen auf; unbekannte Namen ergeben `None`.
    pub fn resolve(&self, key: &str) -> Option<Action> {
        self.keys.get(key).copied()
    }

    /// Erster Tastenname, der auf `action` zeigt (für Hilfetexte).
    pub fn key_for(&self, action: Action) -> Option<&str> {
        let mut keys: Vec<&String> = self
            .keys
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| key)
            .collect();
        keys.sort_unstable();
        keys.first().map(|key| key.as_str())
    }

    /// Anzahl der Belegungen.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Gibt `true` zurück, wenn keine Taste belegt ist.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::options::default_key_bindings;

    #[test]
    fn default_table_resolves_known_keys() {
        let bindings = ActionBindings::from_table(&default_key_bindings());
        assert_eq!(bindings.resolve("H"), Some(Action::RotateHorizontal));
        assert_eq!(bindings.resolve("Space"), Some(Action::AdvanceTutorial));
        assert_eq!(bindings.resolve("Quote"), None);
        assert_eq!(bindings.resolve(""), None);
    }

    #[test]
    fn every_action_has_a_default_key() {
        let bindings = ActionBindings::from_table(&default_key_bindings());
        for action in Action::ALL {
            assert!(bindings.key_for(action).is_some(), "{action:?} ohne Taste");
        }
    }

    #[test]
    fn only_wheel_actions_have_handlers() {
        let continuous: Vec<Action> = Action::ALL
            .into_iter()
            .filter(|action| action.continuous_handler().is_some())
            .collect();
        assert_eq!(
            continuous,
            vec![
                Action::RotateHorizontal,
                Action::RotateVertical,
                Action::Zoom,
                Action::SelectPoint,
                Action::MoveX,
                Action::MoveY,
                Action::MoveZ,
            ]
        );
    }

    #[test]
    fn move_actions_carry_axis() {
        assert_eq!(Action::MoveX.axis(), Some(Axis::X));
        assert_eq!(Action::MoveZ.axis(), Some(Axis::Z));
        assert_eq!(Action::Zoom.axis(), None);
    }
}
