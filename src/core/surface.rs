//! Schnittstelle zum Flächen-Kollaborateur (Kontrollpunkte, Patch-Auswertung, Tweens).

use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Koordinatenachse für achsbeschränktes Editieren
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// X-Achse
    X,
    /// Y-Achse
    Y,
    /// Z-Achse
    Z,
}

impl Axis {
    /// Liest die Komponente dieser Achse aus einem Punkt.
    pub fn component(self, point: DVec3) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
            Axis::Z => point.z,
        }
    }

    /// Gibt den Punkt mit verschobener Komponente dieser Achse zurück.
    pub fn offset(self, point: DVec3, amount: f64) -> DVec3 {
        let mut moved = point;
        match self {
            Axis::X => moved.x += amount,
            Axis::Y => moved.y += amount,
            Axis::Z => moved.z += amount,
        }
        moved
    }
}

/// Fortschrittsmeldung einer laufenden Flächen-Animation.
///
/// Ersetzt `onFrame`/`onComplete`-Callbacks: der Controller fragt pro Frame
/// über `Surface::advance` ab und reagiert auf die Meldung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenEvent {
    /// Animation läuft, `progress` in `[0, 1)`
    Frame { progress: f64 },
    /// Animation hat ihr Ziel erreicht
    Completed,
}

/// Darstellungsvariante der Fläche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Tesselliertes Gitter der Fläche
    #[default]
    Wireframe,
    /// Kontrollnetz
    ControlNet,
    /// Gitter und Kontrollnetz gemeinsam
    Combined,
}

impl DisplayMode {
    /// Nächste Variante im Zyklus.
    pub fn next(self) -> Self {
        match self {
            DisplayMode::Wireframe => DisplayMode::ControlNet,
            DisplayMode::ControlNet => DisplayMode::Combined,
            DisplayMode::Combined => DisplayMode::Wireframe,
        }
    }
}

/// Parametrische Fläche, die der Controller steuert.
///
/// Die Fläche besitzt ihre Geometrie und den Lebenszyklus ihrer Animationen;
/// der Controller behandelt alle Aufrufe als opake Kommandos.
pub trait Surface {
    /// Setzt die Fläche in den Ausgangszustand.
    fn init(&mut self);
    /// Ob die Punkt-Editier-Controls aktiv sind.
    fn has_controls(&self) -> bool;
    /// Aktiviert die Punkt-Editier-Controls.
    fn activate_controls(&mut self);
    /// Deaktiviert die Punkt-Editier-Controls.
    fn deactivate_controls(&mut self);
    /// Setzt die aktive Editier-Achse (`None` = keine Achsbeschränkung).
    fn set_axis(&mut self, axis: Option<Axis>);
    /// Verschiebt den aktiven Kontrollpunkt-Index um `delta`.
    fn set_active_control_point_index(&mut self, delta: i32);
    /// Kopie des aktiven Kontrollpunkts, falls Controls aktiv sind.
    fn active_control_point(&self) -> Option<DVec3>;
    /// Schreibt den aktiven Kontrollpunkt zurück.
    fn set_active_control_point(&mut self, point: DVec3, axis: Axis);
    /// Berechnet abgeleitete Geometrie neu.
    fn update(&mut self);
    /// Wertet die Fläche bei `(u, v)` aus `[0, 1]²` aus.
    fn patch(&self, u: f64, v: f64) -> DVec3;
    /// Startet einen Tween zu einer zufälligen Form.
    fn randomize(&mut self, duration: Duration);
    /// Startet einen Tween zu einer zufälligen Form nahe der Originalform.
    fn randomize_close_to_original(&mut self, duration: Duration);
    /// Startet einen Tween zurück zur Originalform.
    fn restore(&mut self, duration: Duration);
    /// Hält eine laufende Animation an.
    fn stop(&mut self);
    /// Wechselt zur nächsten Darstellungsvariante.
    fn next_display(&mut self);
    /// Schreitet die laufende Animation voran; `None` wenn keine läuft.
    fn advance(&mut self, dt: Duration) -> Option<TweenEvent>;

    /// Aktuelle Darstellungsvariante.
    fn display_mode(&self) -> DisplayMode {
        DisplayMode::Wireframe
    }

    /// Polylinien für die Darstellung (abhängig von der Darstellungsvariante).
    fn polylines(&self) -> Vec<Vec<DVec3>> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_offset_touches_single_component() {
        let point = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::X.offset(point, 0.5), DVec3::new(1.5, 2.0, 3.0));
        assert_eq!(Axis::Y.offset(point, -1.0), DVec3::new(1.0, 1.0, 3.0));
        assert_eq!(Axis::Z.offset(point, 2.0), DVec3::new(1.0, 2.0, 5.0));
        assert_eq!(Axis::Z.component(point), 3.0);
    }

    #[test]
    fn display_cycle_wraps() {
        let mut mode = DisplayMode::default();
        for _ in 0..3 {
            mode = mode.next();
        }
        assert_eq!(mode, DisplayMode::Wireframe);
    }
}
