use crate::app::Action;
use crate::core::Axis;
use std::time::{Duration, Instant};

/// Commands sind mutierende Schritte, die zentral vom Controller ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Interaktion ===
    /// Nutzereingabe merken (Idle-Zähler zurücksetzen)
    RegisterInteraction { now: Instant },
    /// Gewählte Aktion setzen (`None` = abwählen)
    SetCurrentAction { action: Option<Action> },
    /// Nächste Tutorial-Stufe anzeigen
    AdvanceTutorial,
    /// Laufendes Tutorial unterbrechen und Stufe merken
    SuspendTutorial,
    /// Sitzung komplett zurücksetzen
    ReloadSession { now: Instant },

    // === Kontrollpunkte ===
    /// Punkt-Editier-Controls aktivieren, optional mit Achse
    ActivatePointControls { axis: Option<Axis> },
    /// Punkt-Editier-Controls deaktivieren
    DeactivatePointControls,
    /// Koordinaten-Label ausblenden
    HideCoordinates,
    /// Mausrad-Delta an den Handler der Aktion weiterreichen
    ApplyActionDelta { action: Action, delta: f64 },

    // === Fläche & Animation ===
    /// Zufallsform mit anschließendem Auto-Fit starten
    StartRandomize,
    /// Originalform wiederherstellen
    RestoreSurface,
    /// Darstellungsvariante wechseln
    CycleDisplay,
    /// Laufenden Flächen-Tween voranschreiten
    AdvanceSurfaceAnimation { dt: Duration },

    // === Auto-Fit ===
    /// Auto-Fit-Schleife starten
    StartAutoFit { speed: f64 },
    /// Eine Auto-Fit-Iteration ausführen
    StepAutoFit,

    // === Idle-Monitor ===
    /// Idle-Monitor starten
    StartIdleMonitor { now: Instant },
    /// Idle-Monitor stoppen
    StopIdleMonitor,
    /// Idle-Monitor auf Fälligkeit prüfen
    PollIdleMonitor { now: Instant },

    // === View ===
    /// Neu zeichnen und Label neu positionieren
    RequestRedraw,
    /// Resize vormerken (debounced)
    QueueResize {
        size: [f32; 2],
        pixels_per_point: f32,
        now: Instant,
    },
    /// Vorgemerkten Resize nach Ruhezeit anwenden
    FlushResize { now: Instant },
    /// Gemessene Label-Größe übernehmen
    SetLabelSize { size: [f32; 2] },
}
