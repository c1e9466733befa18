use std::time::{Duration, Instant};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Taste gedrückt (Tastenname wie `egui::Key::name()`)
    KeyPressed { key: String, now: Instant },
    /// Mausrad bewegt; `delta_y` positiv = nach unten gescrollt
    WheelScrolled { delta_y: f64, now: Instant },
    /// Klick in den Viewport
    ViewportClicked { now: Instant },
    /// Viewport-Größe geändert (physische Pixel)
    ViewportResized {
        size: [f32; 2],
        pixels_per_point: f32,
        now: Instant,
    },
    /// Koordinaten-Label wurde vom Host vermessen (logische Pixel)
    LabelMeasured { size: [f32; 2] },
    /// Neuer Frame
    FrameTick { now: Instant, dt: Duration },
    /// Ansicht wurde sichtbar
    ViewActivated { now: Instant },
    /// Ansicht wurde verlassen
    ViewDeactivated,
}
