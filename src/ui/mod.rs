//! UI-Komponenten: Viewport-Zeichnung, Overlays, Status-Bar, Input-Handling.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Overlays (Koordinaten-Label, Tutorial) und die Flächen-Zeichnung lesen nur
/// den AppState; Eingaben verlassen die UI ausschließlich als `AppIntent`.
pub mod overlay;
pub mod status;
pub mod viewport;

pub use input::InputState;
pub use overlay::{show_coordinate_label, show_tutorial};
pub use status::render_status_bar;
pub use viewport::paint_surface;
