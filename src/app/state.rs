//! Application State: zentrale Datenhaltung.

use super::actions::{Action, ActionBindings};
use super::scheduler::{Debouncer, RecurringTask};
use super::CommandLog;
use crate::core::{Axis, OrbitCamera, Surface, Tutorial};
use crate::shared::ViewerOptions;
use glam::DVec2;
use std::time::Instant;

/// Kamera-, Viewport- und Label-Zustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Orbit-Kamera
    pub camera: OrbitCamera,
    /// Viewport-Größe in physischen Pixeln
    pub viewport_size: [f32; 2],
    /// Physische Pixel pro logischem Pixel
    pub pixels_per_point: f32,
    /// Zuletzt gemessene Label-Größe (logische Pixel)
    pub label_size: Option<[f32; 2]>,
    /// Ob das Koordinaten-Label angezeigt wird
    pub coordinates_visible: bool,
    /// Label-Mittelpunkt in logischen Pixeln
    pub coordinate_anchor: DVec2,
    /// Host soll neu zeichnen
    pub redraw_requested: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: OrbitCamera::new(),
            viewport_size: [0.0, 0.0],
            pixels_per_point: 1.0,
            label_size: None,
            coordinates_visible: false,
            coordinate_anchor: DVec2::ZERO,
            redraw_requested: false,
        }
    }

    /// Ob bereits eine Viewport-Größe bekannt ist.
    pub fn has_viewport(&self) -> bool {
        self.viewport_size[0] > 0.0 && self.viewport_size[1] > 0.0
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Aktion, Idle-Zähler und Tutorial-Fortschritt
#[derive(Debug, Clone)]
pub struct InteractionState {
    /// Aktuell gewählte Aktion
    pub current_action: Option<Action>,
    /// Zeitpunkt der letzten registrierten Eingabe
    pub last_interaction: Instant,
    /// Anzahl aufeinanderfolgender Idle-Zyklen
    pub idle_count: u32,
    /// Aktive Tutorial-Stufe (-1 = inaktiv)
    pub tutorial_stage: i32,
    /// Zuletzt angezeigte Stufe, für die Wiederaufnahme
    pub last_tutorial_stage: i32,
    /// Sperrt alle Aktionen außer "Tutorial weiter"
    pub input_locked: bool,
    /// Achse der laufenden Punkt-Bearbeitung
    pub editing_axis: Option<Axis>,
}

impl InteractionState {
    /// Erstellt den Ausgangszustand zum Zeitpunkt `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            current_action: None,
            last_interaction: now,
            idle_count: 0,
            tutorial_stage: -1,
            last_tutorial_stage: -1,
            input_locked: false,
            editing_axis: None,
        }
    }

    /// Merkt eine Nutzereingabe; setzt den Idle-Zähler zurück.
    pub fn register_interaction(&mut self, now: Instant) {
        self.last_interaction = now;
        self.idle_count = 0;
    }

    /// Ob gerade eine Tutorial-Stufe angezeigt wird.
    pub fn tutorial_active(&self) -> bool {
        self.tutorial_stage >= 0
    }
}

/// Vom Controller gestartete Flächen-Animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenKind {
    /// Zufallsform nach Klick / Morph
    Randomize,
    /// Idle-Drift zur Originalform
    Drift,
    /// Wiederherstellen der Originalform
    Restore,
}

/// Laufender Tween samt Folgeaktion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveTween {
    /// Art des Tweens
    pub kind: TweenKind,
    /// Gelieferter Fortschritt des vorherigen Frames
    pub last_progress: f64,
    /// Auto-Fit-Speed nach Abschluss (`None` = kein Auto-Fit)
    pub follow_up_fit: Option<f64>,
}

impl ActiveTween {
    /// Erstellt einen frisch gestarteten Tween.
    pub fn new(kind: TweenKind, follow_up_fit: Option<f64>) -> Self {
        Self {
            kind,
            last_progress: 0.0,
            follow_up_fit,
        }
    }
}

/// Laufende Auto-Fit-Schleife
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoFitJob {
    /// Zoom-Geschwindigkeit (bereits geklemmt)
    pub speed: f64,
    /// Bisher ausgeführte Iterationen
    pub steps: u32,
}

/// Animations- und Auto-Fit-Zustand
#[derive(Debug, Clone, Default)]
pub struct AnimationState {
    /// Aktueller Flächen-Tween
    pub tween: Option<ActiveTween>,
    /// Aktuelle Auto-Fit-Schleife
    pub auto_fit: Option<AutoFitJob>,
}

impl AnimationState {
    /// Ob Tween oder Auto-Fit laufen und der Host weiter Frames liefern muss.
    pub fn is_busy(&self) -> bool {
        self.tween.is_some() || self.auto_fit.is_some()
    }
}

/// Haupt-Anwendungszustand
pub struct AppState {
    /// Flächen-Kollaborateur
    pub surface: Box<dyn Surface>,
    /// Tutorial-Kollaborateur
    pub tutorial: Box<dyn Tutorial>,
    /// Kamera- und Label-Zustand
    pub view: ViewState,
    /// Interaktionszustand
    pub interaction: InteractionState,
    /// Animationen und Auto-Fit
    pub animation: AnimationState,
    /// Wiederkehrende Idle-Prüfung
    pub idle_monitor: RecurringTask,
    /// Debounce für Resize-Bursts (Größe, Pixel pro Punkt)
    pub resize: Debouncer<([f32; 2], f32)>,
    /// Tastenbelegung
    pub bindings: ActionBindings,
    /// Laufzeit-Optionen
    pub options: ViewerOptions,
    /// Protokoll ausgeführter Commands
    pub command_log: CommandLog,
    /// Anzahl der Sitzungs-Resets seit Start
    pub session_resets: u32,
}

impl AppState {
    /// Erstellt einen neuen App-State; die Fläche wird initialisiert.
    pub fn new(
        surface: Box<dyn Surface>,
        tutorial: Box<dyn Tutorial>,
        options: ViewerOptions,
    ) -> Self {
        Self::new_at(surface, tutorial, options, Instant::now())
    }

    /// Wie `new`, mit explizitem Startzeitpunkt.
    pub fn new_at(
        mut surface: Box<dyn Surface>,
        tutorial: Box<dyn Tutorial>,
        options: ViewerOptions,
        now: Instant,
    ) -> Self {
        surface.init();

        let mut view = ViewState::new();
        view.camera.set_fov_y_degrees(options.camera_fov_y_deg);

        Self {
            surface,
            tutorial,
            view,
            interaction: InteractionState::new(now),
            animation: AnimationState::default(),
            idle_monitor: RecurringTask::new(options.idle_check_period()),
            resize: Debouncer::new(options.resize_debounce()),
            bindings: ActionBindings::from_table(&options.key_bindings),
            options,
            command_log: CommandLog::new(),
            session_resets: 0,
        }
    }

    /// Text der aktiven Tutorial-Stufe.
    pub fn tutorial_text(&self) -> Option<&str> {
        if self.interaction.tutorial_active() {
            self.tutorial.text(self.interaction.tutorial_stage)
        } else {
            None
        }
    }

    /// Nimmt das Redraw-Flag zurück (für den Host).
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.view.redraw_requested)
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use crate::core::{BezierPatch, StepList};
    AppState::new(
        Box::new(BezierPatch::with_seed(7)),
        Box::new(StepList::disabled()),
        ViewerOptions::default(),
    )
}
