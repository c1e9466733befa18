//! Zentrale Konfiguration für den Surface-Viewport.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::app::Action;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

// ── Kamera ──────────────────────────────────────────────────────────

/// Horizontale Dreh-Empfindlichkeit (rad pro Delta-Einheit).
pub const CAMERA_ROTATE_SENSITIVITY_H: f64 = 0.006;
/// Vertikale Dreh-Empfindlichkeit (rad pro Delta-Einheit).
pub const CAMERA_ROTATE_SENSITIVITY_V: f64 = 0.006;
/// Vertikales Sichtfeld in Grad.
pub const CAMERA_FOV_Y_DEG: f64 = 45.0;

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Verschiebung pro Delta-Einheit beim achsbeschränkten Editieren.
pub const CONTROL_POINT_MOVE_FACTOR: f64 = 0.002;
/// Totzone für den Punktwechsel per Mausrad.
pub const CONTROL_POINT_SELECT_DEAD_ZONE: f64 = 10.0;
/// Abstand des Koordinaten-Labels zum Punkt (logische Pixel).
pub const LABEL_MARGIN_PX: f64 = 12.0;

// ── Idle-Monitor ────────────────────────────────────────────────────

/// Prüfintervall und Inaktivitätsschwelle in Sekunden.
pub const IDLE_CHECK_PERIOD_SECS: f64 = 25.0;
/// Anzahl Idle-Zyklen, nach der die Sitzung komplett zurückgesetzt wird.
pub const IDLE_RESET_THRESHOLD: u32 = 9;
/// Dauer der Drift-Animation zur Originalform.
pub const IDLE_DRIFT_DURATION_MS: u64 = 6000;
/// Gesamte Kameradrehung während einer Drift-Animation (rad).
pub const IDLE_DRIFT_ROTATION: f64 = 0.5;
/// Auto-Fit-Speed nach der Drift-Animation.
pub const IDLE_FIT_SPEED: f64 = 0.25;

// ── Animationen & Auto-Fit ──────────────────────────────────────────

/// Dauer des Zufalls-Tweens nach Klick / Morph.
pub const RANDOMIZE_DURATION_MS: u64 = 1200;
/// Auto-Fit-Speed nach Klick / Morph.
pub const RANDOMIZE_FIT_SPEED: f64 = 1.0;
/// Auto-Fit-Speed der Zoom-to-Fit-Aktion.
pub const ZOOM_TO_FIT_SPEED: f64 = 1.0;
/// Dauer des Restore-Tweens.
pub const RESTORE_DURATION_MS: u64 = 1000;
/// Ruhezeit, nach der ein Resize-Burst verarbeitet wird.
pub const RESIZE_DEBOUNCE_MS: u64 = 150;
/// Maximale Auto-Fit-Iterationen (0 = unbegrenzt).
pub const AUTO_FIT_MAX_STEPS: u32 = 600;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `surface_viewport.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Horizontale Dreh-Empfindlichkeit
    pub camera_rotate_sensitivity_h: f64,
    /// Vertikale Dreh-Empfindlichkeit
    pub camera_rotate_sensitivity_v: f64,
    /// Vertikales Sichtfeld in Grad
    pub camera_fov_y_deg: f64,

    // ── Kontrollpunkte ──────────────────────────────────────────
    /// Verschiebung pro Delta-Einheit
    pub control_point_move_factor: f64,
    /// Totzone für den Punktwechsel
    pub control_point_select_dead_zone: f64,
    /// Label-Abstand in logischen Pixeln
    pub label_margin_px: f64,

    // ── Idle ────────────────────────────────────────────────────
    /// Prüfintervall des Idle-Monitors in Sekunden
    pub idle_check_period_secs: f64,
    /// Idle-Zyklen bis zum Sitzungs-Reset
    pub idle_reset_threshold: u32,
    /// Dauer der Drift-Animation in Millisekunden
    pub idle_drift_duration_ms: u64,
    /// Kameradrehung während der Drift (rad)
    pub idle_drift_rotation: f64,
    /// Auto-Fit-Speed nach der Drift
    pub idle_fit_speed: f64,

    // ── Animationen ─────────────────────────────────────────────
    /// Dauer des Zufalls-Tweens in Millisekunden
    pub randomize_duration_ms: u64,
    /// Auto-Fit-Speed nach dem Zufalls-Tween
    pub randomize_fit_speed: f64,
    /// Auto-Fit-Speed der Zoom-to-Fit-Aktion
    pub zoom_to_fit_speed: f64,
    /// Dauer des Restore-Tweens in Millisekunden
    pub restore_duration_ms: u64,
    /// Resize-Debounce in Millisekunden
    pub resize_debounce_ms: u64,
    /// Maximale Auto-Fit-Iterationen (0 = unbegrenzt)
    pub auto_fit_max_steps: u32,

    // ── Tastenbelegung ──────────────────────────────────────────
    /// Tastenname → Aktion
    pub key_bindings: BTreeMap<String, Action>,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            camera_rotate_sensitivity_h: CAMERA_ROTATE_SENSITIVITY_H,
            camera_rotate_sensitivity_v: CAMERA_ROTATE_SENSITIVITY_V,
            camera_fov_y_deg: CAMERA_FOV_Y_DEG,

            control_point_move_factor: CONTROL_POINT_MOVE_FACTOR,
            control_point_select_dead_zone: CONTROL_POINT_SELECT_DEAD_ZONE,
            label_margin_px: LABEL_MARGIN_PX,

            idle_check_period_secs: IDLE_CHECK_PERIOD_SECS,
            idle_reset_threshold: IDLE_RESET_THRESHOLD,
            idle_drift_duration_ms: IDLE_DRIFT_DURATION_MS,
            idle_drift_rotation: IDLE_DRIFT_ROTATION,
            idle_fit_speed: IDLE_FIT_SPEED,

            randomize_duration_ms: RANDOMIZE_DURATION_MS,
            randomize_fit_speed: RANDOMIZE_FIT_SPEED,
            zoom_to_fit_speed: ZOOM_TO_FIT_SPEED,
            restore_duration_ms: RESTORE_DURATION_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            auto_fit_max_steps: AUTO_FIT_MAX_STEPS,

            key_bindings: default_key_bindings(),
        }
    }
}

/// Standard-Tastenbelegung (Tastennamen wie `egui::Key::name()`).
pub fn default_key_bindings() -> BTreeMap<String, Action> {
    [
        ("H", Action::RotateHorizontal),
        ("V", Action::RotateVertical),
        ("Z", Action::Zoom),
        ("S", Action::SelectPoint),
        ("X", Action::MoveX),
        ("Y", Action::MoveY),
        ("C", Action::MoveZ),
        ("M", Action::Morph),
        ("F", Action::ZoomToFit),
        ("R", Action::Restore),
        ("D", Action::CycleDisplay),
        ("Space", Action::AdvanceTutorial),
        ("F5", Action::Reload),
    ]
    .into_iter()
    .map(|(key, action)| (key.to_string(), action))
    .collect()
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("surface_viewport"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("surface_viewport.toml")
    }

    /// Prüfintervall des Idle-Monitors. Nicht darstellbare Werte: Standardwert.
    pub fn idle_check_period(&self) -> Duration {
        match Duration::try_from_secs_f64(self.idle_check_period_secs.max(0.0)) {
            Ok(period) => period,
            Err(e) => {
                log::warn!(
                    "idle_check_period_secs = {} ungültig ({}), verwende {} s",
                    self.idle_check_period_secs,
                    e,
                    IDLE_CHECK_PERIOD_SECS
                );
                Duration::from_secs_f64(IDLE_CHECK_PERIOD_SECS)
            }
        }
    }

    /// Dauer der Drift-Animation.
    pub fn idle_drift_duration(&self) -> Duration {
        Duration::from_millis(self.idle_drift_duration_ms)
    }

    /// Dauer des Zufalls-Tweens.
    pub fn randomize_duration(&self) -> Duration {
        Duration::from_millis(self.randomize_duration_ms)
    }

    /// Dauer des Restore-Tweens.
    pub fn restore_duration(&self) -> Duration {
        Duration::from_millis(self.restore_duration_ms)
    }

    /// Ruhezeit für Resize-Bursts.
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}
