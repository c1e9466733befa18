//! Auto-Fit: Messung der Bildschirm-Silhouette und Zoom-Entscheidung.
//!
//! Pro Iteration wird die Fläche auf einem 11×11-Raster über `[0, 1]²`
//! abgetastet und durch die Kamera projiziert. Die Entscheidung ist ein
//! einzelner multiplikativer Zoom-Schritt; die Wiederholung pro Frame
//! übernimmt der Aufrufer.

use super::camera::OrbitCamera;
use glam::{DVec2, DVec3};

/// Stützstellen pro Parameterrichtung (Schrittweite 0.1, inklusive Endpunkte).
pub const PROBE_RESOLUTION: usize = 11;
/// Harte Sichtgrenze in NDC; Samples außerhalb gelten als nicht sichtbar.
pub const HARD_BOUND: f64 = 0.95;
/// Innere Grenze des Close-Fit-Bands `(-0.95, -0.9) ∪ (0.9, 0.95)`.
pub const CLOSE_FIT_BOUND: f64 = 0.9;
/// Relativer Zoom-Schritt pro Iteration bei Speed 1.0.
pub const ZOOM_STEP: f64 = 0.1;
/// Obergrenze für den Speed-Faktor (hält den Zoom-Out-Faktor positiv).
pub const MAX_SPEED: f64 = 5.0;

/// Ergebnis einer Silhouetten-Messung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitProbe {
    /// Alle Samples liegen innerhalb der harten Grenzen
    pub in_view: bool,
    /// Ein Extremwert liegt im Close-Fit-Band
    pub close_fit: bool,
    /// Minimum (x, y) der sichtbaren Samples
    pub min: DVec2,
    /// Maximum (x, y) der sichtbaren Samples
    pub max: DVec2,
}

/// Entscheidung einer Auto-Fit-Iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitDecision {
    /// Silhouette sitzt im Zielband, keine weitere Iteration
    Converged,
    /// Zoom mit Faktor multiplizieren und erneut messen
    Zoom(f64),
}

impl FitProbe {
    /// Tastet die Fläche über `patch(u, v)` ab und klassifiziert die Projektionen.
    ///
    /// Ein Sample außerhalb der harten Grenzen (oder hinter der Kamera)
    /// bricht die restliche Scanzeile ab.
    pub fn measure(camera: &OrbitCamera, patch: impl Fn(f64, f64) -> DVec3) -> Self {
        let mut in_view = true;
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);

        for i in 0..PROBE_RESOLUTION {
            let u = i as f64 / (PROBE_RESOLUTION - 1) as f64;
            for j in 0..PROBE_RESOLUTION {
                let v = j as f64 / (PROBE_RESOLUTION - 1) as f64;
                let Some(ndc) = camera.project(patch(u, v)) else {
                    in_view = false;
                    break;
                };
                if !within_hard_bounds(ndc.x) || !within_hard_bounds(ndc.y) {
                    in_view = false;
                    break;
                }
                min = min.min(ndc.truncate());
                max = max.max(ndc.truncate());
            }
        }

        let close_fit = [min.x, min.y, max.x, max.y]
            .into_iter()
            .any(in_close_fit_band);

        Self {
            in_view,
            close_fit,
            min,
            max,
        }
    }

    /// Leitet den Zoom-Schritt für den gegebenen Speed ab.
    pub fn decision(&self, speed: f64) -> FitDecision {
        let speed = clamp_speed(speed);
        match (self.in_view, self.close_fit) {
            (true, true) => FitDecision::Converged,
            (true, false) => FitDecision::Zoom(1.0 + ZOOM_STEP * speed),
            (false, _) => FitDecision::Zoom(1.0 - ZOOM_STEP * speed),
        }
    }
}

/// Klemmt den Speed auf `(0, MAX_SPEED]`; ungültige Werte fallen auf 1.0 zurück.
pub fn clamp_speed(speed: f64) -> f64 {
    if speed > 0.0 && speed.is_finite() {
        speed.min(MAX_SPEED)
    } else {
        1.0
    }
}

fn within_hard_bounds(value: f64) -> bool {
    value > -HARD_BOUND && value < HARD_BOUND
}

fn in_close_fit_band(value: f64) -> bool {
    (value > -HARD_BOUND && value < -CLOSE_FIT_BOUND) || (value > CLOSE_FIT_BOUND && value < HARD_BOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Fläche, deren Projektion bei Zoom 1 genau die Halbbreite `extent` in NDC hat.
    ///
    /// Liegt in der Ebene durch den Ursprung senkrecht zur Blickrichtung.
    fn screen_aligned_square(camera: &OrbitCamera, extent: f64) -> impl Fn(f64, f64) -> DVec3 {
        let inverse = camera.view_projection().inverse();
        let center = camera.project(DVec3::ZERO).expect("Ursprung sichtbar");
        move |u, v| {
            let ndc = DVec3::new((2.0 * u - 1.0) * extent, (2.0 * v - 1.0) * extent, center.z);
            inverse.project_point3(ndc)
        }
    }

    #[test]
    fn small_silhouette_zooms_in() {
        let camera = OrbitCamera::new();
        let probe = FitProbe::measure(&camera, screen_aligned_square(&camera, 0.5));
        assert!(probe.in_view);
        assert!(!probe.close_fit);
        assert_relative_eq!(probe.max.x, 0.5, epsilon = 1e-9);
        assert_eq!(probe.decision(0.5), FitDecision::Zoom(1.0 + 0.1 * 0.5));
    }

    #[test]
    fn silhouette_in_band_converges() {
        let camera = OrbitCamera::new();
        let probe = FitProbe::measure(&camera, screen_aligned_square(&camera, 0.92));
        assert!(probe.in_view);
        assert!(probe.close_fit);
        assert_eq!(probe.decision(1.0), FitDecision::Converged);
    }

    #[test]
    fn oversized_silhouette_zooms_out() {
        let camera = OrbitCamera::new();
        let probe = FitProbe::measure(&camera, screen_aligned_square(&camera, 1.4));
        assert!(!probe.in_view);
        assert_eq!(probe.decision(1.0), FitDecision::Zoom(0.9));
    }

    #[test]
    fn sample_behind_camera_is_out_of_view() {
        let camera = OrbitCamera::new();
        let eye = camera.position();
        let probe = FitProbe::measure(&camera, |_, _| eye * 3.0);
        assert!(!probe.in_view);
    }

    #[test]
    fn speed_is_clamped() {
        assert_relative_eq!(clamp_speed(50.0), MAX_SPEED);
        assert_relative_eq!(clamp_speed(-1.0), 1.0);
        assert_relative_eq!(clamp_speed(f64::NAN), 1.0);
        let probe = FitProbe {
            in_view: false,
            close_fit: false,
            min: DVec2::ZERO,
            max: DVec2::ZERO,
        };
        match probe.decision(100.0) {
            FitDecision::Zoom(factor) => assert!(factor > 0.0),
            FitDecision::Converged => panic!("Darf nicht konvergieren"),
        }
    }

    #[test]
    fn repeated_steps_converge_for_regular_surface() {
        let mut camera = OrbitCamera::new();
        let patch = screen_aligned_square(&OrbitCamera::new(), 0.3);
        let mut steps = 0;
        loop {
            match FitProbe::measure(&camera, &patch).decision(0.25) {
                FitDecision::Converged => break,
                FitDecision::Zoom(factor) => camera.scale_zoom(factor),
            }
            steps += 1;
            assert!(steps < 500, "Auto-Fit konvergiert nicht");
        }
        assert!(camera.zoom() > 1.0);
    }
}
