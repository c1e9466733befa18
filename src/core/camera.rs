//! Orbit-Kamera um den Ursprung mit Azimut, Höhenwinkel und Zoom.

use glam::{DMat4, DVec3};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8};

/// Kugel-Orbit-Kamera, die immer auf den Ursprung blickt (Up = +Z).
///
/// Der Orbit-Zustand ist nur über die Methoden veränderbar; jede Mutation
/// berechnet die View-Projection-Matrix neu.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    azimuth: f64,
    altitude: f64,
    zoom: f64,
    aspect: f64,
    fov_y: f64,
    view_projection: DMat4,
}

impl OrbitCamera {
    /// Abstand der Kamera zum Ursprung.
    pub const ORBIT_RADIUS: f64 = 2.0;
    /// Start-Azimut (rad).
    pub const INITIAL_AZIMUTH: f64 = FRAC_PI_8;
    /// Start-Höhenwinkel (rad).
    pub const INITIAL_ALTITUDE: f64 = FRAC_PI_4;
    /// Zoom-Faktor für positive Deltas.
    pub const ZOOM_STEP_UP: f64 = 1.1;
    /// Zoom-Faktor für negative Deltas.
    pub const ZOOM_STEP_DOWN: f64 = 0.9;
    /// Standard-Sichtfeld (vertikal, Grad).
    pub const DEFAULT_FOV_Y_DEG: f64 = 45.0;
    const NEAR: f64 = 0.1;
    const FAR: f64 = 100.0;

    /// Erstellt die Kamera im Startzustand (Azimut π/8, Höhe π/4, Zoom 1).
    pub fn new() -> Self {
        let mut camera = Self {
            azimuth: Self::INITIAL_AZIMUTH,
            altitude: Self::INITIAL_ALTITUDE,
            zoom: 1.0,
            aspect: 1.0,
            fov_y: Self::DEFAULT_FOV_Y_DEG.to_radians(),
            view_projection: DMat4::IDENTITY,
        };
        camera.recompute_projection();
        camera
    }

    /// Setzt den Orbit auf den Startzustand zurück (Aspekt und Sichtfeld bleiben).
    pub fn reset(&mut self) {
        self.azimuth = Self::INITIAL_AZIMUTH;
        self.altitude = Self::INITIAL_ALTITUDE;
        self.zoom = 1.0;
        self.recompute_projection();
    }

    /// Azimut in Radiant (unbegrenzt).
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Höhenwinkel in Radiant, immer in `[-π/2, π/2]`.
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Zoom-Faktor, immer `> 0`.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Seitenverhältnis der Projektion (Breite / Höhe).
    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    /// Dreht die Kamera horizontal: `azimuth += sensitivity * delta`.
    pub fn rotate_horizontal(&mut self, delta: f64, sensitivity: f64) {
        self.azimuth += sensitivity * delta;
        self.recompute_projection();
    }

    /// Dreht die Kamera vertikal und klemmt auf `[-π/2, π/2]`.
    pub fn rotate_vertical(&mut self, delta: f64, sensitivity: f64) {
        self.altitude = (self.altitude + sensitivity * delta).clamp(-FRAC_PI_2, FRAC_PI_2);
        self.recompute_projection();
    }

    /// Exponentieller Zoom: positives Delta ×1.1, negatives Delta ×0.9, Null ignoriert.
    pub fn zoom_by(&mut self, delta: f64) {
        if delta > 0.0 {
            self.scale_zoom(Self::ZOOM_STEP_UP);
        } else if delta < 0.0 {
            self.scale_zoom(Self::ZOOM_STEP_DOWN);
        }
    }

    /// Multipliziert den Zoom mit einem Faktor. Nicht-positive Faktoren werden ignoriert.
    pub fn scale_zoom(&mut self, factor: f64) {
        if factor <= 0.0 || !factor.is_finite() {
            log::warn!("Ungültiger Zoom-Faktor ignoriert: {}", factor);
            return;
        }
        self.zoom *= factor;
        self.recompute_projection();
    }

    /// Setzt das Seitenverhältnis nach einem Resize. Betrifft nur die Projektion.
    pub fn set_aspect(&mut self, aspect: f64) {
        if aspect > 0.0 && aspect.is_finite() {
            self.aspect = aspect;
            self.recompute_projection();
        }
    }

    /// Setzt das vertikale Sichtfeld in Grad.
    pub fn set_fov_y_degrees(&mut self, degrees: f64) {
        if degrees > 0.0 && degrees < 180.0 {
            self.fov_y = degrees.to_radians();
            self.recompute_projection();
        }
    }

    /// Weltposition der Kamera: `2·(cos(az)cos(alt), sin(az)cos(alt), sin(alt))`.
    pub fn position(&self) -> DVec3 {
        Self::ORBIT_RADIUS
            * DVec3::new(
                self.azimuth.cos() * self.altitude.cos(),
                self.azimuth.sin() * self.altitude.cos(),
                self.altitude.sin(),
            )
    }

    /// View-Matrix (Blick auf den Ursprung, Up = +Z).
    pub fn view_matrix(&self) -> DMat4 {
        let eye = self.position();
        // Am Pol ist +Z parallel zur Blickrichtung → Up aus dem Azimut ableiten
        let up = if self.altitude.abs() >= FRAC_PI_2 - 1e-9 {
            -self.altitude.signum() * DVec3::new(self.azimuth.cos(), self.azimuth.sin(), 0.0)
        } else {
            DVec3::Z
        };
        DMat4::look_at_rh(eye, DVec3::ZERO, up)
    }

    /// Perspektivische Projektion; Zoom verengt das effektive Sichtfeld.
    pub fn projection_matrix(&self) -> DMat4 {
        let effective_fov = 2.0 * ((self.fov_y * 0.5).tan() / self.zoom).atan();
        DMat4::perspective_rh_gl(effective_fov, self.aspect, Self::NEAR, Self::FAR)
    }

    /// Berechnet die kombinierte View-Projection-Matrix neu.
    pub fn recompute_projection(&mut self) {
        self.view_projection = self.projection_matrix() * self.view_matrix();
    }

    /// Aktuelle View-Projection-Matrix (für Shader/Painter).
    pub fn view_projection(&self) -> DMat4 {
        self.view_projection
    }

    /// Projiziert einen Weltpunkt in Normalized Device Coordinates.
    ///
    /// `None` für Punkte hinter (oder in) der Kameraebene.
    pub fn project(&self, point: DVec3) -> Option<DVec3> {
        let clip = self.view_projection * point.extend(1.0);
        if clip.w <= f64::EPSILON {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_state() {
        let camera = OrbitCamera::new();
        assert_relative_eq!(camera.azimuth(), FRAC_PI_8);
        assert_relative_eq!(camera.altitude(), FRAC_PI_4);
        assert_relative_eq!(camera.zoom(), 1.0);
    }

    #[test]
    fn test_rotate_horizontal_applies_sensitivity() {
        let mut camera = OrbitCamera::new();
        camera.rotate_horizontal(100.0, 0.006);
        assert_relative_eq!(camera.azimuth(), FRAC_PI_8 + 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_vertical_clamps_to_pole() {
        let mut camera = OrbitCamera::new();
        camera.rotate_vertical(10_000.0, 0.006);
        assert_eq!(camera.altitude(), FRAC_PI_2);

        camera.rotate_vertical(-50_000.0, 0.006);
        assert_eq!(camera.altitude(), -FRAC_PI_2);
    }

    #[test]
    fn test_rotate_vertical_never_leaves_range() {
        let mut camera = OrbitCamera::new();
        for i in 0..500 {
            let delta = ((i * 37) % 200) as f64 - 90.0;
            camera.rotate_vertical(delta, 0.02);
            assert!(camera.altitude() >= -FRAC_PI_2);
            assert!(camera.altitude() <= FRAC_PI_2);
        }
    }

    #[test]
    fn test_zoom_by_sign_selects_factor() {
        let mut camera = OrbitCamera::new();
        camera.zoom_by(53.0);
        assert_relative_eq!(camera.zoom(), 1.1);

        camera.zoom_by(-0.5);
        assert_relative_eq!(camera.zoom(), 0.99, epsilon = 1e-12);

        camera.zoom_by(0.0);
        assert_relative_eq!(camera.zoom(), 0.99, epsilon = 1e-12);
    }

    #[test]
    fn test_zoom_stays_positive() {
        let mut camera = OrbitCamera::new();
        for _ in 0..2_000 {
            camera.zoom_by(-1.0);
        }
        assert!(camera.zoom() > 0.0);

        camera.scale_zoom(0.0);
        camera.scale_zoom(-3.0);
        assert!(camera.zoom() > 0.0);
    }

    #[test]
    fn test_position_has_orbit_radius() {
        let camera = OrbitCamera::new();
        assert_relative_eq!(camera.position().length(), OrbitCamera::ORBIT_RADIUS);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let camera = OrbitCamera::new();
        let ndc = camera.project(DVec3::ZERO).expect("Ursprung liegt vor der Kamera");
        assert_relative_eq!(ndc.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(ndc.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_point_behind_camera_is_not_projected() {
        let camera = OrbitCamera::new();
        let behind = camera.position() * 2.0;
        assert!(camera.project(behind).is_none());
    }

    #[test]
    fn test_zoom_magnifies_projection() {
        let mut camera = OrbitCamera::new();
        let point = DVec3::new(0.2, -0.1, 0.05);
        let before = camera.project(point).expect("sichtbar");
        camera.scale_zoom(2.0);
        let after = camera.project(point).expect("sichtbar");
        assert_relative_eq!(after.x, before.x * 2.0, epsilon = 1e-9);
        assert_relative_eq!(after.y, before.y * 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_aspect_only_changes_projection() {
        let mut camera = OrbitCamera::new();
        let position = camera.position();
        camera.set_aspect(16.0 / 9.0);
        assert_eq!(camera.position(), position);
        assert_relative_eq!(camera.aspect(), 16.0 / 9.0);

        camera.set_aspect(0.0);
        assert_relative_eq!(camera.aspect(), 16.0 / 9.0);
    }

    #[test]
    fn test_view_matrix_is_finite_at_pole() {
        let mut camera = OrbitCamera::new();
        camera.rotate_vertical(1_000.0, 1.0);
        let vp = camera.view_projection();
        assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
