//! Referenz-Fläche: bikubischer Bézier-Patch mit 4×4 Kontrollpunkten.
//!
//! Dient dem Desktop-Host und den Tests als konkreter `Surface`-Kollaborateur.

use super::easing::{ease_in_out_cubic, ease_out_cubic};
use super::surface::{Axis, DisplayMode, Surface, TweenEvent};
use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const GRID: usize = 4;
const POINT_COUNT: usize = GRID * GRID;
/// Kantenlänge des Patches in Welteinheiten (zentriert um den Ursprung).
const PATCH_EXTENT: f64 = 1.0;
/// Maximale Z-Auslenkung bei `randomize`.
const RANDOM_HEIGHT: f64 = 0.35;
/// Maximale XY-Verschiebung bei `randomize`.
const RANDOM_JITTER: f64 = 0.08;
/// Maximale Z-Auslenkung bei `randomize_close_to_original`.
const DRIFT_HEIGHT: f64 = 0.06;
/// Unterteilungen pro Richtung für das Darstellungsgitter.
const MESH_RESOLUTION: usize = 16;

#[derive(Debug, Clone)]
struct Tween {
    from: [DVec3; POINT_COUNT],
    to: [DVec3; POINT_COUNT],
    elapsed: Duration,
    duration: Duration,
    ease: fn(f64) -> f64,
}

/// Bikubischer Bézier-Patch mit Tween-Animationen
#[derive(Debug, Clone)]
pub struct BezierPatch {
    points: [DVec3; POINT_COUNT],
    original: [DVec3; POINT_COUNT],
    active_index: usize,
    controls_active: bool,
    axis: Option<Axis>,
    display: DisplayMode,
    tween: Option<Tween>,
    mesh: Vec<DVec3>,
    rng: StdRng,
}

impl BezierPatch {
    /// Erstellt einen flachen Patch mit zufälligem Seed.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Erstellt einen flachen Patch mit festem Seed (deterministisch).
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let original = flat_grid();
        let mut patch = Self {
            points: original,
            original,
            active_index: 0,
            controls_active: false,
            axis: None,
            display: DisplayMode::default(),
            tween: None,
            mesh: Vec::new(),
            rng,
        };
        patch.update();
        patch
    }

    /// Alle Kontrollpunkte (zeilenweise, `v` außen).
    pub fn control_points(&self) -> &[DVec3] {
        &self.points
    }

    /// Index des aktiven Kontrollpunkts.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Aktuelle Editier-Achse.
    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    /// Ob gerade eine Animation läuft.
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    fn start_tween(
        &mut self,
        to: [DVec3; POINT_COUNT],
        duration: Duration,
        ease: fn(f64) -> f64,
    ) {
        self.tween = Some(Tween {
            from: self.points,
            to,
            elapsed: Duration::ZERO,
            duration,
            ease,
        });
    }

    fn random_shape(&mut self, height: f64, jitter: f64) -> [DVec3; POINT_COUNT] {
        let mut shape = self.original;
        for point in shape.iter_mut() {
            if jitter > 0.0 {
                point.x += self.rng.gen_range(-jitter..jitter);
                point.y += self.rng.gen_range(-jitter..jitter);
            }
            point.z += self.rng.gen_range(-height..height);
        }
        shape
    }

    fn control_net(&self) -> Vec<Vec<DVec3>> {
        let mut lines = Vec::with_capacity(2 * GRID);
        for row in 0..GRID {
            lines.push((0..GRID).map(|col| self.points[row * GRID + col]).collect());
        }
        for col in 0..GRID {
            lines.push((0..GRID).map(|row| self.points[row * GRID + col]).collect());
        }
        lines
    }

    fn mesh_lines(&self) -> Vec<Vec<DVec3>> {
        let n = MESH_RESOLUTION + 1;
        let mut lines = Vec::with_capacity(2 * n);
        for row in 0..n {
            lines.push(self.mesh[row * n..(row + 1) * n].to_vec());
        }
        for col in 0..n {
            lines.push((0..n).map(|row| self.mesh[row * n + col]).collect());
        }
        lines
    }
}

impl Default for BezierPatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for BezierPatch {
    fn init(&mut self) {
        self.points = self.original;
        self.active_index = 0;
        self.controls_active = false;
        self.axis = None;
        self.display = DisplayMode::default();
        self.tween = None;
        self.update();
    }

    fn has_controls(&self) -> bool {
        self.controls_active
    }

    fn activate_controls(&mut self) {
        self.controls_active = true;
    }

    fn deactivate_controls(&mut self) {
        self.controls_active = false;
        self.axis = None;
    }

    fn set_axis(&mut self, axis: Option<Axis>) {
        self.axis = axis;
    }

    fn set_active_control_point_index(&mut self, delta: i32) {
        let next = (self.active_index as i64 + delta as i64).rem_euclid(POINT_COUNT as i64);
        self.active_index = next as usize;
    }

    fn active_control_point(&self) -> Option<DVec3> {
        if !self.controls_active {
            return None;
        }
        self.points.get(self.active_index).copied()
    }

    fn set_active_control_point(&mut self, point: DVec3, axis: Axis) {
        if let Some(slot) = self.points.get_mut(self.active_index) {
            *slot = point;
        }
        self.axis = Some(axis);
    }

    fn update(&mut self) {
        let n = MESH_RESOLUTION + 1;
        let mut mesh = Vec::with_capacity(n * n);
        for row in 0..n {
            let v = row as f64 / MESH_RESOLUTION as f64;
            for col in 0..n {
                let u = col as f64 / MESH_RESOLUTION as f64;
                mesh.push(self.patch(u, v));
            }
        }
        self.mesh = mesh;
    }

    fn patch(&self, u: f64, v: f64) -> DVec3 {
        let bu = bernstein(u);
        let bv = bernstein(v);
        let mut point = DVec3::ZERO;
        for (row, weight_v) in bv.iter().enumerate() {
            for (col, weight_u) in bu.iter().enumerate() {
                point += self.points[row * GRID + col] * (weight_u * weight_v);
            }
        }
        point
    }

    fn randomize(&mut self, duration: Duration) {
        let target = self.random_shape(RANDOM_HEIGHT, RANDOM_JITTER);
        self.start_tween(target, duration, ease_in_out_cubic);
    }

    fn randomize_close_to_original(&mut self, duration: Duration) {
        let target = self.random_shape(DRIFT_HEIGHT, 0.0);
        self.start_tween(target, duration, ease_in_out_cubic);
    }

    fn restore(&mut self, duration: Duration) {
        // Rückweg läuft sanft aus
        self.start_tween(self.original, duration, ease_out_cubic);
    }

    fn stop(&mut self) {
        self.tween = None;
    }

    fn next_display(&mut self) {
        self.display = self.display.next();
    }

    fn advance(&mut self, dt: Duration) -> Option<TweenEvent> {
        let tween = self.tween.as_mut()?;
        tween.elapsed += dt;
        let progress = if tween.duration.is_zero() {
            1.0
        } else {
            (tween.elapsed.as_secs_f64() / tween.duration.as_secs_f64()).min(1.0)
        };

        let eased = (tween.ease)(progress);
        for ((point, from), to) in self.points.iter_mut().zip(tween.from).zip(tween.to) {
            *point = from.lerp(to, eased);
        }

        let event = if progress >= 1.0 {
            self.points = tween.to;
            self.tween = None;
            TweenEvent::Completed
        } else {
            TweenEvent::Frame { progress }
        };
        self.update();
        Some(event)
    }

    fn display_mode(&self) -> DisplayMode {
        self.display
    }

    fn polylines(&self) -> Vec<Vec<DVec3>> {
        match self.display {
            DisplayMode::Wireframe => self.mesh_lines(),
            DisplayMode::ControlNet => self.control_net(),
            DisplayMode::Combined => {
                let mut lines = self.mesh_lines();
                lines.extend(self.control_net());
                lines
            }
        }
    }
}

/// Flaches 4×4-Gitter in der XY-Ebene, zentriert um den Ursprung.
fn flat_grid() -> [DVec3; POINT_COUNT] {
    let mut points = [DVec3::ZERO; POINT_COUNT];
    let step = PATCH_EXTENT / (GRID - 1) as f64;
    let half = PATCH_EXTENT * 0.5;
    for row in 0..GRID {
        for col in 0..GRID {
            points[row * GRID + col] =
                DVec3::new(col as f64 * step - half, row as f64 * step - half, 0.0);
        }
    }
    points
}

/// Kubische Bernstein-Basis bei `t`.
fn bernstein(t: f64) -> [f64; GRID] {
    let s = 1.0 - t;
    [s * s * s, 3.0 * t * s * s, 3.0 * t * t * s, t * t * t]
}
