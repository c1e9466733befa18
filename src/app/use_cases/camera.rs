//! Use-Case-Funktionen für Kamera-Steuerung.
//!
//! Die Funktionen haben die Signatur eines kontinuierlichen Handlers und
//! werden über die Aktions-Registry mit Mausrad-Deltas aufgerufen.

use crate::app::AppState;

/// Dreht die Kamera horizontal mit der konfigurierten Empfindlichkeit.
pub fn rotate_horizontal(state: &mut AppState, delta: f64) {
    let sensitivity = state.options.camera_rotate_sensitivity_h;
    state.view.camera.rotate_horizontal(delta, sensitivity);
}

/// Dreht die Kamera vertikal; die Höhe bleibt in `[-π/2, π/2]`.
pub fn rotate_vertical(state: &mut AppState, delta: f64) {
    let sensitivity = state.options.camera_rotate_sensitivity_v;
    state.view.camera.rotate_vertical(delta, sensitivity);
}

/// Zoomt exponentiell in Richtung des Delta-Vorzeichens.
pub fn zoom(state: &mut AppState, delta: f64) {
    state.view.camera.zoom_by(delta);
}

/// Setzt die Kamera auf die Startwerte zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera.reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::test_state;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_8};

    #[test]
    fn rotate_horizontal_uses_configured_sensitivity() {
        let mut state = test_state();
        rotate_horizontal(&mut state, 100.0);
        assert_relative_eq!(state.view.camera.azimuth(), FRAC_PI_8 + 0.6, epsilon = 1e-12);
    }

    #[test]
    fn repeated_vertical_rotation_stays_clamped() {
        let mut state = test_state();
        for _ in 0..50 {
            rotate_vertical(&mut state, 500.0);
            assert!(state.view.camera.altitude() <= FRAC_PI_2);
        }
        assert_eq!(state.view.camera.altitude(), FRAC_PI_2);

        for _ in 0..50 {
            rotate_vertical(&mut state, -500.0);
            assert!(state.view.camera.altitude() >= -FRAC_PI_2);
        }
        assert_eq!(state.view.camera.altitude(), -FRAC_PI_2);
    }

    #[test]
    fn zoom_stays_positive() {
        let mut state = test_state();
        for _ in 0..500 {
            zoom(&mut state, -3.0);
        }
        assert!(state.view.camera.zoom() > 0.0);

        zoom(&mut state, 0.0);
        let before = state.view.camera.zoom();
        zoom(&mut state, 0.0);
        assert_eq!(state.view.camera.zoom(), before);
    }

    #[test]
    fn reset_restores_orbit() {
        let mut state = test_state();
        rotate_horizontal(&mut state, 42.0);
        zoom(&mut state, 1.0);
        reset_camera(&mut state);
        assert_relative_eq!(state.view.camera.azimuth(), FRAC_PI_8);
        assert_relative_eq!(state.view.camera.zoom(), 1.0);
    }
}
