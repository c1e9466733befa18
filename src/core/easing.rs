//! Easing-Funktionen für animierte Übergänge.
//!
//! Alle Funktionen erwarten einen normierten Zeitwert und klemmen ihn auf `[0, 1]`.

/// Kubisches Ease-In-Out: langsamer Start, schnelle Mitte, langsames Ende.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Kubisches Ease-Out: schneller Start, sanftes Auslaufen.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Zuwachs der Easing-Kurve zwischen zwei Fortschrittswerten.
///
/// Summiert über alle Frames einer Animation ergibt sich exakt `ease(1) - ease(0) = 1`.
pub fn eased_increment(ease: fn(f64) -> f64, previous: f64, current: f64) -> f64 {
    ease(current) - ease(previous)
}
