//! Platzierung des Koordinaten-Labels neben einem projizierten Punkt.

use glam::DVec2;

/// Geometrie für die Label-Platzierung (alles in logischen Pixeln)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelLayout {
    /// Viewport-Größe in logischen Pixeln
    pub viewport: DVec2,
    /// Gemessene Label-Größe
    pub label_size: DVec2,
    /// Abstand zwischen Punkt und Label-Kante
    pub margin: f64,
}

/// Rechnet physische Viewport-Pixel in logische Pixel um.
pub fn logical_viewport(physical_size: [f32; 2], pixels_per_point: f32) -> DVec2 {
    let ppp = if pixels_per_point > 0.0 {
        pixels_per_point as f64
    } else {
        1.0
    };
    DVec2::new(physical_size[0] as f64, physical_size[1] as f64) / ppp
}

/// NDC (`y` nach oben) → Bildschirmkoordinaten (`y` nach unten).
pub fn ndc_to_screen(ndc: DVec2, viewport: DVec2) -> DVec2 {
    DVec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.x,
        (1.0 - ndc.y) * 0.5 * viewport.y,
    )
}

/// Bestimmt den Label-Mittelpunkt für einen Punkt in NDC.
///
/// Das Label wird je nach Quadrant vom Punkt weg geschoben (halbe Größe plus
/// Margin) und anschließend so geklemmt, dass es vollständig im Viewport liegt.
pub fn resolve_anchor(ndc: DVec2, layout: &LabelLayout) -> DVec2 {
    let half = layout.label_size * 0.5;
    let direction = DVec2::new(
        if ndc.x >= 0.0 { 1.0 } else { -1.0 },
        // obere Bildhälfte → nach oben (negatives Screen-y)
        if ndc.y >= 0.0 { -1.0 } else { 1.0 },
    );
    let naive = ndc_to_screen(ndc, layout.viewport) + direction * (half + DVec2::splat(layout.margin));

    DVec2::new(
        clamp_axis(naive.x, half.x, layout.viewport.x),
        clamp_axis(naive.y, half.y, layout.viewport.y),
    )
}

/// Klemmt eine Mittelpunkt-Koordinate auf `[half, extent - half]`.
/// Ist das Label größer als der Viewport, gewinnt die linke/obere Kante.
fn clamp_axis(value: f64, half: f64, extent: f64) -> f64 {
    value.min(extent - half).max(half)
}
