use crate::layout::SkyLayout;
use crate::types::{CelestialObject, Point};

const GLYPH_R_MIN: f64 = 1.5;
const GLYPH_R_MAX: f64 = 6.0;

/// Distance from the zenith for a given altitude.
/// 90° is the center, 0° the horizon; anything outside [0, 90] extrapolates linearly.
#[inline]
pub fn altitude_radius(altitude_deg: f64, max_radius: f64) -> f64 {
    ((90.0 - altitude_deg) / 90.0) * max_radius
}

// Project an alt/az pair onto the polar disc.
// - `altitude_deg` / `azimuth_deg`: in **degrees**, azimuth 0 = north, clockwise
// - `center`: pixel position of the zenith
// - `max_radius`: pixel radius of the horizon (zoom already applied)
//
// North is screen-up and east is screen-right; y grows downward.
// Both the renderer and the hit tester go through this function.
pub fn project(altitude_deg: f64, azimuth_deg: f64, center: Point, max_radius: f64) -> Point {
    let r = altitude_radius(altitude_deg, max_radius);
    let az = azimuth_deg.to_radians();
    Point {
        x: center.x + r * az.sin(),
        y: center.y - r * az.cos(),
    }
}

/// Glyph radius in pixels; brighter (lower magnitude) is larger.
pub fn glyph_radius(magnitude: f64) -> f64 {
    (7.0 - magnitude * 0.5).clamp(GLYPH_R_MIN, GLYPH_R_MAX)
}

/// Where and how large an object is drawn in the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub center: Point,
    pub radius: f64,
}

/// The plotted sequence of a frame: every object in input order, with its glyph
/// or `None` when the object cannot be placed.
///
/// Drawing and hit testing both walk this sequence, so later entries are drawn
/// on top while the earliest match wins a hit test.
pub fn glyphs<'a>(
    objects: &'a [CelestialObject],
    layout: SkyLayout,
) -> impl Iterator<Item = (usize, &'a CelestialObject, Option<Glyph>)> + 'a {
    objects.iter().enumerate().map(move |(i, o)| {
        let glyph = o.sky_position().map(|pos| Glyph {
            center: project(
                pos.altitude_deg,
                pos.azimuth_deg,
                layout.center_px,
                layout.max_radius,
            ),
            radius: glyph_radius(pos.magnitude),
        });
        (i, o, glyph)
    })
}
