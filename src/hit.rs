use crate::config::SkyMapConfig;
use crate::geometry::glyphs;
use crate::types::{CelestialObject, Point};
use crate::viewport::ViewportState;

/// Index of the object under `pointer` (canvas pixels), if any.
///
/// The hit box is `cfg.hit_factor` times the glyph radius. Objects are tried in
/// the same order they are drawn and the first one in range wins, so of two
/// overlapping glyphs the earlier one is returned even if the pointer is
/// closer to the later one.
pub fn locate(
    pointer: Point,
    viewport: &ViewportState,
    cfg: &SkyMapConfig,
    objects: &[CelestialObject],
) -> Option<usize> {
    // Undo the render-time pan
    let adjusted = Point::new(pointer.x - viewport.pan.x, pointer.y - viewport.pan.y);

    glyphs(objects, viewport.layout(cfg))
        .filter_map(|(i, _, glyph)| glyph.map(|g| (i, g)))
        .find(|(_, g)| adjusted.distance(g.center) <= cfg.hit_factor * g.radius)
        .map(|(i, _)| i)
}
