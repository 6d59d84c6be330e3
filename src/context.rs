use crate::config::SkyMapConfig;
use crate::geometry::{Glyph, glyphs};
use crate::layout::SkyLayout;
use crate::types::{CelestialObject, Point};
use crate::viewport::ViewportState;

/// Everything one frame is painted from.
pub struct SceneContext<'a> {
    pub objects: &'a [CelestialObject],
    pub cfg: &'a SkyMapConfig,
    pub pan: Point,
    pub zoom: f64,
    pub layout: SkyLayout,
}

impl<'a> SceneContext<'a> {
    pub fn new(
        objects: &'a [CelestialObject],
        cfg: &'a SkyMapConfig,
        viewport: &ViewportState,
    ) -> Self {
        Self {
            objects,
            cfg,
            pan: viewport.pan,
            zoom: viewport.zoom,
            layout: viewport.layout(cfg),
        }
    }

    pub fn glyphs(&self) -> impl Iterator<Item = (usize, &'a CelestialObject, Option<Glyph>)> + 'a {
        glyphs(self.objects, self.layout)
    }
}
