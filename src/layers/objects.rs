use log::warn;

use crate::context::SceneContext;
use crate::layers::{Layer, text_style};
use crate::surface::{Anchor, Paint, Surface};
use crate::types::Point;

pub struct ObjectsLayer {
    glow_blur: f64,
    label_size: f64,
}
impl ObjectsLayer {
    pub fn new() -> Self {
        Self {
            glow_blur: 8.0,
            label_size: 11.0,
        }
    }
}

impl Layer for ObjectsLayer {
    fn render(&self, context: &SceneContext<'_>, surface: &mut dyn Surface) {
        let cfg = context.cfg;
        let flip_x = context.layout.width - cfg.label_flip_margin;

        // Input order: later objects paint over earlier ones
        for (i, o, glyph) in context.glyphs() {
            let Some(glyph) = glyph else {
                warn!("skipping object #{i} ({:?}): missing or invalid position/magnitude", o.name);
                continue;
            };
            let p = glyph.center;

            surface.circle(
                p,
                glyph.radius,
                &Paint::Fill {
                    color: o.kind().color(),
                    glow: Some(self.glow_blur),
                },
            );

            if o.name.is_empty() {
                continue;
            }
            // Near the right edge the label goes on the left
            let gap = glyph.radius + cfg.label_gap;
            let (dx, anchor) = if p.x > flip_x {
                (-gap, Anchor::End)
            } else {
                (gap, Anchor::Start)
            };
            let mut style = text_style("object-label", cfg.palette.label, self.label_size, anchor);
            style.middle = true;
            surface.text(Point::new(p.x + dx, p.y), &o.name, &style);
        }
    }
}
