use crate::context::SceneContext;
use crate::geometry::project;
use crate::layers::{Layer, text_style};
use crate::surface::{Anchor, Surface};

pub struct CardinalsLayer {
    marks: [(&'static str, f64); 4],
}
impl CardinalsLayer {
    pub fn new() -> Self {
        Self {
            marks: [("N", 0.0), ("E", 90.0), ("S", 180.0), ("W", 270.0)],
        }
    }
}

impl Layer for CardinalsLayer {
    fn render(&self, context: &SceneContext<'_>, surface: &mut dyn Surface) {
        let mut style = text_style("cardinal", context.cfg.palette.muted, 14.0, Anchor::Middle);
        style.bold = true;
        style.middle = true;

        // Just outside the horizon circle
        let r = context.layout.max_radius + context.cfg.cardinal_offset;
        for (label, az) in self.marks {
            let p = project(0.0, az, context.layout.center_px, r);
            surface.text(p, label, &style);
        }
    }
}
