use crate::context::SceneContext;
use crate::layers::{Layer, text_style};
use crate::surface::{Anchor, Surface};
use crate::types::Point;

pub struct ZenithLayer;
impl ZenithLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for ZenithLayer {
    fn render(&self, context: &SceneContext<'_>, surface: &mut dyn Surface) {
        let mut style = text_style("zenith", context.cfg.palette.muted, 12.0, Anchor::Middle);
        style.middle = true;

        let c = context.layout.center_px;
        surface.text(Point::new(c.x, c.y - 5.0), "+", &style);
        surface.text(Point::new(c.x, c.y + 15.0), "Zenith", &style);
    }
}
