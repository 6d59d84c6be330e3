use crate::context::SceneContext;
use crate::layers::{Layer, text_style};
use crate::surface::{Anchor, Surface};
use crate::types::Point;

/// Zoom readout pinned to the top-left corner, outside the pan offset.
pub struct HudLayer {
    panel: (f64, f64, f64, f64),
    text_at: Point,
}
impl HudLayer {
    pub fn new() -> Self {
        Self {
            panel: (10.0, 10.0, 100.0, 30.0),
            text_at: Point::new(20.0, 28.0),
        }
    }
}

impl Layer for HudLayer {
    fn render(&self, context: &SceneContext<'_>, surface: &mut dyn Surface) {
        let (x, y, w, h) = self.panel;
        surface.fill_rect(x, y, w, h, context.cfg.palette.hud_panel);

        let style = text_style("hud-label", context.cfg.palette.muted, 12.0, Anchor::Start);
        surface.text(self.text_at, &format!("Zoom: {:.1}x", context.zoom), &style);
    }
}
