use crate::context::SceneContext;
use crate::layers::horizon::HORIZON_WIDTH;
use crate::layers::{Layer, text_style};
use crate::surface::{Anchor, Paint, Surface};

/// The "no data" frame: bare horizon at zoom 1, no pan, and a message.
pub struct EmptyLayer {
    message: &'static str,
}
impl EmptyLayer {
    pub fn new() -> Self {
        Self {
            message: "No objects to display",
        }
    }
}

impl Layer for EmptyLayer {
    fn render(&self, context: &SceneContext<'_>, surface: &mut dyn Surface) {
        let l = &context.layout;
        surface.circle(
            l.center_px,
            l.base_radius,
            &Paint::Stroke {
                color: context.cfg.palette.horizon,
                width: HORIZON_WIDTH,
                dash: None,
            },
        );

        let style = text_style("empty-message", context.cfg.palette.muted, 14.0, Anchor::Middle);
        surface.text(l.center_px, self.message, &style);
    }
}
