use crate::context::SceneContext;
use crate::layers::Layer;
use crate::surface::{Paint, Surface};

pub const HORIZON_WIDTH: f64 = 2.0;

pub struct HorizonLayer;
impl HorizonLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for HorizonLayer {
    fn render(&self, context: &SceneContext<'_>, surface: &mut dyn Surface) {
        surface.circle(
            context.layout.center_px,
            context.layout.max_radius,
            &Paint::Stroke {
                color: context.cfg.palette.horizon,
                width: HORIZON_WIDTH,
                dash: None,
            },
        );
    }
}
