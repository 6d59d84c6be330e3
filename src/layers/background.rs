use crate::context::SceneContext;
use crate::layers::Layer;
use crate::surface::Surface;

pub struct BackgroundLayer;
impl BackgroundLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for BackgroundLayer {
    fn render(&self, context: &SceneContext<'_>, surface: &mut dyn Surface) {
        let l = &context.layout;
        surface.fill_rect(0.0, 0.0, l.width, l.height, context.cfg.palette.background);
    }
}
