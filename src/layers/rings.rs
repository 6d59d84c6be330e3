use crate::context::SceneContext;
use crate::geometry::altitude_radius;
use crate::layers::Layer;
use crate::surface::{Paint, Surface};

/// Dashed altitude circles.
pub struct RingsLayer {
    width: f64,
    dash: (f64, f64),
}
impl RingsLayer {
    pub fn new() -> Self {
        Self {
            width: 1.0,
            dash: (3.0, 3.0),
        }
    }
}

impl Layer for RingsLayer {
    fn render(&self, context: &SceneContext<'_>, surface: &mut dyn Surface) {
        let paint = Paint::Stroke {
            color: context.cfg.palette.ring,
            width: self.width,
            dash: Some(self.dash),
        };
        for alt in context.cfg.ring_altitudes_deg {
            let r = altitude_radius(alt, context.layout.max_radius);
            surface.circle(context.layout.center_px, r, &paint);
        }
    }
}
