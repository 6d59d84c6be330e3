use crate::context::SceneContext;
use crate::surface::{Anchor, Surface, TextStyle};

pub trait Layer {
    /// Paint this layer onto the surface.
    fn render(&self, context: &SceneContext<'_>, surface: &mut dyn Surface);
}

pub fn text_style(class: &'static str, color: &'static str, size: f64, anchor: Anchor) -> TextStyle {
    TextStyle {
        class,
        color,
        size,
        bold: false,
        anchor,
        middle: false,
    }
}

pub mod background;
pub mod cardinals;
pub mod empty;
pub mod horizon;
pub mod hud;
pub mod objects;
pub mod rings;
pub mod zenith;

pub use background::BackgroundLayer;
pub use cardinals::CardinalsLayer;
pub use empty::EmptyLayer;
pub use horizon::HorizonLayer;
pub use hud::HudLayer;
pub use objects::ObjectsLayer;
pub use rings::RingsLayer;
pub use zenith::ZenithLayer;
