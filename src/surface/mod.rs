use crate::types::Point;

pub mod svg_surface;

#[cfg(test)]
pub mod recording;

pub use svg_surface::SvgSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Stroke {
        color: &'static str,
        width: f64,
        dash: Option<(f64, f64)>,
    },
    Fill {
        color: &'static str,
        /// Blur radius of a same-colored glow, if any.
        glow: Option<f64>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub class: &'static str,
    pub color: &'static str,
    pub size: f64,
    pub bold: bool,
    pub anchor: Anchor,
    /// Vertically center on `at` instead of sitting on the baseline.
    pub middle: bool,
}

/// The handful of drawing primitives the sky map needs.
///
/// Offsets nest: everything drawn between `push_offset` and the matching
/// `pop_offset` is shifted by `(dx, dy)`.
pub trait Surface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &'static str);
    fn circle(&mut self, center: Point, r: f64, paint: &Paint);
    fn text(&mut self, at: Point, content: &str, style: &TextStyle);
    fn push_offset(&mut self, dx: f64, dy: f64);
    fn pop_offset(&mut self);
}
