use crate::surface::{Paint, Surface, TextStyle};
use crate::types::Point;

/// A drawn primitive, with positions already shifted by any active offsets.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: &'static str,
    },
    Circle {
        center: Point,
        r: f64,
        paint: Paint,
    },
    Text {
        at: Point,
        content: String,
        style: TextStyle,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub primitives: Vec<Primitive>,
    offsets: Vec<(f64, f64)>,
    pub max_depth: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn shift(&self, p: Point) -> Point {
        let (dx, dy) = self
            .offsets
            .iter()
            .fold((0.0, 0.0), |(ax, ay), (dx, dy)| (ax + dx, ay + dy));
        Point::new(p.x + dx, p.y + dy)
    }

    pub fn depth(&self) -> usize {
        self.offsets.len()
    }

    pub fn texts(&self) -> Vec<(&str, Point)> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { at, content, .. } => Some((content.as_str(), *at)),
                _ => None,
            })
            .collect()
    }

    pub fn text_at(&self, content: &str) -> Option<(Point, &TextStyle)> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Text { at, content: c, style } if c == content => Some((*at, style)),
            _ => None,
        })
    }

    pub fn circles(&self) -> Vec<(Point, f64, &Paint)> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Circle { center, r, paint } => Some((*center, *r, paint)),
                _ => None,
            })
            .collect()
    }

    pub fn filled_circles(&self) -> Vec<(Point, f64, &'static str)> {
        self.circles()
            .into_iter()
            .filter_map(|(c, r, paint)| match paint {
                Paint::Fill { color, .. } => Some((c, r, *color)),
                Paint::Stroke { .. } => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &'static str) {
        let p = self.shift(Point::new(x, y));
        self.primitives.push(Primitive::Rect {
            x: p.x,
            y: p.y,
            w,
            h,
            color,
        });
    }

    fn circle(&mut self, center: Point, r: f64, paint: &Paint) {
        let center = self.shift(center);
        self.primitives.push(Primitive::Circle {
            center,
            r,
            paint: paint.clone(),
        });
    }

    fn text(&mut self, at: Point, content: &str, style: &TextStyle) {
        let at = self.shift(at);
        self.primitives.push(Primitive::Text {
            at,
            content: content.to_string(),
            style: style.clone(),
        });
    }

    fn push_offset(&mut self, dx: f64, dy: f64) {
        self.offsets.push((dx, dy));
        self.max_depth = self.max_depth.max(self.offsets.len());
    }

    fn pop_offset(&mut self) {
        self.offsets.pop();
    }
}
