use std::fs;
use std::path::Path;

use svg::Document;
use svg::node::element::{Circle, Group, Rectangle, Style, Text as TextEl};

use crate::surface::{Paint, Surface, TextStyle};
use crate::types::Point;

// Load the default css for embedding
const DEFAULT_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/styles/skymap.css"));

/// Builds one SVG frame. Each pushed offset becomes a translated group.
pub struct SvgSurface {
    width: u32,
    height: u32,
    css: String,
    stack: Vec<Group>,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32, css_path: Option<&str>) -> Self {
        Self {
            width,
            height,
            css: load_css_text(css_path),
            stack: vec![Group::new().set("class", "frame")],
        }
    }

    fn append<T: Into<Box<dyn svg::Node>>>(&mut self, node: T) {
        let top = self.stack.pop().unwrap_or_else(Group::new);
        self.stack.push(top.add(node));
    }

    pub fn into_document(mut self) -> Document {
        // Close any offsets the caller left open
        while self.stack.len() > 1 {
            self.pop_offset();
        }

        let mut doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", self.width)
            .set("height", self.height)
            .set("viewBox", format!("0 0 {} {}", self.width, self.height))
            .set("class", "skymap");

        if !self.css.is_empty() {
            doc = doc.add(Style::new(self.css));
        }
        for g in self.stack {
            doc = doc.add(g);
        }
        doc
    }

    pub fn save(self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let doc = self.into_document();
        svg::save(path, &doc)
    }
}

fn load_css_text(css_path: Option<&str>) -> String {
    if let Some(path) = css_path {
        match fs::read_to_string(path) {
            Ok(text) => return text,
            Err(e) => log::warn!("could not read css override {path}: {e}; using embedded css"),
        }
    }
    DEFAULT_CSS.to_owned()
}

impl Surface for SvgSurface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &'static str) {
        self.append(
            Rectangle::new()
                .set("x", x)
                .set("y", y)
                .set("width", w)
                .set("height", h)
                .set("fill", color),
        );
    }

    fn circle(&mut self, center: Point, r: f64, paint: &Paint) {
        let c = Circle::new()
            .set("cx", center.x)
            .set("cy", center.y)
            .set("r", r);
        let c = match paint {
            Paint::Stroke { color, width, dash } => {
                let c = c
                    .set("fill", "none")
                    .set("stroke", *color)
                    .set("stroke-width", *width);
                match dash {
                    Some((on, off)) => c.set("stroke-dasharray", format!("{on} {off}")),
                    None => c,
                }
            }
            Paint::Fill { color, glow } => {
                let c = c.set("fill", *color);
                match glow {
                    // Canvas shadow blur is roughly twice the gaussian deviation
                    Some(blur) => c.set(
                        "style",
                        format!("filter: drop-shadow(0 0 {}px {color})", blur / 2.0),
                    ),
                    None => c,
                }
            }
        };
        self.append(c);
    }

    fn text(&mut self, at: Point, content: &str, style: &TextStyle) {
        let mut t = TextEl::new(content)
            .set("class", style.class)
            .set("x", at.x)
            .set("y", at.y)
            .set("fill", style.color)
            .set("font-size", style.size)
            .set("text-anchor", style.anchor.as_svg());
        if style.bold {
            t = t.set("font-weight", "bold");
        }
        if style.middle {
            t = t.set("dominant-baseline", "middle");
        }
        self.append(t);
    }

    fn push_offset(&mut self, dx: f64, dy: f64) {
        self.stack
            .push(Group::new().set("transform", format!("translate({dx} {dy})")));
    }

    fn pop_offset(&mut self) {
        if self.stack.len() > 1 {
            if let Some(g) = self.stack.pop() {
                self.append(g);
            }
        }
    }
}
