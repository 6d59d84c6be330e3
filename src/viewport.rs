use log::debug;

use crate::config::SkyMapConfig;
use crate::layout::SkyLayout;
use crate::types::Point;

/// Zoom and pan of the sky map. Zoom is kept in `[zoom.min, zoom.max]` and pan
/// is kept close enough that part of the horizon disc stays on canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    pub zoom: f64,
    pub pan: Point,
    drag_anchor: Option<Point>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Point::new(0.0, 0.0),
            drag_anchor: None,
        }
    }
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(&self, cfg: &SkyMapConfig) -> SkyLayout {
        SkyLayout::new(cfg, self.zoom)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn zoom_by(&mut self, delta: f64, cfg: &SkyMapConfig) {
        let next = self.zoom + delta;
        // NaN input leaves the zoom untouched
        if next.is_nan() {
            return;
        }
        self.zoom = next.clamp(cfg.zoom.min, cfg.zoom.max);
        // Zooming out shrinks the pan bounds
        self.pan = self.clamp_pan(self.pan, cfg);
        debug!("zoom -> {:.2}", self.zoom);
    }

    pub fn begin_drag(&mut self, pointer: Point) {
        self.drag_anchor = Some(Point::new(pointer.x - self.pan.x, pointer.y - self.pan.y));
    }

    /// Move the pan with the pointer. Ignored when no drag is in progress.
    pub fn update_drag(&mut self, pointer: Point, cfg: &SkyMapConfig) {
        let Some(anchor) = self.drag_anchor else {
            return;
        };
        let candidate = Point::new(pointer.x - anchor.x, pointer.y - anchor.y);
        if candidate.x.is_nan() || candidate.y.is_nan() {
            return;
        }
        self.pan = self.clamp_pan(candidate, cfg);
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = Point::new(0.0, 0.0);
        debug!("viewport reset");
    }

    fn clamp_pan(&self, pan: Point, cfg: &SkyMapConfig) -> Point {
        let (bx, by) = self.pan_bounds(cfg);
        Point::new(pan.x.clamp(-bx, bx), pan.y.clamp(-by, by))
    }

    /// Largest allowed |pan| per axis at the current zoom.
    pub fn pan_bounds(&self, cfg: &SkyMapConfig) -> (f64, f64) {
        let l = self.layout(cfg);
        let bx = (l.max_radius + l.center_px.x - cfg.pan_margin).max(0.0);
        let by = (l.max_radius + l.center_px.y - cfg.pan_margin).max(0.0);
        (bx, by)
    }
}
