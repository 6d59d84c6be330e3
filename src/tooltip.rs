use std::time::{Duration, Instant};

use log::debug;

use crate::config::SkyMapConfig;
use crate::types::{
    CelestialObject, Point, format_degrees, format_distance_au, format_fixed,
};

// Rough text metrics used to size the panel before it is laid out.
const CHAR_W: f64 = 7.0;
const LINE_H: f64 = 16.0;
const PANEL_PAD: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Where the canvas sits on the page and how large the page viewport is.
///
/// `canvas_box` is the CSS box of the canvas, which may be scaled relative to
/// its `canvas_px` backing size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub canvas_box: Rect,
    pub canvas_px: (f64, f64),
    pub viewport: (f64, f64),
}

impl PageGeometry {
    /// Canvas drawn 1:1 at the page origin, viewport the same size as the canvas.
    pub fn unscaled(width: u32, height: u32) -> Self {
        let (w, h) = (width as f64, height as f64);
        Self {
            canvas_box: Rect {
                left: 0.0,
                top: 0.0,
                width: w,
                height: h,
            },
            canvas_px: (w, h),
            viewport: (w, h),
        }
    }

    /// Map a canvas pixel to page coordinates.
    pub fn to_page(&self, canvas: Point) -> Point {
        let (cw, ch) = self.canvas_px;
        let sx = if cw > 0.0 { self.canvas_box.width / cw } else { 1.0 };
        let sy = if ch > 0.0 { self.canvas_box.height / ch } else { 1.0 };
        Point::new(
            self.canvas_box.left + canvas.x * sx,
            self.canvas_box.top + canvas.y * sy,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    RightStart,
    LeftStart,
    RightEnd,
    LeftEnd,
    TopStart,
    TopEnd,
    BottomStart,
    BottomEnd,
}

impl Placement {
    /// Preferred placement first, then the fallbacks in the order they are tried.
    pub const ORDER: [Placement; 8] = [
        Placement::RightStart,
        Placement::LeftStart,
        Placement::RightEnd,
        Placement::LeftEnd,
        Placement::TopStart,
        Placement::TopEnd,
        Placement::BottomStart,
        Placement::BottomEnd,
    ];

    /// Panel rectangle for a zero-sized reference at `anchor`.
    fn rect(self, anchor: Point, size: (f64, f64), offset: f64) -> Rect {
        let (w, h) = size;
        let (left, top) = match self {
            Self::RightStart => (anchor.x + offset, anchor.y),
            Self::RightEnd => (anchor.x + offset, anchor.y - h),
            Self::LeftStart => (anchor.x - offset - w, anchor.y),
            Self::LeftEnd => (anchor.x - offset - w, anchor.y - h),
            Self::TopStart => (anchor.x, anchor.y - offset - h),
            Self::TopEnd => (anchor.x - w, anchor.y - offset - h),
            Self::BottomStart => (anchor.x, anchor.y + offset),
            Self::BottomEnd => (anchor.x - w, anchor.y + offset),
        };
        Rect {
            left,
            top,
            width: w,
            height: h,
        }
    }
}

/// Pick the first placement whose panel fits inside the viewport (minus
/// `padding`). If none fits, the preferred one is shifted back inside.
pub fn place(
    anchor: Point,
    size: (f64, f64),
    viewport: (f64, f64),
    offset: f64,
    padding: f64,
) -> (Placement, Rect) {
    let fits = |r: &Rect| {
        r.left >= padding
            && r.top >= padding
            && r.right() <= viewport.0 - padding
            && r.bottom() <= viewport.1 - padding
    };

    for placement in Placement::ORDER {
        let r = placement.rect(anchor, size, offset);
        if fits(&r) {
            return (placement, r);
        }
    }

    let preferred = Placement::ORDER[0];
    let mut r = preferred.rect(anchor, size, offset);
    r.left = r.left.min(viewport.0 - padding - r.width).max(padding);
    r.top = r.top.min(viewport.1 - padding - r.height).max(padding);
    (preferred, r)
}

/// Text shown in the detail panel.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub rows: Vec<(&'static str, String)>,
}

impl TooltipContent {
    pub fn for_object(o: &CelestialObject) -> Self {
        let mut rows = vec![
            ("Type", o.display_type()),
            ("Magnitude", format_fixed(o.magnitude, 2)),
            ("Altitude", format_degrees(o.altitude)),
            ("Azimuth", format_degrees(o.azimuth)),
            ("RA", o.right_ascension.clone()),
            ("Dec", o.declination.clone()),
        ];
        if !o.is_star() {
            rows.push(("Distance", format_distance_au(o.distance)));
        }
        Self {
            title: o.name.clone(),
            rows,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.title.clone())
            .chain(self.rows.iter().map(|(k, v)| format!("{k}: {v}")))
    }

    /// Estimated panel size in page pixels.
    pub fn estimated_size(&self) -> (f64, f64) {
        let longest = self.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let lines = 1 + self.rows.len();
        (
            longest as f64 * CHAR_W + 2.0 * PANEL_PAD,
            lines as f64 * LINE_H + 2.0 * PANEL_PAD,
        )
    }
}

/// A live positioning instance attached to the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Positioner {
    pub anchor_canvas: Point,
    pub placement: Placement,
    pub rect: Rect,
}

/// Shows and hides the hover panel.
///
/// Hiding is immediate; the positioner is released only after
/// `release_delay`, and a `show` within that window cancels the release.
#[derive(Debug)]
pub struct TooltipPresenter {
    page: PageGeometry,
    offset: f64,
    padding: f64,
    release_delay: Duration,
    visible: bool,
    content: Option<TooltipContent>,
    positioner: Option<Positioner>,
    pending_release: Option<Instant>,
}

impl TooltipPresenter {
    pub fn new(cfg: &SkyMapConfig, page: PageGeometry) -> Self {
        Self {
            page,
            offset: cfg.tooltip_offset,
            padding: cfg.tooltip_padding,
            release_delay: cfg.tooltip_release_delay,
            visible: false,
            content: None,
            positioner: None,
            pending_release: None,
        }
    }

    pub fn show(&mut self, object: &CelestialObject, anchor_canvas: Point) {
        self.pending_release = None;
        let content = TooltipContent::for_object(object);
        let size = content.estimated_size();
        let anchor = self.page.to_page(anchor_canvas);
        let (placement, rect) = place(anchor, size, self.page.viewport, self.offset, self.padding);

        debug!("tooltip for {:?} at {placement:?}", object.name);
        // Any previous instance is dropped in favour of a fresh one
        self.positioner = Some(Positioner {
            anchor_canvas,
            placement,
            rect,
        });
        self.content = Some(content);
        self.visible = true;
    }

    pub fn hide(&mut self, now: Instant) {
        if self.visible {
            debug!("tooltip hidden");
        }
        self.visible = false;
        if self.positioner.is_some() {
            self.pending_release = Some(now + self.release_delay);
        }
    }

    /// Run the delayed release if it is due.
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.pending_release else {
            return;
        };
        if now < due {
            return;
        }
        self.pending_release = None;
        if !self.visible {
            self.positioner = None;
            self.content = None;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref().filter(|_| self.visible)
    }

    pub fn positioner(&self) -> Option<&Positioner> {
        self.positioner.as_ref()
    }

    pub fn release_pending(&self) -> bool {
        self.pending_release.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{approx, make_config, object, sirius};

    fn presenter(w: u32, h: u32) -> TooltipPresenter {
        TooltipPresenter::new(&make_config(|_| {}), PageGeometry::unscaled(w, h))
    }

    #[test]
    fn content_lists_details_and_omits_distance_for_stars() {
        let c = TooltipContent::for_object(&sirius());
        assert_eq!(c.title, "Sirius");
        assert_eq!(c.rows[0], ("Type", "Star".to_string()));
        assert_eq!(c.rows[1], ("Magnitude", "-1.46".to_string()));
        assert_eq!(c.rows[2], ("Altitude", "45.00°".to_string()));
        assert_eq!(c.rows[3], ("Azimuth", "180.00°".to_string()));
        assert!(c.rows.iter().all(|(k, _)| *k != "Distance"));

        let mut mars = object("Mars", "planet", 1.1, 20.0, 100.0);
        let c = TooltipContent::for_object(&mars);
        assert_eq!(c.rows.last(), Some(&("Distance", "N/A".to_string())));
        mars.distance = Some(1.523_68);
        let c = TooltipContent::for_object(&mars);
        assert_eq!(c.rows.last(), Some(&("Distance", "1.524 AU".to_string())));
    }

    #[test]
    fn page_mapping_accounts_for_css_scaling() {
        let page = PageGeometry {
            canvas_box: Rect {
                left: 100.0,
                top: 50.0,
                width: 300.0,
                height: 300.0,
            },
            canvas_px: (600.0, 600.0),
            viewport: (1024.0, 768.0),
        };
        let p = page.to_page(Point::new(200.0, 400.0));
        assert!(approx(p.x, 200.0, 1e-12));
        assert!(approx(p.y, 250.0, 1e-12));
    }

    #[test]
    fn prefers_right_of_anchor() {
        let (placement, r) = place(Point::new(100.0, 100.0), (120.0, 80.0), (800.0, 600.0), 8.0, 8.0);
        assert_eq!(placement, Placement::RightStart);
        assert!(approx(r.left, 108.0, 1e-12));
        assert!(approx(r.top, 100.0, 1e-12));
    }

    #[test]
    fn flips_left_near_right_edge() {
        let (placement, r) = place(Point::new(750.0, 100.0), (120.0, 80.0), (800.0, 600.0), 8.0, 8.0);
        assert_eq!(placement, Placement::LeftStart);
        assert!(approx(r.left, 750.0 - 8.0 - 120.0, 1e-12));
    }

    #[test]
    fn uses_end_alignment_near_bottom() {
        let (placement, r) = place(Point::new(100.0, 560.0), (120.0, 80.0), (800.0, 600.0), 8.0, 8.0);
        assert_eq!(placement, Placement::RightEnd);
        assert!(approx(r.bottom(), 560.0, 1e-12));
    }

    #[test]
    fn falls_back_to_top_or_bottom_when_sides_are_blocked() {
        // Too narrow for either side, room above if aligned to the end
        let (placement, r) = place(Point::new(130.0, 400.0), (120.0, 80.0), (200.0, 600.0), 8.0, 8.0);
        assert_eq!(placement, Placement::TopEnd);
        assert!(approx(r.bottom(), 392.0, 1e-12));
    }

    #[test]
    fn clamps_preferred_when_nothing_fits() {
        let (placement, r) = place(Point::new(50.0, 50.0), (300.0, 300.0), (200.0, 200.0), 8.0, 8.0);
        assert_eq!(placement, Placement::RightStart);
        assert!(approx(r.left, 8.0, 1e-12));
        assert!(approx(r.top, 8.0, 1e-12));
    }

    #[test]
    fn hide_releases_positioner_after_delay() {
        let mut t = presenter(600, 600);
        let t0 = Instant::now();
        t.show(&sirius(), Point::new(200.0, 280.0));
        assert!(t.is_visible());
        assert!(t.positioner().is_some());

        t.hide(t0);
        assert!(!t.is_visible());
        assert!(t.content().is_none());
        assert!(t.positioner().is_some());

        t.tick(t0 + Duration::from_millis(50));
        assert!(t.positioner().is_some());
        t.tick(t0 + Duration::from_millis(100));
        assert!(t.positioner().is_none());
        assert!(!t.release_pending());
    }

    #[test]
    fn show_within_delay_cancels_release() {
        let mut t = presenter(600, 600);
        let t0 = Instant::now();
        t.show(&sirius(), Point::new(200.0, 280.0));
        t.hide(t0);
        assert!(t.release_pending());

        let mars = object("Mars", "planet", 1.1, 20.0, 100.0);
        t.show(&mars, Point::new(300.0, 150.0));
        assert!(!t.release_pending());
        t.tick(t0 + Duration::from_secs(1));
        assert!(t.is_visible());
        assert_eq!(t.content().map(|c| c.title.as_str()), Some("Mars"));
        assert!(t.positioner().is_some());
    }

    #[test]
    fn hide_without_positioner_schedules_nothing() {
        let mut t = presenter(600, 600);
        t.hide(Instant::now());
        assert!(!t.release_pending());
    }
}
