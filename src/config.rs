use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Palette {
    pub background: &'static str,
    pub horizon: &'static str,
    pub ring: &'static str,
    pub muted: &'static str,
    pub label: &'static str,
    pub hud_panel: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#0d1124",
            horizon: "#1f2a4d",
            ring: "rgba(31, 42, 77, 0.3)",
            muted: "#9aa5c4",
            label: "#eef2ff",
            hud_panel: "rgba(31, 42, 77, 0.8)",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

#[derive(Debug, Clone)]
pub struct SkyMapConfig {
    pub width: u32,
    pub height: u32,
    /// Gap between the canvas edge and the unzoomed horizon circle.
    pub horizon_inset: f64,
    /// How much of the disc must stay on canvas while panning.
    pub pan_margin: f64,
    pub zoom: ZoomLimits,
    pub hit_factor: f64,
    pub label_gap: f64,
    pub label_flip_margin: f64,
    pub cardinal_offset: f64,
    pub ring_altitudes_deg: [f64; 2],
    pub tooltip_offset: f64,
    pub tooltip_padding: f64,
    pub tooltip_release_delay: Duration,
    pub include_below_horizon: bool,
    pub palette: Palette,
}

impl Default for SkyMapConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            horizon_inset: 40.0,
            pan_margin: 50.0,
            zoom: ZoomLimits {
                min: 0.5,
                max: 5.0,
                step: 0.1,
            },
            hit_factor: 3.0,
            label_gap: 8.0,
            label_flip_margin: 80.0,
            cardinal_offset: 20.0,
            ring_altitudes_deg: [30.0, 60.0],
            tooltip_offset: 8.0,
            tooltip_padding: 8.0,
            tooltip_release_delay: Duration::from_millis(100),
            include_below_horizon: false,
            palette: Palette::default(),
        }
    }
}
