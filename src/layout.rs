use crate::config::SkyMapConfig;
use crate::types::Point;

#[derive(Debug, Clone, Copy)]
pub struct SkyLayout {
    pub width: f64,
    pub height: f64,
    pub center_px: Point,
    /// Horizon radius at zoom 1.
    pub base_radius: f64,
    /// Horizon radius at the current zoom; zoom lives here, not in a transform.
    pub max_radius: f64,
}

impl SkyLayout {
    pub fn new(cfg: &SkyMapConfig, zoom: f64) -> Self {
        let width = cfg.width as f64;
        let height = cfg.height as f64;
        let center_px = Point {
            x: width / 2.0,
            y: height / 2.0,
        };
        let base_radius = center_px.x.min(center_px.y) - cfg.horizon_inset;

        Self {
            width,
            height,
            center_px,
            base_radius,
            max_radius: base_radius * zoom,
        }
    }
}

impl From<&SkyMapConfig> for SkyLayout {
    fn from(cfg: &SkyMapConfig) -> Self {
        Self::new(cfg, 1.0)
    }
}
