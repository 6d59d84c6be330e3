use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectKind {
    Sun,
    Moon,
    Planet,
    Star,
    Other(String),
}

impl ObjectKind {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sun" => Self::Sun,
            "moon" => Self::Moon,
            "planet" => Self::Planet,
            "star" => Self::Star,
            _ => Self::Other(s.to_string()),
        }
    }

    /// Glyph color; anything unrecognised is drawn like a star.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Sun => "#FDB813",
            Self::Moon => "#C0C0C0",
            Self::Planet => "#7ef29d",
            Self::Star | Self::Other(_) => "#5cf0ff",
        }
    }
}

/// Altitude/azimuth in degrees plus magnitude, i.e. everything needed to plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPosition {
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
    pub magnitude: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CelestialObject {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub magnitude: Option<f64>,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub azimuth: Option<f64>,
    #[serde(default)]
    pub right_ascension: String,
    #[serde(default)]
    pub declination: String,
    #[serde(default)]
    pub distance: Option<f64>,
}

impl CelestialObject {
    pub fn kind(&self) -> ObjectKind {
        ObjectKind::parse(&self.kind)
    }

    pub fn is_star(&self) -> bool {
        self.kind() == ObjectKind::Star
    }

    /// `None` when any of the plotted fields is missing or not finite.
    pub fn sky_position(&self) -> Option<SkyPosition> {
        let altitude_deg = self.altitude.filter(|v| v.is_finite())?;
        let azimuth_deg = self.azimuth.filter(|v| v.is_finite())?;
        let magnitude = self.magnitude.filter(|v| v.is_finite())?;
        Some(SkyPosition {
            altitude_deg,
            azimuth_deg,
            magnitude,
        })
    }

    pub fn display_type(&self) -> String {
        capitalize(&self.kind)
    }
}

// Small helpers used by multiple modules
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn format_fixed(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.decimals$}"),
        _ => "--".to_string(),
    }
}

pub fn format_degrees(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.2}°"),
        _ => "--".to_string(),
    }
}

pub fn format_distance_au(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.3} AU"),
        _ => "N/A".to_string(),
    }
}
