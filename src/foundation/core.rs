use crate::foundation::error::{CanvasError, CanvasResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Output canvas dimensions in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    pub fn validate(self) -> CanvasResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CanvasError::validation(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    pub fn center(self) -> Point {
        Point::new(self.width_f64() * 0.5, self.height_f64() * 0.5)
    }

    pub fn min_side(self) -> f64 {
        self.width_f64().min(self.height_f64())
    }
}

/// Straight (non-premultiplied) sRGB color. Serialized as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Build from a packed `0xRRGGBB` literal.
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    pub fn from_hex(s: &str) -> CanvasResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return Err(CanvasError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }
        let byte = |pair: &str| {
            u8::from_str_radix(pair, 16)
                .map_err(|_| CanvasError::validation(format!("invalid hex byte \"{pair}\"")))
        };
        Ok(Self {
            r: byte(&s[0..2])?,
            g: byte(&s[2..4])?,
            b: byte(&s[4..6])?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel mean, rounded half up. Returns `None` for an empty slice.
    pub fn mean(colors: &[Self]) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        let n = colors.len() as u32;
        let channel = |f: fn(&Self) -> u8| -> u8 {
            let sum: u32 = colors.iter().map(|c| u32::from(f(c))).sum();
            ((sum + n / 2) / n) as u8
        };
        Some(Self {
            r: channel(|c| c.r),
            g: channel(|c| c.g),
            b: channel(|c| c.b),
        })
    }
}

impl std::fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Closed `(min, max)` interval sampled linearly by a unit parameter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn lerp(self, t: f64) -> f64 {
        self.min * (1.0 - t) + self.max * t
    }

    pub fn midpoint(self) -> f64 {
        self.lerp(0.5)
    }
}
