use crate::foundation::error::{OgError, OgResult};

pub use kurbo::Rect;

/// Logical canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// The fixed social-preview canvas.
    pub const OG: Canvas = Canvas {
        width: 1200,
        height: 630,
    };

    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> OgResult<Self> {
        if width == 0 || height == 0 {
            return Err(OgError::configuration("canvas dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Height that keeps this canvas' aspect ratio at `target_width`.
    pub fn height_for_width(self, target_width: u32) -> u32 {
        let h = f64::from(self.height) * f64::from(target_width) / f64::from(self.width);
        (h.round() as u32).max(1)
    }
}

/// Opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `#rrggbb` or `rgb(r, g, b)`.
    pub fn parse(s: &str) -> OgResult<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex)
                .ok_or_else(|| OgError::configuration(format!("invalid hex color '{s}'")));
        }
        if let Some(inner) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            let parts = inner
                .split(',')
                .map(|p| p.trim().parse::<u8>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| OgError::configuration(format!("invalid rgb() color '{s}'")))?;
            let [r, g, b] = parts[..] else {
                return Err(OgError::configuration(format!(
                    "rgb() color needs 3 channels: '{s}'"
                )));
            };
            return Ok(Self { r, g, b });
        }
        Err(OgError::configuration(format!(
            "unsupported color '{s}' (expected #rgb, #rrggbb or rgb(r, g, b))"
        )))
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let mut ch = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = c.to_digit(16)? as u8;
                    ch[i] = v * 17;
                }
                Some(Self::new(ch[0], ch[1], ch[2]))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
