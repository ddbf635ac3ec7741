use crate::error::app_err::AppErr;
use std::fmt;
use std::str::FromStr;

/// Target fill color. Every output pixel gets exactly this RGB;
/// only alpha varies per pixel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Accepts `"R,G,B"` (decimal, each 0–255) or `"#RRGGBB"` / `"RRGGBB"` hex.
/// Components outside 0–255 are a parse error, not clamped.
impl FromStr for Color {
    type Err = AppErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || {
            AppErr::new("color-parse").with_arg("input", s)
        };

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| bad())?;
            let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| bad())?;
            let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| bad())?;
            return Ok(Color::new(r, g, b));
        }

        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(bad());
        }
        let r = parts[0].trim().parse::<u8>().map_err(|_| bad())?;
        let g = parts[1].trim().parse::<u8>().map_err(|_| bad())?;
        let b = parts[2].trim().parse::<u8>().map_err(|_| bad())?;
        Ok(Color::new(r, g, b))
    }
}
