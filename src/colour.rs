use serde::Deserialize;
use thiserror::Error;

/// A colour, expressed in RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug, Deserialize)]
#[serde(try_from = "String")]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

/// A colour string in a configuration file could not be understood
#[derive(Error, Debug, PartialEq)]
#[error("invalid colour `{0}`, expected `#rrggbb`")]
pub struct ColourParseError(pub String);

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Parse a web-style `#rrggbb` (or `rrggbb`) hex colour
    pub fn from_hex(hex: &str) -> Result<Colour, ColourParseError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColourParseError(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColourParseError(hex.to_string()))
        };
        Ok(Colour::new_rgb_bytes(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Colour {
    type Error = ColourParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Colour::from_hex(&value)
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    /// Deep steel blue used for title and header bands
    pub const STEEL: Colour = Colour::new_rgb_bytes(0x1f, 0x3a, 0x5f);
    /// Pale blue used to shade alternating rows
    pub const STRIPE: Colour = Colour::new_rgb_bytes(0xee, 0xf2, 0xf7);
    pub const BORDER: Colour = Colour::new_rgb_bytes(0xc5, 0xcc, 0xd6);
    pub const INK: Colour = Colour::new_rgb_bytes(0x22, 0x22, 0x22);
    pub const MUTED: Colour = Colour::new_rgb_bytes(0x66, 0x6e, 0x7a);
    /// Amber call-out background
    pub const CAUTION: Colour = Colour::new_rgb_bytes(0xfd, 0xf3, 0xd8);
}
