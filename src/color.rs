//! Colors shared by the geometry, the scene and both renderers
//!
//! Stored as plain u8 triples. In the settings file they are `#rrggbb`
//! strings.

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// An opaque 8-bit RGB color
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(self.r, self.g, self.b)
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_array([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

// Palette used by the default scene configuration.
pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
pub const RED: Rgb = Rgb::new(0xfc, 0x62, 0x55);
pub const YELLOW: Rgb = Rgb::new(0xff, 0xff, 0x00);
pub const MAROON_B: Rgb = Rgb::new(0xec, 0x92, 0xab);
pub const BLUE: Rgb = Rgb::new(0x58, 0xc4, 0xdd);

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(hex: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&hex).ok_or_else(|| format!("invalid color {hex:?}, expected #rrggbb"))
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}
