//! Screen-to-press color conversion
//!
//! Menus are edited with hex/RGB colors but printed with CMYK inks. CMYK is
//! always derived from RGB here; nothing stores it independently.
//!
//! Parsing never fails loudly: a malformed color becomes pure black so a bad
//! value can't abort a print run.

use crate::constants::NEAR_BLACK_THRESHOLD;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An sRGB color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A CMYK ink mix in whole percentages (0-100 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl Cmyk {
    /// K-only black, used for text and hairlines
    pub const PURE_BLACK: Cmyk = Cmyk::new(0, 0, 0, 100);
    /// Black boosted with cyan/magenta/yellow for large solid fills
    pub const RICH_BLACK: Cmyk = Cmyk::new(60, 40, 40, 100);
    pub const WHITE: Cmyk = Cmyk::new(0, 0, 0, 0);

    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self { c, m, y, k }
    }

    /// Channels as 0.0-1.0 fractions, the form PDF color operators take
    pub fn fractions(self) -> [f32; 4] {
        [
            f32::from(self.c) / 100.0,
            f32::from(self.m) / 100.0,
            f32::from(self.y) / 100.0,
            f32::from(self.k) / 100.0,
        ]
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            self.c, self.m, self.y, self.k
        )
    }
}

/// Parse `#RRGGBB` / `RRGGBB` (case-insensitive). Any other shape is `None`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Standard subtractive RGB to CMYK conversion.
///
/// The CMY channels are normalized against K before rounding; rounding
/// first gives different results at the boundaries.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let c = 1.0 - f64::from(rgb.r) / 255.0;
    let m = 1.0 - f64::from(rgb.g) / 255.0;
    let y = 1.0 - f64::from(rgb.b) / 255.0;
    let k = c.min(m).min(y);

    if k == 1.0 {
        return Cmyk::PURE_BLACK;
    }

    let normalize = |x: f64| (x - k) / (1.0 - k);
    Cmyk {
        c: to_percent(normalize(c)),
        m: to_percent(normalize(m)),
        y: to_percent(normalize(y)),
        k: to_percent(k),
    }
}

/// Convert a hex color without any print adjustments.
/// Unparseable input falls back to pure black.
pub fn hex_to_cmyk(hex: &str) -> Cmyk {
    hex_to_rgb(hex).map_or(Cmyk::PURE_BLACK, rgb_to_cmyk)
}

/// Whether every channel is at or below [`NEAR_BLACK_THRESHOLD`]
pub fn is_near_black(rgb: Rgb) -> bool {
    rgb.r <= NEAR_BLACK_THRESHOLD && rgb.g <= NEAR_BLACK_THRESHOLD && rgb.b <= NEAR_BLACK_THRESHOLD
}

/// The CMYK value to put on press for a screen color.
///
/// Near-black colors collapse to K-only black, or to the rich black recipe
/// when `force_rich_black` is set (large solid areas). Unparseable input is
/// pure black.
pub fn cmyk_for_print(hex: &str, force_rich_black: bool) -> Cmyk {
    let Some(rgb) = hex_to_rgb(hex) else {
        return Cmyk::PURE_BLACK;
    };

    if is_near_black(rgb) {
        return if force_rich_black {
            Cmyk::RICH_BLACK
        } else {
            Cmyk::PURE_BLACK
        };
    }

    rgb_to_cmyk(rgb)
}

/// Approximate screen preview of an ink mix. Lossy: rounding happens in
/// both directions, so this is not an exact inverse of [`rgb_to_cmyk`].
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let [c, m, y, k] = [cmyk.c, cmyk.m, cmyk.y, cmyk.k].map(|v| f64::from(v.min(100)) / 100.0);
    let channel = |x: f64| (255.0 * (1.0 - x) * (1.0 - k)).round().clamp(0.0, 255.0) as u8;
    Rgb {
        r: channel(c),
        g: channel(m),
        b: channel(y),
    }
}

/// Lowercase `#rrggbb`
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

pub fn cmyk_to_hex(cmyk: Cmyk) -> String {
    rgb_to_hex(cmyk_to_rgb(cmyk))
}

fn to_percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}
