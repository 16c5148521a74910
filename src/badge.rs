//! Badge colors for brands, terminals, and row accents.
//!
//! Pure mappings from data codes to display colors, each with an
//! explicit fallback so unknown codes always render something instead
//! of erroring.

use rand::prelude::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An sRGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const BLUE: Rgb = Rgb::new(0.0, 0.478, 1.0);
    pub const GREEN: Rgb = Rgb::new(0.204, 0.78, 0.349);
    pub const ORANGE: Rgb = Rgb::new(1.0, 0.584, 0.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.231, 0.188);
    pub const PURPLE: Rgb = Rgb::new(0.686, 0.322, 0.871);
    pub const YELLOW: Rgb = Rgb::new(1.0, 0.8, 0.0);
    pub const PINK: Rgb = Rgb::new(1.0, 0.176, 0.333);
    pub const GRAY: Rgb = Rgb::new(0.557, 0.557, 0.576);
    /// CITGO's tri-mark green.
    pub const CITGO_GREEN: Rgb = Rgb::new(0.416, 0.647, 0.369);
}

/// Badge color for a station brand code. Unknown brands are gray.
pub fn brand_color(brand: &str) -> Rgb {
    match brand {
        "BP" => Rgb::PURPLE,
        "EXXON" => Rgb::BLUE,
        "SHELL" => Rgb::ORANGE,
        "UNB" => Rgb::RED,
        "AMOCO" => Rgb::YELLOW,
        "SUNOCO" => Rgb::GREEN,
        "CITGO" => Rgb::CITGO_GREEN,
        _ => Rgb::GRAY,
    }
}

/// The square terminal indicator: one letter on a colored tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalBadge {
    pub letter: char,
    pub color: Rgb,
}

/// Badge for a supplying-terminal code.
///
/// Unknown terminals show as a yellow "?" tile.
pub fn terminal_badge(terminal: &str) -> TerminalBadge {
    let (letter, color) = match terminal {
        "N. AUG" => ('N', Rgb::BLUE),
        "CLT" => ('C', Rgb::RED),
        "SPARTY" => ('S', Rgb::ORANGE),
        _ => ('?', Rgb::YELLOW),
    };
    TerminalBadge { letter, color }
}

/// The fixed palette row accents are drawn from.
pub const ACCENT_PALETTE: [Rgb; 6] = [
    Rgb::BLUE,
    Rgb::GREEN,
    Rgb::ORANGE,
    Rgb::PINK,
    Rgb::PURPLE,
    Rgb::RED,
];

/// Picks a cosmetic accent color from the palette.
pub fn accent_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    ACCENT_PALETTE.choose(rng).copied().unwrap_or(Rgb::BLUE)
}

/// Picks an accent color with the thread-local RNG.
pub fn random_accent() -> Rgb {
    accent_color(&mut rand::rng())
}
