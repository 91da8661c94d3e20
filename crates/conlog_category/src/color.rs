//! Packed console color attributes and per-category color schemes.
//!
//! An attribute word follows the classic console layout: bits 0–3 hold the
//! foreground (blue, green, red, intensity) and bits 4–7 the background.

use serde::{Deserialize, Serialize};
use std::ops::BitOr;

const BLUE: u16 = 0x1;
const GREEN: u16 = 0x2;
const RED: u16 = 0x4;
const INTENSITY: u16 = 0x8;
const BACKGROUND_SHIFT: u16 = 4;

/// A foreground (text) color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u16)]
pub enum TextColor {
    /// Black.
    Black = 0,
    /// Blue.
    Blue = BLUE,
    /// Green.
    Green = GREEN,
    /// Cyan.
    Cyan = GREEN | BLUE,
    /// Red.
    Red = RED,
    /// Magenta.
    Magenta = RED | BLUE,
    /// Yellow.
    Yellow = RED | GREEN,
    /// White (normal intensity).
    White = RED | GREEN | BLUE,
    /// Gray (intensity bit only).
    Gray = INTENSITY,
    /// Bright blue.
    BrightBlue = BLUE | INTENSITY,
    /// Bright green.
    BrightGreen = GREEN | INTENSITY,
    /// Bright cyan.
    BrightCyan = GREEN | BLUE | INTENSITY,
    /// Bright red.
    BrightRed = RED | INTENSITY,
    /// Bright magenta.
    BrightMagenta = RED | BLUE | INTENSITY,
    /// Bright yellow.
    BrightYellow = RED | GREEN | INTENSITY,
    /// Bright white.
    BrightWhite = RED | GREEN | BLUE | INTENSITY,
}

/// A background color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u16)]
pub enum BackgroundColor {
    /// Black.
    #[default]
    Black = 0,
    /// Blue.
    Blue = BLUE << BACKGROUND_SHIFT,
    /// Green.
    Green = GREEN << BACKGROUND_SHIFT,
    /// Cyan.
    Cyan = (GREEN | BLUE) << BACKGROUND_SHIFT,
    /// Red.
    Red = RED << BACKGROUND_SHIFT,
    /// Magenta.
    Magenta = (RED | BLUE) << BACKGROUND_SHIFT,
    /// Yellow.
    Yellow = (RED | GREEN) << BACKGROUND_SHIFT,
    /// White.
    White = (RED | GREEN | BLUE) << BACKGROUND_SHIFT,
}

/// A packed foreground/background attribute word.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ColorAttributes(u16);

impl ColorAttributes {
    /// White text on a black background, restored after every log line.
    pub const NEUTRAL: ColorAttributes = ColorAttributes::new(TextColor::White, BackgroundColor::Black);

    /// Combines a text and a background color.
    pub const fn new(text: TextColor, background: BackgroundColor) -> Self {
        Self(text as u16 | background as u16)
    }

    /// Wraps a raw attribute word.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw attribute word.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// The foreground nibble: blue, green, red and intensity bits.
    pub const fn foreground(self) -> u8 {
        (self.0 & 0xF) as u8
    }

    /// The background nibble, shifted down into the same layout as
    /// [`foreground`](Self::foreground).
    pub const fn background(self) -> u8 {
        ((self.0 >> BACKGROUND_SHIFT) & 0xF) as u8
    }
}

impl From<TextColor> for ColorAttributes {
    fn from(color: TextColor) -> Self {
        Self(color as u16)
    }
}

impl From<BackgroundColor> for ColorAttributes {
    fn from(color: BackgroundColor) -> Self {
        Self(color as u16)
    }
}

impl<T: Into<ColorAttributes>> BitOr<T> for ColorAttributes {
    type Output = ColorAttributes;

    fn bitor(self, rhs: T) -> ColorAttributes {
        ColorAttributes(self.0 | rhs.into().0)
    }
}

impl<T: Into<ColorAttributes>> BitOr<T> for TextColor {
    type Output = ColorAttributes;

    fn bitor(self, rhs: T) -> ColorAttributes {
        ColorAttributes::from(self) | rhs
    }
}

impl<T: Into<ColorAttributes>> BitOr<T> for BackgroundColor {
    type Output = ColorAttributes;

    fn bitor(self, rhs: T) -> ColorAttributes {
        ColorAttributes::from(self) | rhs
    }
}

/// The colors used for one severity: the category tag and the message body.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ColorPair {
    /// Applied to the bracketed severity tag.
    pub category: ColorAttributes,
    /// Applied to the message that follows the tag.
    pub message: ColorAttributes,
}

impl ColorPair {
    /// Creates a color pair.
    pub const fn new(category: ColorAttributes, message: ColorAttributes) -> Self {
        Self { category, message }
    }
}

/// The color scheme of a category: one [`ColorPair`] per concrete severity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CategoryColors {
    /// Colors for info lines.
    pub info: ColorPair,
    /// Colors for warning lines.
    pub warning: ColorPair,
    /// Colors for error lines.
    pub error: ColorPair,
}

impl CategoryColors {
    /// Highlighted tag with a matching message color for each severity.
    pub const DEFAULT: CategoryColors = CategoryColors {
        info: ColorPair::new(
            ColorAttributes::new(TextColor::White, BackgroundColor::Cyan),
            ColorAttributes::new(TextColor::Cyan, BackgroundColor::Black),
        ),
        warning: ColorPair::new(
            ColorAttributes::new(TextColor::White, BackgroundColor::Yellow),
            ColorAttributes::new(TextColor::Yellow, BackgroundColor::Black),
        ),
        error: ColorPair::new(
            ColorAttributes::new(TextColor::White, BackgroundColor::Red),
            ColorAttributes::new(TextColor::Red, BackgroundColor::Black),
        ),
    };

    /// Neutral colors for every severity.
    pub const PLAIN: CategoryColors = CategoryColors::uniform(ColorPair::new(
        ColorAttributes::NEUTRAL,
        ColorAttributes::NEUTRAL,
    ));

    /// Creates a scheme from the three severity pairs.
    pub const fn new(info: ColorPair, warning: ColorPair, error: ColorPair) -> Self {
        Self {
            info,
            warning,
            error,
        }
    }

    /// Uses the same pair for every severity.
    pub const fn uniform(pair: ColorPair) -> Self {
        Self::new(pair, pair, pair)
    }
}

impl Default for CategoryColors {
    fn default() -> Self {
        Self::DEFAULT
    }
}
