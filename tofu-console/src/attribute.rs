//! VGA color attributes
//!
//! Every cell carries one attribute byte: a 4-bit background index in the
//! high nibble and a 4-bit foreground index in the low nibble. The sixteen
//! color indices are fixed by VGA text-mode convention.

use serde::{Deserialize, Serialize};

/// The sixteen colors of the VGA text-mode palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum VgaColor {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

impl VgaColor {
    /// All sixteen colors in palette order
    pub const ALL: [VgaColor; 16] = [
        VgaColor::Black,
        VgaColor::Blue,
        VgaColor::Green,
        VgaColor::Cyan,
        VgaColor::Red,
        VgaColor::Magenta,
        VgaColor::Brown,
        VgaColor::LightGray,
        VgaColor::DarkGray,
        VgaColor::LightBlue,
        VgaColor::LightGreen,
        VgaColor::LightCyan,
        VgaColor::LightRed,
        VgaColor::Pink,
        VgaColor::Yellow,
        VgaColor::White,
    ];

    /// Convert from a palette index (0-15)
    pub fn from_index(index: u8) -> Option<Self> {
        if index < 16 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Convert from a nibble, masking off the high bits
    ///
    /// Total over all inputs, so attribute decoding never fails.
    pub fn from_nibble(value: u8) -> Self {
        Self::ALL[(value & 0x0F) as usize]
    }

    /// Get the palette index
    pub fn to_index(self) -> u8 {
        self as u8
    }
}

/// A packed cell attribute: `(background << 4) | foreground`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute(u8);

impl Attribute {
    /// Pack a background and foreground color
    pub const fn new(bg: VgaColor, fg: VgaColor) -> Self {
        Attribute(((bg as u8) << 4) | (fg as u8))
    }

    /// Wrap a raw attribute byte
    pub const fn from_byte(byte: u8) -> Self {
        Attribute(byte)
    }

    /// Get the raw attribute byte
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// Foreground color (low nibble)
    pub fn fg(self) -> VgaColor {
        VgaColor::from_nibble(self.0)
    }

    /// Background color (high nibble)
    pub fn bg(self) -> VgaColor {
        VgaColor::from_nibble(self.0 >> 4)
    }
}

impl Default for Attribute {
    /// Light gray on black, the attribute the console boots with
    fn default() -> Self {
        Attribute::new(VgaColor::Black, VgaColor::LightGray)
    }
}
