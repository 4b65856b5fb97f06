/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Packed color formats for palette entries
//!
//! A palette entry is stored on disk as blue, green, red and a spare byte.
//! The target display wants each color as a single integer, the layout of
//! that integer depends on the panel depth and is picked at run time.

/// A single color with eight bits per channel
#[derive(Clone, Copy, Default, Debug, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub red:   u8,
    pub green: u8,
    pub blue:  u8
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Rgb {
        Rgb { red, green, blue }
    }

    /// Build a color from bytes in the order a bitmap color table stores them
    pub const fn from_bgr(bytes: [u8; 3]) -> Rgb {
        Rgb {
            red:   bytes[2],
            green: bytes[1],
            blue:  bytes[0]
        }
    }
}

/// Layout of a packed palette color
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum PaletteFormat {
    /// 16 bit panels, `rrrrrggg gggbbbbb`
    Rgb565,
    /// 18 bit panels, each channel kept whole in its own byte,
    /// `00000000 rrrrrrrr gggggggg bbbbbbbb`
    #[default]
    Rgb888,
    /// 12 bit layout, the top nibble of every channel, `0000rrrr ggggbbbb`
    Rgb444
}

impl PaletteFormat {
    /// Pack a color into a single word
    pub const fn encode(self, rgb: Rgb) -> u32 {
        let (r, g, b) = (rgb.red as u32, rgb.green as u32, rgb.blue as u32);

        match self {
            PaletteFormat::Rgb565 => ((r >> 3) & 0x1F) << 11 | ((g >> 2) & 0x3F) << 5 | ((b >> 3) & 0x1F),
            PaletteFormat::Rgb888 => r << 16 | g << 8 | b,
            PaletteFormat::Rgb444 => ((r >> 4) & 0x0F) << 8 | ((g >> 4) & 0x0F) << 4 | ((b >> 4) & 0x0F)
        }
    }

    /// Bits of storage needed to hold one packed color
    pub const fn storage_bits(self) -> u8 {
        match self {
            PaletteFormat::Rgb565 | PaletteFormat::Rgb444 => 16,
            PaletteFormat::Rgb888 => 32
        }
    }

    /// Number of hex digits used when printing a packed color
    pub const fn hex_digits(self) -> usize {
        match self {
            PaletteFormat::Rgb565 | PaletteFormat::Rgb444 => 4,
            PaletteFormat::Rgb888 => 6
        }
    }

    /// Depth of the display this layout targets
    pub const fn display_depth(self) -> u8 {
        match self {
            PaletteFormat::Rgb565 => 16,
            PaletteFormat::Rgb888 => 18,
            PaletteFormat::Rgb444 => 12
        }
    }

    /// Name used on the command line and in probe output
    pub const fn name(self) -> &'static str {
        match self {
            PaletteFormat::Rgb565 => "rgb565",
            PaletteFormat::Rgb888 => "rgb888",
            PaletteFormat::Rgb444 => "rgb444"
        }
    }
}
