/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::warn;
use logo_core::bit_depth::BitDepth;
use logo_core::packing::{PaletteFormat, Rgb};

/// Number of low palette indexes left free for the default color map
/// of the target, decoded indexes start right after them
pub const RESERVED_COLORMAP_SIZE: usize = 16;

/// Largest palette a logo may carry
pub const MAX_PALETTE_COLORS: u16 = (256 - RESERVED_COLORMAP_SIZE) as u16;

/// Bytes consumed by the positional header read, the color table starts here
pub const HEADER_SIZE: usize = 54;

/// Clamp a declared color count to the colors a logo may use
///
/// Zero (meaning "all of them" in a BMP header) and anything that would
/// spill into the reserved range become [`MAX_PALETTE_COLORS`]
pub fn clamp_color_count(declared: u16) -> u16 {
    if declared == 0 {
        MAX_PALETTE_COLORS
    } else if declared > MAX_PALETTE_COLORS {
        warn!(
            "Image declares {declared} colors, keeping {MAX_PALETTE_COLORS} to leave room for the default color map"
        );
        MAX_PALETTE_COLORS
    } else {
        declared
    }
}

/// Fields picked out of a bitmap header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BmpHeader {
    pub width:           u16,
    pub height:          u16,
    pub depth:           BitDepth,
    /// Offset of the pixel data from the start of the file
    pub data_offset:     u16,
    /// Color count as written in the header, zero for truecolor images
    pub declared_colors: u16,
    /// Number of palette entries that will be read, zero for truecolor images
    pub color_count:     u16
}

impl BmpHeader {
    /// Number of pixels in the image
    pub fn pixel_count(&self) -> Option<usize> {
        usize::from(self.width).checked_mul(usize::from(self.height))
    }

    /// Whether two headers describe images that can share one set
    /// of declarations
    pub fn same_geometry(&self, other: &BmpHeader) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.depth == other.depth
            && self.data_offset == other.data_offset
            && self.color_count == other.color_count
    }
}

/// Decoded samples of an image, top row first for palette images
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Pixels {
    /// Palette indexes already shifted past the reserved color map
    Indexed(Vec<u8>),
    /// One `red | green << 8 | blue << 16` word per pixel
    TrueColor(Vec<u32>)
}

impl Pixels {
    pub fn len(&self) -> usize {
        match self {
            Pixels::Indexed(samples) => samples.len(),
            Pixels::TrueColor(words) => words.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_indexed(&self) -> Option<&[u8]> {
        match self {
            Pixels::Indexed(samples) => Some(samples),
            Pixels::TrueColor(_) => None
        }
    }

    pub fn as_truecolor(&self) -> Option<&[u32]> {
        match self {
            Pixels::Indexed(_) => None,
            Pixels::TrueColor(words) => Some(words)
        }
    }
}

/// A fully decoded bitmap
///
/// One of these is built per input file and dropped once the header
/// text for it has been produced
#[derive(Clone, Debug)]
pub struct BitmapDescriptor {
    header:  BmpHeader,
    palette: Vec<Rgb>,
    pixels:  Pixels
}

impl BitmapDescriptor {
    pub fn new(header: BmpHeader, palette: Vec<Rgb>, pixels: Pixels) -> BitmapDescriptor {
        BitmapDescriptor {
            header,
            palette,
            pixels
        }
    }

    pub fn header(&self) -> &BmpHeader {
        &self.header
    }

    pub fn width(&self) -> u16 {
        self.header.width
    }

    pub fn height(&self) -> u16 {
        self.header.height
    }

    pub fn depth(&self) -> BitDepth {
        self.header.depth
    }

    pub fn data_offset(&self) -> u16 {
        self.header.data_offset
    }

    pub fn color_count(&self) -> u16 {
        self.header.color_count
    }

    /// Palette colors in file order, empty for truecolor images
    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    pub fn pixels(&self) -> &Pixels {
        &self.pixels
    }

    /// Palette colors packed into `format`, in file order
    pub fn packed_palette(&self, format: PaletteFormat) -> Vec<u32> {
        self.palette.iter().map(|rgb| format.encode(*rgb)).collect()
    }
}
