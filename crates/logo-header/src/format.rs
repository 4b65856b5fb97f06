/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Text layout shared by every header flavour

use std::fmt::{Display, Formatter};
use std::io::{self, Write};

use logo_bmp::{BmpHeader, Pixels, RESERVED_COLORMAP_SIZE};
use logo_core::bit_depth::BitDepth;
use logo_core::packing::PaletteFormat;

use crate::HeaderErrors;

/// Initializer values written on one line of an array
pub const VALUES_PER_LINE: usize = 8;

const BANNER: &str = "/*\n * Automatically generated by \"bmp-logo\"\n *\n * DO NOT EDIT\n *\n */\n\n\n";

/// C element type of an emitted array
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CType {
    UnsignedChar,
    UnsignedShort,
    UnsignedInt
}

impl CType {
    /// Element type able to hold one color of `format`
    pub const fn for_palette(format: PaletteFormat) -> CType {
        match format.storage_bits() {
            16 => CType::UnsignedShort,
            _ => CType::UnsignedInt
        }
    }

    /// Element type of the bitmap array of an image of `depth`
    pub const fn for_pixels(depth: BitDepth) -> CType {
        match depth {
            BitDepth::Eight => CType::UnsignedChar,
            BitDepth::TwentyFour => CType::UnsignedInt
        }
    }
}

impl Display for CType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CType::UnsignedChar => write!(f, "unsigned char"),
            CType::UnsignedShort => write!(f, "unsigned short"),
            CType::UnsignedInt => write!(f, "unsigned int")
        }
    }
}

/// Symbol family of a header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Layout {
    /// `BMP_LOGO_*` macros, `bmp_logo_*` arrays
    Logo,
    /// `CHARGE_LOGO_*` macros, `charge_logo_*` arrays
    ChargeLogo
}

impl Layout {
    pub const fn macro_prefix(self) -> &'static str {
        match self {
            Layout::Logo => "BMP_LOGO",
            Layout::ChargeLogo => "CHARGE_LOGO"
        }
    }

    pub const fn symbol_prefix(self) -> &'static str {
        match self {
            Layout::Logo => "bmp_logo",
            Layout::ChargeLogo => "charge_logo"
        }
    }

    const fn bits_macro(self) -> &'static str {
        match self {
            Layout::Logo => "NBIT",
            Layout::ChargeLogo => "BITS"
        }
    }
}

pub(crate) fn write_banner<W: Write>(writer: &mut W, guard: &str) -> io::Result<()> {
    write!(writer, "{BANNER}#ifndef {guard}\n#define {guard}\n\n")
}

pub(crate) fn write_footer<W: Write>(writer: &mut W, guard: &str) -> io::Result<()> {
    writeln!(writer, "#endif /* {guard} */")
}

pub(crate) fn write_macros<W: Write>(
    writer: &mut W, layout: Layout, header: &BmpHeader
) -> io::Result<()> {
    let prefix = layout.macro_prefix();

    writeln!(writer, "#define {prefix}_WIDTH\t\t{}", header.width)?;
    writeln!(writer, "#define {prefix}_HEIGHT\t\t{}", header.height)?;
    writeln!(writer, "#define {prefix}_COLORS\t\t{}", header.color_count)?;
    writeln!(writer, "#define {prefix}_OFFSET\t\t{RESERVED_COLORMAP_SIZE}\n")?;
    writeln!(
        writer,
        "#define {prefix}_{}\t\t{}\n",
        layout.bits_macro(),
        header.depth.bits()
    )
}

/// Write `values` as hex literals of `digits` digits, eight to a
/// tab indented line, every value followed by a comma
pub(crate) fn write_hex_values<W, I>(writer: &mut W, values: I, digits: usize) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = u32>
{
    let mut column = 0;

    for value in values {
        let lead = if column == 0 { "\t" } else { " " };
        write!(writer, "{lead}0x{value:0digits$X},")?;

        column += 1;
        if column == VALUES_PER_LINE {
            writeln!(writer)?;
            column = 0;
        }
    }
    if column != 0 {
        writeln!(writer)?;
    }
    Ok(())
}

pub(crate) fn write_palette<W: Write>(
    writer: &mut W, layout: Layout, format: PaletteFormat, packed: &[u32]
) -> io::Result<()> {
    writeln!(
        writer,
        "{} {}_palette[] = {{",
        CType::for_palette(format),
        layout.symbol_prefix()
    )?;
    write_hex_values(writer, packed.iter().copied(), format.hex_digits())?;
    writeln!(writer, "}};\n")
}

/// Write the samples of one image, 8 bit indexes as two hex digits and
/// packed truecolor words as six
pub(crate) fn write_pixels<W: Write>(writer: &mut W, pixels: &Pixels) -> io::Result<()> {
    match pixels {
        Pixels::Indexed(samples) => write_hex_values(writer, samples.iter().map(|&s| u32::from(s)), 2),
        Pixels::TrueColor(words) => write_hex_values(writer, words.iter().copied(), 6)
    }
}

/// Reject pixels that cannot belong to an image described by `header`
pub(crate) fn check_pixels(header: &BmpHeader, pixels: &Pixels) -> Result<(), HeaderErrors> {
    let kind_matches = matches!(
        (header.depth, pixels),
        (BitDepth::Eight, Pixels::Indexed(_)) | (BitDepth::TwentyFour, Pixels::TrueColor(_))
    );
    if !kind_matches {
        return Err(HeaderErrors::Static("Pixel data does not match the image depth"));
    }
    if header.pixel_count() != Some(pixels.len()) {
        return Err(HeaderErrors::Static(
            "Pixel data length does not match image dimensions"
        ));
    }
    Ok(())
}
