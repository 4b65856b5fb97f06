/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use log::debug;
use logo_bmp::{BitmapDescriptor, BmpHeader};
use logo_core::packing::PaletteFormat;

use crate::format::{
    check_pixels, write_banner, write_footer, write_macros, write_palette, write_pixels, CType,
    Layout
};
use crate::HeaderErrors;

const INFO_GUARD: &str = "__BMP_LOGO_H__";
const DATA_GUARD: &str = "__BMP_LOGO_DATA_H__";

/// A single logo header encoder
///
/// # Example
/// ```
/// use logo_core::packing::PaletteFormat;
/// use logo_header::LogoEncoder;
/// use logo_bmp::BmpHeader;
/// use logo_core::bit_depth::BitDepth;
///
/// let header = BmpHeader {
///     width:           4,
///     height:          2,
///     depth:           BitDepth::Eight,
///     data_offset:     62,
///     declared_colors: 2,
///     color_count:     2
/// };
/// let mut out = Vec::new();
/// LogoEncoder::new(&mut out, PaletteFormat::Rgb565)
///     .encode_info(&header)
///     .unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("#define BMP_LOGO_WIDTH\t\t4"));
/// ```
pub struct LogoEncoder<'a, W: Write> {
    writer: &'a mut W,
    format: PaletteFormat
}

impl<'a, W: Write> LogoEncoder<'a, W> {
    /// Create a new encoder that writes to `writer`, packing
    /// palette entries into `format`
    pub fn new(writer: &'a mut W, format: PaletteFormat) -> LogoEncoder<'a, W> {
        Self { writer, format }
    }

    /// Write the macro-only header
    ///
    /// Only the declarations of the arrays are emitted, their contents
    /// come from [`encode_data`](Self::encode_data)
    pub fn encode_info(&mut self, header: &BmpHeader) -> Result<(), HeaderErrors> {
        debug!("Writing logo info for a {}x{} image", header.width, header.height);

        write_banner(self.writer, INFO_GUARD)?;
        write_macros(self.writer, Layout::Logo, header)?;
        writeln!(
            self.writer,
            "extern {} bmp_logo_palette[];",
            CType::for_palette(self.format)
        )?;
        writeln!(
            self.writer,
            "extern {} bmp_logo_bitmap[];\n",
            CType::for_pixels(header.depth)
        )?;
        write_footer(self.writer, INFO_GUARD)?;

        Ok(())
    }

    /// Write the macros together with the palette and bitmap arrays
    ///
    /// Truecolor images get an empty palette array.
    pub fn encode_data(&mut self, bitmap: &BitmapDescriptor) -> Result<(), HeaderErrors> {
        check_pixels(bitmap.header(), bitmap.pixels())?;

        debug!(
            "Writing logo data, {} palette entries and {} pixels",
            bitmap.palette().len(),
            bitmap.pixels().len()
        );

        write_banner(self.writer, DATA_GUARD)?;
        write_macros(self.writer, Layout::Logo, bitmap.header())?;
        write_palette(
            self.writer,
            Layout::Logo,
            self.format,
            &bitmap.packed_palette(self.format)
        )?;
        writeln!(
            self.writer,
            "{} bmp_logo_bitmap[] = {{",
            CType::for_pixels(bitmap.depth())
        )?;
        write_pixels(self.writer, bitmap.pixels())?;
        writeln!(self.writer, "}};\n")?;
        write_footer(self.writer, DATA_GUARD)?;

        Ok(())
    }
}
