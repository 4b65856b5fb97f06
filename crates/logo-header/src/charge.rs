/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use log::debug;
use logo_bmp::{BmpHeader, Pixels};
use logo_core::packing::{PaletteFormat, Rgb};

use crate::format::{
    check_pixels, write_banner, write_footer, write_macros, write_palette, write_pixels, CType,
    Layout
};
use crate::HeaderErrors;

const CHARGE_GUARD: &str = "__CHARGE_LOGO_H__";

/// Encoder for a charge logo, `files` bitmaps sharing one geometry
/// and one palette
///
/// Bitmaps are written one at a time so only one decoded image needs
/// to be alive at once. The calls must come in this order
///
/// 1. [`write_preamble`](Self::write_preamble), once
/// 2. [`write_bitmap`](Self::write_bitmap), once per file
/// 3. [`finish`](Self::finish)
pub struct ChargeLogoEncoder<'a, W: Write> {
    writer:  &'a mut W,
    format:  PaletteFormat,
    header:  BmpHeader,
    files:   usize,
    written: usize,
    started: bool
}

impl<'a, W: Write> ChargeLogoEncoder<'a, W> {
    /// Create an encoder for `files` bitmaps described by `header`
    pub fn new(
        writer: &'a mut W, header: BmpHeader, format: PaletteFormat, files: usize
    ) -> ChargeLogoEncoder<'a, W> {
        ChargeLogoEncoder {
            writer,
            format,
            header,
            files,
            written: 0,
            started: false
        }
    }

    /// Write the macros, the shared palette and the opening of the bitmap array
    pub fn write_preamble(&mut self, palette: &[Rgb]) -> Result<(), HeaderErrors> {
        if self.started {
            return Err(HeaderErrors::Static("Charge logo preamble written twice"));
        }
        let pixels = self
            .header
            .pixel_count()
            .ok_or(HeaderErrors::Static("Image dimensions overflow"))?;
        let packed: Vec<u32> = palette.iter().map(|rgb| self.format.encode(*rgb)).collect();

        write_banner(self.writer, CHARGE_GUARD)?;
        write_macros(self.writer, Layout::ChargeLogo, &self.header)?;
        write_palette(self.writer, Layout::ChargeLogo, self.format, &packed)?;
        writeln!(
            self.writer,
            "{} charge_logo_bitmap[{}][{}] = {{",
            CType::for_pixels(self.header.depth),
            self.files,
            pixels
        )?;
        self.started = true;

        Ok(())
    }

    /// Write the next slot of the bitmap array
    pub fn write_bitmap(&mut self, pixels: &Pixels) -> Result<(), HeaderErrors> {
        if !self.started {
            return Err(HeaderErrors::Static("Charge logo preamble not written"));
        }
        if self.written == self.files {
            return Err(HeaderErrors::Static("More bitmaps than charge logo slots"));
        }
        check_pixels(&self.header, pixels)?;

        debug!("Writing charge logo slot {}", self.written);

        writeln!(self.writer, "{{")?;
        write_pixels(self.writer, pixels)?;
        writeln!(self.writer, "}},")?;
        self.written += 1;

        Ok(())
    }

    /// Close the bitmap array and the include guard
    pub fn finish(self) -> Result<(), HeaderErrors> {
        if !self.started || self.written != self.files {
            return Err(HeaderErrors::Static("Charge logo is missing bitmaps"));
        }
        writeln!(self.writer, "}};\n")?;
        write_footer(self.writer, CHARGE_GUARD)?;

        Ok(())
    }
}
