/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// The decoder reads a WinBMPv3 style file positionally. Only the fields
// below are consumed, every other byte is skipped by count.
//
//   offset  size  field
//   ------  ----  -----------------------------------------------
//        0     2  signature, "BM"
//        2     8  file size + reserved                   (skipped)
//       10     2  pixel data offset (low half of a u32)
//       12     6  high half of offset + info header size (skipped)
//       18     2  width (low half of an i32)
//       20     2  high half of width                     (skipped)
//       22     2  height (low half of an i32)
//       24     4  high half of height + planes           (skipped)
//       28     2  bit count
//
// 24 bit files then skip 24 bytes (compression, image size, resolution,
// colors used and important colors). Everything else skips 16 bytes, reads
// the low half of "colors used" at offset 46 and skips the last 6 bytes.
// Either way the color table starts at offset 54.
//
// Rows are stored bottom to top and padded to a multiple of 4 bytes.

use log::{debug, trace, warn};
use logo_core::bit_depth::BitDepth;
use logo_core::bytestream::{ByteIoError, ByteReader, ByteSource};
use logo_core::options::DecoderOptions;
use logo_core::packing::Rgb;

use crate::common::{
    clamp_color_count, BitmapDescriptor, BmpHeader, Pixels, HEADER_SIZE, RESERVED_COLORMAP_SIZE
};
use crate::BmpDecoderErrors;

/// Probe some bytes to see
/// if they start like a BMP image
pub fn probe_bmp(bytes: &[u8]) -> bool {
    bytes.starts_with(b"BM")
}

/// Allocate a buffer of `len` elements, reporting failure instead of aborting
fn allocate<V: Copy + Default>(len: usize) -> Result<Vec<V>, BmpDecoderErrors> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| BmpDecoderErrors::AllocationFailed(len))?;
    buf.resize(len, V::default());
    Ok(buf)
}

/// Pack a pixel stored as blue, green, red into one word with red in the low byte
#[inline(always)]
fn pack_truecolor(bgr: &[u8]) -> u32 {
    u32::from(bgr[2]) | u32::from(bgr[1]) << 8 | u32::from(bgr[0]) << 16
}

/// A BMP logo decoder.
///
/// # Usage
///
/// ## Reading the header only
/// ```no_run
/// use std::io::Cursor;
/// use logo_bmp::BmpDecoder;
///
/// fn main() -> Result<(), logo_bmp::BmpDecoderErrors> {
///     let mut decoder = BmpDecoder::new(Cursor::new(b"BM"));
///     decoder.decode_headers()?;
///     let (w, h) = decoder.dimensions().unwrap();
///     println!("Image width: {}\t Image height: {}", w, h);
///     Ok(())
/// }
/// ```
///
/// ## Decoding everything
/// ```no_run
/// use std::io::Cursor;
/// use logo_bmp::BmpDecoder;
///
/// fn main() -> Result<(), logo_bmp::BmpDecoderErrors> {
///     let mut decoder = BmpDecoder::new(Cursor::new(b"BM"));
///     let bitmap = decoder.decode()?;
///     println!("Pixels: {}", bitmap.pixels().len());
///     Ok(())
/// }
/// ```
pub struct BmpDecoder<T>
where
    T: ByteSource
{
    bytes:   ByteReader<T>,
    options: DecoderOptions,
    header:  Option<BmpHeader>
}

impl<T> BmpDecoder<T>
where
    T: ByteSource
{
    /// Create a new bmp decoder that reads data from `data`
    pub fn new(data: T) -> BmpDecoder<T> {
        BmpDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new decoder instance with specified options
    ///
    /// # Arguments
    ///
    /// * `data`: The source from which we will read data from
    /// * `options`: Options shared by every file of a run
    pub fn new_with_options(data: T, options: DecoderOptions) -> BmpDecoder<T> {
        BmpDecoder {
            bytes: ByteReader::new(data),
            options,
            header: None
        }
    }

    /// Create a decoder for a file whose header was read from another file
    ///
    /// Used when several files share one geometry, the header of
    /// `data` itself is never looked at.
    pub fn new_with_header(data: T, header: BmpHeader, options: DecoderOptions) -> BmpDecoder<T> {
        BmpDecoder {
            bytes: ByteReader::new(data),
            options,
            header: Some(header)
        }
    }

    fn read_field(&mut self, field: &'static str) -> Result<u16, BmpDecoderErrors> {
        self.bytes
            .get_u16_le_err()
            .map_err(BmpDecoderErrors::reading(field))
    }

    /// Decode the header and store the information in the decoder
    ///
    /// After this returns `Ok`, [`header`](Self::header) and
    /// [`dimensions`](Self::dimensions) return `Some`.
    pub fn decode_headers(&mut self) -> Result<(), BmpDecoderErrors> {
        if self.header.is_some() {
            return Ok(());
        }
        self.bytes.set_position(0)?;

        let magic = self
            .bytes
            .read_fixed_bytes_or_error::<2>()
            .map_err(BmpDecoderErrors::reading("signature"))?;

        if !probe_bmp(&magic) {
            return Err(BmpDecoderErrors::InvalidMagicBytes);
        }
        // 4 bytes file size
        // 4 reserved bytes
        self.bytes.skip(8)?;
        let data_offset = self.read_field("data offset")?;
        self.bytes.skip(6)?;
        let width = self.read_field("width")?;
        self.bytes.skip(2)?;
        let height = self.read_field("height")?;
        self.bytes.skip(4)?;
        let bits = self.read_field("nbit")?;

        let declared_colors = if bits == 24 {
            self.bytes.skip(24)?;
            0
        } else {
            self.bytes.skip(16)?;
            let colors = self.read_field("colors")?;
            self.bytes.skip(6)?;
            colors
        };

        trace!("Width: {}", width);
        trace!("Height: {}", height);
        trace!("Bit depth: {}", bits);
        trace!("Data offset: {}", data_offset);
        trace!("Declared colors: {}", declared_colors);

        let depth = BitDepth::from_bits(bits).ok_or(BmpDecoderErrors::UnsupportedDepth(bits))?;

        if width == 0 || height == 0 {
            return Err(BmpDecoderErrors::ZeroDimensions(width, height));
        }
        if usize::from(height) > self.options.max_height() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                usize::from(height)
            ));
        }
        if usize::from(width) > self.options.max_width() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                usize::from(width)
            ));
        }

        let color_count = match depth {
            BitDepth::Eight => clamp_color_count(declared_colors),
            BitDepth::TwentyFour => 0
        };

        self.header = Some(BmpHeader {
            width,
            height,
            depth,
            data_offset,
            declared_colors,
            color_count
        });

        Ok(())
    }

    /// Return the decoded header or `None` if headers haven't been decoded
    pub fn header(&self) -> Option<BmpHeader> {
        self.header
    }

    /// Get dimensions of the image
    ///
    /// This is a tuple of width,height
    ///
    /// Returns `None` if the headers weren't decoded
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.header
            .map(|h| (usize::from(h.width), usize::from(h.height)))
    }

    /// Return the options this decoder was created with
    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Read the color table of a palette image
    ///
    /// Entries are stored as blue, green, red and a spare byte, exactly
    /// `color_count` of them are read. Truecolor images have no palette
    /// and return an empty table.
    pub fn decode_palette(&mut self) -> Result<Vec<Rgb>, BmpDecoderErrors> {
        let header = self.header.ok_or(BmpDecoderErrors::HeadersNotDecoded)?;

        if header.depth != BitDepth::Eight {
            return Ok(Vec::new());
        }
        let colors = usize::from(header.color_count);

        debug!("Reading {} palette entries", colors);

        self.bytes.set_position(HEADER_SIZE)?;

        let mut palette = Vec::new();
        palette
            .try_reserve_exact(colors)
            .map_err(|_| BmpDecoderErrors::AllocationFailed(colors))?;

        for _ in 0..colors {
            let [b, g, r, _] = self
                .bytes
                .read_fixed_bytes_or_error::<4>()
                .map_err(BmpDecoderErrors::reading("palette"))?;

            palette.push(Rgb::from_bgr([b, g, r]));
        }
        Ok(palette)
    }

    /// Read the pixel data
    ///
    /// - Palette images come out top row first, every index shifted by
    ///   [`RESERVED_COLORMAP_SIZE`].
    /// - Truecolor images are packed to `red | green << 8 | blue << 16` and
    ///   kept in stored order unless
    ///   [`flip_truecolor`](DecoderOptions::flip_truecolor) is set.
    pub fn decode_pixels(&mut self) -> Result<Pixels, BmpDecoderErrors> {
        let header = self.header.ok_or(BmpDecoderErrors::HeadersNotDecoded)?;

        if header.width == 0 || header.height == 0 {
            return Err(BmpDecoderErrors::ZeroDimensions(header.width, header.height));
        }
        let width = usize::from(header.width);
        let size = header
            .pixel_count()
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;
        let padding = header.depth.row_padding(width);

        debug!(
            "Reading {} pixels from offset {} with {} padding bytes per row from {}",
            size,
            header.data_offset,
            padding,
            self.bytes.source_name()
        );

        // the last row may omit its padding
        let needed = header
            .depth
            .row_stride(width)
            .checked_mul(usize::from(header.height).saturating_sub(1))
            .and_then(|rows| rows.checked_add(width * header.depth.bytes_per_pixel()))
            .and_then(|rows| rows.checked_add(usize::from(header.data_offset)))
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;
        let available = usize::try_from(self.bytes.stream_len()?).unwrap_or(usize::MAX);

        if available < needed {
            return Err(BmpDecoderErrors::Truncated(
                "pixel data",
                ByteIoError::NotEnoughBytes(needed, available)
            ));
        }

        self.bytes.set_position(usize::from(header.data_offset))?;

        match header.depth {
            BitDepth::Eight => {
                let mut buf = allocate::<u8>(size)?;
                let mut wrapped = 0_usize;
                // BMP stores the bottom row first, filling the output from the
                // back puts the visual top row at the start
                for row in buf.rchunks_exact_mut(width) {
                    self.bytes
                        .read_exact_bytes(row)
                        .map_err(BmpDecoderErrors::reading("pixel data"))?;

                    for sample in row.iter_mut() {
                        if usize::from(*sample) + RESERVED_COLORMAP_SIZE > 255 {
                            wrapped += 1;
                        }
                        *sample = sample.wrapping_add(RESERVED_COLORMAP_SIZE as u8);
                    }
                    self.bytes.skip(padding)?;
                }
                if wrapped != 0 {
                    warn!("{wrapped} pixels use an index past the palette and wrapped into the reserved color map");
                }
                Ok(Pixels::Indexed(buf))
            }
            BitDepth::TwentyFour => {
                let mut buf = allocate::<u32>(size)?;
                let mut scanline = allocate::<u8>(width * 3)?;

                if self.options.flip_truecolor() {
                    for row in buf.rchunks_exact_mut(width) {
                        self.decode_truecolor_row(row, &mut scanline, padding)?;
                    }
                } else {
                    for row in buf.chunks_exact_mut(width) {
                        self.decode_truecolor_row(row, &mut scanline, padding)?;
                    }
                }
                Ok(Pixels::TrueColor(buf))
            }
        }
    }

    fn decode_truecolor_row(
        &mut self, out: &mut [u32], scanline: &mut [u8], padding: usize
    ) -> Result<(), BmpDecoderErrors> {
        self.bytes
            .read_exact_bytes(scanline)
            .map_err(BmpDecoderErrors::reading("pixel data"))?;

        for (pixel, bgr) in out.iter_mut().zip(scanline.chunks_exact(3)) {
            *pixel = pack_truecolor(bgr);
        }
        self.bytes.skip(padding)?;
        Ok(())
    }

    /// Decode the header, palette and pixels of an image
    pub fn decode(&mut self) -> Result<BitmapDescriptor, BmpDecoderErrors> {
        self.decode_headers()?;

        let header = self.header.ok_or(BmpDecoderErrors::HeadersNotDecoded)?;
        let palette = self.decode_palette()?;
        let pixels = self.decode_pixels()?;

        Ok(BitmapDescriptor::new(header, palette, pixels))
    }

    /// Destroy the decoder returning the underlying source
    pub fn into_inner(self) -> T {
        self.bytes.consume()
    }
}
