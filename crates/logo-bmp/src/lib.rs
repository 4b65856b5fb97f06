/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A positional BMP decoder for boot logos
//!
//! This crate reads the small subset of the BMP format needed to turn
//! a logo into data that can be compiled into a binary.
//!
//! The header is read positionally, only the signature, pixel data offset,
//! width, height, bit count and color count are looked at, everything else
//! is skipped by a fixed number of bytes.
//!
//! # Supported formats
//! - Paletted images (8 bits), indexes are shifted past a reserved range
//!   of [`RESERVED_COLORMAP_SIZE`] colors
//! - Truecolor images (24 bits), packed into one word per pixel
//!
//! # Unsupported formats
//! - RLE and bitfield compression
//! - Any other bit depth
//! - OS/2 headers
pub use crate::common::{
    clamp_color_count, BitmapDescriptor, BmpHeader, Pixels, HEADER_SIZE, MAX_PALETTE_COLORS,
    RESERVED_COLORMAP_SIZE
};
pub use crate::decoder::{probe_bmp, BmpDecoder};
pub use crate::errors::BmpDecoderErrors;

mod common;
mod decoder;
mod errors;
