/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Endian normalization for bitmap header fields
//!
//! Every multi-byte field in a BMP header is stored little endian,
//! these helpers turn the raw bytes into a host integer independent of
//! the byte order of the machine running the tool.

/// Convert a 16-bit field stored little endian on disk into a host integer
#[inline(always)]
pub const fn u16_from_le(bytes: [u8; 2]) -> u16 {
    (bytes[0] as u16) | ((bytes[1] as u16) << 8)
}
