/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading bitmap files
//!
//! This exposes the trait and implementations for the byte
//! sources the decoder can read from.

use std::io::SeekFrom;

use crate::bytestream::reader::ByteIoError;

/// The input trait implemented for byte sources.
///
/// This provides the basic functions needed by the bitmap decoder,
/// exact reads, seeks and position queries.
///
/// It is implemented for [`Cursor`](std::io::Cursor) for in memory
/// buffers and for [`BufReader`](std::io::BufReader) over anything
/// that can be read and seeked, which covers files.
pub trait ByteSource {
    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// ## Arguments
    ///  - `buf`: Buffer to fill with bytes from the underlying reader
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError>;

    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// This is the same as [`read_exact_bytes`](Self::read_exact_bytes) but allows
    /// implementations to specialize fixed size reads
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
        self.read_exact_bytes(buf)
    }

    /// Seek into a new position in the source
    ///
    /// Seeking past the end is allowed, the next read will fail
    fn seek_to(&mut self, from: SeekFrom) -> Result<u64, ByteIoError>;

    /// Report whether we are at the end of a stream.
    fn is_eof(&mut self) -> Result<bool, ByteIoError>;

    /// Return the current position of the inner cursor.
    fn current_position(&mut self) -> Result<u64, ByteIoError>;

    /// Name of the source, used in log messages
    fn name(&self) -> &'static str;
}
