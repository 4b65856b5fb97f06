/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use logo_core::bytestream::ByteIoError;

/// BMP errors that can occur during decoding
#[non_exhaustive]
pub enum BmpDecoderErrors {
    /// The file/bytes do not start with `BM`
    InvalidMagicBytes,
    /// The input ended before the named field could be read
    Truncated(&'static str, ByteIoError),
    /// The bit count is neither 8 nor 24
    UnsupportedDepth(u16),
    /// Width or height is zero
    ZeroDimensions(u16, u16),
    /// A dimension is over the configured limit,
    /// (dimension, limit, found)
    TooLargeDimensions(&'static str, usize, usize),
    /// The pixel buffer of the given number of elements could not be allocated
    AllocationFailed(usize),
    /// A calculation overflowed
    OverFlowOccurred,
    /// Headers must be decoded before this operation
    HeadersNotDecoded,
    IoErrors(ByteIoError)
}

impl BmpDecoderErrors {
    /// Wrap a read error for `field`, separating running out of input
    /// from other I/O failures
    pub(crate) fn reading(field: &'static str) -> impl FnOnce(ByteIoError) -> BmpDecoderErrors {
        move |err| {
            if err.is_eof() {
                BmpDecoderErrors::Truncated(field, err)
            } else {
                BmpDecoderErrors::IoErrors(err)
            }
        }
    }
}

impl Debug for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMagicBytes => {
                writeln!(f, "Invalid magic bytes, file does not start with BM")
            }
            Self::Truncated(field, err) => {
                writeln!(f, "Truncated input, couldn't read bitmap {field}: {err:?}")
            }
            Self::UnsupportedDepth(depth) => {
                writeln!(f, "Depth {depth} unsupported, only 8 and 24 bit images are")
            }
            Self::ZeroDimensions(width, height) => {
                writeln!(f, "Invalid dimensions {width}x{height}")
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::AllocationFailed(size) => {
                writeln!(f, "Error allocating memory for {size} pixels")
            }
            Self::OverFlowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Self::HeadersNotDecoded => {
                writeln!(f, "Headers have not been decoded")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMagicBytes => write!(f, "Input file is not a bitmap"),
            Self::Truncated(field, err) => write!(f, "Couldn't read bitmap {field} ({err})"),
            Self::UnsupportedDepth(depth) => write!(f, "Unsupported bit depth {depth}"),
            Self::ZeroDimensions(width, height) => {
                write!(f, "Invalid bitmap dimensions {width}x{height}")
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                write!(f, "Bitmap {dimension} {found} exceeds the limit of {expected}")
            }
            Self::AllocationFailed(size) => {
                write!(f, "Error allocating memory for {size} pixels")
            }
            Self::OverFlowOccurred => write!(f, "Overflow occurred"),
            Self::HeadersNotDecoded => write!(f, "Headers have not been decoded"),
            Self::IoErrors(err) => write!(f, "{err}")
        }
    }
}

impl std::error::Error for BmpDecoderErrors {}

impl From<ByteIoError> for BmpDecoderErrors {
    fn from(value: ByteIoError) -> Self {
        BmpDecoderErrors::IoErrors(value)
    }
}
