//! Bitmap bit depth, information and row geometry

/// The bit depth of a bitmap the converter accepts.
///
/// Only uncompressed palette images and truecolor images are
/// supported, everything else is rejected by the decoder.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BitDepth {
    /// Eight bits per pixel, every sample is an index into
    /// the color table that follows the header
    Eight,
    /// Twenty four bits per pixel, stored as blue, green, red
    TwentyFour
}

impl BitDepth {
    /// Map the bit count field of a bitmap header to a depth
    ///
    /// Returns `None` for depths the converter cannot handle
    pub const fn from_bits(bits: u16) -> Option<BitDepth> {
        match bits {
            8 => Some(BitDepth::Eight),
            24 => Some(BitDepth::TwentyFour),
            _ => None
        }
    }

    /// The bit count as written in the header
    pub const fn bits(self) -> u16 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::TwentyFour => 24
        }
    }

    /// Number of bytes a single pixel occupies on disk
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            BitDepth::Eight => 1,
            BitDepth::TwentyFour => 3
        }
    }

    /// Number of padding bytes that follow a row of `width` pixels
    ///
    /// Rows are rounded up to a multiple of four bytes
    pub const fn row_padding(self, width: usize) -> usize {
        (4 - (width * self.bytes_per_pixel()) % 4) % 4
    }

    /// Number of bytes a row of `width` pixels occupies on disk, padding included
    pub const fn row_stride(self, width: usize) -> usize {
        width * self.bytes_per_pixel() + self.row_padding(width)
    }
}
