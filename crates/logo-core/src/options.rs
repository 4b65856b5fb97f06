/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! One set of options is shared by every file decoded in a run, the
//! multi-file mode reuses the same options for each of its inputs.

use crate::packing::PaletteFormat;

/// Decoder options
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    /// Layout used when packing palette colors
    ///
    /// - Default value: `PaletteFormat::Rgb888`
    palette_format: PaletteFormat,
    /// Whether truecolor rows are emitted top row first
    ///
    /// Truecolor rows are kept in the order they are stored in
    /// the file unless this is set, palette images are always
    /// emitted top row first.
    ///
    /// - Default value: false
    flip_truecolor: bool,
    /// Whether inputs that are expected to agree with each other
    /// are checked instead of trusted
    ///
    /// - Default value: false
    strict_mode:    bool,
    /// Maximum width an image may declare
    ///
    /// - Default value: 16384
    max_width:      usize,
    /// Maximum height an image may declare
    ///
    /// - Default value: 16384
    max_height:     usize
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            palette_format: PaletteFormat::default(),
            flip_truecolor: false,
            strict_mode:    false,
            max_width:      1 << 14,
            max_height:     1 << 14
        }
    }
}

impl DecoderOptions {
    /// Get the layout palette colors are packed into
    pub const fn palette_format(&self) -> PaletteFormat {
        self.palette_format
    }

    /// Return true if truecolor images should be emitted top row first
    pub const fn flip_truecolor(&self) -> bool {
        self.flip_truecolor
    }

    /// Return true whether the decoder should be in strict mode
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Set the layout palette colors are packed into
    ///
    /// # Arguments
    ///
    /// * `format`: The target layout
    ///
    /// returns: DecoderOptions
    pub fn set_palette_format(mut self, format: PaletteFormat) -> Self {
        self.palette_format = format;
        self
    }

    /// Set whether truecolor rows are reordered so the visual top row
    /// comes first
    pub fn set_flip_truecolor(mut self, yes: bool) -> Self {
        self.flip_truecolor = yes;
        self
    }

    /// Set whether the decoder should check inputs instead of trusting them
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
}
