/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::ValueEnum;
use logo_core::packing::PaletteFormat;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IPaletteFormat {
    Rgb565,
    Rgb888,
    Rgb444
}

impl IPaletteFormat {
    pub const fn to_palette_format(self) -> PaletteFormat {
        match self {
            IPaletteFormat::Rgb565 => PaletteFormat::Rgb565,
            IPaletteFormat::Rgb888 => PaletteFormat::Rgb888,
            IPaletteFormat::Rgb444 => PaletteFormat::Rgb444
        }
    }
}

impl ValueEnum for IPaletteFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Rgb565, Self::Rgb888, Self::Rgb444]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.to_palette_format().name()))
    }
}
