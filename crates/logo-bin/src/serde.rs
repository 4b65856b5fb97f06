use std::path::Path;

use logo_bmp::{BmpHeader, RESERVED_COLORMAP_SIZE};
use logo_core::packing::PaletteFormat;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata<'a> {
    file:   &'a Path,
    size:   u64,
    header: BmpHeader,
    format: PaletteFormat
}

impl<'a> Metadata<'a> {
    pub fn new(file: &'a Path, size: u64, header: BmpHeader, format: PaletteFormat) -> Metadata<'a> {
        Metadata {
            file,
            size,
            header,
            format
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("LogoMetadata", 11)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("width", &self.header.width)?;
        state.serialize_field("height", &self.header.height)?;
        state.serialize_field("depth", &self.header.depth)?;
        state.serialize_field("data_offset", &self.header.data_offset)?;
        state.serialize_field("declared_colors", &self.header.declared_colors)?;
        state.serialize_field("colors", &self.header.color_count)?;
        state.serialize_field("reserved_colors", &RESERVED_COLORMAP_SIZE)?;
        state.serialize_field("palette_format", &self.format)?;
        state.serialize_field("palette_depth", &self.format.display_depth())?;

        state.end()
    }
}
