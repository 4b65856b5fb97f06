#![cfg(feature = "serde")]

use serde::ser::*;

use crate::bit_depth::BitDepth;
use crate::packing::PaletteFormat;

impl Serialize for BitDepth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_u16(self.bits())
    }
}

impl Serialize for PaletteFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // palette format serialization is its command line name
        serializer.serialize_str(self.name())
    }
}
