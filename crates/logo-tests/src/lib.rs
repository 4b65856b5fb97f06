//! Synthetic bitmaps for tests
//!
//! Test images are built in memory so every byte of the header,
//! color table, pixel rows and row padding is known to the test.

use std::fs;
use std::path::PathBuf;

/// A bitmap assembled byte by byte
///
/// Rows are given in stored order, bottom row first, without padding.
#[derive(Clone, Debug)]
pub struct SyntheticBmp {
    signature:       [u8; 2],
    width:           u16,
    height:          u16,
    bits:            u16,
    /// palette colors as (red, green, blue)
    palette:         Vec<(u8, u8, u8)>,
    declared_colors: Option<u16>,
    rows:            Vec<Vec<u8>>,
    padding_byte:    u8,
    gap:             usize
}

impl SyntheticBmp {
    /// An 8 bit image, `rows` hold palette indexes, bottom row first
    pub fn indexed(width: u16, height: u16, palette: &[(u8, u8, u8)], rows: &[&[u8]]) -> SyntheticBmp {
        assert_eq!(rows.len(), usize::from(height));
        assert!(rows.iter().all(|r| r.len() == usize::from(width)));

        SyntheticBmp {
            signature: *b"BM",
            width,
            height,
            bits: 8,
            palette: palette.to_vec(),
            declared_colors: None,
            rows: rows.iter().map(|r| r.to_vec()).collect(),
            padding_byte: 0,
            gap: 0
        }
    }

    /// A 24 bit image, `rows` hold (red, green, blue) pixels, bottom row first
    pub fn truecolor(width: u16, height: u16, rows: &[&[(u8, u8, u8)]]) -> SyntheticBmp {
        assert_eq!(rows.len(), usize::from(height));
        assert!(rows.iter().all(|r| r.len() == usize::from(width)));

        let rows = rows
            .iter()
            .map(|row| row.iter().flat_map(|&(r, g, b)| [b, g, r]).collect())
            .collect();

        SyntheticBmp {
            signature: *b"BM",
            width,
            height,
            bits: 24,
            palette: Vec::new(),
            declared_colors: None,
            rows,
            padding_byte: 0,
            gap: 0
        }
    }

    /// An image where every pixel has the same color
    pub fn solid(width: u16, height: u16, color: (u8, u8, u8)) -> SyntheticBmp {
        let row = vec![color; usize::from(width)];
        let rows = vec![row.as_slice(); usize::from(height)];
        SyntheticBmp::truecolor(width, height, &rows)
    }

    pub fn with_signature(mut self, signature: [u8; 2]) -> SyntheticBmp {
        self.signature = signature;
        self
    }

    /// Value written into every row padding byte
    pub fn with_padding_byte(mut self, byte: u8) -> SyntheticBmp {
        self.padding_byte = byte;
        self
    }

    /// Override the color count written in the header
    pub fn with_declared_colors(mut self, colors: u16) -> SyntheticBmp {
        self.declared_colors = Some(colors);
        self
    }

    /// Override the bit count written in the header
    pub fn with_bits(mut self, bits: u16) -> SyntheticBmp {
        self.bits = bits;
        self
    }

    /// Leave `gap` bytes of 0xEE between the color table and the pixels
    pub fn with_gap(mut self, gap: usize) -> SyntheticBmp {
        self.gap = gap;
        self
    }

    fn bytes_per_pixel(&self) -> usize {
        if self.bits == 24 {
            3
        } else {
            1
        }
    }

    /// Padding written after each row
    pub fn row_padding(&self) -> usize {
        (4 - (usize::from(self.width) * self.bytes_per_pixel()) % 4) % 4
    }

    pub fn data_offset(&self) -> usize {
        54 + self.palette.len() * 4 + self.gap
    }

    /// Serialize to the bytes of a BMP file
    pub fn to_bytes(&self) -> Vec<u8> {
        let stride = usize::from(self.width) * self.bytes_per_pixel() + self.row_padding();
        let image_size = stride * usize::from(self.height);
        let file_size = self.data_offset() + image_size;
        let declared = self
            .declared_colors
            .map(u32::from)
            .unwrap_or(self.palette.len() as u32);

        let mut out = Vec::with_capacity(file_size);
        // file header
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&(file_size as u32).to_le_bytes());
        out.extend_from_slice(&0_u32.to_le_bytes());
        out.extend_from_slice(&(self.data_offset() as u32).to_le_bytes());
        // info header
        out.extend_from_slice(&40_u32.to_le_bytes());
        out.extend_from_slice(&i32::from(self.width).to_le_bytes());
        out.extend_from_slice(&i32::from(self.height).to_le_bytes());
        out.extend_from_slice(&1_u16.to_le_bytes());
        out.extend_from_slice(&self.bits.to_le_bytes());
        out.extend_from_slice(&0_u32.to_le_bytes());
        out.extend_from_slice(&(image_size as u32).to_le_bytes());
        out.extend_from_slice(&2835_u32.to_le_bytes());
        out.extend_from_slice(&2835_u32.to_le_bytes());
        out.extend_from_slice(&declared.to_le_bytes());
        out.extend_from_slice(&0_u32.to_le_bytes());
        assert_eq!(out.len(), 54);

        for &(r, g, b) in &self.palette {
            out.extend_from_slice(&[b, g, r, 0]);
        }
        out.resize(out.len() + self.gap, 0xEE);

        for row in &self.rows {
            out.extend_from_slice(row);
            out.resize(out.len() + self.row_padding(), self.padding_byte);
        }
        out
    }

    /// Write the bitmap to a scratch file and return its path
    pub fn write_scratch(&self, name: &str) -> PathBuf {
        let path = scratch_path(name);
        fs::write(&path, self.to_bytes()).unwrap();
        path
    }
}

/// A path in the temporary directory unique to this process and `name`
pub fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("bmp-logo-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}
