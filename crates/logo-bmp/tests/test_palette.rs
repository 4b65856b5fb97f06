/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Cursor;

use logo_bmp::{BmpDecoder, Pixels, MAX_PALETTE_COLORS, RESERVED_COLORMAP_SIZE};
use logo_core::bit_depth::BitDepth;
use logo_core::options::DecoderOptions;
use logo_core::packing::{PaletteFormat, Rgb};
use logo_tests::SyntheticBmp;
use nanorand::{Rng, WyRand};

fn red_green_4x2() -> SyntheticBmp {
    SyntheticBmp::indexed(
        4,
        2,
        &[(255, 0, 0), (0, 255, 0)],
        &[&[0, 1, 0, 1], &[1, 0, 1, 0]]
    )
}

#[test]
fn decode_palette_8bpp() {
    let data = red_green_4x2().to_bytes();
    let bitmap = BmpDecoder::new(Cursor::new(data)).decode().unwrap();

    assert_eq!(bitmap.width(), 4);
    assert_eq!(bitmap.height(), 2);
    assert_eq!(bitmap.depth(), BitDepth::Eight);
    assert_eq!(bitmap.color_count(), 2);
    assert_eq!(bitmap.data_offset(), 54 + 8);
    assert_eq!(bitmap.palette(), &[Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]);
    // bottom row comes first on disk, so the second stored row is the top row
    assert_eq!(
        bitmap.pixels(),
        &Pixels::Indexed(vec![17, 16, 17, 16, 16, 17, 16, 17])
    );
}

#[test]
fn top_row_first() {
    // top row [16,17,16,17] means the stored top row (second on disk) is [0,1,0,1]
    let data = SyntheticBmp::indexed(
        4,
        2,
        &[(255, 0, 0), (0, 255, 0)],
        &[&[1, 0, 1, 0], &[0, 1, 0, 1]]
    )
    .to_bytes();

    let bitmap = BmpDecoder::new(Cursor::new(data)).decode().unwrap();

    assert_eq!(
        bitmap.pixels().as_indexed().unwrap(),
        &[16, 17, 16, 17, 17, 16, 17, 16]
    );
}

#[test]
fn packed_palette_matches_each_format() {
    let data = red_green_4x2().to_bytes();
    let bitmap = BmpDecoder::new(Cursor::new(data)).decode().unwrap();

    assert_eq!(bitmap.packed_palette(PaletteFormat::Rgb565), vec![0xF800, 0x07E0]);
    assert_eq!(bitmap.packed_palette(PaletteFormat::Rgb888), vec![0xFF0000, 0x00FF00]);
    assert_eq!(bitmap.packed_palette(PaletteFormat::Rgb444), vec![0x0F00, 0x00F0]);
}

#[test]
fn palette_has_exactly_declared_entries() {
    let mut rand = WyRand::new_seed(0x10_60);

    for colors in [1_usize, 2, 7, 16, 100, 239, 240] {
        let palette: Vec<(u8, u8, u8)> = (0..colors)
            .map(|_| (rand.generate(), rand.generate(), rand.generate()))
            .collect();
        let row = [0_u8; 4];
        let data = SyntheticBmp::indexed(4, 1, &palette, &[&row]).to_bytes();

        let mut decoder = BmpDecoder::new_with_options(
            Cursor::new(data),
            DecoderOptions::default().set_palette_format(PaletteFormat::Rgb565)
        );
        let bitmap = decoder.decode().unwrap();
        let format = decoder.options().palette_format();

        assert_eq!(bitmap.palette().len(), colors);

        let packed = bitmap.packed_palette(format);
        for (&(r, g, b), word) in palette.iter().zip(packed) {
            assert_eq!(word, format.encode(Rgb::new(r, g, b)));
        }
    }
}

#[test]
fn zero_colors_means_largest_palette() {
    // a full 256 entry table, declared as zero
    let palette: Vec<(u8, u8, u8)> = (0..=255).map(|i| (i, i, i)).collect();
    let data = SyntheticBmp::indexed(4, 1, &palette, &[&[0, 1, 2, 3]])
        .with_declared_colors(0)
        .to_bytes();

    let bitmap = BmpDecoder::new(Cursor::new(data)).decode().unwrap();

    assert_eq!(bitmap.color_count(), MAX_PALETTE_COLORS);
    assert_eq!(bitmap.palette().len(), 256 - RESERVED_COLORMAP_SIZE);
    assert_eq!(bitmap.palette()[239], Rgb::new(239, 239, 239));
    assert_eq!(bitmap.header().declared_colors, 0);
}

#[test]
fn oversized_color_count_is_clamped() {
    let palette: Vec<(u8, u8, u8)> = (0..=255).map(|i| (i, 0, 0)).collect();
    let data = SyntheticBmp::indexed(4, 1, &palette, &[&[0, 0, 0, 0]])
        .with_declared_colors(256)
        .to_bytes();

    let bitmap = BmpDecoder::new(Cursor::new(data)).decode().unwrap();

    assert_eq!(bitmap.color_count(), 240);
    assert_eq!(bitmap.palette().len(), 240);
    assert_eq!(bitmap.header().declared_colors, 256);
}

#[test]
fn samples_are_shifted_past_reserved_colors() {
    let mut rand = WyRand::new_seed(0xB0_07);

    for _ in 0..20 {
        let width = rand.generate_range(1_u16..=33);
        let height = rand.generate_range(1_u16..=9);
        let rows: Vec<Vec<u8>> = (0..height)
            .map(|_| (0..width).map(|_| rand.generate_range(0_u8..240)).collect())
            .collect();
        let row_refs: Vec<&[u8]> = rows.iter().map(|r| r.as_slice()).collect();
        let palette = vec![(0, 0, 0); 240];

        let data = SyntheticBmp::indexed(width, height, &palette, &row_refs).to_bytes();
        let bitmap = BmpDecoder::new(Cursor::new(data)).decode().unwrap();
        let samples = bitmap.pixels().as_indexed().unwrap();

        assert_eq!(samples.len(), usize::from(width) * usize::from(height));
        assert!(samples.iter().all(|&s| s >= 16));

        // output row y is stored row (height - 1 - y)
        for (y, out_row) in samples.chunks_exact(usize::from(width)).enumerate() {
            let stored = &rows[usize::from(height) - 1 - y];
            for (&out, &src) in out_row.iter().zip(stored) {
                assert_eq!(out, src + 16);
            }
        }
    }
}

#[test]
fn gap_before_pixel_data_is_honoured() {
    let data = red_green_4x2().with_gap(10).to_bytes();
    let bitmap = BmpDecoder::new(Cursor::new(data)).decode().unwrap();

    assert_eq!(bitmap.data_offset(), 54 + 8 + 10);
    assert_eq!(
        bitmap.pixels().as_indexed().unwrap(),
        &[17, 16, 17, 16, 16, 17, 16, 17]
    );
}

#[test]
fn indexes_past_the_palette_wrap_into_reserved_colors() {
    let data = SyntheticBmp::indexed(3, 1, &[(0, 0, 0)], &[&[239, 240, 255]]).to_bytes();
    let bitmap = BmpDecoder::new(Cursor::new(data)).decode().unwrap();

    assert_eq!(bitmap.pixels().as_indexed().unwrap(), &[255, 0, 15]);
}
