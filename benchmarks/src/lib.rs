/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use logo_tests::SyntheticBmp;

/// A full screen palette logo with a diagonal pattern over 64 colors
pub fn palette_logo(width: u16, height: u16) -> Vec<u8> {
    let palette: Vec<(u8, u8, u8)> = (0..64_u8).map(|i| (i * 4, 255 - i * 4, i)).collect();
    let rows: Vec<Vec<u8>> = (0..height)
        .map(|y| (0..width).map(|x| ((x + y) % 64) as u8).collect())
        .collect();
    let rows: Vec<&[u8]> = rows.iter().map(|r| r.as_slice()).collect();

    SyntheticBmp::indexed(width, height, &palette, &rows).to_bytes()
}

/// A full screen truecolor logo with a gradient
pub fn truecolor_logo(width: u16, height: u16) -> Vec<u8> {
    let rows: Vec<Vec<(u8, u8, u8)>> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| (x as u8, y as u8, (x ^ y) as u8))
                .collect()
        })
        .collect();
    let rows: Vec<&[(u8, u8, u8)]> = rows.iter().map(|r| r.as_slice()).collect();

    SyntheticBmp::truecolor(width, height, &rows).to_bytes()
}
