/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Cursor;

use logo_bmp::{BitmapDescriptor, BmpDecoder};
use logo_core::packing::PaletteFormat;
use logo_header::LogoEncoder;
use logo_tests::SyntheticBmp;

fn decode(image: &SyntheticBmp) -> BitmapDescriptor {
    BmpDecoder::new(Cursor::new(image.to_bytes()))
        .decode()
        .unwrap()
}

fn red_green() -> BitmapDescriptor {
    decode(&SyntheticBmp::indexed(
        4,
        2,
        &[(255, 0, 0), (0, 255, 0)],
        &[&[1, 0, 1, 0], &[0, 1, 0, 1]]
    ))
}

fn data_text(bitmap: &BitmapDescriptor, format: PaletteFormat) -> String {
    let mut out = Vec::new();
    LogoEncoder::new(&mut out, format)
        .encode_data(bitmap)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn data_header_for_palette_image() {
    let text = data_text(&red_green(), PaletteFormat::Rgb888);

    let expected = "/*
 * Automatically generated by \"bmp-logo\"
 *
 * DO NOT EDIT
 *
 */


#ifndef __BMP_LOGO_DATA_H__
#define __BMP_LOGO_DATA_H__

#define BMP_LOGO_WIDTH\t\t4
#define BMP_LOGO_HEIGHT\t\t2
#define BMP_LOGO_COLORS\t\t2
#define BMP_LOGO_OFFSET\t\t16

#define BMP_LOGO_NBIT\t\t8

unsigned int bmp_logo_palette[] = {
\t0xFF0000, 0x00FF00,
};

unsigned char bmp_logo_bitmap[] = {
\t0x10, 0x11, 0x10, 0x11, 0x11, 0x10, 0x11, 0x10,
};

#endif /* __BMP_LOGO_DATA_H__ */
";
    assert_eq!(text, expected);
}

#[test]
fn palette_follows_format() {
    let text = data_text(&red_green(), PaletteFormat::Rgb565);
    assert!(text.contains("unsigned short bmp_logo_palette[] = {\n\t0xF800, 0x07E0,\n};"));

    let text = data_text(&red_green(), PaletteFormat::Rgb444);
    assert!(text.contains("unsigned short bmp_logo_palette[] = {\n\t0x0F00, 0x00F0,\n};"));
}

#[test]
fn truecolor_data_has_empty_palette() {
    let bitmap = decode(&SyntheticBmp::solid(3, 3, (255, 0, 0)));
    let text = data_text(&bitmap, PaletteFormat::Rgb565);

    assert!(text.contains("#define BMP_LOGO_COLORS\t\t0\n"));
    assert!(text.contains("#define BMP_LOGO_NBIT\t\t24\n"));
    assert!(text.contains("unsigned short bmp_logo_palette[] = {\n};\n"));
    assert!(text.contains(
        "unsigned int bmp_logo_bitmap[] = {\n\
         \t0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF,\n\
         \t0x0000FF,\n};"
    ));
}

#[test]
fn info_header_declares_arrays() {
    let bitmap = red_green();
    let mut out = Vec::new();
    LogoEncoder::new(&mut out, PaletteFormat::Rgb565)
        .encode_info(bitmap.header())
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("#ifndef __BMP_LOGO_H__\n#define __BMP_LOGO_H__\n"));
    assert!(text.contains("extern unsigned short bmp_logo_palette[];\n"));
    assert!(text.contains("extern unsigned char bmp_logo_bitmap[];\n"));
    assert!(text.ends_with("#endif /* __BMP_LOGO_H__ */\n"));
    // no array contents
    assert!(!text.contains("0x"));
}

#[test]
fn info_header_for_truecolor() {
    let bitmap = decode(&SyntheticBmp::solid(2, 2, (1, 2, 3)));
    let mut out = Vec::new();
    LogoEncoder::new(&mut out, PaletteFormat::Rgb888)
        .encode_info(bitmap.header())
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("extern unsigned int bmp_logo_palette[];\n"));
    assert!(text.contains("extern unsigned int bmp_logo_bitmap[];\n"));
}
