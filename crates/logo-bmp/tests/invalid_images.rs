/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Cursor;

use logo_bmp::{BmpDecoder, BmpDecoderErrors};
use logo_core::bytestream::ByteIoError;
use logo_core::options::DecoderOptions;
use logo_tests::SyntheticBmp;

/// A bare 24 bit header claiming `width`x`height`, with no pixel data
fn header_only(width: u16, height: u16) -> Vec<u8> {
    let mut data = SyntheticBmp::solid(1, 1, (0, 0, 0)).to_bytes();
    data.truncate(54);
    data[18..20].copy_from_slice(&width.to_le_bytes());
    data[22..24].copy_from_slice(&height.to_le_bytes());
    data
}

#[test]
fn bad_signature() {
    let data = SyntheticBmp::solid(2, 2, (1, 2, 3))
        .with_signature(*b"MB")
        .to_bytes();

    let err = BmpDecoder::new(Cursor::new(data)).decode().unwrap_err();

    assert!(matches!(err, BmpDecoderErrors::InvalidMagicBytes));
}

#[test]
fn empty_input() {
    let err = BmpDecoder::new(Cursor::new(Vec::<u8>::new()))
        .decode_headers()
        .unwrap_err();

    assert!(matches!(err, BmpDecoderErrors::Truncated("signature", _)));
}

#[test]
fn header_cut_short() {
    let data = SyntheticBmp::solid(2, 2, (1, 2, 3)).to_bytes();

    let err = BmpDecoder::new(Cursor::new(&data[..19]))
        .decode_headers()
        .unwrap_err();
    assert!(matches!(err, BmpDecoderErrors::Truncated("width", _)));

    let err = BmpDecoder::new(Cursor::new(&data[..29]))
        .decode_headers()
        .unwrap_err();
    assert!(matches!(err, BmpDecoderErrors::Truncated("nbit", _)));
}

#[test]
fn color_count_cut_short() {
    let data = SyntheticBmp::indexed(4, 1, &[(0, 0, 0)], &[&[0, 0, 0, 0]]).to_bytes();

    let err = BmpDecoder::new(Cursor::new(&data[..47]))
        .decode_headers()
        .unwrap_err();

    assert!(matches!(err, BmpDecoderErrors::Truncated("colors", _)));
}

#[test]
fn palette_cut_short() {
    let palette = [(1, 1, 1), (2, 2, 2), (3, 3, 3)];
    let data = SyntheticBmp::indexed(4, 1, &palette, &[&[0, 1, 2, 0]]).to_bytes();

    // drop the last palette entry and everything after it
    let err = BmpDecoder::new(Cursor::new(&data[..54 + 8 + 2]))
        .decode()
        .unwrap_err();

    assert!(matches!(err, BmpDecoderErrors::Truncated("palette", _)));
}

#[test]
fn pixels_cut_short() {
    let data = SyntheticBmp::solid(3, 3, (1, 2, 3)).to_bytes();

    let err = BmpDecoder::new(Cursor::new(&data[..data.len() - 14]))
        .decode()
        .unwrap_err();

    assert!(matches!(err, BmpDecoderErrors::Truncated("pixel data", _)));
}

#[test]
fn unsupported_depth() {
    let data = SyntheticBmp::indexed(4, 1, &[(0, 0, 0)], &[&[0, 0, 0, 0]])
        .with_bits(4)
        .to_bytes();

    let err = BmpDecoder::new(Cursor::new(data)).decode().unwrap_err();

    assert!(matches!(err, BmpDecoderErrors::UnsupportedDepth(4)));
}

#[test]
fn pixels_before_headers() {
    let data = SyntheticBmp::solid(2, 2, (1, 2, 3)).to_bytes();

    let err = BmpDecoder::new(Cursor::new(data))
        .decode_pixels()
        .unwrap_err();

    assert!(matches!(err, BmpDecoderErrors::HeadersNotDecoded));
}

#[test]
fn zero_dimensions() {
    let err = BmpDecoder::new(Cursor::new(header_only(0, 7)))
        .decode_headers()
        .unwrap_err();

    assert!(matches!(err, BmpDecoderErrors::ZeroDimensions(0, 7)));
}

#[test]
fn dimensions_over_the_limit() {
    let err = BmpDecoder::new(Cursor::new(header_only(65535, 65535)))
        .decode()
        .unwrap_err();
    assert!(matches!(
        err,
        BmpDecoderErrors::TooLargeDimensions("height", 16384, 65535)
    ));

    let options = DecoderOptions::default().set_max_width(4);
    let data = SyntheticBmp::solid(5, 2, (1, 2, 3)).to_bytes();
    let err = BmpDecoder::new_with_options(Cursor::new(data), options)
        .decode()
        .unwrap_err();
    assert!(matches!(err, BmpDecoderErrors::TooLargeDimensions("width", 4, 5)));
}

#[test]
fn huge_header_without_pixels_fails_before_allocating() {
    let options = DecoderOptions::default()
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX);

    // 65535 * 65535 packed words would be about 17 GB
    let err = BmpDecoder::new_with_options(Cursor::new(header_only(65535, 65535)), options)
        .decode()
        .unwrap_err();

    match err {
        BmpDecoderErrors::Truncated("pixel data", ByteIoError::NotEnoughBytes(needed, available)) => {
            assert_eq!(available, 54);
            assert_eq!(needed, 54 + 196_608 * 65534 + 196_605);
        }
        other => panic!("unexpected error {other:?}")
    }
}

#[test]
fn last_row_padding_may_be_missing() {
    let data = SyntheticBmp::solid(3, 2, (9, 8, 7)).to_bytes();
    // 3 pixels of 3 bytes leave 3 padding bytes after the last row
    let bitmap = BmpDecoder::new(Cursor::new(&data[..data.len() - 3]))
        .decode()
        .unwrap();

    assert_eq!(bitmap.pixels().as_truecolor().unwrap(), &[0x07_08_09; 6]);
}
