/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use logo_core::options::DecoderOptions;

fuzz_target!(|data: &[u8]| {
    for flip in [false, true] {
        let options = DecoderOptions::default().set_flip_truecolor(flip);
        let mut decoder = logo_bmp::BmpDecoder::new_with_options(Cursor::new(data), options);
        let _ = decoder.decode();
    }
});
