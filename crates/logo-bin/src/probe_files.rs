/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use log::debug;
use logo_bmp::BmpDecoder;
use logo_core::options::DecoderOptions;

use crate::errors::LogoErrors;
use crate::serde::Metadata;

/// Probe input files, extract metadata, and render it as pretty printed JSON,
/// one document per file
pub fn probe_input_files(files: &[PathBuf], options: DecoderOptions) -> Result<Vec<u8>, LogoErrors> {
    if files.is_empty() {
        return Err(LogoErrors::Argument("No files to probe".to_string()));
    }
    let mut out = Vec::new();

    for in_file in files {
        debug!("Probing {}", in_file.display());

        let file = File::open(in_file).map_err(LogoErrors::io(in_file))?;
        let size = file.metadata().map_err(LogoErrors::io(in_file))?.len();

        let mut decoder = BmpDecoder::new_with_options(BufReader::new(file), options);
        decoder
            .decode_headers()
            .map_err(LogoErrors::decoding(in_file))?;

        if let Some(header) = decoder.header() {
            let metadata = Metadata::new(in_file, size, header, options.palette_format());

            serde_json::to_writer_pretty(&mut out, &metadata)
                .map_err(|e| LogoErrors::Io(in_file.clone(), e.into()))?;
            out.push(b'\n');
        }
    }
    Ok(out)
}
