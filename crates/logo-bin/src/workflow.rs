/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use logo_bmp::{probe_bmp, BmpDecoder, BmpDecoderErrors};
use logo_core::options::DecoderOptions;
use logo_header::{ChargeLogoEncoder, LogoEncoder};

use crate::cmd_parsers::global_options::{CmdOptions, Mode};
use crate::errors::LogoErrors;
use crate::probe_files::probe_input_files;

/// Text produced by a run and where it goes
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Output {
    text:        Vec<u8>,
    destination: Option<PathBuf>
}

impl Output {
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// File the text is written to, standard output when `None`
    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    /// Write the text out
    pub fn write(self) -> Result<(), LogoErrors> {
        match self.destination {
            Some(path) => {
                info!("Writing {} bytes to {}", self.text.len(), path.display());
                std::fs::write(&path, &self.text).map_err(LogoErrors::io(&path))
            }
            None => {
                let stdout_path = Path::new("<stdout>");
                let mut stdout = std::io::stdout().lock();

                stdout
                    .write_all(&self.text)
                    .and_then(|_| stdout.flush())
                    .map_err(LogoErrors::io(stdout_path))
            }
        }
    }
}

/// Run the mode selected on the command line
///
/// The whole header is rendered in memory, nothing is written
/// unless every input was read successfully.
pub(crate) fn create_and_exec_workflow_from_cmd(cmd_opts: &CmdOptions) -> Result<Output, LogoErrors> {
    info!("Creating workflows from input");

    let text = match &cmd_opts.mode {
        Mode::Info(file) => gen_info(file, cmd_opts.decoder)?,
        Mode::Data(file) => gen_data(file, cmd_opts.decoder)?,
        Mode::ChargeLogo(files) => gen_charge_logo(files, cmd_opts.logo_files, cmd_opts.decoder)?,
        Mode::Probe(files) => probe_input_files(files, cmd_opts.decoder)?
    };

    Ok(Output {
        text,
        destination: cmd_opts.output.clone()
    })
}

fn open_decoder(path: &Path, options: DecoderOptions) -> Result<BmpDecoder<BufReader<File>>, LogoErrors> {
    debug!("Opening {}", path.display());

    let file = File::open(path).map_err(LogoErrors::io(path))?;

    Ok(BmpDecoder::new_with_options(BufReader::new(file), options))
}

fn gen_info(path: &Path, options: DecoderOptions) -> Result<Vec<u8>, LogoErrors> {
    let mut decoder = open_decoder(path, options)?;
    decoder.decode_headers().map_err(LogoErrors::decoding(path))?;

    let header = decoder
        .header()
        .ok_or_else(|| LogoErrors::Decode(path.to_path_buf(), BmpDecoderErrors::HeadersNotDecoded))?;

    let mut out = Vec::new();
    LogoEncoder::new(&mut out, options.palette_format()).encode_info(&header)?;

    Ok(out)
}

fn gen_data(path: &Path, options: DecoderOptions) -> Result<Vec<u8>, LogoErrors> {
    let bitmap = open_decoder(path, options)?
        .decode()
        .map_err(LogoErrors::decoding(path))?;

    let mut out = Vec::new();
    LogoEncoder::new(&mut out, options.palette_format()).encode_data(&bitmap)?;

    Ok(out)
}

/// Check that the file starts with the bitmap signature
fn check_signature(path: &Path) -> Result<(), LogoErrors> {
    let file = File::open(path).map_err(LogoErrors::io(path))?;
    let mut magic = Vec::with_capacity(2);

    file.take(2)
        .read_to_end(&mut magic)
        .map_err(LogoErrors::io(path))?;

    if !probe_bmp(&magic) {
        return Err(LogoErrors::NotABitmap(path.to_path_buf()));
    }
    Ok(())
}

/// Build a charge logo from the first `logo_files` entries of `files`
///
/// Geometry and palette come from the first file. Every file is opened
/// again for its own pixels and closed as soon as its slot is written.
fn gen_charge_logo(
    files: &[PathBuf], logo_files: usize, options: DecoderOptions
) -> Result<Vec<u8>, LogoErrors> {
    if files.len() < logo_files {
        return Err(LogoErrors::Argument(format!(
            "{logo_files} bmp files needed, got {}",
            files.len()
        )));
    }
    if files.len() > logo_files {
        warn!(
            "Ignoring {} files past the first {logo_files}",
            files.len() - logo_files
        );
    }
    let files = &files[..logo_files];

    for path in files {
        check_signature(path)?;
    }

    let first = &files[0];
    let mut decoder = open_decoder(first, options)?;
    decoder.decode_headers().map_err(LogoErrors::decoding(first))?;

    let header = decoder
        .header()
        .ok_or_else(|| LogoErrors::Decode(first.clone(), BmpDecoderErrors::HeadersNotDecoded))?;
    let palette = decoder
        .decode_palette()
        .map_err(LogoErrors::decoding(first))?;
    drop(decoder);

    info!(
        "Charge logo of {} images, {}x{} at {} bits",
        logo_files,
        header.width,
        header.height,
        header.depth.bits()
    );

    let mut out = Vec::new();
    let mut encoder = ChargeLogoEncoder::new(&mut out, header, options.palette_format(), logo_files);
    encoder.write_preamble(&palette)?;

    for path in files {
        let pixels = if options.strict_mode() {
            let mut decoder = open_decoder(path, options)?;
            decoder.decode_headers().map_err(LogoErrors::decoding(path))?;

            match decoder.header() {
                Some(own) if own.same_geometry(&header) => {}
                _ => return Err(LogoErrors::GeometryMismatch(path.clone()))
            }
            decoder.decode_pixels().map_err(LogoErrors::decoding(path))?
        } else {
            let file = File::open(path).map_err(LogoErrors::io(path))?;

            BmpDecoder::new_with_header(BufReader::new(file), header, options)
                .decode_pixels()
                .map_err(LogoErrors::decoding(path))?
        };
        encoder.write_bitmap(&pixels)?;
    }
    encoder.finish()?;

    Ok(out)
}
