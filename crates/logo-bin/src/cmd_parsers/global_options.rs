/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use logo_core::options::DecoderOptions;

use crate::cmd_args::DEFAULT_LOGO_FILES;
use crate::cmd_parsers::get_decoder_options;

/// What a run produces
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Mode {
    /// Macros and declarations of one logo
    Info(PathBuf),
    /// Macros, palette and bitmap of one logo
    Data(PathBuf),
    /// A charge logo built from several images
    ChargeLogo(Vec<PathBuf>),
    /// JSON description of every input
    Probe(Vec<PathBuf>)
}

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub mode:       Mode,
    pub decoder:    DecoderOptions,
    /// Images needed for a charge logo
    pub logo_files: usize,
    /// Where to write the result, standard output when `None`
    pub output:     Option<PathBuf>
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let gen_info = options.get_one::<PathBuf>("gen-info").cloned();
    let gen_data = options.get_one::<PathBuf>("gen-data").cloned();
    let files: Vec<PathBuf> = options
        .get_many::<PathBuf>("files")
        .map(|files| files.cloned().collect())
        .unwrap_or_default();

    let mode = if options.get_flag("probe") {
        info!("Probing input files");
        Mode::Probe(gen_info.into_iter().chain(gen_data).chain(files).collect())
    } else if let Some(file) = gen_info {
        Mode::Info(file)
    } else if let Some(file) = gen_data {
        Mode::Data(file)
    } else {
        Mode::ChargeLogo(files)
    };

    let logo_files = options
        .get_one::<u16>("logo-files")
        .copied()
        .unwrap_or(DEFAULT_LOGO_FILES);

    if options.value_source("logo-files") == Some(ValueSource::CommandLine) {
        info!("Charge logo uses {logo_files} images");
    }

    let decoder = get_decoder_options(options);
    info!("Palette format: {}", decoder.palette_format().name());

    CmdOptions {
        mode,
        decoder,
        logo_files: usize::from(logo_files),
        output: options.get_one::<PathBuf>("out").cloned()
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_args::create_cmd_args;

    fn parse(args: &[&str]) -> CmdOptions {
        let matches = create_cmd_args()
            .try_get_matches_from(std::iter::once("bmp-logo").chain(args.iter().copied()))
            .unwrap();
        parse_options(&matches)
    }

    #[test]
    fn defaults() {
        let options = parse(&[]);

        assert_eq!(options.mode, Mode::ChargeLogo(vec![]));
        assert_eq!(options.logo_files, 6);
        assert_eq!(options.output, None);
        assert_eq!(options.decoder, DecoderOptions::default());
    }

    #[test]
    fn single_file_modes() {
        assert_eq!(parse(&["--gen-info", "a.bmp"]).mode, Mode::Info("a.bmp".into()));
        assert_eq!(parse(&["--gen-data", "a.bmp"]).mode, Mode::Data("a.bmp".into()));
    }

    #[test]
    fn probe_collects_every_input() {
        let options = parse(&["--probe", "--gen-data", "a.bmp"]);
        assert_eq!(options.mode, Mode::Probe(vec!["a.bmp".into()]));

        let options = parse(&["--probe", "a.bmp", "b.bmp"]);
        assert_eq!(options.mode, Mode::Probe(vec!["a.bmp".into(), "b.bmp".into()]));
    }

    #[test]
    fn decoder_flags() {
        let options = parse(&["--palette-format", "rgb565", "--flip-24bit", "--strict", "-o", "x.h"]);

        assert_eq!(
            options.decoder.palette_format(),
            logo_core::packing::PaletteFormat::Rgb565
        );
        assert!(options.decoder.flip_truecolor());
        assert!(options.decoder.strict_mode());
        assert_eq!(options.output, Some(PathBuf::from("x.h")));
    }
}
