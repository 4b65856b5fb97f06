/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::IPaletteFormat;
use crate::cmd_args::help_strings::{FILES_HELP, FLIP_HELP, PALETTE_FORMAT_HELP, STRICT_HELP};

pub(crate) mod arg_parsers;
pub(crate) mod help_strings;

/// Default number of images in a charge logo
pub const DEFAULT_LOGO_FILES: u16 = 6;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("bmp-logo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert BMP logos into C headers")
        .arg(Arg::new("gen-info")
            .long("gen-info")
            .value_name("FILE")
            .help("Write only the macros and array declarations of a logo")
            .value_parser(value_parser!(PathBuf))
            .conflicts_with_all(["gen-data", "files"]))
        .arg(Arg::new("gen-data")
            .long("gen-data")
            .value_name("FILE")
            .help("Write the macros, palette and bitmap of a logo")
            .value_parser(value_parser!(PathBuf))
            .conflicts_with("files"))
        .arg(Arg::new("files")
            .value_name("FILES")
            .help("Images of a charge logo")
            .long_help(FILES_HELP)
            .action(ArgAction::Append)
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .value_name("FILE")
            .help("Write the header to a file instead of standard output")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("palette-format")
            .long("palette-format")
            .help_heading("OUTPUT")
            .help("Packing of palette colors")
            .long_help(PALETTE_FORMAT_HELP)
            .default_value("rgb888")
            .value_parser(value_parser!(IPaletteFormat)))
        .arg(Arg::new("logo-files")
            .long("logo-files")
            .value_name("N")
            .help_heading("OUTPUT")
            .help("Number of images in a charge logo")
            .default_value("6")
            .value_parser(value_parser!(u16).range(1..)))
        .arg(Arg::new("flip-24bit")
            .long("flip-24bit")
            .help_heading("OUTPUT")
            .action(ArgAction::SetTrue)
            .help("Write 24 bit images top row first")
            .long_help(FLIP_HELP))
        .arg(Arg::new("strict")
            .long("strict")
            .help_heading("OUTPUT")
            .action(ArgAction::SetTrue)
            .help("Check every charge logo image against the first one")
            .long_help(STRICT_HELP))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Refuse images wider than this")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Refuse images taller than this")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print header information of the inputs as JSON instead of a C header"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_valid() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn gen_modes_are_exclusive() {
        let result = create_cmd_args().try_get_matches_from([
            "bmp-logo",
            "--gen-info",
            "a.bmp",
            "--gen-data",
            "b.bmp"
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn zero_logo_files_rejected() {
        let result = create_cmd_args().try_get_matches_from(["bmp-logo", "--logo-files", "0"]);
        assert!(result.is_err());
    }
}
